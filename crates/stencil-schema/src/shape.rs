//! Record shape definitions

/// The type grammar for a single serialized field
#[derive(Debug, Clone, PartialEq)]
pub enum ValueShape {
    Bool,
    Int,
    UInt { max: Option<u64> },
    Float,
    String,
    /// A fixed discriminant string
    Literal(&'static str),
    /// A small integer enum in [0, max]
    IntEnum { max: u8 },
    /// One of a fixed set of strings
    StrEnum { values: &'static [&'static str] },
    Position,
    Color,
    SignalId,
    Condition,
    /// Circuit wire connection points
    Connections,
    /// `[{index, signal}]` icon slots
    Icons,
    /// `[{index, name}]` filter entries; `counted` adds a required `count`
    Filters { counted: bool },
    /// `{item_name: count}` request map
    ItemRequests,
    /// Free-form user tag object
    Tags,
    /// Nested sub-structure with its own field set
    Object(Vec<FieldShape>),
}

impl ValueShape {
    pub fn type_name(&self) -> &'static str {
        match self {
            ValueShape::Bool => "bool",
            ValueShape::Int => "integer",
            ValueShape::UInt { .. } => "unsigned integer",
            ValueShape::Float => "number",
            ValueShape::String => "string",
            ValueShape::Literal(_) => "literal string",
            ValueShape::IntEnum { .. } => "enum integer",
            ValueShape::StrEnum { .. } => "enum string",
            ValueShape::Position => "position",
            ValueShape::Color => "color",
            ValueShape::SignalId => "signal id",
            ValueShape::Condition => "condition",
            ValueShape::Connections => "connections",
            ValueShape::Icons => "icon list",
            ValueShape::Filters { .. } => "filter list",
            ValueShape::ItemRequests => "item request map",
            ValueShape::Tags => "tag object",
            ValueShape::Object(_) => "object",
        }
    }
}

/// Schema for a single field within a record shape
#[derive(Debug, Clone, PartialEq)]
pub struct FieldShape {
    pub key: &'static str,
    pub required: bool,
    pub shape: ValueShape,
}

impl FieldShape {
    pub fn optional(key: &'static str, shape: ValueShape) -> Self {
        Self {
            key,
            required: false,
            shape,
        }
    }

    pub fn required(key: &'static str, shape: ValueShape) -> Self {
        Self {
            key,
            required: true,
            shape,
        }
    }
}

/// The exact serializable shape of one record kind's root
#[derive(Debug, Clone, PartialEq)]
pub struct RecordShape {
    pub kind: String,
    pub fields: Vec<FieldShape>,
}

impl RecordShape {
    pub fn new(kind: impl Into<String>, fields: Vec<FieldShape>) -> Self {
        Self {
            kind: kind.into(),
            fields,
        }
    }

    /// Get a field by key
    pub fn field(&self, key: &str) -> Option<&FieldShape> {
        self.fields.iter().find(|f| f.key == key)
    }
}
