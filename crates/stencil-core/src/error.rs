//! Error types for Stencil

use thiserror::Error;

/// The main error type for Stencil operations
#[derive(Debug, Error)]
pub enum StencilError {
    /// The serialized shape of a record does not match its declared format.
    #[error("'{kind}' does not match its serialized shape: {}", violations.join("; "))]
    StructuralFormat {
        kind: String,
        violations: Vec<String>,
    },

    /// An accessor was handed a value of the wrong kind for its field.
    #[error("invalid value for '{field}': {detail}")]
    AttributeType { field: String, detail: String },

    /// An accessor addressed a field no facet of the record's kind declares.
    #[error("'{kind}' has no field '{field}'")]
    UnknownField { kind: String, field: String },

    #[error("unknown record kind: {0}")]
    UnknownKind(String),

    /// A constructor argument matched no facet, under the error policy.
    #[error("'{kind}' has no attribute '{argument}'")]
    UnrecognizedArgument { kind: String, argument: String },

    #[error("expected a '{expected}' record, got '{got}'")]
    KindMismatch { expected: String, got: String },

    #[error("TOML parse error: {0}")]
    TomlParse(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for Stencil operations
pub type Result<T> = std::result::Result<T, StencilError>;

impl From<toml::de::Error> for StencilError {
    fn from(err: toml::de::Error) -> Self {
        StencilError::TomlParse(err.to_string())
    }
}
