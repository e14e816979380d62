//! Domain value types shared across the workspace

use serde::{Deserialize, Serialize};

/// A 2D map position
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// RGBA color with components in [0, 255]. Alpha defaults to opaque when
/// absent from serialized data.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    #[serde(default = "default_alpha")]
    pub a: f64,
}

fn default_alpha() -> f64 {
    255.0
}

impl Color {
    pub const fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }
}

/// Eight-way placement direction, serialized as its integer value
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Direction {
    #[default]
    North = 0,
    NorthEast = 1,
    East = 2,
    SouthEast = 3,
    South = 4,
    SouthWest = 5,
    West = 6,
    NorthWest = 7,
}

impl From<Direction> for u8 {
    fn from(value: Direction) -> Self {
        value as u8
    }
}

impl TryFrom<u8> for Direction {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Direction::North),
            1 => Ok(Direction::NorthEast),
            2 => Ok(Direction::East),
            3 => Ok(Direction::SouthEast),
            4 => Ok(Direction::South),
            5 => Ok(Direction::SouthWest),
            6 => Ok(Direction::West),
            7 => Ok(Direction::NorthWest),
            other => Err(format!("direction must be in [0, 7], got {}", other)),
        }
    }
}

/// Whether a filter list selects (whitelist) or excludes (blacklist)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum FilterMode {
    #[default]
    Whitelist = 0,
    Blacklist = 1,
}

impl From<FilterMode> for u8 {
    fn from(value: FilterMode) -> Self {
        value as u8
    }
}

impl TryFrom<u8> for FilterMode {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(FilterMode::Whitelist),
            1 => Ok(FilterMode::Blacklist),
            other => Err(format!("filter mode must be 0 or 1, got {}", other)),
        }
    }
}

/// How a deconstruction planner treats tiles under its selection
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum TileSelectionMode {
    #[default]
    Normal = 0,
    Always = 1,
    Never = 2,
    Only = 3,
}

impl From<TileSelectionMode> for u8 {
    fn from(value: TileSelectionMode) -> Self {
        value as u8
    }
}

impl TryFrom<u8> for TileSelectionMode {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(TileSelectionMode::Normal),
            1 => Ok(TileSelectionMode::Always),
            2 => Ok(TileSelectionMode::Never),
            3 => Ok(TileSelectionMode::Only),
            other => Err(format!("tile selection mode must be in [0, 3], got {}", other)),
        }
    }
}

/// The namespace a signal name lives in
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SignalKind {
    Item,
    Fluid,
    Virtual,
}

/// A signal reference, serialized as `{"name": .., "type": ..}`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SignalId {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: SignalKind,
}

impl SignalId {
    pub fn new(name: impl Into<String>, kind: SignalKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    pub fn virtual_signal(name: impl Into<String>) -> Self {
        Self::new(name, SignalKind::Virtual)
    }

    pub fn item(name: impl Into<String>) -> Self {
        Self::new(name, SignalKind::Item)
    }
}

/// Circuit comparison operator. Deserialization normalizes the ASCII
/// digraphs (`>=`, `<=`, `!=`) to the single-character forms the game emits.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum Comparator {
    Greater,
    #[default]
    Less,
    Equal,
    GreaterOrEqual,
    LessOrEqual,
    NotEqual,
}

impl Comparator {
    pub fn symbol(&self) -> &'static str {
        match self {
            Comparator::Greater => ">",
            Comparator::Less => "<",
            Comparator::Equal => "=",
            Comparator::GreaterOrEqual => "\u{2265}",
            Comparator::LessOrEqual => "\u{2264}",
            Comparator::NotEqual => "\u{2260}",
        }
    }

    /// Parse a comparator symbol, accepting both the game's single-character
    /// forms and their ASCII digraph spellings.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            ">" => Some(Comparator::Greater),
            "<" => Some(Comparator::Less),
            "=" => Some(Comparator::Equal),
            "\u{2265}" | ">=" => Some(Comparator::GreaterOrEqual),
            "\u{2264}" | "<=" => Some(Comparator::LessOrEqual),
            "\u{2260}" | "!=" => Some(Comparator::NotEqual),
            _ => None,
        }
    }
}

impl From<Comparator> for String {
    fn from(value: Comparator) -> Self {
        value.symbol().to_string()
    }
}

impl TryFrom<String> for Comparator {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Comparator::from_symbol(&value)
            .ok_or_else(|| format!("'{}' is not a comparator", value))
    }
}

/// A circuit or logistic condition
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_signal: Option<SignalId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub second_signal: Option<SignalId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comparator: Option<Comparator>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub constant: Option<i64>,
}

/// A visual identification slot on a planner
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Icon {
    pub index: u32,
    pub signal: SignalId,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_roundtrip() {
        let json = serde_json::to_string(&Direction::SouthWest).unwrap();
        assert_eq!(json, "5");
        let back: Direction = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Direction::SouthWest);
    }

    #[test]
    fn test_direction_rejects_out_of_range() {
        assert!(serde_json::from_str::<Direction>("8").is_err());
    }

    #[test]
    fn test_comparator_normalizes_digraphs() {
        assert_eq!(
            Comparator::from_symbol(">="),
            Some(Comparator::GreaterOrEqual)
        );
        let parsed: Comparator = serde_json::from_str("\"!=\"").unwrap();
        assert_eq!(parsed, Comparator::NotEqual);
        assert_eq!(serde_json::to_string(&parsed).unwrap(), "\"\u{2260}\"");
    }

    #[test]
    fn test_color_alpha_defaults_to_opaque() {
        let color: Color = serde_json::from_str(r#"{"r": 255, "g": 127, "b": 0}"#).unwrap();
        assert_eq!(color.a, 255.0);
    }

    #[test]
    fn test_signal_id_uses_type_key() {
        let signal = SignalId::virtual_signal("signal-A");
        let value = serde_json::to_value(&signal).unwrap();
        assert_eq!(value["type"], "virtual");
        assert_eq!(value["name"], "signal-A");
    }

    #[test]
    fn test_condition_omits_unset_fields() {
        let condition = Condition {
            constant: Some(40),
            ..Default::default()
        };
        let value = serde_json::to_value(&condition).unwrap();
        assert_eq!(value.as_object().unwrap().len(), 1);
    }
}
