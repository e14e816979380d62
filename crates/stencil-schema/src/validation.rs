//! Structural validation of record roots against their shapes

use crate::shape::{FieldShape, RecordShape, ValueShape};
use serde_json::{Map, Value};
use std::fmt;
use stencil_core::Comparator;

/// A single shape violation
#[derive(Debug, Clone, PartialEq)]
pub struct Violation {
    pub path: String,
    pub message: String,
}

impl Violation {
    fn new(path: &str, message: impl Into<String>) -> Self {
        Self {
            path: path.to_string(),
            message: message.into(),
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            f.write_str(&self.message)
        } else {
            write!(f, "'{}': {}", self.path, self.message)
        }
    }
}

/// Validate a record root against its shape. Pure: walks the whole root and
/// returns every violation instead of failing on the first.
pub fn check(shape: &RecordShape, root: &Map<String, Value>) -> Vec<Violation> {
    let mut violations = Vec::new();
    check_object(&shape.fields, root, "", &mut violations);
    violations
}

/// Check one value against a shape, reporting only the first violation.
/// This is the fail-fast path accessors use before storing a value.
pub fn conforms(shape: &ValueShape, value: &Value) -> Result<(), Violation> {
    let mut violations = Vec::new();
    check_value(shape, value, "", &mut violations);
    match violations.into_iter().next() {
        None => Ok(()),
        Some(v) => Err(v),
    }
}

fn join(path: &str, key: &str) -> String {
    if path.is_empty() {
        key.to_string()
    } else {
        format!("{}.{}", path, key)
    }
}

fn check_object(
    fields: &[FieldShape],
    map: &Map<String, Value>,
    path: &str,
    out: &mut Vec<Violation>,
) {
    for field in fields {
        if field.required && !map.contains_key(field.key) {
            out.push(Violation::new(
                &join(path, field.key),
                "missing required field",
            ));
        }
    }

    for (key, value) in map {
        match fields.iter().find(|f| f.key == key) {
            Some(field) => check_value(&field.shape, value, &join(path, key), out),
            None => out.push(Violation::new(&join(path, key), "unknown field")),
        }
    }
}

fn check_value(shape: &ValueShape, value: &Value, path: &str, out: &mut Vec<Violation>) {
    match (shape, value) {
        (ValueShape::Bool, Value::Bool(_)) => {}
        (ValueShape::Int, Value::Number(n)) if n.as_i64().is_some() => {}
        (ValueShape::UInt { max }, Value::Number(n)) => match n.as_u64() {
            Some(v) => {
                if let Some(max) = max {
                    if v > *max {
                        out.push(Violation::new(
                            path,
                            format!("{} exceeds the maximum of {}", v, max),
                        ));
                    }
                }
            }
            None => out.push(mismatch(shape, value, path)),
        },
        (ValueShape::Float, Value::Number(_)) => {}
        (ValueShape::String, Value::String(_)) => {}
        (ValueShape::Literal(literal), Value::String(s)) => {
            if s != literal {
                out.push(Violation::new(path, format!("must be '{}'", literal)));
            }
        }
        (ValueShape::IntEnum { max }, Value::Number(n)) => match n.as_u64() {
            Some(v) if v <= u64::from(*max) => {}
            _ => out.push(Violation::new(
                path,
                format!("must be an integer in [0, {}]", max),
            )),
        },
        (ValueShape::StrEnum { values }, Value::String(s)) => {
            if !values.contains(&s.as_str()) {
                out.push(Violation::new(
                    path,
                    format!("must be one of {:?}", values),
                ));
            }
        }
        (ValueShape::Position, Value::Object(map)) => {
            for key in ["x", "y"] {
                match map.get(key) {
                    Some(Value::Number(_)) => {}
                    _ => out.push(Violation::new(
                        path,
                        format!("position must have a numeric '{}'", key),
                    )),
                }
            }
        }
        (ValueShape::Color, Value::Object(map)) => {
            for key in ["r", "g", "b"] {
                check_color_component(map.get(key), key, true, path, out);
            }
            check_color_component(map.get("a"), "a", false, path, out);
        }
        (ValueShape::SignalId, Value::Object(map)) => check_signal_id(map, path, out),
        (ValueShape::Condition, Value::Object(map)) => {
            for (key, value) in map {
                match key.as_str() {
                    "first_signal" | "second_signal" => {
                        check_value(&ValueShape::SignalId, value, &join(path, key), out)
                    }
                    "comparator" => match value.as_str().and_then(Comparator::from_symbol) {
                        Some(_) => {}
                        None => out.push(Violation::new(
                            &join(path, key),
                            "must be a comparator symbol",
                        )),
                    },
                    "constant" => {
                        if value.as_i64().is_none() {
                            out.push(Violation::new(&join(path, key), "must be an integer"));
                        }
                    }
                    _ => out.push(Violation::new(&join(path, key), "unknown field")),
                }
            }
        }
        (ValueShape::Connections, Value::Object(map)) => check_connections(map, path, out),
        (ValueShape::Icons, Value::Array(items)) => {
            for (i, item) in items.iter().enumerate() {
                let item_path = format!("{}[{}]", path, i);
                match item.as_object() {
                    Some(map) => {
                        match map.get("index").and_then(Value::as_u64) {
                            Some(_) => {}
                            None => out.push(Violation::new(
                                &item_path,
                                "icon must have an unsigned 'index'",
                            )),
                        }
                        match map.get("signal").and_then(Value::as_object) {
                            Some(signal) => check_signal_id(signal, &join(&item_path, "signal"), out),
                            None => out.push(Violation::new(
                                &item_path,
                                "icon must have a 'signal' object",
                            )),
                        }
                    }
                    None => out.push(Violation::new(&item_path, "icon must be an object")),
                }
            }
        }
        (ValueShape::Filters { counted }, Value::Array(items)) => {
            for (i, item) in items.iter().enumerate() {
                check_filter_entry(item, *counted, &format!("{}[{}]", path, i), out);
            }
        }
        (ValueShape::ItemRequests, Value::Object(map)) => {
            for (key, value) in map {
                if value.as_u64().is_none() {
                    out.push(Violation::new(
                        &join(path, key),
                        "request count must be an unsigned integer",
                    ));
                }
            }
        }
        (ValueShape::Tags, Value::Object(_)) => {}
        (ValueShape::Object(fields), Value::Object(map)) => check_object(fields, map, path, out),
        _ => out.push(mismatch(shape, value, path)),
    }
}

fn check_color_component(
    value: Option<&Value>,
    key: &str,
    required: bool,
    path: &str,
    out: &mut Vec<Violation>,
) {
    match value {
        Some(value) => match value.as_f64() {
            Some(v) if (0.0..=255.0).contains(&v) => {}
            _ => out.push(Violation::new(
                path,
                format!("'{}' must be a number in [0, 255]", key),
            )),
        },
        None if required => out.push(Violation::new(
            path,
            format!("color must have a numeric '{}'", key),
        )),
        None => {}
    }
}

fn check_signal_id(map: &Map<String, Value>, path: &str, out: &mut Vec<Violation>) {
    if !map.get("name").map(Value::is_string).unwrap_or(false) {
        out.push(Violation::new(path, "signal must have a string 'name'"));
    }
    match map.get("type").and_then(Value::as_str) {
        Some("item" | "fluid" | "virtual") => {}
        _ => out.push(Violation::new(
            path,
            "signal 'type' must be 'item', 'fluid', or 'virtual'",
        )),
    }
}

fn check_filter_entry(value: &Value, counted: bool, path: &str, out: &mut Vec<Violation>) {
    let map = match value.as_object() {
        Some(map) => map,
        None => {
            out.push(Violation::new(path, "filter entry must be an object"));
            return;
        }
    };

    if map.get("index").and_then(Value::as_u64).is_none() {
        out.push(Violation::new(
            path,
            "filter entry must have an unsigned 'index'",
        ));
    }
    if !map.get("name").map(Value::is_string).unwrap_or(false) {
        out.push(Violation::new(path, "filter entry must have a string 'name'"));
    }
    match (counted, map.get("count")) {
        (true, Some(count)) if count.as_u64().is_none() => out.push(Violation::new(
            path,
            "filter 'count' must be an unsigned integer",
        )),
        (true, None) => out.push(Violation::new(path, "filter entry must have a 'count'")),
        _ => {}
    }

    for key in map.keys() {
        let known = matches!(key.as_str(), "index" | "name") || (counted && key == "count");
        if !known {
            out.push(Violation::new(&join(path, key), "unknown field"));
        }
    }
}

fn check_connections(map: &Map<String, Value>, path: &str, out: &mut Vec<Violation>) {
    for (key, value) in map {
        let side_path = join(path, key);
        match key.as_str() {
            "1" | "2" => match value.as_object() {
                Some(side) => {
                    for (wire, points) in side {
                        let wire_path = join(&side_path, wire);
                        if !matches!(wire.as_str(), "red" | "green") {
                            out.push(Violation::new(&wire_path, "unknown field"));
                            continue;
                        }
                        match points.as_array() {
                            Some(points) => {
                                for (i, point) in points.iter().enumerate() {
                                    check_connection_point(
                                        point,
                                        &format!("{}[{}]", wire_path, i),
                                        out,
                                    );
                                }
                            }
                            None => out.push(Violation::new(
                                &wire_path,
                                "wire connections must be an array",
                            )),
                        }
                    }
                }
                None => out.push(Violation::new(&side_path, "connection side must be an object")),
            },
            _ => out.push(Violation::new(&side_path, "unknown field")),
        }
    }
}

fn check_connection_point(value: &Value, path: &str, out: &mut Vec<Violation>) {
    match value.as_object() {
        Some(map) => {
            if map.get("entity_id").and_then(Value::as_u64).is_none() {
                out.push(Violation::new(
                    path,
                    "connection point must have an unsigned 'entity_id'",
                ));
            }
            if let Some(circuit_id) = map.get("circuit_id") {
                if !matches!(circuit_id.as_u64(), Some(1 | 2)) {
                    out.push(Violation::new(path, "'circuit_id' must be 1 or 2"));
                }
            }
        }
        None => out.push(Violation::new(path, "connection point must be an object")),
    }
}

fn mismatch(shape: &ValueShape, value: &Value, path: &str) -> Violation {
    Violation::new(
        path,
        format!(
            "expected {}, got {}",
            shape.type_name(),
            value_type_name(value)
        ),
    )
}

/// Human-readable name of a JSON value's type
pub fn value_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn planner_shape() -> RecordShape {
        RecordShape::new(
            "deconstruction-planner",
            vec![
                FieldShape::required("item", ValueShape::Literal("deconstruction-planner")),
                FieldShape::optional("label", ValueShape::String),
                FieldShape::optional("version", ValueShape::UInt { max: None }),
                FieldShape::optional(
                    "settings",
                    ValueShape::Object(vec![
                        FieldShape::optional("entity_filter_mode", ValueShape::IntEnum { max: 1 }),
                        FieldShape::optional(
                            "entity_filters",
                            ValueShape::Filters { counted: false },
                        ),
                    ]),
                ),
            ],
        )
    }

    fn as_map(value: serde_json::Value) -> Map<String, Value> {
        value.as_object().unwrap().clone()
    }

    #[test]
    fn test_valid_root() {
        let root = as_map(json!({
            "item": "deconstruction-planner",
            "label": "clear trees",
            "version": 281479275675648u64,
            "settings": {
                "entity_filter_mode": 0,
                "entity_filters": [{"index": 1, "name": "tree-01"}]
            }
        }));
        assert!(check(&planner_shape(), &root).is_empty());
    }

    #[test]
    fn test_missing_required_field() {
        let root = as_map(json!({"label": "x"}));
        let violations = check(&planner_shape(), &root);
        assert!(violations.iter().any(|v| v.path == "item"));
    }

    #[test]
    fn test_unknown_field() {
        let root = as_map(json!({"item": "deconstruction-planner", "bogus": 1}));
        let violations = check(&planner_shape(), &root);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].path, "bogus");
    }

    #[test]
    fn test_literal_mismatch() {
        let root = as_map(json!({"item": "upgrade-planner"}));
        let violations = check(&planner_shape(), &root);
        assert!(violations[0].message.contains("deconstruction-planner"));
    }

    #[test]
    fn test_collects_every_violation() {
        let root = as_map(json!({
            "item": "deconstruction-planner",
            "label": 7,
            "settings": {"entity_filter_mode": 9}
        }));
        let violations = check(&planner_shape(), &root);
        assert_eq!(violations.len(), 2);
    }

    #[test]
    fn test_filter_entry_shape() {
        let shape = ValueShape::Filters { counted: true };
        assert!(conforms(&shape, &json!([{"index": 1, "name": "iron-plate", "count": 50}])).is_ok());
        assert!(conforms(&shape, &json!([{"index": 1, "name": "iron-plate"}])).is_err());
        assert!(conforms(&shape, &json!([{"index": 1, "name": 4, "count": 1}])).is_err());
    }

    #[test]
    fn test_conforms_reports_wrong_type() {
        let err = conforms(&ValueShape::Bool, &json!(5)).unwrap_err();
        assert!(err.message.contains("expected bool"));
    }

    #[test]
    fn test_condition_rejects_unknown_keys() {
        let shape = ValueShape::Condition;
        let value = json!({"constant": 4, "third_signal": {"name": "signal-A", "type": "virtual"}});
        assert!(conforms(&shape, &value).is_err());
    }

    #[test]
    fn test_connections_shape() {
        let shape = ValueShape::Connections;
        let good = json!({"1": {"red": [{"entity_id": 2}]}});
        assert!(conforms(&shape, &good).is_ok());
        let bad = json!({"3": {"red": []}});
        assert!(conforms(&shape, &bad).is_err());
    }
}
