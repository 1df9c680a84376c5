//! Loose JSON accessors used by the rule checks.

use std::borrow::Cow;

use serde_json::{Map, Value};

/// Top-level input document.
pub type Document = Map<String, Value>;

/// Truthiness of a JSON value: `null`, `false`, zero, and empty
/// strings/arrays/objects are falsy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

/// Integer view of a JSON number. Floats are never integers here, even
/// when they have no fractional part.
pub fn as_integer(value: &Value) -> Option<i128> {
    value
        .as_i64()
        .map(i128::from)
        .or_else(|| value.as_u64().map(i128::from))
}

/// Text form of a value: strings verbatim, anything else as compact JSON.
pub fn stringify(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

/// Borrow `value` as an object, or fall back to an empty one.
pub fn as_object_or_empty(value: Option<&Value>) -> Cow<'_, Document> {
    match value {
        Some(Value::Object(map)) => Cow::Borrowed(map),
        _ => Cow::Owned(Map::new()),
    }
}

/// Short name of a value's JSON type, for messages.
pub fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
