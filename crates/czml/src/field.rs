//! Field helpers shared by the property carriers.

use czml_core::DecodeError;
use serde_json::{Map, Value};

/// Get the object form of a property value, or fail with the property name.
pub(crate) fn as_object<'a>(
    v: &'a Value,
    name: &'static str,
) -> Result<&'a Map<String, Value>, DecodeError> {
    v.as_object().ok_or(DecodeError::ShapeMismatch(name))
}

/// Decode an optional field with the given codec.
pub(crate) fn opt<T>(
    obj: &Map<String, Value>,
    key: &str,
    decode: impl FnOnce(&Value) -> Result<T, DecodeError>,
) -> Result<Option<T>, DecodeError> {
    obj.get(key).map(decode).transpose()
}

/// Insert an optional field with the given encoder.
pub(crate) fn put<T>(
    map: &mut Map<String, Value>,
    key: &str,
    value: &Option<T>,
    encode: impl FnOnce(&T) -> Value,
) {
    if let Some(v) = value {
        map.insert(key.to_string(), encode(v));
    }
}

/// Decode a flat list of doubles (wall height lists and the like).
pub(crate) fn f64_list(v: &Value, name: &'static str) -> Result<Vec<f64>, DecodeError> {
    let arr = v.as_array().ok_or(DecodeError::ShapeMismatch(name))?;
    arr.iter()
        .map(|item| item.as_f64().ok_or(DecodeError::ShapeMismatch(name)))
        .collect()
}

pub(crate) fn f64_list_json(values: &[f64]) -> Value {
    Value::Array(
        values
            .iter()
            .map(|n| serde_json::Number::from_f64(*n).map_or(Value::Null, Value::Number))
            .collect(),
    )
}
