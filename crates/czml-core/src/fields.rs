//! Small helpers for reading and writing optional object fields.

use serde_json::{Map, Value};

pub(crate) fn opt_string(obj: &Map<String, Value>, key: &str) -> Option<String> {
    obj.get(key).and_then(|v| v.as_str()).map(|s| s.to_string())
}

pub(crate) fn opt_i64(obj: &Map<String, Value>, key: &str) -> Option<i64> {
    obj.get(key).and_then(|v| v.as_i64())
}

pub(crate) fn put_string(map: &mut Map<String, Value>, key: &str, value: &Option<String>) {
    if let Some(s) = value {
        map.insert(key.to_string(), Value::String(s.clone()));
    }
}

pub(crate) fn put_i64(map: &mut Map<String, Value>, key: &str, value: &Option<i64>) {
    if let Some(n) = value {
        map.insert(key.to_string(), Value::Number((*n).into()));
    }
}
