//! Boolean properties: a constant or a list of interval-scoped values.

use serde_json::{Map, Value};

use crate::error::DecodeError;
use crate::fields::{opt_string, put_string};

/// One interval of a time-varying boolean.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BooleanInterval {
    pub interval: Option<String>,
    pub boolean: bool,
}

impl BooleanInterval {
    pub fn new(interval: impl Into<String>, boolean: bool) -> Self {
        Self {
            interval: Some(interval.into()),
            boolean,
        }
    }

    fn from_json(v: &Value) -> Result<Self, DecodeError> {
        let obj = v.as_object().ok_or(DecodeError::ShapeMismatch("boolean"))?;
        let boolean = obj
            .get("boolean")
            .and_then(|b| b.as_bool())
            .ok_or(DecodeError::ShapeMismatch("boolean"))?;
        Ok(Self {
            interval: opt_string(obj, "interval"),
            boolean,
        })
    }

    fn to_json(&self) -> Value {
        let mut map = Map::new();
        put_string(&mut map, "interval", &self.interval);
        map.insert("boolean".to_string(), Value::Bool(self.boolean));
        Value::Object(map)
    }
}

/// A boolean property such as `show`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CzmlBoolean {
    Constant(bool),
    Intervals(Vec<BooleanInterval>),
}

impl CzmlBoolean {
    pub fn from_json(v: &Value) -> Result<Self, DecodeError> {
        if let Some(b) = v.as_bool() {
            return Ok(CzmlBoolean::Constant(b));
        }
        if let Some(arr) = v.as_array() {
            let intervals = arr
                .iter()
                .map(BooleanInterval::from_json)
                .collect::<Result<Vec<_>, _>>()?;
            return Ok(CzmlBoolean::Intervals(intervals));
        }
        Err(DecodeError::ShapeMismatch("boolean"))
    }

    pub fn to_json(&self) -> Value {
        match self {
            CzmlBoolean::Constant(b) => Value::Bool(*b),
            CzmlBoolean::Intervals(list) => {
                Value::Array(list.iter().map(BooleanInterval::to_json).collect())
            }
        }
    }
}

impl From<bool> for CzmlBoolean {
    fn from(value: bool) -> Self {
        CzmlBoolean::Constant(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn constant_round_trip() {
        let b = CzmlBoolean::from_json(&json!(true)).unwrap();
        assert_eq!(b, CzmlBoolean::Constant(true));
        assert_eq!(b.to_json(), json!(true));
    }

    #[test]
    fn interval_list_round_trip() {
        let v = json!([
            {"interval": "A/B", "boolean": true},
            {"interval": "B/C", "boolean": false}
        ]);
        let b = CzmlBoolean::from_json(&v).unwrap();
        assert_eq!(
            b,
            CzmlBoolean::Intervals(vec![
                BooleanInterval::new("A/B", true),
                BooleanInterval::new("B/C", false),
            ])
        );
        assert_eq!(b.to_json(), v);
    }

    #[test]
    fn empty_interval_list_round_trips() {
        let b = CzmlBoolean::from_json(&json!([])).unwrap();
        assert_eq!(b, CzmlBoolean::Intervals(vec![]));
        assert_eq!(b.to_json(), json!([]));
    }

    #[test]
    fn scalar_number_is_rejected() {
        assert!(CzmlBoolean::from_json(&json!(1)).is_err());
    }
}
