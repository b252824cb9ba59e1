//! Free-form custom properties.
//!
//! Custom properties have no fixed schema: a value is a scalar leaf, a
//! list, a nested map, or a list of interval-scoped values, nested to any
//! depth. The tree is modeled as a closed recursive enum over the JSON
//! shapes rather than a dynamically typed value.

use indexmap::IndexMap;
use serde_json::{Map, Value};

use crate::error::DecodeError;

/// One interval-scoped custom value.
#[derive(Debug, Clone, PartialEq)]
pub struct IntervalValue {
    pub interval: String,
    pub value: CustomValue,
}

/// A node of the custom-property tree.
#[derive(Debug, Clone, PartialEq)]
pub enum CustomValue {
    /// JSON `null`, or a leaf with no usable value.
    Null,
    Boolean(bool),
    Number(serde_json::Number),
    String(String),
    List(Vec<CustomValue>),
    /// Nested map; insertion order is preserved.
    Object(IndexMap<String, CustomValue>),
    /// A list of `{interval, value}` records.
    Intervals(Vec<IntervalValue>),
}

impl CustomValue {
    pub fn from_json(v: &Value) -> Result<Self, DecodeError> {
        match v {
            Value::Null => Ok(CustomValue::Null),
            Value::Bool(b) => Ok(CustomValue::Boolean(*b)),
            Value::Number(n) => Ok(CustomValue::Number(n.clone())),
            Value::String(s) => Ok(CustomValue::String(s.clone())),
            Value::Array(items) => {
                if !items.is_empty() && items.iter().all(is_interval_record) {
                    let records = items
                        .iter()
                        .map(decode_interval_record)
                        .collect::<Result<Vec<_>, _>>()?;
                    return Ok(CustomValue::Intervals(records));
                }
                let values = items
                    .iter()
                    .map(CustomValue::from_json)
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(CustomValue::List(values))
            }
            Value::Object(fields) => {
                let mut map = IndexMap::with_capacity(fields.len());
                for (key, value) in fields {
                    map.insert(key.clone(), CustomValue::from_json(value)?);
                }
                Ok(CustomValue::Object(map))
            }
        }
    }

    pub fn to_json(&self) -> Value {
        match self {
            CustomValue::Null => Value::Null,
            CustomValue::Boolean(b) => Value::Bool(*b),
            CustomValue::Number(n) => Value::Number(n.clone()),
            CustomValue::String(s) => Value::String(s.clone()),
            CustomValue::List(values) => {
                Value::Array(values.iter().map(CustomValue::to_json).collect())
            }
            CustomValue::Object(map) => {
                let mut fields = Map::new();
                for (key, value) in map {
                    fields.insert(key.clone(), value.to_json());
                }
                Value::Object(fields)
            }
            CustomValue::Intervals(records) => Value::Array(
                records
                    .iter()
                    .map(|r| {
                        let mut fields = Map::new();
                        fields.insert("interval".to_string(), Value::String(r.interval.clone()));
                        if r.value != CustomValue::Null {
                            fields.insert("value".to_string(), r.value.to_json());
                        }
                        Value::Object(fields)
                    })
                    .collect(),
            ),
        }
    }
}

fn is_interval_record(v: &Value) -> bool {
    v.as_object().is_some_and(|obj| obj.contains_key("interval"))
}

fn decode_interval_record(v: &Value) -> Result<IntervalValue, DecodeError> {
    let obj = v
        .as_object()
        .ok_or_else(|| DecodeError::UnrecognizedCustomPropertyShape(v.clone()))?;
    let interval = obj
        .get("interval")
        .and_then(|i| i.as_str())
        .ok_or_else(|| DecodeError::UnrecognizedCustomPropertyShape(v.clone()))?
        .to_string();
    let value = match obj.get("value") {
        Some(value) => CustomValue::from_json(value)?,
        None => CustomValue::Null,
    };
    Ok(IntervalValue { interval, value })
}

/// The packet-level map of custom properties.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CustomProperties(pub IndexMap<String, CustomValue>);

impl CustomProperties {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json(v: &Value) -> Result<Self, DecodeError> {
        let obj = v
            .as_object()
            .ok_or_else(|| DecodeError::UnrecognizedCustomPropertyShape(v.clone()))?;
        let mut map = IndexMap::with_capacity(obj.len());
        for (key, value) in obj {
            map.insert(key.clone(), CustomValue::from_json(value)?);
        }
        Ok(Self(map))
    }

    pub fn to_json(&self) -> Value {
        let mut fields = Map::new();
        for (key, value) in &self.0 {
            fields.insert(key.clone(), value.to_json());
        }
        Value::Object(fields)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: CustomValue) {
        self.0.insert(key.into(), value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn leaves_round_trip() {
        for v in [json!(null), json!(true), json!(3), json!(2.5), json!("x")] {
            let c = CustomValue::from_json(&v).unwrap();
            assert_eq!(c.to_json(), v);
        }
    }

    #[test]
    fn nested_map_list_map_round_trip() {
        let v = json!({
            "vehicle": {
                "wheels": 4,
                "tags": ["red", 7, {"nested": true}, 2.5],
                "retired": false
            }
        });
        let c = CustomValue::from_json(&v).unwrap();
        assert_eq!(c.to_json(), v);
    }

    #[test]
    fn map_insertion_order_is_preserved() {
        let v = json!({"zebra": 1, "apple": 2, "mango": 3});
        let c = CustomValue::from_json(&v).unwrap();
        let CustomValue::Object(map) = &c else {
            panic!("expected object");
        };
        let keys: Vec<&String> = map.keys().collect();
        assert_eq!(keys, ["zebra", "apple", "mango"]);
        assert_eq!(serde_json::to_string(&c.to_json()).unwrap(), v.to_string());
    }

    #[test]
    fn interval_records_win_over_plain_lists() {
        let v = json!([
            {"interval": "A/B", "value": 1},
            {"interval": "B/C", "value": "two"}
        ]);
        let c = CustomValue::from_json(&v).unwrap();
        let CustomValue::Intervals(records) = &c else {
            panic!("expected intervals");
        };
        assert_eq!(records[1].value, CustomValue::String("two".to_string()));
        assert_eq!(c.to_json(), v);
    }

    #[test]
    fn mixed_array_stays_a_plain_list() {
        // One element lacks an interval key, so this is not an interval list.
        let v = json!([{"interval": "A/B", "value": 1}, {"other": 2}]);
        let c = CustomValue::from_json(&v).unwrap();
        assert!(matches!(c, CustomValue::List(_)));
        assert_eq!(c.to_json(), v);
    }

    #[test]
    fn non_string_interval_is_unrecognized() {
        let v = json!([{"interval": 17, "value": 1}]);
        let err = CustomValue::from_json(&v).unwrap_err();
        assert!(matches!(
            err,
            DecodeError::UnrecognizedCustomPropertyShape(_)
        ));
    }

    #[test]
    fn record_without_value_reads_as_null() {
        let v = json!([{"interval": "A/B"}]);
        let c = CustomValue::from_json(&v).unwrap();
        let CustomValue::Intervals(records) = &c else {
            panic!("expected intervals");
        };
        assert_eq!(records[0].value, CustomValue::Null);
        assert_eq!(c.to_json(), v);
    }
}
