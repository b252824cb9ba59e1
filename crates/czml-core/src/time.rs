//! Time values and availability windows.
//!
//! A CZML time is either an ISO-8601 date-time string or a seconds offset
//! from an epoch; availability is one interval string or a list of them.

use serde_json::Value;

use crate::error::DecodeError;

/// A point in time as it appears on the wire.
#[derive(Debug, Clone, PartialEq)]
pub enum TimeValue {
    /// ISO-8601 date-time string, e.g. `"2012-08-04T16:00:00Z"`.
    Iso(String),
    /// Seconds offset relative to the enclosing value's epoch.
    Epoch(f64),
}

impl TimeValue {
    /// Decode a time value. Strings win over numbers; anything else fails.
    pub fn from_json(v: &Value) -> Result<Self, DecodeError> {
        if let Some(s) = v.as_str() {
            return Ok(TimeValue::Iso(s.to_string()));
        }
        if let Some(n) = v.as_f64() {
            return Ok(TimeValue::Epoch(n));
        }
        Err(DecodeError::InvalidTimeValue)
    }

    pub fn to_json(&self) -> Value {
        match self {
            TimeValue::Iso(s) => Value::String(s.clone()),
            TimeValue::Epoch(n) => json_number(*n),
        }
    }
}

impl From<&str> for TimeValue {
    fn from(value: &str) -> Self {
        TimeValue::Iso(value.to_string())
    }
}

impl From<f64> for TimeValue {
    fn from(value: f64) -> Self {
        TimeValue::Epoch(value)
    }
}

/// When an object is available, as one or many ISO-8601 interval strings.
#[derive(Debug, Clone, PartialEq)]
pub enum Availability {
    Single(String),
    Multiple(Vec<String>),
}

impl Availability {
    pub fn from_json(v: &Value) -> Result<Self, DecodeError> {
        if let Some(s) = v.as_str() {
            return Ok(Availability::Single(s.to_string()));
        }
        if let Some(arr) = v.as_array() {
            let mut intervals = Vec::with_capacity(arr.len());
            for item in arr {
                let s = item
                    .as_str()
                    .ok_or(DecodeError::ShapeMismatch("availability"))?;
                intervals.push(s.to_string());
            }
            return Ok(Availability::Multiple(intervals));
        }
        Err(DecodeError::ShapeMismatch("availability"))
    }

    pub fn to_json(&self) -> Value {
        match self {
            Availability::Single(s) => Value::String(s.clone()),
            Availability::Multiple(list) => {
                Value::Array(list.iter().map(|s| Value::String(s.clone())).collect())
            }
        }
    }
}

/// Encode an `f64` as a JSON number, falling back to `null` for
/// non-finite values serde_json cannot represent.
pub(crate) fn json_number(n: f64) -> Value {
    serde_json::Number::from_f64(n).map_or(Value::Null, Value::Number)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn time_value_prefers_strings() {
        let t = TimeValue::from_json(&json!("2012-08-04T16:00:00Z")).unwrap();
        assert_eq!(t, TimeValue::Iso("2012-08-04T16:00:00Z".to_string()));
        assert_eq!(t.to_json(), json!("2012-08-04T16:00:00Z"));

        let t = TimeValue::from_json(&json!(42.5)).unwrap();
        assert_eq!(t, TimeValue::Epoch(42.5));
        assert_eq!(t.to_json(), json!(42.5));

        assert!(TimeValue::from_json(&json!({"t": 1})).is_err());
        assert!(TimeValue::from_json(&json!(null)).is_err());
    }

    #[test]
    fn availability_single_and_list() {
        let a = Availability::from_json(&json!("2012-08-04T16:00:00Z/2012-08-04T17:00:00Z")).unwrap();
        assert!(matches!(a, Availability::Single(_)));

        let a = Availability::from_json(&json!(["A/B", "C/D"])).unwrap();
        assert_eq!(
            a,
            Availability::Multiple(vec!["A/B".to_string(), "C/D".to_string()])
        );
        assert_eq!(a.to_json(), json!(["A/B", "C/D"]));
    }

    #[test]
    fn availability_empty_list_round_trips() {
        let a = Availability::from_json(&json!([])).unwrap();
        assert_eq!(a, Availability::Multiple(vec![]));
        assert_eq!(a.to_json(), json!([]));
    }

    #[test]
    fn availability_rejects_mixed_array() {
        assert!(Availability::from_json(&json!(["A/B", 3])).is_err());
    }
}
