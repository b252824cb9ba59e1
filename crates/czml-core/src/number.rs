//! Numeric properties: a bare scalar, a timed sample array, or an object
//! with interpolation metadata.

use serde_json::{Map, Value};

use crate::error::DecodeError;
use crate::fields::{opt_i64, opt_string, put_i64, put_string};
use crate::samples::{decode_samples, encode_samples, Sample};
use crate::time::json_number;

/// One number value in any of its wire shapes.
#[derive(Debug, Clone, PartialEq)]
pub enum CzmlNumber {
    /// Bare constant, e.g. `"scale": 2.0`.
    Scalar(f64),
    /// Flat `[time, value, time, value, ...]` sample array.
    Samples(Vec<Sample<f64>>),
    /// Object form carrying interval, epoch and interpolation settings.
    Detail(NumberDetail),
}

/// The object form of a number property.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NumberDetail {
    pub number: Option<Vec<Sample<f64>>>,
    pub interval: Option<String>,
    pub epoch: Option<String>,
    pub interpolation_algorithm: Option<String>,
    pub interpolation_degree: Option<i64>,
    pub reference: Option<String>,
}

impl CzmlNumber {
    pub fn from_json(v: &Value) -> Result<Self, DecodeError> {
        if let Some(n) = v.as_f64() {
            return Ok(CzmlNumber::Scalar(n));
        }
        if v.is_array() {
            return Ok(CzmlNumber::Samples(decode_samples(v)?));
        }
        let obj = v.as_object().ok_or(DecodeError::ShapeMismatch("number"))?;
        let number = match obj.get("number") {
            Some(n) if n.is_array() => Some(decode_samples(n)?),
            Some(n) => {
                let scalar = n.as_f64().ok_or(DecodeError::ShapeMismatch("number"))?;
                Some(vec![Sample::constant(scalar)])
            }
            None => None,
        };
        Ok(CzmlNumber::Detail(NumberDetail {
            number,
            interval: opt_string(obj, "interval"),
            epoch: opt_string(obj, "epoch"),
            interpolation_algorithm: opt_string(obj, "interpolationAlgorithm"),
            interpolation_degree: opt_i64(obj, "interpolationDegree"),
            reference: opt_string(obj, "reference"),
        }))
    }

    pub fn to_json(&self) -> Value {
        match self {
            CzmlNumber::Scalar(n) => json_number(*n),
            CzmlNumber::Samples(samples) => encode_samples(samples),
            CzmlNumber::Detail(detail) => {
                let mut map = Map::new();
                put_string(&mut map, "interval", &detail.interval);
                put_string(&mut map, "epoch", &detail.epoch);
                if let Some(samples) = &detail.number {
                    map.insert("number".to_string(), encode_samples(samples));
                }
                put_string(
                    &mut map,
                    "interpolationAlgorithm",
                    &detail.interpolation_algorithm,
                );
                put_i64(&mut map, "interpolationDegree", &detail.interpolation_degree);
                put_string(&mut map, "reference", &detail.reference);
                Value::Object(map)
            }
        }
    }
}

impl From<f64> for CzmlNumber {
    fn from(value: f64) -> Self {
        CzmlNumber::Scalar(value)
    }
}

/// A number property: one value or a list of interval-scoped values.
#[derive(Debug, Clone, PartialEq)]
pub struct Number(pub Vec<CzmlNumber>);

impl Number {
    pub fn constant(value: f64) -> Self {
        Self(vec![CzmlNumber::Scalar(value)])
    }

    pub fn from_json(v: &Value) -> Result<Self, DecodeError> {
        // An array of objects is an interval list; an array of numbers is
        // a single timed-sample value.
        if let Some(arr) = v.as_array() {
            if arr.first().is_some_and(Value::is_object) {
                let numbers = arr
                    .iter()
                    .map(CzmlNumber::from_json)
                    .collect::<Result<Vec<_>, _>>()?;
                return Ok(Self(numbers));
            }
        }
        Ok(Self(vec![CzmlNumber::from_json(v)?]))
    }

    pub fn to_json(&self) -> Value {
        if self.0.len() == 1 {
            return self.0[0].to_json();
        }
        Value::Array(self.0.iter().map(CzmlNumber::to_json).collect())
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Number::constant(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn scalar_round_trip() {
        let n = Number::from_json(&json!(2.0)).unwrap();
        assert_eq!(n, Number::constant(2.0));
        assert_eq!(n.to_json(), json!(2.0));
    }

    #[test]
    fn timed_samples_round_trip() {
        let v = json!([0.0, 1.0, 60.0, 2.0, 120.0, 3.0]);
        let n = Number::from_json(&v).unwrap();
        match &n.0[0] {
            CzmlNumber::Samples(samples) => assert_eq!(samples.len(), 3),
            other => panic!("expected samples, got {other:?}"),
        }
        assert_eq!(n.to_json(), v);
    }

    #[test]
    fn detail_object_round_trip() {
        let v = json!({
            "epoch": "2012-08-04T16:00:00Z",
            "number": [0.0, 1.0, 60.0, 2.0],
            "interpolationAlgorithm": "LAGRANGE",
            "interpolationDegree": 1
        });
        let n = CzmlNumber::from_json(&v).unwrap();
        assert!(matches!(n, CzmlNumber::Detail(_)));
        assert_eq!(n.to_json(), v);
    }

    #[test]
    fn detail_scalar_number_collapses_back() {
        let v = json!({"interval": "A/B", "number": 5.0});
        let n = CzmlNumber::from_json(&v).unwrap();
        assert_eq!(n.to_json(), v);
    }

    #[test]
    fn interval_list_unwraps_single_element() {
        let v = json!([
            {"interval": "A/B", "number": 1.0},
            {"interval": "B/C", "number": 2.0}
        ]);
        let n = Number::from_json(&v).unwrap();
        assert_eq!(n.0.len(), 2);
        assert_eq!(n.to_json(), v);

        let single = Number(vec![n.0[0].clone()]);
        assert_eq!(single.to_json(), json!({"interval": "A/B", "number": 1.0}));
    }

    #[test]
    fn odd_sample_array_is_malformed() {
        assert!(Number::from_json(&json!([0.0, 1.0, 60.0])).is_err());
    }
}
