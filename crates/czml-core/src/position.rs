//! Position properties: single time-dynamic positions, vertex position
//! lists, orientations and sensor direction lists.

use serde_json::{Map, Value};

use crate::cartesian::{Cartesian, Cartographic, UnitQuaternion, Velocity};
use crate::error::DecodeError;
use crate::fields::{opt_i64, opt_string, put_i64, put_string};
use crate::samples::{decode_samples, encode_samples, Sample};
use crate::time::json_number;

/// One interval-scoped position of an object.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CzmlPosition {
    pub cartesian: Option<Vec<Sample<Cartesian>>>,
    pub cartographic_degrees: Option<Vec<Sample<Cartographic>>>,
    pub cartographic_radians: Option<Vec<Sample<Cartographic>>>,
    pub cartesian_velocity: Option<Vec<Sample<Velocity>>>,
    pub interval: Option<String>,
    pub epoch: Option<String>,
    pub interpolation_algorithm: Option<String>,
    pub interpolation_degree: Option<i64>,
    pub reference: Option<String>,
}

impl CzmlPosition {
    pub fn cartesian_constant(x: f64, y: f64, z: f64) -> Self {
        Self {
            cartesian: Some(vec![Sample::constant(Cartesian::new(x, y, z))]),
            ..Self::default()
        }
    }

    pub fn from_json(v: &Value) -> Result<Self, DecodeError> {
        if v.is_array() {
            return Ok(Self {
                cartesian: Some(decode_samples(v)?),
                ..Self::default()
            });
        }
        let obj = v.as_object().ok_or(DecodeError::ShapeMismatch("position"))?;
        Ok(Self {
            cartesian: obj.get("cartesian").map(decode_samples).transpose()?,
            cartographic_degrees: obj
                .get("cartographicDegrees")
                .map(decode_samples)
                .transpose()?,
            cartographic_radians: obj
                .get("cartographicRadians")
                .map(decode_samples)
                .transpose()?,
            cartesian_velocity: obj
                .get("cartesianVelocity")
                .map(decode_samples)
                .transpose()?,
            interval: opt_string(obj, "interval"),
            epoch: opt_string(obj, "epoch"),
            interpolation_algorithm: opt_string(obj, "interpolationAlgorithm"),
            interpolation_degree: opt_i64(obj, "interpolationDegree"),
            reference: opt_string(obj, "reference"),
        })
    }

    pub fn to_json(&self) -> Value {
        let mut map = Map::new();
        put_string(&mut map, "interval", &self.interval);
        put_string(&mut map, "epoch", &self.epoch);
        if let Some(samples) = &self.cartesian {
            map.insert("cartesian".to_string(), encode_samples(samples));
        }
        if let Some(samples) = &self.cartographic_degrees {
            map.insert("cartographicDegrees".to_string(), encode_samples(samples));
        }
        if let Some(samples) = &self.cartographic_radians {
            map.insert("cartographicRadians".to_string(), encode_samples(samples));
        }
        if let Some(samples) = &self.cartesian_velocity {
            map.insert("cartesianVelocity".to_string(), encode_samples(samples));
        }
        put_string(&mut map, "interpolationAlgorithm", &self.interpolation_algorithm);
        put_i64(&mut map, "interpolationDegree", &self.interpolation_degree);
        put_string(&mut map, "reference", &self.reference);
        Value::Object(map)
    }
}

/// The `position` packet property: one position or a list of
/// interval-scoped positions.
#[derive(Debug, Clone, PartialEq)]
pub struct CzmlPositions(pub Vec<CzmlPosition>);

impl CzmlPositions {
    pub fn single(position: CzmlPosition) -> Self {
        Self(vec![position])
    }

    pub fn from_json(v: &Value) -> Result<Self, DecodeError> {
        if let Some(arr) = v.as_array() {
            if arr.first().is_some_and(Value::is_object) {
                let positions = arr
                    .iter()
                    .map(CzmlPosition::from_json)
                    .collect::<Result<Vec<_>, _>>()?;
                return Ok(Self(positions));
            }
        }
        Ok(Self(vec![CzmlPosition::from_json(v)?]))
    }

    pub fn to_json(&self) -> Value {
        if self.0.len() == 1 {
            return self.0[0].to_json();
        }
        Value::Array(self.0.iter().map(CzmlPosition::to_json).collect())
    }
}

impl From<CzmlPosition> for CzmlPositions {
    fn from(position: CzmlPosition) -> Self {
        Self::single(position)
    }
}

/// Vertex position lists for polylines, polygons and walls.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Positions {
    pub cartesian: Option<Vec<Sample<Cartesian>>>,
    pub cartographic_degrees: Option<Vec<Sample<Cartographic>>>,
    pub cartographic_radians: Option<Vec<Sample<Cartographic>>>,
    pub references: Option<Vec<String>>,
}

impl Positions {
    pub fn from_json(v: &Value) -> Result<Self, DecodeError> {
        if v.is_array() {
            return Ok(Self {
                cartesian: Some(decode_samples(v)?),
                ..Self::default()
            });
        }
        let obj = v
            .as_object()
            .ok_or(DecodeError::ShapeMismatch("positions"))?;
        let references = match obj.get("references") {
            Some(Value::Array(items)) => {
                let mut refs = Vec::with_capacity(items.len());
                for item in items {
                    let s = item
                        .as_str()
                        .ok_or(DecodeError::ShapeMismatch("positions"))?;
                    refs.push(s.to_string());
                }
                Some(refs)
            }
            Some(_) => return Err(DecodeError::ShapeMismatch("positions")),
            None => None,
        };
        Ok(Self {
            cartesian: obj.get("cartesian").map(decode_samples).transpose()?,
            cartographic_degrees: obj
                .get("cartographicDegrees")
                .map(decode_samples)
                .transpose()?,
            cartographic_radians: obj
                .get("cartographicRadians")
                .map(decode_samples)
                .transpose()?,
            references,
        })
    }

    pub fn to_json(&self) -> Value {
        let mut map = Map::new();
        if let Some(samples) = &self.cartesian {
            map.insert("cartesian".to_string(), encode_samples(samples));
        }
        if let Some(samples) = &self.cartographic_degrees {
            map.insert("cartographicDegrees".to_string(), encode_samples(samples));
        }
        if let Some(samples) = &self.cartographic_radians {
            map.insert("cartographicRadians".to_string(), encode_samples(samples));
        }
        if let Some(refs) = &self.references {
            map.insert(
                "references".to_string(),
                Value::Array(refs.iter().map(|s| Value::String(s.clone())).collect()),
            );
        }
        Value::Object(map)
    }
}

/// The `orientation` packet property, as unit quaternion samples.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Orientation {
    pub unit_quaternion: Option<Vec<Sample<UnitQuaternion>>>,
    pub interval: Option<String>,
    pub epoch: Option<String>,
    pub interpolation_algorithm: Option<String>,
    pub interpolation_degree: Option<i64>,
    pub reference: Option<String>,
}

impl Orientation {
    pub fn from_json(v: &Value) -> Result<Self, DecodeError> {
        if v.is_array() {
            return Ok(Self {
                unit_quaternion: Some(decode_samples(v)?),
                ..Self::default()
            });
        }
        let obj = v
            .as_object()
            .ok_or(DecodeError::ShapeMismatch("orientation"))?;
        Ok(Self {
            unit_quaternion: obj.get("unitQuaternion").map(decode_samples).transpose()?,
            interval: opt_string(obj, "interval"),
            epoch: opt_string(obj, "epoch"),
            interpolation_algorithm: opt_string(obj, "interpolationAlgorithm"),
            interpolation_degree: opt_i64(obj, "interpolationDegree"),
            reference: opt_string(obj, "reference"),
        })
    }

    pub fn to_json(&self) -> Value {
        let mut map = Map::new();
        put_string(&mut map, "interval", &self.interval);
        put_string(&mut map, "epoch", &self.epoch);
        if let Some(samples) = &self.unit_quaternion {
            map.insert("unitQuaternion".to_string(), encode_samples(samples));
        }
        put_string(&mut map, "interpolationAlgorithm", &self.interpolation_algorithm);
        put_i64(&mut map, "interpolationDegree", &self.interpolation_degree);
        put_string(&mut map, "reference", &self.reference);
        Value::Object(map)
    }
}

/// Direction lists for sensor volumes, as flat numeric lists in one of
/// four coordinate conventions.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Directions {
    pub unit_spherical: Option<Vec<f64>>,
    pub spherical: Option<Vec<f64>>,
    pub unit_cartesian: Option<Vec<f64>>,
    pub cartesian: Option<Vec<f64>>,
}

impl Directions {
    pub fn from_json(v: &Value) -> Result<Self, DecodeError> {
        let obj = v
            .as_object()
            .ok_or(DecodeError::ShapeMismatch("directions"))?;
        Ok(Self {
            unit_spherical: number_list(obj.get("unitSpherical"))?,
            spherical: number_list(obj.get("spherical"))?,
            unit_cartesian: number_list(obj.get("unitCartesian"))?,
            cartesian: number_list(obj.get("cartesian"))?,
        })
    }

    pub fn to_json(&self) -> Value {
        let mut map = Map::new();
        let mut put = |key: &str, list: &Option<Vec<f64>>| {
            if let Some(values) = list {
                map.insert(
                    key.to_string(),
                    Value::Array(values.iter().map(|n| json_number(*n)).collect()),
                );
            }
        };
        put("unitSpherical", &self.unit_spherical);
        put("spherical", &self.spherical);
        put("unitCartesian", &self.unit_cartesian);
        put("cartesian", &self.cartesian);
        Value::Object(map)
    }
}

fn number_list(v: Option<&Value>) -> Result<Option<Vec<f64>>, DecodeError> {
    let Some(v) = v else {
        return Ok(None);
    };
    let arr = v
        .as_array()
        .ok_or(DecodeError::ShapeMismatch("directions"))?;
    let mut out = Vec::with_capacity(arr.len());
    for item in arr {
        out.push(
            item.as_f64()
                .ok_or(DecodeError::ShapeMismatch("directions"))?,
        );
    }
    Ok(Some(out))
}
