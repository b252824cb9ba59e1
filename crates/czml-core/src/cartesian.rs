//! Cartesian and cartographic tuple types and their property wrappers.

use serde_json::{Map, Value};

use crate::error::DecodeError;
use crate::fields::{opt_i64, opt_string, put_i64, put_string};
use crate::samples::{decode_samples, encode_samples, read_f64, Sample, SampleTuple};
use crate::time::json_number;

/// A 3D position or offset in meters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cartesian {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Cartesian {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

impl SampleTuple for Cartesian {
    const ARITY: usize = 3;
    const NAME: &'static str = "cartesian";

    fn read(values: &[Value]) -> Result<Self, DecodeError> {
        Ok(Self {
            x: read_f64(&values[0], Self::NAME)?,
            y: read_f64(&values[1], Self::NAME)?,
            z: read_f64(&values[2], Self::NAME)?,
        })
    }

    fn write(&self, out: &mut Vec<Value>) {
        out.push(json_number(self.x));
        out.push(json_number(self.y));
        out.push(json_number(self.z));
    }
}

/// A 2D screen-space offset in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cartesian2 {
    pub x: f64,
    pub y: f64,
}

impl Cartesian2 {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl SampleTuple for Cartesian2 {
    const ARITY: usize = 2;
    const NAME: &'static str = "cartesian2";

    fn read(values: &[Value]) -> Result<Self, DecodeError> {
        Ok(Self {
            x: read_f64(&values[0], Self::NAME)?,
            y: read_f64(&values[1], Self::NAME)?,
        })
    }

    fn write(&self, out: &mut Vec<Value>) {
        out.push(json_number(self.x));
        out.push(json_number(self.y));
    }
}

/// A geodetic position: longitude, latitude (degrees or radians depending
/// on the enclosing field) and height in meters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cartographic {
    pub longitude: f64,
    pub latitude: f64,
    pub height: f64,
}

impl Cartographic {
    pub fn new(longitude: f64, latitude: f64, height: f64) -> Self {
        Self {
            longitude,
            latitude,
            height,
        }
    }
}

impl SampleTuple for Cartographic {
    const ARITY: usize = 3;
    const NAME: &'static str = "cartographic";

    fn read(values: &[Value]) -> Result<Self, DecodeError> {
        Ok(Self {
            longitude: read_f64(&values[0], Self::NAME)?,
            latitude: read_f64(&values[1], Self::NAME)?,
            height: read_f64(&values[2], Self::NAME)?,
        })
    }

    fn write(&self, out: &mut Vec<Value>) {
        out.push(json_number(self.longitude));
        out.push(json_number(self.latitude));
        out.push(json_number(self.height));
    }
}

/// A position with its first derivative, six values per sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Velocity {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub vx: f64,
    pub vy: f64,
    pub vz: f64,
}

impl SampleTuple for Velocity {
    const ARITY: usize = 6;
    const NAME: &'static str = "cartesianVelocity";

    fn read(values: &[Value]) -> Result<Self, DecodeError> {
        Ok(Self {
            x: read_f64(&values[0], Self::NAME)?,
            y: read_f64(&values[1], Self::NAME)?,
            z: read_f64(&values[2], Self::NAME)?,
            vx: read_f64(&values[3], Self::NAME)?,
            vy: read_f64(&values[4], Self::NAME)?,
            vz: read_f64(&values[5], Self::NAME)?,
        })
    }

    fn write(&self, out: &mut Vec<Value>) {
        for v in [self.x, self.y, self.z, self.vx, self.vy, self.vz] {
            out.push(json_number(v));
        }
    }
}

/// A rotation as a unit quaternion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitQuaternion {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub w: f64,
}

impl UnitQuaternion {
    pub fn new(x: f64, y: f64, z: f64, w: f64) -> Self {
        Self { x, y, z, w }
    }
}

impl SampleTuple for UnitQuaternion {
    const ARITY: usize = 4;
    const NAME: &'static str = "unitQuaternion";

    fn read(values: &[Value]) -> Result<Self, DecodeError> {
        Ok(Self {
            x: read_f64(&values[0], Self::NAME)?,
            y: read_f64(&values[1], Self::NAME)?,
            z: read_f64(&values[2], Self::NAME)?,
            w: read_f64(&values[3], Self::NAME)?,
        })
    }

    fn write(&self, out: &mut Vec<Value>) {
        out.push(json_number(self.x));
        out.push(json_number(self.y));
        out.push(json_number(self.z));
        out.push(json_number(self.w));
    }
}

/// A cartesian-valued property (eye offsets, aligned axes, ellipsoid
/// radii). On the wire either a bare sample array or an object carrying
/// the samples plus interval and interpolation metadata.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CzmlCartesian {
    pub cartesian: Option<Vec<Sample<Cartesian>>>,
    pub interval: Option<String>,
    pub epoch: Option<String>,
    pub interpolation_algorithm: Option<String>,
    pub interpolation_degree: Option<i64>,
    pub reference: Option<String>,
}

impl CzmlCartesian {
    pub fn constant(x: f64, y: f64, z: f64) -> Self {
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
        let obj = v
            .as_object()
            .ok_or(DecodeError::ShapeMismatch("cartesian"))?;
        Ok(Self {
            cartesian: obj.get("cartesian").map(decode_samples).transpose()?,
            interval: opt_string(obj, "interval"),
            epoch: opt_string(obj, "epoch"),
            interpolation_algorithm: opt_string(obj, "interpolationAlgorithm"),
            interpolation_degree: opt_i64(obj, "interpolationDegree"),
            reference: opt_string(obj, "reference"),
        })
    }

    pub fn to_json(&self) -> Value {
        if let Some(samples) = &self.cartesian {
            if self.bare() {
                return encode_samples(samples);
            }
        }
        let mut map = Map::new();
        if let Some(samples) = &self.cartesian {
            map.insert("cartesian".to_string(), encode_samples(samples));
        }
        put_string(&mut map, "interval", &self.interval);
        put_string(&mut map, "epoch", &self.epoch);
        put_string(&mut map, "interpolationAlgorithm", &self.interpolation_algorithm);
        put_i64(&mut map, "interpolationDegree", &self.interpolation_degree);
        put_string(&mut map, "reference", &self.reference);
        Value::Object(map)
    }

    fn bare(&self) -> bool {
        self.interval.is_none()
            && self.epoch.is_none()
            && self.interpolation_algorithm.is_none()
            && self.interpolation_degree.is_none()
            && self.reference.is_none()
    }
}

/// A 2D cartesian-valued property (pixel offsets).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CzmlCartesian2 {
    pub cartesian2: Option<Vec<Sample<Cartesian2>>>,
    pub interval: Option<String>,
    pub epoch: Option<String>,
    pub reference: Option<String>,
}

impl CzmlCartesian2 {
    pub fn constant(x: f64, y: f64) -> Self {
        Self {
            cartesian2: Some(vec![Sample::constant(Cartesian2::new(x, y))]),
            ..Self::default()
        }
    }

    pub fn from_json(v: &Value) -> Result<Self, DecodeError> {
        if v.is_array() {
            return Ok(Self {
                cartesian2: Some(decode_samples(v)?),
                ..Self::default()
            });
        }
        let obj = v
            .as_object()
            .ok_or(DecodeError::ShapeMismatch("cartesian2"))?;
        Ok(Self {
            cartesian2: obj.get("cartesian2").map(decode_samples).transpose()?,
            interval: opt_string(obj, "interval"),
            epoch: opt_string(obj, "epoch"),
            reference: opt_string(obj, "reference"),
        })
    }

    pub fn to_json(&self) -> Value {
        if let Some(samples) = &self.cartesian2 {
            if self.interval.is_none() && self.epoch.is_none() && self.reference.is_none() {
                return encode_samples(samples);
            }
        }
        let mut map = Map::new();
        if let Some(samples) = &self.cartesian2 {
            map.insert("cartesian2".to_string(), encode_samples(samples));
        }
        put_string(&mut map, "interval", &self.interval);
        put_string(&mut map, "epoch", &self.epoch);
        put_string(&mut map, "reference", &self.reference);
        Value::Object(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn wrapper_reads_bare_arrays() {
        let c = CzmlCartesian::from_json(&json!([1.0, 2.0, 3.0])).unwrap();
        assert_eq!(c, CzmlCartesian::constant(1.0, 2.0, 3.0));
        assert_eq!(c.to_json(), json!([1.0, 2.0, 3.0]));
    }

    #[test]
    fn wrapper_keeps_object_form_when_metadata_present() {
        let v = json!({
            "cartesian": [0.0, 1.0, 2.0, 3.0, 60.0, 4.0, 5.0, 6.0],
            "epoch": "2020-01-01T00:00:00Z",
            "interpolationAlgorithm": "LAGRANGE",
            "interpolationDegree": 5
        });
        let c = CzmlCartesian::from_json(&v).unwrap();
        assert_eq!(c.cartesian.as_ref().map(|s| s.len()), Some(2));
        assert_eq!(c.epoch.as_deref(), Some("2020-01-01T00:00:00Z"));
        assert_eq!(c.to_json(), v);
    }

    #[test]
    fn velocity_groups_by_seven_with_time() {
        let v = json!([0.0, 1.0, 2.0, 3.0, 0.1, 0.2, 0.3]);
        let samples: Vec<Sample<Velocity>> = decode_samples(&v).unwrap();
        assert_eq!(samples.len(), 1);
        assert!(samples[0].time.is_some());
        assert_eq!(samples[0].data.vz, 0.3);
    }

    #[test]
    fn pixel_offset_round_trip() {
        let c = CzmlCartesian2::from_json(&json!([4.0, -4.0])).unwrap();
        assert_eq!(c, CzmlCartesian2::constant(4.0, -4.0));
        assert_eq!(c.to_json(), json!([4.0, -4.0]));
    }
}
