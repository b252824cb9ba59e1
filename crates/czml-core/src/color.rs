//! Color properties, as integer `rgba` or float `rgbaf` channel samples.

use serde_json::{Map, Value};

use crate::error::DecodeError;
use crate::fields::{opt_string, put_string};
use crate::samples::{decode_samples, encode_samples, read_f64, Sample, SampleTuple};
use crate::time::json_number;

/// A color with integer channels in `0..=255`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgba {
    pub red: i64,
    pub green: i64,
    pub blue: i64,
    pub alpha: i64,
}

impl Rgba {
    pub fn new(red: i64, green: i64, blue: i64, alpha: i64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }
}

impl SampleTuple for Rgba {
    const ARITY: usize = 4;
    const NAME: &'static str = "rgba";

    fn read(values: &[Value]) -> Result<Self, DecodeError> {
        let channel = |v: &Value| v.as_i64().ok_or(DecodeError::ShapeMismatch(Self::NAME));
        Ok(Self {
            red: channel(&values[0])?,
            green: channel(&values[1])?,
            blue: channel(&values[2])?,
            alpha: channel(&values[3])?,
        })
    }

    fn write(&self, out: &mut Vec<Value>) {
        for c in [self.red, self.green, self.blue, self.alpha] {
            out.push(Value::Number(c.into()));
        }
    }
}

/// A color with float channels in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgbaf {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Rgbaf {
    pub fn new(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }
}

impl SampleTuple for Rgbaf {
    const ARITY: usize = 4;
    const NAME: &'static str = "rgbaf";

    fn read(values: &[Value]) -> Result<Self, DecodeError> {
        Ok(Self {
            red: read_f64(&values[0], Self::NAME)?,
            green: read_f64(&values[1], Self::NAME)?,
            blue: read_f64(&values[2], Self::NAME)?,
            alpha: read_f64(&values[3], Self::NAME)?,
        })
    }

    fn write(&self, out: &mut Vec<Value>) {
        for c in [self.red, self.green, self.blue, self.alpha] {
            out.push(json_number(c));
        }
    }
}

/// One interval-scoped color value.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CzmlColor {
    pub rgba: Option<Vec<Sample<Rgba>>>,
    pub rgbaf: Option<Vec<Sample<Rgbaf>>>,
    pub interval: Option<String>,
    pub epoch: Option<String>,
    pub reference: Option<String>,
}

impl CzmlColor {
    pub fn rgba_constant(red: i64, green: i64, blue: i64, alpha: i64) -> Self {
        Self {
            rgba: Some(vec![Sample::constant(Rgba::new(red, green, blue, alpha))]),
            ..Self::default()
        }
    }

    pub fn from_json(v: &Value) -> Result<Self, DecodeError> {
        let obj = v.as_object().ok_or(DecodeError::ShapeMismatch("color"))?;
        Ok(Self {
            rgba: obj.get("rgba").map(decode_samples).transpose()?,
            rgbaf: obj.get("rgbaf").map(decode_samples).transpose()?,
            interval: opt_string(obj, "interval"),
            epoch: opt_string(obj, "epoch"),
            reference: opt_string(obj, "reference"),
        })
    }

    pub fn to_json(&self) -> Value {
        let mut map = Map::new();
        put_string(&mut map, "interval", &self.interval);
        put_string(&mut map, "epoch", &self.epoch);
        if let Some(samples) = &self.rgba {
            map.insert("rgba".to_string(), encode_samples(samples));
        }
        if let Some(samples) = &self.rgbaf {
            map.insert("rgbaf".to_string(), encode_samples(samples));
        }
        put_string(&mut map, "reference", &self.reference);
        Value::Object(map)
    }
}

/// A color property: one color or a list of interval-scoped colors.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorProperty(pub Vec<CzmlColor>);

impl ColorProperty {
    pub fn single(color: CzmlColor) -> Self {
        Self(vec![color])
    }

    pub fn from_json(v: &Value) -> Result<Self, DecodeError> {
        if let Some(arr) = v.as_array() {
            let colors = arr
                .iter()
                .map(CzmlColor::from_json)
                .collect::<Result<Vec<_>, _>>()?;
            return Ok(Self(colors));
        }
        Ok(Self(vec![CzmlColor::from_json(v)?]))
    }

    /// A one-element list writes the bare object; longer lists write an
    /// array of interval-scoped objects.
    pub fn to_json(&self) -> Value {
        if self.0.len() == 1 {
            return self.0[0].to_json();
        }
        Value::Array(self.0.iter().map(CzmlColor::to_json).collect())
    }
}

impl From<CzmlColor> for ColorProperty {
    fn from(color: CzmlColor) -> Self {
        Self::single(color)
    }
}
