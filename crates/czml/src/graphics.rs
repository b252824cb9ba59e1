//! Graphical property carriers: billboards, labels, shapes, models and
//! the scene clock.
//!
//! These are inert structs of optional codec-valued fields. A failing
//! sub-field fails the whole carrier; the packet layer then drops that
//! one property and keeps the rest.

use czml_core::samples::{decode_samples, encode_samples, read_f64, Sample, SampleTuple};
use czml_core::{
    ColorProperty, CzmlBoolean, CzmlCartesian, CzmlCartesian2, DecodeError, Font,
    HorizontalOrigin, ImageUri, Number, Positions, Style, Text, VerticalOrigin,
};
use serde_json::{Map, Value};

use crate::field::{as_object, f64_list, f64_list_json, opt, put};

/// A billboard: a viewport-aligned image at the object's position.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Billboard {
    pub color: Option<ColorProperty>,
    pub eye_offset: Option<CzmlCartesian>,
    pub horizontal_origin: Option<HorizontalOrigin>,
    pub image: Option<ImageUri>,
    pub pixel_offset: Option<CzmlCartesian2>,
    pub rotation: Option<Number>,
    pub aligned_axis: Option<CzmlCartesian>,
    pub scale: Option<Number>,
    pub show: Option<CzmlBoolean>,
    pub vertical_origin: Option<VerticalOrigin>,
}

impl Billboard {
    pub fn from_json(v: &Value) -> Result<Self, DecodeError> {
        let obj = as_object(v, "billboard")?;
        Ok(Self {
            color: opt(obj, "color", ColorProperty::from_json)?,
            eye_offset: opt(obj, "eyeOffset", CzmlCartesian::from_json)?,
            horizontal_origin: opt(obj, "horizontalOrigin", HorizontalOrigin::from_json)?,
            image: opt(obj, "image", ImageUri::from_json)?,
            pixel_offset: opt(obj, "pixelOffset", CzmlCartesian2::from_json)?,
            rotation: opt(obj, "rotation", Number::from_json)?,
            aligned_axis: opt(obj, "alignedAxis", CzmlCartesian::from_json)?,
            scale: opt(obj, "scale", Number::from_json)?,
            show: opt(obj, "show", CzmlBoolean::from_json)?,
            vertical_origin: opt(obj, "verticalOrigin", VerticalOrigin::from_json)?,
        })
    }

    pub fn to_json(&self) -> Value {
        let mut map = Map::new();
        put(&mut map, "color", &self.color, ColorProperty::to_json);
        put(&mut map, "eyeOffset", &self.eye_offset, CzmlCartesian::to_json);
        put(&mut map, "horizontalOrigin", &self.horizontal_origin, HorizontalOrigin::to_json);
        put(&mut map, "image", &self.image, ImageUri::to_json);
        put(&mut map, "pixelOffset", &self.pixel_offset, CzmlCartesian2::to_json);
        put(&mut map, "rotation", &self.rotation, Number::to_json);
        put(&mut map, "alignedAxis", &self.aligned_axis, CzmlCartesian::to_json);
        put(&mut map, "scale", &self.scale, Number::to_json);
        put(&mut map, "show", &self.show, CzmlBoolean::to_json);
        put(&mut map, "verticalOrigin", &self.vertical_origin, VerticalOrigin::to_json);
        Value::Object(map)
    }
}

/// A text label.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Label {
    pub eye_offset: Option<CzmlCartesian>,
    pub fill_color: Option<ColorProperty>,
    pub font: Option<Font>,
    pub horizontal_origin: Option<HorizontalOrigin>,
    pub outline_color: Option<ColorProperty>,
    pub outline_width: Option<Number>,
    pub pixel_offset: Option<CzmlCartesian2>,
    pub scale: Option<Number>,
    pub show: Option<CzmlBoolean>,
    pub style: Option<Style>,
    pub text: Option<Text>,
    pub vertical_origin: Option<VerticalOrigin>,
}

impl Label {
    pub fn from_json(v: &Value) -> Result<Self, DecodeError> {
        let obj = as_object(v, "label")?;
        Ok(Self {
            eye_offset: opt(obj, "eyeOffset", CzmlCartesian::from_json)?,
            fill_color: opt(obj, "fillColor", ColorProperty::from_json)?,
            font: opt(obj, "font", Font::from_json)?,
            horizontal_origin: opt(obj, "horizontalOrigin", HorizontalOrigin::from_json)?,
            outline_color: opt(obj, "outlineColor", ColorProperty::from_json)?,
            outline_width: opt(obj, "outlineWidth", Number::from_json)?,
            pixel_offset: opt(obj, "pixelOffset", CzmlCartesian2::from_json)?,
            scale: opt(obj, "scale", Number::from_json)?,
            show: opt(obj, "show", CzmlBoolean::from_json)?,
            style: opt(obj, "style", Style::from_json)?,
            text: opt(obj, "text", Text::from_json)?,
            vertical_origin: opt(obj, "verticalOrigin", VerticalOrigin::from_json)?,
        })
    }

    pub fn to_json(&self) -> Value {
        let mut map = Map::new();
        put(&mut map, "eyeOffset", &self.eye_offset, CzmlCartesian::to_json);
        put(&mut map, "fillColor", &self.fill_color, ColorProperty::to_json);
        put(&mut map, "font", &self.font, Font::to_json);
        put(&mut map, "horizontalOrigin", &self.horizontal_origin, HorizontalOrigin::to_json);
        put(&mut map, "outlineColor", &self.outline_color, ColorProperty::to_json);
        put(&mut map, "outlineWidth", &self.outline_width, Number::to_json);
        put(&mut map, "pixelOffset", &self.pixel_offset, CzmlCartesian2::to_json);
        put(&mut map, "scale", &self.scale, Number::to_json);
        put(&mut map, "show", &self.show, CzmlBoolean::to_json);
        put(&mut map, "style", &self.style, Style::to_json);
        put(&mut map, "text", &self.text, Text::to_json);
        put(&mut map, "verticalOrigin", &self.vertical_origin, VerticalOrigin::to_json);
        Value::Object(map)
    }
}

/// A viewport-aligned circle.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Point {
    pub color: Option<ColorProperty>,
    pub outline_color: Option<ColorProperty>,
    pub outline_width: Option<Number>,
    pub pixel_size: Option<Number>,
    pub show: Option<CzmlBoolean>,
}

impl Point {
    pub fn from_json(v: &Value) -> Result<Self, DecodeError> {
        let obj = as_object(v, "point")?;
        Ok(Self {
            color: opt(obj, "color", ColorProperty::from_json)?,
            outline_color: opt(obj, "outlineColor", ColorProperty::from_json)?,
            outline_width: opt(obj, "outlineWidth", Number::from_json)?,
            pixel_size: opt(obj, "pixelSize", Number::from_json)?,
            show: opt(obj, "show", CzmlBoolean::from_json)?,
        })
    }

    pub fn to_json(&self) -> Value {
        let mut map = Map::new();
        put(&mut map, "color", &self.color, ColorProperty::to_json);
        put(&mut map, "outlineColor", &self.outline_color, ColorProperty::to_json);
        put(&mut map, "outlineWidth", &self.outline_width, Number::to_json);
        put(&mut map, "pixelSize", &self.pixel_size, Number::to_json);
        put(&mut map, "show", &self.show, CzmlBoolean::to_json);
        Value::Object(map)
    }
}

/// The motion trail of an object.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Path {
    pub show: Option<CzmlBoolean>,
    pub color: Option<ColorProperty>,
    pub width: Option<Number>,
    pub resolution: Option<Number>,
    pub lead_time: Option<Number>,
    pub trail_time: Option<Number>,
}

impl Path {
    pub fn from_json(v: &Value) -> Result<Self, DecodeError> {
        let obj = as_object(v, "path")?;
        Ok(Self {
            show: opt(obj, "show", CzmlBoolean::from_json)?,
            color: opt(obj, "color", ColorProperty::from_json)?,
            width: opt(obj, "width", Number::from_json)?,
            resolution: opt(obj, "resolution", Number::from_json)?,
            lead_time: opt(obj, "leadTime", Number::from_json)?,
            trail_time: opt(obj, "trailTime", Number::from_json)?,
        })
    }

    pub fn to_json(&self) -> Value {
        let mut map = Map::new();
        put(&mut map, "show", &self.show, CzmlBoolean::to_json);
        put(&mut map, "color", &self.color, ColorProperty::to_json);
        put(&mut map, "width", &self.width, Number::to_json);
        put(&mut map, "resolution", &self.resolution, Number::to_json);
        put(&mut map, "leadTime", &self.lead_time, Number::to_json);
        put(&mut map, "trailTime", &self.trail_time, Number::to_json);
        Value::Object(map)
    }
}

/// A line through a list of positions.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Polyline {
    pub positions: Option<Positions>,
    pub show: Option<CzmlBoolean>,
    pub color: Option<ColorProperty>,
    pub width: Option<Number>,
    pub follow_surface: Option<CzmlBoolean>,
}

impl Polyline {
    pub fn from_json(v: &Value) -> Result<Self, DecodeError> {
        let obj = as_object(v, "polyline")?;
        Ok(Self {
            positions: opt(obj, "positions", Positions::from_json)?,
            show: opt(obj, "show", CzmlBoolean::from_json)?,
            color: opt(obj, "color", ColorProperty::from_json)?,
            width: opt(obj, "width", Number::from_json)?,
            follow_surface: opt(obj, "followSurface", CzmlBoolean::from_json)?,
        })
    }

    pub fn to_json(&self) -> Value {
        let mut map = Map::new();
        put(&mut map, "positions", &self.positions, Positions::to_json);
        put(&mut map, "show", &self.show, CzmlBoolean::to_json);
        put(&mut map, "color", &self.color, ColorProperty::to_json);
        put(&mut map, "width", &self.width, Number::to_json);
        put(&mut map, "followSurface", &self.follow_surface, CzmlBoolean::to_json);
        Value::Object(map)
    }
}

/// A filled polygon on the globe surface.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Polygon {
    pub positions: Option<Positions>,
    pub show: Option<CzmlBoolean>,
    pub color: Option<ColorProperty>,
    pub height: Option<Number>,
    pub extruded_height: Option<Number>,
    pub granularity: Option<Number>,
    pub st_rotation: Option<Number>,
    pub fill: Option<CzmlBoolean>,
    pub outline: Option<CzmlBoolean>,
    pub outline_color: Option<ColorProperty>,
    pub per_position_height: Option<CzmlBoolean>,
}

impl Polygon {
    pub fn from_json(v: &Value) -> Result<Self, DecodeError> {
        let obj = as_object(v, "polygon")?;
        Ok(Self {
            positions: opt(obj, "positions", Positions::from_json)?,
            show: opt(obj, "show", CzmlBoolean::from_json)?,
            color: opt(obj, "color", ColorProperty::from_json)?,
            height: opt(obj, "height", Number::from_json)?,
            extruded_height: opt(obj, "extrudedHeight", Number::from_json)?,
            granularity: opt(obj, "granularity", Number::from_json)?,
            st_rotation: opt(obj, "stRotation", Number::from_json)?,
            fill: opt(obj, "fill", CzmlBoolean::from_json)?,
            outline: opt(obj, "outline", CzmlBoolean::from_json)?,
            outline_color: opt(obj, "outlineColor", ColorProperty::from_json)?,
            per_position_height: opt(obj, "perPositionHeight", CzmlBoolean::from_json)?,
        })
    }

    pub fn to_json(&self) -> Value {
        let mut map = Map::new();
        put(&mut map, "positions", &self.positions, Positions::to_json);
        put(&mut map, "show", &self.show, CzmlBoolean::to_json);
        put(&mut map, "color", &self.color, ColorProperty::to_json);
        put(&mut map, "height", &self.height, Number::to_json);
        put(&mut map, "extrudedHeight", &self.extruded_height, Number::to_json);
        put(&mut map, "granularity", &self.granularity, Number::to_json);
        put(&mut map, "stRotation", &self.st_rotation, Number::to_json);
        put(&mut map, "fill", &self.fill, CzmlBoolean::to_json);
        put(&mut map, "outline", &self.outline, CzmlBoolean::to_json);
        put(&mut map, "outlineColor", &self.outline_color, ColorProperty::to_json);
        put(&mut map, "perPositionHeight", &self.per_position_height, CzmlBoolean::to_json);
        Value::Object(map)
    }
}

/// An ellipse on the globe surface, centered on the object's position.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Ellipse {
    pub show: Option<CzmlBoolean>,
    pub semi_major_axis: Option<Number>,
    pub semi_minor_axis: Option<Number>,
    pub rotation: Option<Number>,
    pub height: Option<Number>,
    pub extruded_height: Option<Number>,
    pub granularity: Option<Number>,
    pub color: Option<ColorProperty>,
    pub fill: Option<CzmlBoolean>,
    pub outline: Option<CzmlBoolean>,
}

impl Ellipse {
    pub fn from_json(v: &Value) -> Result<Self, DecodeError> {
        let obj = as_object(v, "ellipse")?;
        Ok(Self {
            show: opt(obj, "show", CzmlBoolean::from_json)?,
            semi_major_axis: opt(obj, "semiMajorAxis", Number::from_json)?,
            semi_minor_axis: opt(obj, "semiMinorAxis", Number::from_json)?,
            rotation: opt(obj, "rotation", Number::from_json)?,
            height: opt(obj, "height", Number::from_json)?,
            extruded_height: opt(obj, "extrudedHeight", Number::from_json)?,
            granularity: opt(obj, "granularity", Number::from_json)?,
            color: opt(obj, "color", ColorProperty::from_json)?,
            fill: opt(obj, "fill", CzmlBoolean::from_json)?,
            outline: opt(obj, "outline", CzmlBoolean::from_json)?,
        })
    }

    pub fn to_json(&self) -> Value {
        let mut map = Map::new();
        put(&mut map, "show", &self.show, CzmlBoolean::to_json);
        put(&mut map, "semiMajorAxis", &self.semi_major_axis, Number::to_json);
        put(&mut map, "semiMinorAxis", &self.semi_minor_axis, Number::to_json);
        put(&mut map, "rotation", &self.rotation, Number::to_json);
        put(&mut map, "height", &self.height, Number::to_json);
        put(&mut map, "extrudedHeight", &self.extruded_height, Number::to_json);
        put(&mut map, "granularity", &self.granularity, Number::to_json);
        put(&mut map, "color", &self.color, ColorProperty::to_json);
        put(&mut map, "fill", &self.fill, CzmlBoolean::to_json);
        put(&mut map, "outline", &self.outline, CzmlBoolean::to_json);
        Value::Object(map)
    }
}

/// An ellipsoid volume centered on the object's position.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Ellipsoid {
    pub show: Option<CzmlBoolean>,
    pub radii: Option<CzmlCartesian>,
    pub color: Option<ColorProperty>,
    pub fill: Option<CzmlBoolean>,
    pub outline: Option<CzmlBoolean>,
    pub outline_color: Option<ColorProperty>,
}

impl Ellipsoid {
    pub fn from_json(v: &Value) -> Result<Self, DecodeError> {
        let obj = as_object(v, "ellipsoid")?;
        Ok(Self {
            show: opt(obj, "show", CzmlBoolean::from_json)?,
            radii: opt(obj, "radii", CzmlCartesian::from_json)?,
            color: opt(obj, "color", ColorProperty::from_json)?,
            fill: opt(obj, "fill", CzmlBoolean::from_json)?,
            outline: opt(obj, "outline", CzmlBoolean::from_json)?,
            outline_color: opt(obj, "outlineColor", ColorProperty::from_json)?,
        })
    }

    pub fn to_json(&self) -> Value {
        let mut map = Map::new();
        put(&mut map, "show", &self.show, CzmlBoolean::to_json);
        put(&mut map, "radii", &self.radii, CzmlCartesian::to_json);
        put(&mut map, "color", &self.color, ColorProperty::to_json);
        put(&mut map, "fill", &self.fill, CzmlBoolean::to_json);
        put(&mut map, "outline", &self.outline, CzmlBoolean::to_json);
        put(&mut map, "outlineColor", &self.outline_color, ColorProperty::to_json);
        Value::Object(map)
    }
}

/// A west-south-east-north cartographic extent, four values per sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CartographicExtent {
    pub west: f64,
    pub south: f64,
    pub east: f64,
    pub north: f64,
}

impl SampleTuple for CartographicExtent {
    const ARITY: usize = 4;
    const NAME: &'static str = "wsen";

    fn read(values: &[Value]) -> Result<Self, DecodeError> {
        Ok(Self {
            west: read_f64(&values[0], Self::NAME)?,
            south: read_f64(&values[1], Self::NAME)?,
            east: read_f64(&values[2], Self::NAME)?,
            north: read_f64(&values[3], Self::NAME)?,
        })
    }

    fn write(&self, out: &mut Vec<Value>) {
        for v in [self.west, self.south, self.east, self.north] {
            out.push(serde_json::Number::from_f64(v).map_or(Value::Null, Value::Number));
        }
    }
}

/// Rectangle extent in radians (`wsen`) or degrees (`wsenDegrees`).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RectangleCoordinates {
    pub wsen: Option<Vec<Sample<CartographicExtent>>>,
    pub wsen_degrees: Option<Vec<Sample<CartographicExtent>>>,
    pub reference: Option<String>,
}

impl RectangleCoordinates {
    pub fn from_json(v: &Value) -> Result<Self, DecodeError> {
        if v.is_array() {
            return Ok(Self {
                wsen: Some(decode_samples(v)?),
                ..Self::default()
            });
        }
        let obj = as_object(v, "coordinates")?;
        Ok(Self {
            wsen: opt(obj, "wsen", decode_samples)?,
            wsen_degrees: opt(obj, "wsenDegrees", decode_samples)?,
            reference: obj
                .get("reference")
                .and_then(|r| r.as_str())
                .map(|s| s.to_string()),
        })
    }

    pub fn to_json(&self) -> Value {
        let mut map = Map::new();
        put(&mut map, "wsen", &self.wsen, |s| encode_samples(s));
        put(&mut map, "wsenDegrees", &self.wsen_degrees, |s| encode_samples(s));
        if let Some(r) = &self.reference {
            map.insert("reference".to_string(), Value::String(r.clone()));
        }
        Value::Object(map)
    }
}

/// A cartographic rectangle.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Rectangle {
    pub coordinates: Option<RectangleCoordinates>,
    pub show: Option<CzmlBoolean>,
    pub color: Option<ColorProperty>,
    pub height: Option<Number>,
    pub extruded_height: Option<Number>,
    pub rotation: Option<Number>,
    pub fill: Option<CzmlBoolean>,
    pub outline: Option<CzmlBoolean>,
}

impl Rectangle {
    pub fn from_json(v: &Value) -> Result<Self, DecodeError> {
        let obj = as_object(v, "rectangle")?;
        Ok(Self {
            coordinates: opt(obj, "coordinates", RectangleCoordinates::from_json)?,
            show: opt(obj, "show", CzmlBoolean::from_json)?,
            color: opt(obj, "color", ColorProperty::from_json)?,
            height: opt(obj, "height", Number::from_json)?,
            extruded_height: opt(obj, "extrudedHeight", Number::from_json)?,
            rotation: opt(obj, "rotation", Number::from_json)?,
            fill: opt(obj, "fill", CzmlBoolean::from_json)?,
            outline: opt(obj, "outline", CzmlBoolean::from_json)?,
        })
    }

    pub fn to_json(&self) -> Value {
        let mut map = Map::new();
        put(&mut map, "coordinates", &self.coordinates, RectangleCoordinates::to_json);
        put(&mut map, "show", &self.show, CzmlBoolean::to_json);
        put(&mut map, "color", &self.color, ColorProperty::to_json);
        put(&mut map, "height", &self.height, Number::to_json);
        put(&mut map, "extrudedHeight", &self.extruded_height, Number::to_json);
        put(&mut map, "rotation", &self.rotation, Number::to_json);
        put(&mut map, "fill", &self.fill, CzmlBoolean::to_json);
        put(&mut map, "outline", &self.outline, CzmlBoolean::to_json);
        Value::Object(map)
    }
}

/// A wall: a surface extruded from a polyline.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Wall {
    pub show: Option<CzmlBoolean>,
    pub positions: Option<Positions>,
    pub minimum_heights: Option<Vec<f64>>,
    pub maximum_heights: Option<Vec<f64>>,
    pub granularity: Option<Number>,
    pub color: Option<ColorProperty>,
    pub fill: Option<CzmlBoolean>,
    pub outline: Option<CzmlBoolean>,
}

impl Wall {
    pub fn from_json(v: &Value) -> Result<Self, DecodeError> {
        let obj = as_object(v, "wall")?;
        Ok(Self {
            show: opt(obj, "show", CzmlBoolean::from_json)?,
            positions: opt(obj, "positions", Positions::from_json)?,
            minimum_heights: opt(obj, "minimumHeights", |v| f64_list(v, "wall"))?,
            maximum_heights: opt(obj, "maximumHeights", |v| f64_list(v, "wall"))?,
            granularity: opt(obj, "granularity", Number::from_json)?,
            color: opt(obj, "color", ColorProperty::from_json)?,
            fill: opt(obj, "fill", CzmlBoolean::from_json)?,
            outline: opt(obj, "outline", CzmlBoolean::from_json)?,
        })
    }

    pub fn to_json(&self) -> Value {
        let mut map = Map::new();
        put(&mut map, "show", &self.show, CzmlBoolean::to_json);
        put(&mut map, "positions", &self.positions, Positions::to_json);
        put(&mut map, "minimumHeights", &self.minimum_heights, |v| f64_list_json(v));
        put(&mut map, "maximumHeights", &self.maximum_heights, |v| f64_list_json(v));
        put(&mut map, "granularity", &self.granularity, Number::to_json);
        put(&mut map, "color", &self.color, ColorProperty::to_json);
        put(&mut map, "fill", &self.fill, CzmlBoolean::to_json);
        put(&mut map, "outline", &self.outline, CzmlBoolean::to_json);
        Value::Object(map)
    }
}

/// A 3D model in glTF form.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Model {
    pub show: Option<CzmlBoolean>,
    pub scale: Option<Number>,
    pub minimum_pixel_size: Option<Number>,
    pub gltf: Option<ImageUri>,
}

impl Model {
    pub fn from_json(v: &Value) -> Result<Self, DecodeError> {
        let obj = as_object(v, "model")?;
        Ok(Self {
            show: opt(obj, "show", CzmlBoolean::from_json)?,
            scale: opt(obj, "scale", Number::from_json)?,
            minimum_pixel_size: opt(obj, "minimumPixelSize", Number::from_json)?,
            gltf: opt(obj, "gltf", ImageUri::from_json)?,
        })
    }

    pub fn to_json(&self) -> Value {
        let mut map = Map::new();
        put(&mut map, "show", &self.show, CzmlBoolean::to_json);
        put(&mut map, "scale", &self.scale, Number::to_json);
        put(&mut map, "minimumPixelSize", &self.minimum_pixel_size, Number::to_json);
        put(&mut map, "gltf", &self.gltf, ImageUri::to_json);
        Value::Object(map)
    }
}

/// The scene clock, conventionally carried by the document packet.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Clock {
    pub current_time: Option<String>,
    pub multiplier: Option<f64>,
    pub range: Option<String>,
    pub step: Option<String>,
    pub interval: Option<String>,
}

impl Clock {
    pub fn from_json(v: &Value) -> Result<Self, DecodeError> {
        let obj = as_object(v, "clock")?;
        let get_str = |key: &str| {
            obj.get(key)
                .and_then(|s| s.as_str())
                .map(|s| s.to_string())
        };
        Ok(Self {
            current_time: get_str("currentTime"),
            multiplier: obj.get("multiplier").and_then(|n| n.as_f64()),
            range: get_str("range"),
            step: get_str("step"),
            interval: get_str("interval"),
        })
    }

    pub fn to_json(&self) -> Value {
        fn put_str(map: &mut Map<String, Value>, key: &str, value: &Option<String>) {
            if let Some(s) = value {
                map.insert(key.to_string(), Value::String(s.clone()));
            }
        }
        let mut map = Map::new();
        put_str(&mut map, "interval", &self.interval);
        put_str(&mut map, "currentTime", &self.current_time);
        if let Some(m) = self.multiplier {
            map.insert(
                "multiplier".to_string(),
                serde_json::Number::from_f64(m).map_or(Value::Null, Value::Number),
            );
        }
        put_str(&mut map, "range", &self.range);
        put_str(&mut map, "step", &self.step);
        Value::Object(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn billboard_round_trip() {
        let v = json!({
            "image": "http://x/y.png",
            "scale": 2.0,
            "show": true,
            "pixelOffset": [4.0, -4.0]
        });
        let b = Billboard::from_json(&v).unwrap();
        assert_eq!(b.image, Some(ImageUri::new("http://x/y.png")));
        let out = b.to_json();
        assert_eq!(out["image"], json!("http://x/y.png"));
        assert_eq!(out["scale"], json!(2.0));
        assert_eq!(out["pixelOffset"], json!([4.0, -4.0]));
        assert_eq!(Billboard::from_json(&out).unwrap(), b);
    }

    #[test]
    fn billboard_rejects_non_object() {
        assert!(Billboard::from_json(&json!("nope")).is_err());
    }

    #[test]
    fn label_with_interval_text() {
        let v = json!({
            "text": [
                {"interval": "A/B", "string": "Phase 1"},
                {"interval": "B/C", "string": "Phase 2"}
            ],
            "font": "11pt Lucida Console",
            "style": "FILL"
        });
        let l = Label::from_json(&v).unwrap();
        assert_eq!(l.to_json(), v);
    }

    #[test]
    fn polygon_with_vertex_positions_and_time() {
        let v = json!({
            "positions": {"cartesian": [0.0, 1.0, 2.0, 3.0, 60.0, 4.0, 5.0, 6.0]},
            "fill": true,
            "color": {"rgba": [0, 255, 0, 128]}
        });
        let p = Polygon::from_json(&v).unwrap();
        assert_eq!(p.to_json(), v);
    }

    #[test]
    fn bad_subfield_fails_the_carrier() {
        let v = json!({"scale": 2.0, "show": "not-a-bool"});
        assert!(Billboard::from_json(&v).is_err());
    }

    #[test]
    fn rectangle_extent_round_trip() {
        let v = json!({
            "coordinates": {"wsenDegrees": [-120.0, 30.0, -110.0, 40.0]},
            "fill": false
        });
        let r = Rectangle::from_json(&v).unwrap();
        assert_eq!(r.to_json(), v);
    }

    #[test]
    fn wall_height_lists_round_trip() {
        let v = json!({
            "positions": {"cartographicDegrees": [0.0, -115.0, 37.0, 100000.0, 60.0, -112.0, 40.0, 100000.0]},
            "minimumHeights": [0.0, 0.0],
            "maximumHeights": [100000.0, 100000.0]
        });
        let w = Wall::from_json(&v).unwrap();
        assert_eq!(w.to_json(), v);
    }

    #[test]
    fn clock_round_trip() {
        let v = json!({
            "interval": "2012-08-04T16:00:00Z/2012-08-05T16:00:00Z",
            "currentTime": "2012-08-04T16:00:00Z",
            "multiplier": 60.0,
            "range": "LOOP_STOP",
            "step": "SYSTEM_CLOCK_MULTIPLIER"
        });
        let c = Clock::from_json(&v).unwrap();
        assert_eq!(c.to_json(), v);
    }
}
