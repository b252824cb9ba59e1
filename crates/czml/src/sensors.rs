//! Sensor volume property carriers (`agi_*` packet keys).

use czml_core::{
    ColorProperty, CzmlBoolean, DecodeError, Directions, Number, PortionToDisplay,
};
use serde_json::{Map, Value};

use crate::field::{as_object, opt, put};

/// A conic sensor volume.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ConicSensor {
    pub show: Option<CzmlBoolean>,
    pub inner_half_angle: Option<Number>,
    pub outer_half_angle: Option<Number>,
    pub minimum_clock_angle: Option<Number>,
    pub maximum_clock_angle: Option<Number>,
    pub radius: Option<Number>,
    pub portion_to_display: Option<PortionToDisplay>,
    pub show_intersection: Option<CzmlBoolean>,
    pub intersection_color: Option<ColorProperty>,
    pub intersection_width: Option<Number>,
}

impl ConicSensor {
    pub fn from_json(v: &Value) -> Result<Self, DecodeError> {
        let obj = as_object(v, "agi_conicSensor")?;
        Ok(Self {
            show: opt(obj, "show", CzmlBoolean::from_json)?,
            inner_half_angle: opt(obj, "innerHalfAngle", Number::from_json)?,
            outer_half_angle: opt(obj, "outerHalfAngle", Number::from_json)?,
            minimum_clock_angle: opt(obj, "minimumClockAngle", Number::from_json)?,
            maximum_clock_angle: opt(obj, "maximumClockAngle", Number::from_json)?,
            radius: opt(obj, "radius", Number::from_json)?,
            portion_to_display: opt(obj, "portionToDisplay", PortionToDisplay::from_json)?,
            show_intersection: opt(obj, "showIntersection", CzmlBoolean::from_json)?,
            intersection_color: opt(obj, "intersectionColor", ColorProperty::from_json)?,
            intersection_width: opt(obj, "intersectionWidth", Number::from_json)?,
        })
    }

    pub fn to_json(&self) -> Value {
        let mut map = Map::new();
        put(&mut map, "show", &self.show, CzmlBoolean::to_json);
        put(&mut map, "innerHalfAngle", &self.inner_half_angle, Number::to_json);
        put(&mut map, "outerHalfAngle", &self.outer_half_angle, Number::to_json);
        put(&mut map, "minimumClockAngle", &self.minimum_clock_angle, Number::to_json);
        put(&mut map, "maximumClockAngle", &self.maximum_clock_angle, Number::to_json);
        put(&mut map, "radius", &self.radius, Number::to_json);
        put(&mut map, "portionToDisplay", &self.portion_to_display, PortionToDisplay::to_json);
        put(&mut map, "showIntersection", &self.show_intersection, CzmlBoolean::to_json);
        put(&mut map, "intersectionColor", &self.intersection_color, ColorProperty::to_json);
        put(&mut map, "intersectionWidth", &self.intersection_width, Number::to_json);
        Value::Object(map)
    }
}

/// A sensor volume with a custom direction pattern.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CustomPatternSensor {
    pub show: Option<CzmlBoolean>,
    pub directions: Option<Directions>,
    pub radius: Option<Number>,
    pub portion_to_display: Option<PortionToDisplay>,
    pub show_intersection: Option<CzmlBoolean>,
    pub intersection_color: Option<ColorProperty>,
    pub intersection_width: Option<Number>,
}

impl CustomPatternSensor {
    pub fn from_json(v: &Value) -> Result<Self, DecodeError> {
        let obj = as_object(v, "agi_customPatternSensor")?;
        Ok(Self {
            show: opt(obj, "show", CzmlBoolean::from_json)?,
            directions: opt(obj, "directions", Directions::from_json)?,
            radius: opt(obj, "radius", Number::from_json)?,
            portion_to_display: opt(obj, "portionToDisplay", PortionToDisplay::from_json)?,
            show_intersection: opt(obj, "showIntersection", CzmlBoolean::from_json)?,
            intersection_color: opt(obj, "intersectionColor", ColorProperty::from_json)?,
            intersection_width: opt(obj, "intersectionWidth", Number::from_json)?,
        })
    }

    pub fn to_json(&self) -> Value {
        let mut map = Map::new();
        put(&mut map, "show", &self.show, CzmlBoolean::to_json);
        put(&mut map, "directions", &self.directions, Directions::to_json);
        put(&mut map, "radius", &self.radius, Number::to_json);
        put(&mut map, "portionToDisplay", &self.portion_to_display, PortionToDisplay::to_json);
        put(&mut map, "showIntersection", &self.show_intersection, CzmlBoolean::to_json);
        put(&mut map, "intersectionColor", &self.intersection_color, ColorProperty::to_json);
        put(&mut map, "intersectionWidth", &self.intersection_width, Number::to_json);
        Value::Object(map)
    }
}

/// A fan: triangles extending outward from the object along a set of
/// directions.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Fan {
    pub show: Option<CzmlBoolean>,
    pub directions: Option<Directions>,
    pub radius: Option<Number>,
    pub per_direction_radius: Option<CzmlBoolean>,
    pub color: Option<ColorProperty>,
    pub fill: Option<CzmlBoolean>,
    pub outline: Option<CzmlBoolean>,
    pub outline_color: Option<ColorProperty>,
}

impl Fan {
    pub fn from_json(v: &Value) -> Result<Self, DecodeError> {
        let obj = as_object(v, "agi_fan")?;
        Ok(Self {
            show: opt(obj, "show", CzmlBoolean::from_json)?,
            directions: opt(obj, "directions", Directions::from_json)?,
            radius: opt(obj, "radius", Number::from_json)?,
            per_direction_radius: opt(obj, "perDirectionRadius", CzmlBoolean::from_json)?,
            color: opt(obj, "color", ColorProperty::from_json)?,
            fill: opt(obj, "fill", CzmlBoolean::from_json)?,
            outline: opt(obj, "outline", CzmlBoolean::from_json)?,
            outline_color: opt(obj, "outlineColor", ColorProperty::from_json)?,
        })
    }

    pub fn to_json(&self) -> Value {
        let mut map = Map::new();
        put(&mut map, "show", &self.show, CzmlBoolean::to_json);
        put(&mut map, "directions", &self.directions, Directions::to_json);
        put(&mut map, "radius", &self.radius, Number::to_json);
        put(&mut map, "perDirectionRadius", &self.per_direction_radius, CzmlBoolean::to_json);
        put(&mut map, "color", &self.color, ColorProperty::to_json);
        put(&mut map, "fill", &self.fill, CzmlBoolean::to_json);
        put(&mut map, "outline", &self.outline, CzmlBoolean::to_json);
        put(&mut map, "outlineColor", &self.outline_color, ColorProperty::to_json);
        Value::Object(map)
    }
}

/// A rectangular pyramid sensor volume.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RectangularSensor {
    pub show: Option<CzmlBoolean>,
    pub x_half_angle: Option<Number>,
    pub y_half_angle: Option<Number>,
    pub radius: Option<Number>,
    pub portion_to_display: Option<PortionToDisplay>,
    pub show_intersection: Option<CzmlBoolean>,
    pub intersection_color: Option<ColorProperty>,
    pub intersection_width: Option<Number>,
}

impl RectangularSensor {
    pub fn from_json(v: &Value) -> Result<Self, DecodeError> {
        let obj = as_object(v, "agi_rectangularSensor")?;
        Ok(Self {
            show: opt(obj, "show", CzmlBoolean::from_json)?,
            x_half_angle: opt(obj, "xHalfAngle", Number::from_json)?,
            y_half_angle: opt(obj, "yHalfAngle", Number::from_json)?,
            radius: opt(obj, "radius", Number::from_json)?,
            portion_to_display: opt(obj, "portionToDisplay", PortionToDisplay::from_json)?,
            show_intersection: opt(obj, "showIntersection", CzmlBoolean::from_json)?,
            intersection_color: opt(obj, "intersectionColor", ColorProperty::from_json)?,
            intersection_width: opt(obj, "intersectionWidth", Number::from_json)?,
        })
    }

    pub fn to_json(&self) -> Value {
        let mut map = Map::new();
        put(&mut map, "show", &self.show, CzmlBoolean::to_json);
        put(&mut map, "xHalfAngle", &self.x_half_angle, Number::to_json);
        put(&mut map, "yHalfAngle", &self.y_half_angle, Number::to_json);
        put(&mut map, "radius", &self.radius, Number::to_json);
        put(&mut map, "portionToDisplay", &self.portion_to_display, PortionToDisplay::to_json);
        put(&mut map, "showIntersection", &self.show_intersection, CzmlBoolean::to_json);
        put(&mut map, "intersectionColor", &self.intersection_color, ColorProperty::to_json);
        put(&mut map, "intersectionWidth", &self.intersection_width, Number::to_json);
        Value::Object(map)
    }
}

/// A graphical vector anchored at the object's position.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct VectorGraphics {
    pub show: Option<CzmlBoolean>,
    pub color: Option<ColorProperty>,
    pub direction: Option<Directions>,
    pub length: Option<Number>,
    pub minimum_length_in_pixels: Option<Number>,
}

impl VectorGraphics {
    pub fn from_json(v: &Value) -> Result<Self, DecodeError> {
        let obj = as_object(v, "agi_vector")?;
        Ok(Self {
            show: opt(obj, "show", CzmlBoolean::from_json)?,
            color: opt(obj, "color", ColorProperty::from_json)?,
            direction: opt(obj, "direction", Directions::from_json)?,
            length: opt(obj, "length", Number::from_json)?,
            minimum_length_in_pixels: opt(obj, "minimumLengthInPixels", Number::from_json)?,
        })
    }

    pub fn to_json(&self) -> Value {
        let mut map = Map::new();
        put(&mut map, "show", &self.show, CzmlBoolean::to_json);
        put(&mut map, "color", &self.color, ColorProperty::to_json);
        put(&mut map, "direction", &self.direction, Directions::to_json);
        put(&mut map, "length", &self.length, Number::to_json);
        put(&mut map, "minimumLengthInPixels", &self.minimum_length_in_pixels, Number::to_json);
        Value::Object(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn conic_sensor_round_trip() {
        let v = json!({
            "show": true,
            "innerHalfAngle": 0.0,
            "outerHalfAngle": 0.5,
            "radius": 1000000.0,
            "portionToDisplay": "COMPLETE",
            "intersectionColor": {"rgba": [255, 255, 0, 255]}
        });
        let s = ConicSensor::from_json(&v).unwrap();
        assert_eq!(s.to_json(), v);
    }

    #[test]
    fn custom_pattern_sensor_directions() {
        let v = json!({
            "directions": {"unitSpherical": [0.0, 1.0, 1.57, 1.0, 3.14, 1.0, 4.71, 1.0]},
            "radius": 500000.0
        });
        let s = CustomPatternSensor::from_json(&v).unwrap();
        assert_eq!(s.to_json(), v);
    }

    #[test]
    fn vector_round_trip() {
        let v = json!({
            "show": true,
            "color": {"rgba": [0, 0, 255, 255]},
            "direction": {"unitCartesian": [1.0, 0.0, 0.0]},
            "length": 10.0
        });
        let g = VectorGraphics::from_json(&v).unwrap();
        assert_eq!(g.to_json(), v);
    }
}
