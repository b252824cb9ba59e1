//! Packets and the reserved-key dispatch table.
//!
//! A packet is one JSON object describing a scene entity. Each reserved
//! key maps to one property decoder through a static ordered table;
//! unknown keys are dropped on decode and never reappear on encode.

use czml_core::{
    Availability, CustomProperties, CzmlCartesian, CzmlPositions, DecodeError, Orientation,
};
use serde_json::{Map, Value};
use tracing::warn;

use crate::graphics::{
    Billboard, Clock, Ellipse, Ellipsoid, Label, Model, Path, Point, Polygon, Polyline, Rectangle,
    Wall,
};
use crate::sensors::{ConicSensor, CustomPatternSensor, Fan, RectangularSensor, VectorGraphics};

/// One named, independently decodable facet of a packet.
#[derive(Debug, Clone, PartialEq)]
pub enum CzmlProperty {
    Availability(Availability),
    Position(CzmlPositions),
    Billboard(Billboard),
    Orientation(Orientation),
    Point(Point),
    Label(Label),
    Path(Path),
    Polyline(Polyline),
    Polygon(Polygon),
    Ellipsoid(Ellipsoid),
    ViewFrom(CzmlCartesian),
    Rectangle(Rectangle),
    Wall(Wall),
    Model(Model),
    Ellipse(Ellipse),
    Clock(Clock),
    ConicSensor(ConicSensor),
    CustomPatternSensor(CustomPatternSensor),
    Fan(Fan),
    RectangularSensor(RectangularSensor),
    Vector(VectorGraphics),
    Custom(CustomProperties),
}

impl CzmlProperty {
    /// The reserved packet key this property is stored under.
    pub fn key(&self) -> &'static str {
        match self {
            CzmlProperty::Availability(_) => "availability",
            CzmlProperty::Position(_) => "position",
            CzmlProperty::Billboard(_) => "billboard",
            CzmlProperty::Orientation(_) => "orientation",
            CzmlProperty::Point(_) => "point",
            CzmlProperty::Label(_) => "label",
            CzmlProperty::Path(_) => "path",
            CzmlProperty::Polyline(_) => "polyline",
            CzmlProperty::Polygon(_) => "polygon",
            CzmlProperty::Ellipsoid(_) => "ellipsoid",
            CzmlProperty::ViewFrom(_) => "viewFrom",
            CzmlProperty::Rectangle(_) => "rectangle",
            CzmlProperty::Wall(_) => "wall",
            CzmlProperty::Model(_) => "model",
            CzmlProperty::Ellipse(_) => "ellipse",
            CzmlProperty::Clock(_) => "clock",
            CzmlProperty::ConicSensor(_) => "agi_conicSensor",
            CzmlProperty::CustomPatternSensor(_) => "agi_customPatternSensor",
            CzmlProperty::Fan(_) => "agi_fan",
            CzmlProperty::RectangularSensor(_) => "agi_rectangularSensor",
            CzmlProperty::Vector(_) => "agi_vector",
            CzmlProperty::Custom(_) => "properties",
        }
    }

    pub fn to_json(&self) -> Value {
        match self {
            CzmlProperty::Availability(p) => p.to_json(),
            CzmlProperty::Position(p) => p.to_json(),
            CzmlProperty::Billboard(p) => p.to_json(),
            CzmlProperty::Orientation(p) => p.to_json(),
            CzmlProperty::Point(p) => p.to_json(),
            CzmlProperty::Label(p) => p.to_json(),
            CzmlProperty::Path(p) => p.to_json(),
            CzmlProperty::Polyline(p) => p.to_json(),
            CzmlProperty::Polygon(p) => p.to_json(),
            CzmlProperty::Ellipsoid(p) => p.to_json(),
            CzmlProperty::ViewFrom(p) => p.to_json(),
            CzmlProperty::Rectangle(p) => p.to_json(),
            CzmlProperty::Wall(p) => p.to_json(),
            CzmlProperty::Model(p) => p.to_json(),
            CzmlProperty::Ellipse(p) => p.to_json(),
            CzmlProperty::Clock(p) => p.to_json(),
            CzmlProperty::ConicSensor(p) => p.to_json(),
            CzmlProperty::CustomPatternSensor(p) => p.to_json(),
            CzmlProperty::Fan(p) => p.to_json(),
            CzmlProperty::RectangularSensor(p) => p.to_json(),
            CzmlProperty::Vector(p) => p.to_json(),
            CzmlProperty::Custom(p) => p.to_json(),
        }
    }
}

type PropertyDecoder = fn(&Value) -> Result<CzmlProperty, DecodeError>;

/// The reserved-key dispatch table, in canonical write order. Adding a
/// property kind means adding one entry here plus one enum variant.
pub(crate) const PROPERTY_TABLE: &[(&str, PropertyDecoder)] = &[
    ("availability", |v| {
        Availability::from_json(v).map(CzmlProperty::Availability)
    }),
    ("position", |v| {
        CzmlPositions::from_json(v).map(CzmlProperty::Position)
    }),
    ("billboard", |v| {
        Billboard::from_json(v).map(CzmlProperty::Billboard)
    }),
    ("orientation", |v| {
        Orientation::from_json(v).map(CzmlProperty::Orientation)
    }),
    ("point", |v| Point::from_json(v).map(CzmlProperty::Point)),
    ("label", |v| Label::from_json(v).map(CzmlProperty::Label)),
    ("path", |v| Path::from_json(v).map(CzmlProperty::Path)),
    ("polyline", |v| {
        Polyline::from_json(v).map(CzmlProperty::Polyline)
    }),
    ("polygon", |v| {
        Polygon::from_json(v).map(CzmlProperty::Polygon)
    }),
    ("ellipsoid", |v| {
        Ellipsoid::from_json(v).map(CzmlProperty::Ellipsoid)
    }),
    ("viewFrom", |v| {
        CzmlCartesian::from_json(v).map(CzmlProperty::ViewFrom)
    }),
    ("rectangle", |v| {
        Rectangle::from_json(v).map(CzmlProperty::Rectangle)
    }),
    ("wall", |v| Wall::from_json(v).map(CzmlProperty::Wall)),
    ("model", |v| Model::from_json(v).map(CzmlProperty::Model)),
    ("ellipse", |v| {
        Ellipse::from_json(v).map(CzmlProperty::Ellipse)
    }),
    ("clock", |v| Clock::from_json(v).map(CzmlProperty::Clock)),
    ("agi_conicSensor", |v| {
        ConicSensor::from_json(v).map(CzmlProperty::ConicSensor)
    }),
    ("agi_customPatternSensor", |v| {
        CustomPatternSensor::from_json(v).map(CzmlProperty::CustomPatternSensor)
    }),
    ("agi_fan", |v| Fan::from_json(v).map(CzmlProperty::Fan)),
    ("agi_rectangularSensor", |v| {
        RectangularSensor::from_json(v).map(CzmlProperty::RectangularSensor)
    }),
    ("agi_vector", |v| {
        VectorGraphics::from_json(v).map(CzmlProperty::Vector)
    }),
    ("properties", |v| {
        CustomProperties::from_json(v).map(CzmlProperty::Custom)
    }),
];

/// One scene entity: identity fields plus at most one property per kind.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Packet {
    pub id: Option<String>,
    pub name: Option<String>,
    pub parent: Option<String>,
    pub description: Option<String>,
    pub version: Option<String>,
    properties: Vec<CzmlProperty>,
}

impl Packet {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            ..Self::default()
        }
    }

    /// The conventional first packet of a document.
    pub fn document(id: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            version: Some(version.into()),
            ..Self::default()
        }
    }

    /// Add a property, replacing any existing property of the same kind.
    pub fn set_property(&mut self, property: CzmlProperty) {
        if let Some(slot) = self
            .properties
            .iter_mut()
            .find(|p| p.key() == property.key())
        {
            *slot = property;
        } else {
            self.properties.push(property);
        }
    }

    /// Builder-style variant of [`Packet::set_property`].
    pub fn with_property(mut self, property: CzmlProperty) -> Self {
        self.set_property(property);
        self
    }

    pub fn properties(&self) -> &[CzmlProperty] {
        &self.properties
    }

    pub fn property(&self, key: &str) -> Option<&CzmlProperty> {
        self.properties.iter().find(|p| p.key() == key)
    }

    /// Decode a packet from its JSON object.
    ///
    /// Reserved keys whose values fail to decode are logged and dropped;
    /// unknown keys are ignored. Only a non-object input is an error.
    pub fn from_json(v: &Value) -> Result<Self, DecodeError> {
        let obj = v.as_object().ok_or(DecodeError::ShapeMismatch("packet"))?;
        let get_str = |key: &str| {
            obj.get(key)
                .and_then(|s| s.as_str())
                .map(|s| s.to_string())
        };
        let mut packet = Packet {
            id: get_str("id"),
            name: get_str("name"),
            parent: get_str("parent"),
            description: get_str("description"),
            version: get_str("version"),
            properties: Vec::new(),
        };
        for (key, decode) in PROPERTY_TABLE {
            let Some(value) = obj.get(*key) else {
                continue;
            };
            match decode(value) {
                Ok(property) => packet.properties.push(property),
                Err(err) => {
                    warn!(
                        "dropping property `{}` of packet {:?}: {}",
                        key, packet.id, err
                    );
                }
            }
        }
        Ok(packet)
    }

    /// Encode to a JSON object: identity fields first, then properties in
    /// dispatch-table order regardless of how they were added.
    pub fn to_json(&self) -> Value {
        let mut map = Map::new();
        let mut put_str = |key: &str, value: &Option<String>| {
            if let Some(s) = value {
                map.insert(key.to_string(), Value::String(s.clone()));
            }
        };
        put_str("id", &self.id);
        put_str("name", &self.name);
        put_str("parent", &self.parent);
        put_str("description", &self.description);
        put_str("version", &self.version);
        for (key, _) in PROPERTY_TABLE {
            if let Some(property) = self.property(key) {
                map.insert(key.to_string(), property.to_json());
            }
        }
        Value::Object(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn unknown_keys_are_dropped() {
        let v = json!({
            "id": "e1",
            "billboard": {"image": "http://x/y.png", "scale": 2.0},
            "unknownKey": 123
        });
        let packet = Packet::from_json(&v).unwrap();
        assert_eq!(packet.properties().len(), 1);
        let out = packet.to_json();
        assert!(out.get("unknownKey").is_none());
        assert!(out.get("billboard").is_some());
    }

    #[test]
    fn broken_property_is_dropped_others_kept() {
        let v = json!({
            "id": "e1",
            "position": {"cartesian": [1.0, 2.0]},
            "point": {"pixelSize": 10.0}
        });
        let packet = Packet::from_json(&v).unwrap();
        assert!(packet.property("position").is_none());
        assert!(packet.property("point").is_some());
    }

    #[test]
    fn encode_orders_identity_then_table() {
        let v = json!({
            "point": {"pixelSize": 10.0},
            "availability": "A/B",
            "name": "n",
            "id": "e1"
        });
        let packet = Packet::from_json(&v).unwrap();
        let out = packet.to_json();
        let keys: Vec<&str> = out.as_object().unwrap().keys().map(|k| k.as_str()).collect();
        assert_eq!(keys, ["id", "name", "availability", "point"]);
    }

    #[test]
    fn set_property_replaces_same_kind() {
        let mut packet = Packet::new("e1");
        packet.set_property(CzmlProperty::Availability(Availability::Single("A/B".into())));
        packet.set_property(CzmlProperty::Availability(Availability::Single("C/D".into())));
        assert_eq!(packet.properties().len(), 1);
        assert_eq!(
            packet.property("availability"),
            Some(&CzmlProperty::Availability(Availability::Single("C/D".into())))
        );
    }

    #[test]
    fn non_object_packet_is_an_error() {
        assert!(Packet::from_json(&json!([1, 2, 3])).is_err());
        assert!(Packet::from_json(&json!("packet")).is_err());
    }
}
