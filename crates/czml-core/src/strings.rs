//! String-valued properties that may appear as a bare string or as an
//! object with a reference.

use serde_json::{Map, Value};

use crate::error::DecodeError;
use crate::fields::{opt_string, put_string};

/// Decode the `bare-string | {field, reference}` shape shared by the
/// composite string properties. Returns `(value, reference)`.
fn string_or_object(
    v: &Value,
    field: &'static str,
    name: &'static str,
) -> Result<(Option<String>, Option<String>), DecodeError> {
    if let Some(s) = v.as_str() {
        return Ok((Some(s.to_string()), None));
    }
    let obj = v.as_object().ok_or(DecodeError::ShapeMismatch(name))?;
    Ok((opt_string(obj, field), opt_string(obj, "reference")))
}

/// Write the inverse: a bare string when only the value is present,
/// otherwise an object.
fn string_or_object_json(
    value: &Option<String>,
    reference: &Option<String>,
    field: &'static str,
) -> Value {
    match (value, reference) {
        (Some(s), None) => Value::String(s.clone()),
        _ => {
            let mut map = Map::new();
            put_string(&mut map, field, value);
            put_string(&mut map, "reference", reference);
            Value::Object(map)
        }
    }
}

macro_rules! string_property {
    ($(#[$doc:meta])* $type:ident, $field:ident, $wire:literal) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, Eq, Default)]
        pub struct $type {
            pub $field: Option<String>,
            pub reference: Option<String>,
        }

        impl $type {
            pub fn new(value: impl Into<String>) -> Self {
                Self {
                    $field: Some(value.into()),
                    reference: None,
                }
            }

            pub fn from_json(v: &Value) -> Result<Self, DecodeError> {
                let ($field, reference) = string_or_object(v, $wire, $wire)?;
                Ok(Self { $field, reference })
            }

            pub fn to_json(&self) -> Value {
                string_or_object_json(&self.$field, &self.reference, $wire)
            }
        }

        impl From<&str> for $type {
            fn from(value: &str) -> Self {
                Self::new(value)
            }
        }
    };
}

string_property!(
    /// A CSS font specification, e.g. `"11pt Lucida Console"`.
    Font, font, "font"
);
string_property!(
    /// A label style: `FILL`, `OUTLINE` or `FILL_AND_OUTLINE`.
    Style, label_style, "labelStyle"
);
string_property!(
    /// An image URI (a URL or a data URI).
    ImageUri, uri, "uri"
);
string_property!(
    /// Horizontal origin of a billboard or label: `LEFT`, `CENTER`, `RIGHT`.
    HorizontalOrigin, horizontal_origin, "horizontalOrigin"
);
string_property!(
    /// Vertical origin of a billboard or label: `BOTTOM`, `CENTER`, `TOP`.
    VerticalOrigin, vertical_origin, "verticalOrigin"
);
string_property!(
    /// Which portion of a sensor to display: `COMPLETE`,
    /// `BELOW_ELLIPSOID_HORIZON`, `ABOVE_ELLIPSOID_HORIZON`.
    PortionToDisplay, portion_to_display, "portionToDisplay"
);

/// One interval of a time-varying string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringInterval {
    pub interval: Option<String>,
    pub string: String,
}

impl StringInterval {
    fn from_json(v: &Value) -> Result<Self, DecodeError> {
        let obj = v.as_object().ok_or(DecodeError::ShapeMismatch("string"))?;
        let string = obj
            .get("string")
            .and_then(|s| s.as_str())
            .ok_or(DecodeError::ShapeMismatch("string"))?
            .to_string();
        Ok(Self {
            interval: opt_string(obj, "interval"),
            string,
        })
    }

    fn to_json(&self) -> Value {
        let mut map = Map::new();
        put_string(&mut map, "interval", &self.interval);
        map.insert("string".to_string(), Value::String(self.string.clone()));
        Value::Object(map)
    }
}

/// Label text. Besides the bare-string and object forms this also accepts
/// a list of interval-scoped strings.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Text {
    pub string: Option<String>,
    pub reference: Option<String>,
    pub intervals: Option<Vec<StringInterval>>,
}

impl Text {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            string: Some(value.into()),
            ..Self::default()
        }
    }

    pub fn from_json(v: &Value) -> Result<Self, DecodeError> {
        if let Some(s) = v.as_str() {
            return Ok(Text::new(s));
        }
        if let Some(obj) = v.as_object() {
            return Ok(Self {
                string: opt_string(obj, "string"),
                reference: opt_string(obj, "reference"),
                intervals: None,
            });
        }
        if let Some(arr) = v.as_array() {
            let intervals = arr
                .iter()
                .map(StringInterval::from_json)
                .collect::<Result<Vec<_>, _>>()?;
            return Ok(Self {
                intervals: Some(intervals),
                ..Self::default()
            });
        }
        Err(DecodeError::ShapeMismatch("string"))
    }

    pub fn to_json(&self) -> Value {
        if let Some(intervals) = &self.intervals {
            return Value::Array(intervals.iter().map(StringInterval::to_json).collect());
        }
        string_or_object_json(&self.string, &self.reference, "string")
    }
}

impl From<&str> for Text {
    fn from(value: &str) -> Self {
        Text::new(value)
    }
}
