//! Decode error taxonomy for the CZML value codecs.

use serde_json::Value;
use thiserror::Error;

/// Errors produced while decoding a CZML value from its JSON form.
///
/// All of these are recoverable: the packet layer drops the offending
/// property and keeps going.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// A time slot held neither an ISO-8601 string nor a number.
    #[error("invalid time value: expected ISO-8601 string or seconds offset")]
    InvalidTimeValue,
    /// A polymorphic value matched none of its known wire forms.
    #[error("value does not match any `{0}` form")]
    ShapeMismatch(&'static str),
    /// A flat numeric array whose length fits no valid grouping.
    #[error("sample array of length {len} fits neither {arity}-tuples with a leading time tag nor a single bare {arity}-tuple")]
    MalformedSampleArray { len: usize, arity: usize },
    /// A custom-property fragment matched none of the recognized shapes.
    #[error("unrecognized custom property shape: {0}")]
    UnrecognizedCustomPropertyShape(Value),
}
