//! Polymorphic value codecs for the CZML wire format.
//!
//! Almost every CZML property is shape-shifting: the same property may
//! arrive as a bare scalar, a flat array, or an object carrying interval
//! and interpolation metadata, and flat numeric arrays are grouped
//! positionally by length to recover time-tagged samples. This crate
//! models each wire shape as an explicit sum type or struct of options
//! and hand-writes the `serde_json::Value` codecs.
//!
//! Everything here is pure: no I/O, no logging, no shared state. Decoders
//! return [`DecodeError`]; leniency policies live in the packet layer of
//! the `czml` crate.

mod fields;

pub mod boolean;
pub mod cartesian;
pub mod color;
pub mod custom;
pub mod error;
pub mod number;
pub mod position;
pub mod samples;
pub mod strings;
pub mod time;

pub use boolean::{BooleanInterval, CzmlBoolean};
pub use cartesian::{
    Cartesian, Cartesian2, Cartographic, CzmlCartesian, CzmlCartesian2, UnitQuaternion, Velocity,
};
pub use color::{ColorProperty, CzmlColor, Rgba, Rgbaf};
pub use custom::{CustomProperties, CustomValue, IntervalValue};
pub use error::DecodeError;
pub use number::{CzmlNumber, Number, NumberDetail};
pub use position::{CzmlPosition, CzmlPositions, Directions, Orientation, Positions};
pub use samples::{decode_samples, encode_samples, Sample, SampleTuple};
pub use strings::{
    Font, HorizontalOrigin, ImageUri, PortionToDisplay, StringInterval, Style, Text,
    VerticalOrigin,
};
pub use time::{Availability, TimeValue};
