//! CZML packets, dispatch and documents.
//!
//! CZML describes time-dynamic 3D scenes as a JSON array of packets, one
//! per scene entity. This crate layers the packet property carriers, the
//! reserved-key dispatch table and the lenient document container on top
//! of the value codecs in [`czml_core`].
//!
//! ```
//! use czml::Document;
//!
//! let doc = Document::from_str(
//!     r#"[
//!         {"id": "document", "version": "1.0"},
//!         {"id": "e1", "billboard": {"image": "http://x/y.png", "scale": 2.0}}
//!     ]"#,
//! );
//! assert_eq!(doc.len(), 2);
//! ```

mod field;

pub mod document;
pub mod graphics;
pub mod packet;
pub mod sensors;

pub use czml_core;

pub use document::{document_from_str, Document};
pub use graphics::{
    Billboard, CartographicExtent, Clock, Ellipse, Ellipsoid, Label, Model, Path, Point, Polygon,
    Polyline, Rectangle, RectangleCoordinates, Wall,
};
pub use packet::{CzmlProperty, Packet};
pub use sensors::{ConicSensor, CustomPatternSensor, Fan, RectangularSensor, VectorGraphics};
