//! The document container: an ordered sequence of packets.
//!
//! Parsing is deliberately lenient. Property failures are swallowed per
//! packet, packet failures per document, and a top-level value that is
//! not an array yields an empty document with a logged diagnostic — no
//! error ever crosses the document boundary.

use serde_json::Value;
use tracing::warn;

use crate::packet::Packet;

/// An ordered, append/remove-only collection of packets.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Document {
    packets: Vec<Packet>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_packets(packets: Vec<Packet>) -> Self {
        Self { packets }
    }

    pub fn add(&mut self, packet: Packet) {
        self.packets.push(packet);
    }

    /// Remove the packet at `index`, if it exists.
    pub fn remove(&mut self, index: usize) -> Option<Packet> {
        if index < self.packets.len() {
            Some(self.packets.remove(index))
        } else {
            None
        }
    }

    pub fn packets(&self) -> &[Packet] {
        &self.packets
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Packet> {
        self.packets.iter()
    }

    pub fn len(&self) -> usize {
        self.packets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.packets.is_empty()
    }

    /// Parse a document from a JSON value.
    ///
    /// Elements that are not objects are dropped with a warning; a
    /// top-level value that is not an array yields an empty document.
    pub fn from_json(v: &Value) -> Self {
        let Some(arr) = v.as_array() else {
            warn!("CZML document is not a JSON array; producing an empty document");
            return Self::new();
        };
        let mut doc = Self::new();
        for (index, element) in arr.iter().enumerate() {
            match Packet::from_json(element) {
                Ok(packet) => doc.packets.push(packet),
                Err(err) => warn!("dropping packet at index {}: {}", index, err),
            }
        }
        doc
    }

    /// Parse a document from JSON text. Unparseable text yields an empty
    /// document with a logged diagnostic.
    pub fn from_str(text: &str) -> Self {
        match serde_json::from_str::<Value>(text) {
            Ok(v) => Self::from_json(&v),
            Err(err) => {
                warn!("CZML document text is not valid JSON: {}", err);
                Self::new()
            }
        }
    }

    pub fn to_json(&self) -> Value {
        Value::Array(self.packets.iter().map(Packet::to_json).collect())
    }

    pub fn to_json_string(&self) -> String {
        serde_json::to_string_pretty(&self.to_json()).unwrap_or_default()
    }

    /// Write the document as a sequence of event frames for event-stream
    /// consumption, one packet per frame.
    ///
    /// The output is not valid JSON and has no corresponding parser.
    pub fn to_event_stream(&self) -> String {
        let mut out = String::from("[\n");
        for packet in &self.packets {
            out.push_str("event: czml\ndata: ");
            out.push_str(
                &serde_json::to_string_pretty(&packet.to_json()).unwrap_or_default(),
            );
            out.push('\n');
        }
        out.push(']');
        out
    }
}

impl<'a> IntoIterator for &'a Document {
    type Item = &'a Packet;
    type IntoIter = std::slice::Iter<'a, Packet>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Parse CZML text into a document, leniently.
pub fn document_from_str(text: &str) -> Document {
    Document::from_str(text)
}
