// src/segment/mod.rs
mod header;

pub use header::{append_udhs, append_udhs_at, HeaderLayout, ReferenceForm};

use bytes::Bytes;

use crate::encoding::Encoder;
use crate::error::Result;

/// One transport-sized part of a message, with its concatenation header.
///
/// The header (UDH) is empty when the message was not split.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    from: String,
    to: String,
    content: String,
    encoding: &'static str,
    udh: Bytes,
}

impl Segment {
    /// Segment without a header. Pass a batch of these to
    /// [`append_udhs`] to stamp them as parts of one message.
    pub fn new(
        from: impl Into<String>,
        to: impl Into<String>,
        content: impl Into<String>,
        encoding: &'static str,
    ) -> Self {
        Segment {
            from: from.into(),
            to: to.into(),
            content: content.into(),
            encoding,
            udh: Bytes::new(),
        }
    }

    /// Sender identifier
    pub fn from(&self) -> &str {
        &self.from
    }

    /// Space separated recipient list
    pub fn to(&self) -> &str {
        &self.to
    }

    /// The slice of the original message carried by this segment
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Name of the encoder the segment was sized for
    pub fn encoding(&self) -> &'static str {
        self.encoding
    }

    /// Raw concatenation header bytes
    pub fn udh(&self) -> &Bytes {
        &self.udh
    }

    pub fn has_udh(&self) -> bool {
        !self.udh.is_empty()
    }

    /// 1-based position within the split message, if it was split
    pub fn sequence_number(&self) -> Option<u8> {
        self.udh.last().copied()
    }

    /// Code points the content occupies under `encoder`
    pub fn code_points(&self, encoder: &dyn Encoder) -> Result<usize> {
        self.content.chars().map(|ch| encoder.code_points(ch)).sum()
    }
}
