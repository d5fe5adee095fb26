// src/splitter/config.rs
use std::sync::Arc;

use crate::encoding::Encoder;
use crate::segment::ReferenceForm;

/// Payload size of a single SMS in bytes
pub const DEFAULT_SMS_BYTES: usize = 140;

/// Settings for a [`Splitter`](super::Splitter)
#[derive(Debug, Clone)]
pub struct SplitterConfig {
    /// Encoder to size segments with, `None` to auto-detect per message
    pub encoder: Option<Arc<dyn Encoder>>,
    /// Bytes available per segment, concatenation header included
    pub message_bytes: usize,
    pub reference: ReferenceForm,
}

impl Default for SplitterConfig {
    fn default() -> Self {
        SplitterConfig {
            encoder: None,
            message_bytes: DEFAULT_SMS_BYTES,
            reference: ReferenceForm::Short,
        }
    }
}

impl SplitterConfig {
    pub fn with_encoder(mut self, encoder: impl Encoder + 'static) -> Self {
        self.encoder = Some(Arc::new(encoder));
        self
    }

    pub fn with_message_bytes(mut self, message_bytes: usize) -> Self {
        self.message_bytes = message_bytes;
        self
    }

    pub fn with_reference(mut self, reference: ReferenceForm) -> Self {
        self.reference = reference;
        self
    }

    /// Length of the concatenation header that split segments will carry
    pub fn udh_len(&self) -> usize {
        self.reference.layout().udh_len
    }
}
