// src/splitter/sms_splitter.rs
use std::sync::Arc;
use tracing::debug;

use super::config::SplitterConfig;
use crate::encoding::{auto_detect_encoder, Encoder};
use crate::error::Result;
use crate::message::{split_message, will_message_fit};
use crate::segment::{append_udhs, ReferenceForm, Segment};

/// Splits messages into segments with correctly sized content and UDHs
#[derive(Debug, Clone, Default)]
pub struct Splitter {
    config: SplitterConfig,
}

impl Splitter {
    /// Splitter with 140 byte segments, short references and auto-detection
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: SplitterConfig) -> Self {
        Splitter { config }
    }

    pub fn config(&self) -> &SplitterConfig {
        &self.config
    }

    pub fn set_encoder(&mut self, encoder: impl Encoder + 'static) {
        self.config.encoder = Some(Arc::new(encoder));
    }

    /// Go back to choosing the encoder from each message's content
    pub fn clear_encoder(&mut self) {
        self.config.encoder = None;
    }

    pub fn set_message_bytes(&mut self, message_bytes: usize) {
        self.config.message_bytes = message_bytes;
    }

    pub fn set_short_reference(&mut self, short_reference: bool) {
        self.config.reference = ReferenceForm::from_short(short_reference);
    }

    /// Whether `message` can be represented by the configured encoder, or by
    /// the one auto-detection would pick.
    pub fn check_encodability(&self, message: &str) -> bool {
        self.resolve_encoder(message).check_encodability(message)
    }

    fn resolve_encoder<'a>(&'a self, message: &str) -> &'a dyn Encoder {
        match &self.config.encoder {
            Some(encoder) => encoder.as_ref(),
            None => auto_detect_encoder(message),
        }
    }

    /// Splits `message` into segments addressed from `from` to every entry
    /// of `to`.
    ///
    /// Messages that fit in one segment come back as a single segment without
    /// a UDH. Otherwise every segment carries a concatenation header and the
    /// content budget shrinks by the header length.
    ///
    /// # Errors
    ///
    /// * `NotEncodable` if the message has characters the encoder cannot represent.
    /// * `NotSplittable` if the per-segment budget cannot hold a single character.
    /// * `TooManySegments` if the message needs more than 255 segments.
    pub fn split(&self, from: &str, to: &[impl AsRef<str>], message: &str) -> Result<Vec<Segment>> {
        let encoder = self.resolve_encoder(message);
        let chars: Vec<char> = message.chars().collect();
        let receivers = to.iter().map(|r| r.as_ref()).collect::<Vec<&str>>().join(" ");

        let single_budget = encoder.code_points_in(self.config.message_bytes);
        debug!(
            encoder = encoder.name(),
            chars = chars.len(),
            single_budget,
            "splitting message"
        );

        if will_message_fit(&chars, encoder, single_budget)? {
            return Ok(vec![Segment::new(from, receivers, message, encoder.name())]);
        }

        let multi_budget = encoder.code_points_in(self.config.message_bytes.saturating_sub(self.config.udh_len()));
        let parts = split_message(&chars, encoder, multi_budget)?;
        debug!(parts = parts.len(), multi_budget, "message split");

        let segments = parts
            .into_iter()
            .map(|part| Segment::new(from, receivers.as_str(), part, encoder.name()))
            .collect();

        append_udhs(segments, self.config.reference)
    }
}
