// src/encoding/mod.rs
//! Encoding schemes and their code point accounting.
//!
//! An [`Encoder`] does not produce wire bytes. It only reports how many
//! fixed-width code points a character occupies, which is all the splitter
//! needs to size segments.

mod gsm7;
mod utf16;

pub use gsm7::Gsm7;
pub use utf16::Utf16;

use crate::error::Result;
use std::fmt;

/// Display name of the GSM 7-bit default alphabet
pub const ENCODER_NAME_GSM: &str = "GSM";

/// Display name of the UTF-16 (UCS-2 with surrogates) scheme
pub const ENCODER_NAME_UTF16: &str = "UTF-16";

/// Shared GSM 7-bit instance
pub static GSM7: Gsm7 = Gsm7;

/// Shared UTF-16 instance
pub static UTF16: Utf16 = Utf16;

/// Code point accounting for one character encoding scheme.
///
/// Implementations are stateless and may be shared freely between threads.
pub trait Encoder: fmt::Debug + Send + Sync {
    /// Name recorded on every segment produced with this scheme
    fn name(&self) -> &'static str;

    /// Width of a single code point in bits
    fn code_point_bits(&self) -> usize;

    /// Number of code points `ch` occupies, or `NotEncodable` when the
    /// character is outside this scheme's repertoire.
    fn code_points(&self, ch: char) -> Result<usize>;

    /// Returns true if every character of `message` can be represented.
    fn check_encodability(&self, message: &str) -> bool {
        message.chars().all(|ch| self.code_points(ch).is_ok())
    }

    /// Number of code points that fit in `bytes` bytes of payload
    fn code_points_in(&self, bytes: usize) -> usize {
        bytes * 8 / self.code_point_bits()
    }
}

/// Pick the scheme for a message when the caller did not choose one.
///
/// GSM 7-bit is used when every character is in its repertoire; a single
/// character outside it switches the whole message to UTF-16.
pub fn auto_detect_encoder(message: &str) -> &'static dyn Encoder {
    if message.chars().all(Gsm7::contains) {
        &GSM7
    } else {
        &UTF16
    }
}
