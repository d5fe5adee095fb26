// src/encoding/utf16.rs
use super::{Encoder, ENCODER_NAME_UTF16};
use crate::error::Result;

const CODE_POINT_BITS: usize = 16;

/// UTF-16 scheme. Characters outside the Basic Multilingual Plane need a
/// surrogate pair and cost two code points.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Utf16;

impl Encoder for Utf16 {
    fn name(&self) -> &'static str {
        ENCODER_NAME_UTF16
    }

    fn code_point_bits(&self) -> usize {
        CODE_POINT_BITS
    }

    fn code_points(&self, ch: char) -> Result<usize> {
        Ok(ch.len_utf16())
    }
}
