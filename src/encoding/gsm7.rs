// src/encoding/gsm7.rs
use super::{Encoder, ENCODER_NAME_GSM};
use crate::error::{Result, SplitError};

const CODE_POINT_BITS: usize = 7;

/// GSM 03.38 default alphabet, in septet order (0x1B escape omitted).
const BASIC_CHARSET: [char; 127] = [
    '@', '£', '$', '¥', 'è', 'é', 'ù', 'ì', 'ò', 'Ç', '\n', 'Ø', 'ø', '\r', 'Å', 'å',
    'Δ', '_', 'Φ', 'Γ', 'Λ', 'Ω', 'Π', 'Ψ', 'Σ', 'Θ', 'Ξ', 'Æ', 'æ', 'ß', 'É',
    ' ', '!', '"', '#', '¤', '%', '&', '\'', '(', ')', '*', '+', ',', '-', '.', '/',
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', ':', ';', '<', '=', '>', '?',
    '¡', 'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O',
    'P', 'Q', 'R', 'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z', 'Ä', 'Ö', 'Ñ', 'Ü', '§',
    '¿', 'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o',
    'p', 'q', 'r', 's', 't', 'u', 'v', 'w', 'x', 'y', 'z', 'ä', 'ö', 'ñ', 'ü', 'à',
];

/// Extension table. Each entry is sent as escape + septet, so costs 2.
const EXTENDED_CHARSET: [char; 10] = ['\u{000C}', '^', '{', '}', '\\', '[', '~', ']', '|', '€'];

/// GSM 7-bit default alphabet with its extension table
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Gsm7;

impl Gsm7 {
    pub fn is_basic(ch: char) -> bool {
        BASIC_CHARSET.contains(&ch)
    }

    pub fn is_extended(ch: char) -> bool {
        EXTENDED_CHARSET.contains(&ch)
    }

    /// Whether `ch` belongs to the basic or extension table
    pub fn contains(ch: char) -> bool {
        Self::is_basic(ch) || Self::is_extended(ch)
    }
}

impl Encoder for Gsm7 {
    fn name(&self) -> &'static str {
        ENCODER_NAME_GSM
    }

    fn code_point_bits(&self) -> usize {
        CODE_POINT_BITS
    }

    fn code_points(&self, ch: char) -> Result<usize> {
        if Self::is_extended(ch) {
            Ok(2)
        } else if Self::is_basic(ch) {
            Ok(1)
        } else {
            Err(SplitError::NotEncodable { character: ch, encoding: ENCODER_NAME_GSM })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables_are_disjoint() {
        for ch in EXTENDED_CHARSET {
            assert!(!Gsm7::is_basic(ch), "{:?} in both tables", ch);
        }
    }

    #[test]
    fn test_basic_charset_costs_one() {
        for ch in BASIC_CHARSET {
            assert_eq!(Gsm7.code_points(ch), Ok(1), "{:?}", ch);
        }
    }

    #[test]
    fn test_extended_charset_costs_two() {
        for ch in EXTENDED_CHARSET {
            assert_eq!(Gsm7.code_points(ch), Ok(2), "{:?}", ch);
        }
    }

    #[test]
    fn test_outside_repertoire_fails() {
        for ch in ['你', '🙂', '\t', 'ç', '`'] {
            assert_eq!(
                Gsm7.code_points(ch),
                Err(SplitError::NotEncodable { character: ch, encoding: "GSM" })
            );
        }
    }
}
