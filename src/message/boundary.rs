// src/message/boundary.rs
use super::punctuation::is_punctuation;

// Letters, numbers, marks and symbols are never boundaries: splitting there
// would cut a word, a number, an accented letter or an emoji.

/// Safe to start a new part with `ch`.
///
/// Control characters and whitespace delimit words, so the part may end just
/// before them.
pub fn can_split_before(ch: char) -> bool {
    ch.is_control() || ch.is_whitespace()
}

/// Safe to end a part with `ch`.
///
/// Punctuation belongs to the word it follows, so it only qualifies here.
pub fn can_split_after(ch: char) -> bool {
    ch.is_control() || ch.is_whitespace() || is_punctuation(ch)
}
