// src/error.rs
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SplitError {
    #[error("character {character:?} cannot be encoded with {encoding}")]
    NotEncodable { character: char, encoding: &'static str },

    #[error("the message cannot be split with the given encoder and message length ({budget} code points per segment)")]
    NotSplittable { budget: usize },

    #[error("message split into {0} segments, concatenation headers hold at most 255")]
    TooManySegments(usize),
}

impl SplitError {
    /// True for the `NotEncodable` variant, regardless of payload
    pub fn is_not_encodable(&self) -> bool {
        matches!(self, SplitError::NotEncodable { .. })
    }

    /// True for the `NotSplittable` variant, regardless of payload
    pub fn is_not_splittable(&self) -> bool {
        matches!(self, SplitError::NotSplittable { .. })
    }
}

pub type Result<T> = std::result::Result<T, SplitError>;
