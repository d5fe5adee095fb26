// src/message/mod.rs
//! Measuring and splitting message text into code point bounded parts.

mod boundary;
mod fit;
mod punctuation;
mod split;

pub use boundary::{can_split_after, can_split_before};
pub use fit::will_message_fit;
pub use split::split_message;
