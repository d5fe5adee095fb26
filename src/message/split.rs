// src/message/split.rs
use smallvec::SmallVec;

use super::boundary::{can_split_after, can_split_before};
use crate::encoding::Encoder;
use crate::error::{Result, SplitError};

/// Inline capacity of the part under construction: one full GSM segment
type PartBuffer = SmallVec<[char; 160]>;

/// Splits `message` into parts of at most `budget` code points each.
///
/// Parts end at the last whitespace or control character (kept for the next
/// part) or punctuation (kept on this part) before the budget runs out. A
/// part is cut mid-word only when it has no such boundary at all.
///
/// Concatenating the returned parts yields `message` again. An empty message
/// produces a single empty part.
///
/// # Errors
///
/// * `NotEncodable` if any character cannot be represented by `encoder`.
/// * `NotSplittable` if a single character costs more than `budget`.
pub fn split_message(message: &[char], encoder: &dyn Encoder, budget: usize) -> Result<Vec<String>> {
    let mut parts = Vec::new();
    let mut part = PartBuffer::new();
    let mut code_points = 0;
    let mut last_split_point: Option<usize> = None;

    let mut idx = 0;
    while idx < message.len() {
        let ch = message[idx];

        code_points += encoder.code_points(ch)?;

        if can_split_before(ch) {
            last_split_point = Some(part.len());
        }

        if code_points > budget {
            if part.is_empty() {
                return Err(SplitError::NotSplittable { budget });
            }

            let split_at = last_split_point.unwrap_or(part.len());

            // hand the characters after the split point back to the scan
            idx -= part.len() - split_at;
            parts.push(part[..split_at].iter().collect());

            part.clear();
            code_points = 0;
            last_split_point = None;

            // `idx` now points at the first character of the next part
            continue;
        }

        part.push(ch);

        if can_split_after(ch) {
            last_split_point = Some(part.len());
        }

        idx += 1;
    }

    parts.push(part.iter().collect());

    Ok(parts)
}
