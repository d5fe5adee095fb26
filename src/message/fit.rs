// src/message/fit.rs
use crate::encoding::Encoder;
use crate::error::Result;

/// Checks whether `message` fits in `budget` code points without splitting.
///
/// Stops at the first character that pushes the total over budget. Fails
/// with `NotEncodable` on the first character the encoder cannot represent,
/// as long as the budget was not exceeded before reaching it.
pub fn will_message_fit(message: &[char], encoder: &dyn Encoder, budget: usize) -> Result<bool> {
    let mut code_points = 0;

    for &ch in message {
        code_points += encoder.code_points(ch)?;

        if code_points > budget {
            return Ok(false);
        }
    }
    Ok(true)
}
