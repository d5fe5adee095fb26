// src/utils/reference.rs
use byteorder::{ByteOrder, LittleEndian};
use std::hash::Hasher;
use std::time::{SystemTime, UNIX_EPOCH};
use twox_hash::XxHash64;

/// Milliseconds since the Unix epoch, 0 if the clock is before it
pub fn current_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

/// Concatenation reference bytes for a split message.
///
/// Only meant to tell concurrent sends apart, not to be unguessable, so a
/// fast non-cryptographic hash is used. Short references take byte 0, long
/// references bytes 0 and 1 of the little-endian digest.
pub fn message_reference(from: &str, to: &str, first_part: &str, millis: u64) -> [u8; 2] {
    let mut hasher = XxHash64::with_seed(0);
    hasher.write(from.as_bytes());
    hasher.write(to.as_bytes());
    hasher.write(first_part.as_bytes());
    hasher.write(millis.to_string().as_bytes());

    let mut digest = [0u8; 8];
    LittleEndian::write_u64(&mut digest, hasher.finish());

    [digest[0], digest[1]]
}
