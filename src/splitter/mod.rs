// src/splitter/mod.rs
mod config;
mod sms_splitter;

pub use config::{SplitterConfig, DEFAULT_SMS_BYTES};
pub use sms_splitter::Splitter;
