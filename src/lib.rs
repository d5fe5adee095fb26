// src/lib.rs
//! # sms-split
//!
//! Splits text messages into SMS sized segments, each carrying a standard
//! concatenation header (UDH) so the receiving handset can reassemble them
//! in order.
//!
//! ## Features
//!
//! - 📏 **Code Point Accurate**: GSM 7-bit extension characters and UTF-16 surrogate pairs cost 2
//! - ✂️ **Word Aware**: Splits at whitespace or after punctuation before cutting a word
//! - 🏷️ **Concatenation Headers**: 8-bit and 16-bit reference forms
//! - 🔍 **Auto-Detection**: GSM 7-bit when possible, UTF-16 otherwise
//! - 🧵 **Stateless**: Encoders and splitters can be shared across threads
//!
//! ## Quick Start
//!
//! ```rust
//! use sms_split::*;
//!
//! fn main() -> Result<()> {
//!     let splitter = Splitter::new();
//!
//!     let message = "word ".repeat(40);
//!     let segments = splitter.split("sender", &["+15550100", "+15550101"], &message)?;
//!
//!     assert_eq!(segments.len(), 2);
//!     for segment in &segments {
//!         assert_eq!(segment.to(), "+15550100 +15550101");
//!         assert_eq!(segment.udh().len(), 6);
//!     }
//!
//!     let rebuilt: String = segments.iter().map(Segment::content).collect();
//!     assert_eq!(rebuilt, message);
//!     Ok(())
//! }
//! ```
//!
//! ### Custom Configuration
//!
//! ```rust
//! use sms_split::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let config = SplitterConfig::default()
//!         .with_encoder(Utf16)
//!         .with_reference(ReferenceForm::Long);
//!     let splitter = Splitter::with_config(config);
//!
//!     let segments = splitter.split("sender", &["recipient"], &"你好".repeat(50))?;
//!     assert_eq!(segments[0].udh().len(), 7);
//!     assert_eq!(segments[0].encoding(), "UTF-16");
//!     Ok(())
//! }
//! ```

// Modules
pub mod error;
pub mod encoding;
pub mod message;
pub mod segment;
pub mod splitter;

mod utils;

// Re-export commonly used types at the crate root for convenience
pub use error::{SplitError, Result};

// Encoding exports
pub use encoding::{
    auto_detect_encoder,
    Encoder,
    Gsm7,
    Utf16,
    ENCODER_NAME_GSM,
    ENCODER_NAME_UTF16,
};

// Message exports
pub use message::{
    split_message,
    will_message_fit,
};

// Segment exports
pub use segment::{
    append_udhs,
    append_udhs_at,
    HeaderLayout,
    ReferenceForm,
    Segment,
};

// Splitter exports
pub use splitter::{
    Splitter,
    SplitterConfig,
    DEFAULT_SMS_BYTES,
};

// Prelude module for glob imports
pub mod prelude {
    //! Convenient imports for common use cases.
    //!
    //! ```rust
    //! use sms_split::prelude::*;
    //! ```

    pub use crate::encoding::{Encoder, Gsm7, Utf16};
    pub use crate::error::{Result, SplitError};
    pub use crate::segment::{ReferenceForm, Segment};
    pub use crate::splitter::{Splitter, SplitterConfig};
}

/// The library version
pub const LIBRARY_VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_constants() {
        assert!(!LIBRARY_VERSION.is_empty());
        assert_eq!(DEFAULT_SMS_BYTES, 140);
    }

    #[test]
    fn test_encoder_constants() {
        assert_eq!(Gsm7.code_point_bits(), 7);
        assert_eq!(Gsm7.name(), ENCODER_NAME_GSM);
        assert_eq!(Utf16.code_point_bits(), 16);
        assert_eq!(Utf16.name(), ENCODER_NAME_UTF16);
    }

    #[test]
    fn test_header_lengths() {
        assert_eq!(ReferenceForm::Short.layout().udh_len, 6);
        assert_eq!(ReferenceForm::Long.layout().udh_len, 7);
    }

    #[test]
    fn test_error_messages() {
        let err = SplitError::NotEncodable { character: '你', encoding: ENCODER_NAME_GSM };
        assert_eq!(err.to_string(), "character '你' cannot be encoded with GSM");

        let err = SplitError::NotSplittable { budget: 0 };
        assert!(err.to_string().starts_with("the message cannot be split"));
    }
}
