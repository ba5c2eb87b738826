//! MPIN weakness detectors
//!
//! Each detector checks the MPIN (and, for the date detector, the supplied
//! demographic dates) for one class of guessable pattern.

mod common;
mod date;
mod keyboard;
mod repetition;
mod sequence;

pub use common::{COMMON_MPIN_REASON, common_value_detector};
pub use date::date_correlation_detector;
pub use keyboard::keyboard_pattern_detector;
pub use repetition::{repeated_block_detector, repeated_digit_detector};
pub use sequence::sequential_detector;

/// Result type for detector functions.
/// - `Ok(Some(reason))` - Detector triggered with reason
/// - `Ok(None)` - Detector passed
/// - `Err(())` - Fatal error during detection
pub type DetectorResult = Result<Option<String>, ()>;

/// Identifies a detector in the fixed evaluation order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DetectorKind {
    CommonValue,
    RepeatedDigit,
    Sequential,
    RepeatedBlock,
    Keyboard,
    DateCorrelation,
}

impl DetectorKind {
    pub fn name(self) -> &'static str {
        match self {
            Self::CommonValue => "common-value",
            Self::RepeatedDigit => "repeated-digit",
            Self::Sequential => "sequential",
            Self::RepeatedBlock => "repeated-block",
            Self::Keyboard => "keyboard",
            Self::DateCorrelation => "date-correlation",
        }
    }

    /// Detectors whose hit alone settles the verdict as WEAK.
    pub fn forces_weak(self) -> bool {
        matches!(
            self,
            Self::CommonValue | Self::RepeatedDigit | Self::RepeatedBlock | Self::DateCorrelation
        )
    }
}
