//! Core types for MPIN evaluation results.

use secrecy::SecretString;
use std::fmt;

/// Final verdict for an evaluated MPIN.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MpinStrength {
    STRONG,
    MODERATE,
    WEAK,
}

impl fmt::Display for MpinStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::STRONG => "STRONG",
            Self::MODERATE => "MODERATE",
            Self::WEAK => "WEAK",
        };
        f.write_str(label)
    }
}

/// Outcome of a single MPIN evaluation.
///
/// `reasons` is ordered by detection order; it is empty exactly when the
/// strength is [`MpinStrength::STRONG`], and the common-MPIN reason is
/// always the first entry when present.
#[derive(Clone, Debug)]
pub struct MpinEvaluation {
    /// The evaluated MPIN, still secret-wrapped so it stays out of logs.
    pub mpin: SecretString,
    pub strength: MpinStrength,
    pub reasons: Vec<String>,
}
