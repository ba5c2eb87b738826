//! MPIN strength evaluator - main evaluation logic.

use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::dates::DemographicDates;
use crate::detectors::{
    COMMON_MPIN_REASON, DetectorKind, DetectorResult, common_value_detector,
    date_correlation_detector, keyboard_pattern_detector, repeated_block_detector,
    repeated_digit_detector, sequential_detector,
};
use crate::types::{MpinEvaluation, MpinStrength};

type DetectorFn = fn(&SecretString, &DemographicDates) -> DetectorResult;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum EvaluationError {
    #[error("MPIN must be exactly 4 or 6 digits, got {0}")]
    InvalidLength(usize),
    #[error("MPIN must contain only digits 0-9")]
    NonDigit,
    #[error("internal error in detector {0}")]
    DetectorFailed(&'static str),
    #[cfg(feature = "async")]
    #[error("evaluation was cancelled")]
    Cancelled,
}

/// Validates the MPIN format: all digits, length 4 or 6.
///
/// Exposed so form boundaries can reject malformed input before asking for
/// an evaluation.
pub fn validate_mpin(mpin: &SecretString) -> Result<(), EvaluationError> {
    let pin = mpin.expose_secret();
    if !pin.chars().all(|c| c.is_ascii_digit()) {
        return Err(EvaluationError::NonDigit);
    }
    if pin.len() != 4 && pin.len() != 6 {
        return Err(EvaluationError::InvalidLength(pin.len()));
    }
    Ok(())
}

/// Evaluates MPIN strength and returns a detailed evaluation.
///
/// Runs every detector in fixed order, collects the triggered reasons and
/// derives the final verdict. The input is validated first; detector
/// behavior is only defined for 4- or 6-digit MPINs.
///
/// # Arguments
/// * `mpin` - The MPIN to evaluate
/// * `dates` - Demographic dates checked by the date-correlation detector
/// * `token` - Optional cancellation token (async feature only)
pub fn evaluate_mpin_strength(
    mpin: &SecretString,
    dates: &DemographicDates,
    #[cfg(feature = "async")] token: Option<CancellationToken>,
) -> Result<MpinEvaluation, EvaluationError> {
    validate_mpin(mpin)?;

    // Orchestrator: execute detectors in sequence
    let detectors: [(DetectorKind, DetectorFn); 6] = [
        (DetectorKind::CommonValue, common_value_detector),
        (DetectorKind::RepeatedDigit, repeated_digit_detector),
        (DetectorKind::Sequential, sequential_detector),
        (DetectorKind::RepeatedBlock, repeated_block_detector),
        (DetectorKind::Keyboard, keyboard_pattern_detector),
        (DetectorKind::DateCorrelation, date_correlation_detector),
    ];

    let mut triggered: Vec<DetectorKind> = Vec::new();
    let mut reasons: Vec<String> = Vec::new();

    for (kind, detector) in detectors {
        // Check cancellation before each detector (async only)
        #[cfg(feature = "async")]
        if let Some(ref t) = token {
            if t.is_cancelled() {
                return Err(EvaluationError::Cancelled);
            }
        }

        match detector(mpin, dates) {
            Ok(Some(reason)) => {
                triggered.push(kind);
                if !reasons.contains(&reason) {
                    reasons.push(reason);
                }
            }
            Ok(None) => {
                // Detector passed, continue
            }
            Err(()) => {
                #[cfg(feature = "tracing")]
                tracing::error!("Fatal error in MPIN detector: {}", kind.name());
                return Err(EvaluationError::DetectorFailed(kind.name()));
            }
        }
    }

    let mut strength = classify(&triggered);

    // Post-condition: a common MPIN is always WEAK, its reason first.
    // Idempotent; the detector order already satisfies it in the normal path.
    if triggered.contains(&DetectorKind::CommonValue) {
        strength = MpinStrength::WEAK;
        if reasons.first().map(String::as_str) != Some(COMMON_MPIN_REASON) {
            reasons.retain(|r| r != COMMON_MPIN_REASON);
            reasons.insert(0, COMMON_MPIN_REASON.to_string());
        }
    }

    Ok(MpinEvaluation {
        mpin: mpin.clone(),
        strength,
        reasons,
    })
}

fn classify(triggered: &[DetectorKind]) -> MpinStrength {
    if triggered.is_empty() {
        MpinStrength::STRONG
    } else if triggered.iter().any(|kind| kind.forces_weak()) || triggered.len() >= 2 {
        MpinStrength::WEAK
    } else {
        MpinStrength::MODERATE
    }
}

/// Async version that sends the evaluation result via channel.
#[cfg(feature = "async")]
pub async fn evaluate_mpin_strength_tx(
    mpin: &SecretString,
    dates: &DemographicDates,
    token: CancellationToken,
    tx: mpsc::Sender<Result<MpinEvaluation, EvaluationError>>,
) {
    use std::time::Duration;

    #[cfg(feature = "tracing")]
    tracing::info!("MPIN evaluation is about to start...");

    // Debounce so rapid re-entry in a form does not pile up evaluations
    tokio::time::sleep(Duration::from_millis(300)).await;
    let evaluation = evaluate_mpin_strength(mpin, dates, Some(token));

    if let Err(e) = tx.send(evaluation).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send MPIN evaluation result: {}", e);
        let _ = e;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::collections::HashSet;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn mpin(value: &str) -> SecretString {
        SecretString::new(value.to_string().into())
    }

    fn eval(pin: &str) -> MpinEvaluation {
        eval_with(pin, None, None, None)
    }

    fn eval_with(
        pin: &str,
        dob_self: Option<&str>,
        dob_spouse: Option<&str>,
        anniversary: Option<&str>,
    ) -> MpinEvaluation {
        let dates = DemographicDates::from_strings(dob_self, dob_spouse, anniversary);

        #[cfg(feature = "async")]
        let result = evaluate_mpin_strength(&mpin(pin), &dates, None);

        #[cfg(not(feature = "async"))]
        let result = evaluate_mpin_strength(&mpin(pin), &dates);

        result.unwrap()
    }

    #[test]
    fn test_common_mpins_are_weak_with_common_reason_first() {
        for pin in ["1234", "0000", "1111", "1004", "123456", "000000", "888888"] {
            let evaluation = eval(pin);
            assert_eq!(evaluation.strength, MpinStrength::WEAK, "{}", pin);
            assert_eq!(
                evaluation.reasons.first().map(String::as_str),
                Some(COMMON_MPIN_REASON),
                "{}",
                pin
            );
        }
    }

    #[test]
    fn test_repeated_digits_force_weak() {
        // "8888" and "444444" are not in the common set
        for pin in ["8888", "444444", "7777", "999999"] {
            let evaluation = eval(pin);
            assert_eq!(evaluation.strength, MpinStrength::WEAK, "{}", pin);
        }
    }

    #[test]
    fn test_common_and_sequential_reasons_collected() {
        let evaluation = eval("1234");
        assert_eq!(evaluation.strength, MpinStrength::WEAK);
        assert_eq!(
            evaluation.reasons.first().map(String::as_str),
            Some(COMMON_MPIN_REASON)
        );
        assert!(evaluation.reasons.iter().any(|r| r.contains("sequential")));
    }

    #[test]
    fn test_keyboard_only_is_moderate() {
        let evaluation = eval("6578");
        assert_eq!(evaluation.strength, MpinStrength::MODERATE);
        assert_eq!(evaluation.reasons.len(), 1);
        assert!(evaluation.reasons[0].contains("keyboard"));
    }

    #[test]
    fn test_sequential_only_is_moderate() {
        // "0123" is sequential but in neither lookup table
        let evaluation = eval("0123");
        assert_eq!(evaluation.strength, MpinStrength::MODERATE);
        assert_eq!(evaluation.reasons.len(), 1);
        assert!(evaluation.reasons[0].contains("sequential"));
    }

    #[test]
    fn test_strong_mpins_have_no_reasons() {
        for pin in ["4928", "5238", "135792", "736452"] {
            let evaluation = eval(pin);
            assert_eq!(evaluation.strength, MpinStrength::STRONG, "{}", pin);
            assert!(evaluation.reasons.is_empty(), "{}", pin);
        }
    }

    #[test]
    fn test_repeating_block_alone_is_weak() {
        let evaluation = eval("707070");
        assert_eq!(evaluation.strength, MpinStrength::WEAK);
        assert_eq!(evaluation.reasons.len(), 1);
        assert!(evaluation.reasons[0].contains("repeating digit patterns"));

        let evaluation = eval("2323");
        assert_eq!(evaluation.strength, MpinStrength::WEAK);
        assert_eq!(evaluation.reasons.len(), 1);
    }

    #[test]
    fn test_two_reasons_are_weak() {
        // Sequential run plus exact keyboard pattern, nothing severe
        let evaluation = eval("7890");
        assert_eq!(evaluation.strength, MpinStrength::WEAK);
        assert_eq!(evaluation.reasons.len(), 2);
    }

    #[test]
    fn test_date_match_is_weak() {
        let evaluation = eval_with("0506", Some("2001-06-05"), None, None);
        assert_eq!(evaluation.strength, MpinStrength::WEAK);
        assert_eq!(
            evaluation.reasons,
            vec!["Uses your 2001 date (DDMM, 0506).".to_string()]
        );
    }

    #[test]
    fn test_spouse_and_anniversary_dates_match() {
        let evaluation = eval_with("0201", None, Some("1990-01-02"), None);
        assert_eq!(evaluation.strength, MpinStrength::WEAK);
        assert!(evaluation.reasons[0].contains("1990"));

        // "210721" also contains the descending run "210"
        let evaluation = eval_with("210721", None, None, Some("2021-07-21"));
        assert_eq!(evaluation.strength, MpinStrength::WEAK);
        assert!(evaluation.reasons.iter().any(|r| r.contains("DDMMYY")));
    }

    #[test]
    fn test_year_as_mpin_is_weak() {
        let evaluation = eval_with("1998", Some("1998-01-02"), None, None);
        assert_eq!(evaluation.strength, MpinStrength::WEAK);
        assert_eq!(
            evaluation.reasons,
            vec!["Uses your 1998 date (YYYY, 1998).".to_string()]
        );
    }

    #[test]
    fn test_at_most_one_date_reason() {
        // Both dates match "0506"; only the first may be reported
        let evaluation = eval_with("0506", Some("2001-06-05"), Some("1999-06-05"), None);
        assert_eq!(evaluation.reasons.len(), 1);
        assert!(evaluation.reasons[0].contains("2001"));
    }

    #[test]
    fn test_unparsable_date_is_ignored() {
        let evaluation = eval_with("0506", Some("2001-13-05"), Some("garbage"), None);
        assert_eq!(evaluation.strength, MpinStrength::STRONG);
        assert!(evaluation.reasons.is_empty());
    }

    #[test]
    fn test_matching_date_never_improves_strength() {
        let before = eval("4928");
        assert_eq!(before.strength, MpinStrength::STRONG);

        // Year 4928 is a valid calendar year; the YYYY encoding matches
        let after = eval_with("4928", Some("4928-01-01"), None, None);
        assert_eq!(after.strength, MpinStrength::WEAK);
        assert!(after.reasons[0].contains("YYYY"));
    }

    #[test]
    fn test_no_duplicate_reasons() {
        // Common + repeated digit + block + date all fire here
        let evaluation = eval_with("1111", None, Some("2011-11-11"), None);
        assert_eq!(evaluation.strength, MpinStrength::WEAK);
        let unique: HashSet<&String> = evaluation.reasons.iter().collect();
        assert_eq!(unique.len(), evaluation.reasons.len());
    }

    #[test]
    fn test_idempotent_evaluation() {
        let first = eval_with("0506", Some("2001-06-05"), None, None);
        let second = eval_with("0506", Some("2001-06-05"), None, None);
        assert_eq!(first.strength, second.strength);
        assert_eq!(first.reasons, second.reasons);
    }

    #[test]
    fn test_invalid_length_is_rejected() {
        for (pin, len) in [("123", 3), ("12345", 5), ("1234567", 7), ("", 0)] {
            let dates = DemographicDates::default();

            #[cfg(feature = "async")]
            let result = evaluate_mpin_strength(&mpin(pin), &dates, None);

            #[cfg(not(feature = "async"))]
            let result = evaluate_mpin_strength(&mpin(pin), &dates);

            assert_eq!(result.unwrap_err(), EvaluationError::InvalidLength(len));
        }
    }

    #[test]
    fn test_non_digit_is_rejected() {
        for pin in ["12a4", "abcd", "12 4", "１２３４"] {
            let dates = DemographicDates::default();

            #[cfg(feature = "async")]
            let result = evaluate_mpin_strength(&mpin(pin), &dates, None);

            #[cfg(not(feature = "async"))]
            let result = evaluate_mpin_strength(&mpin(pin), &dates);

            assert_eq!(result.unwrap_err(), EvaluationError::NonDigit, "{}", pin);
        }
    }

    #[test]
    fn test_result_carries_the_mpin() {
        let evaluation = eval("4928");
        assert_eq!(evaluation.mpin.expose_secret(), "4928");
    }

    #[test]
    #[serial]
    fn test_denylist_extension_forces_weak() {
        crate::denylist::reset_denylist_for_testing();
        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        writeln!(temp_file, "860422").expect("Failed to write");

        let _ = crate::denylist::init_denylist_from_path(temp_file.path());

        let still_strong = eval("736452");
        assert_eq!(still_strong.strength, MpinStrength::STRONG);

        let evaluation = eval("860422");
        assert_eq!(evaluation.strength, MpinStrength::WEAK);
        assert_eq!(
            evaluation.reasons.first().map(String::as_str),
            Some(COMMON_MPIN_REASON)
        );

        crate::denylist::reset_denylist_for_testing();
    }
}
