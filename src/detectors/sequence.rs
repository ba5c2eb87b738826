//! Sequential-digit detector - ascending or descending runs of three.

use secrecy::{ExposeSecret, SecretString};

use super::DetectorResult;
use crate::dates::DemographicDates;

/// Scans every contiguous 3-digit window for a strict +1 or -1 run.
///
/// Wrap-around ("901") is not sequential: the comparison is arithmetic on
/// digit values, not modular.
pub fn sequential_detector(mpin: &SecretString, _dates: &DemographicDates) -> DetectorResult {
    let digits: Vec<i8> = mpin
        .expose_secret()
        .bytes()
        .map(|b| (b - b'0') as i8)
        .collect();

    let sequential = digits.windows(3).any(|w| {
        let ascending = w[1] == w[0] + 1 && w[2] == w[1] + 1;
        let descending = w[1] == w[0] - 1 && w[2] == w[1] - 1;
        ascending || descending
    });

    if sequential {
        return Ok(Some(
            "It uses sequential digits (e.g., '1234' or '9876').".to_string(),
        ));
    }
    Ok(None)
}
