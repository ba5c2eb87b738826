//! Common-value detector - checks the MPIN against the curated denylist.

use secrecy::{ExposeSecret, SecretString};

use super::DetectorResult;
use crate::dates::DemographicDates;
use crate::denylist::is_common_mpin;

/// Reason attached to common MPINs. The classifier also uses it to keep the
/// common-MPIN reason first in the final list.
pub const COMMON_MPIN_REASON: &str = "It is a very common and easily guessable MPIN.";

/// Checks if the MPIN is in the common-value set.
///
/// # Returns
/// - `Ok(Some(reason))` if the MPIN is a well-known value
/// - `Ok(None)` otherwise
pub fn common_value_detector(mpin: &SecretString, _dates: &DemographicDates) -> DetectorResult {
    if is_common_mpin(mpin.expose_secret()) {
        return Ok(Some(COMMON_MPIN_REASON.to_string()));
    }
    Ok(None)
}
