//! Repetition detectors - single repeated digit and repeating digit blocks.

use secrecy::{ExposeSecret, SecretString};

use super::DetectorResult;
use crate::dates::DemographicDates;

/// Checks if the MPIN consists of a single repeated digit (e.g. "1111",
/// "999999").
///
/// # Returns
/// - `Ok(Some(reason))` if all digits are identical
/// - `Ok(None)` otherwise
pub fn repeated_digit_detector(mpin: &SecretString, _dates: &DemographicDates) -> DetectorResult {
    let pin = mpin.expose_secret();
    let mut bytes = pin.bytes();
    if let Some(first) = bytes.next() {
        if bytes.all(|b| b == first) {
            return Ok(Some(
                "It consists of repeating digits (e.g., '1111').".to_string(),
            ));
        }
    }
    Ok(None)
}

/// Checks if the MPIN splits into identical blocks.
///
/// Even length >= 4: first half equals second half ("1212"). Length
/// divisible by 3 and >= 6: three identical blocks ("707070"). Either split
/// matching contributes the single repeating-pattern reason.
pub fn repeated_block_detector(mpin: &SecretString, _dates: &DemographicDates) -> DetectorResult {
    let pin = mpin.expose_secret();
    let len = pin.len();

    let mut repeated = false;
    if len % 2 == 0 && len >= 4 {
        let half = len / 2;
        repeated |= pin[..half] == pin[half..];
    }
    if len % 3 == 0 && len >= 6 {
        let third = len / 3;
        repeated |=
            pin[..third] == pin[third..2 * third] && pin[third..2 * third] == pin[2 * third..];
    }

    if repeated {
        return Ok(Some(
            "It uses repeating digit patterns (e.g., '1212', '123123').".to_string(),
        ));
    }
    Ok(None)
}
