//! Keyboard-pattern detector - digit sequences that are easy to type on a
//! numeric keypad.

use std::collections::HashSet;
use std::sync::LazyLock;

use secrecy::{ExposeSecret, SecretString};

use super::DetectorResult;
use crate::dates::DemographicDates;

/// Common keypad sequences: row runs, column swipes, year-like prefixes,
/// alternating taps and pair-swapped runs.
static KEYBOARD_PATTERNS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    HashSet::from([
        // ascending / descending runs
        "1234", "2345", "3456", "4567", "5678", "6789", "7890",
        "4321", "5432", "6543", "7654", "8765", "9876", "0987",
        // keypad columns read top to bottom
        "1470", "2580", "3690",
        // year-like prefixes users reach for
        "1999", "2000", "2001",
        // alternating and mirrored taps
        "1010", "1212", "1313", "0101", "1001", "1100", "2200", "3300",
        // pair-swapped runs
        "2143", "4365", "6578",
        // longer runs
        "12345", "67890",
        "123456", "234567", "345678", "456789", "567890",
        "654321", "765432", "876543", "987654", "098765",
    ])
});

/// Checks the MPIN against the keypad-pattern table.
///
/// Triggers when the MPIN exactly equals a pattern, or contains any strictly
/// shorter pattern as a substring. Short patterns matching inside unrelated
/// longer MPINs count as a genuine signal.
pub fn keyboard_pattern_detector(mpin: &SecretString, _dates: &DemographicDates) -> DetectorResult {
    let pin = mpin.expose_secret();

    let exact = KEYBOARD_PATTERNS.contains(pin);
    let partial = KEYBOARD_PATTERNS
        .iter()
        .any(|pattern| pattern.len() < pin.len() && pin.contains(pattern));

    if exact || partial {
        return Ok(Some(
            "It matches common keyboard patterns (e.g., '2580', '1470').".to_string(),
        ));
    }
    Ok(None)
}
