//! Demographic dates supplied alongside an MPIN.

use chrono::NaiveDate;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// The up-to-three personal dates the date-correlation detector checks.
///
/// Checked in field order: own birth date, spouse birth date, anniversary.
/// An absent date is simply skipped.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DemographicDates {
    pub dob_self: Option<NaiveDate>,
    pub dob_spouse: Option<NaiveDate>,
    pub anniversary: Option<NaiveDate>,
}

impl DemographicDates {
    pub fn new(
        dob_self: Option<NaiveDate>,
        dob_spouse: Option<NaiveDate>,
        anniversary: Option<NaiveDate>,
    ) -> Self {
        Self {
            dob_self,
            dob_spouse,
            anniversary,
        }
    }

    /// Builds the set from raw ISO `YYYY-MM-DD` strings.
    ///
    /// A missing or unparsable value is treated as "not provided", never as
    /// an error.
    pub fn from_strings(
        dob_self: Option<&str>,
        dob_spouse: Option<&str>,
        anniversary: Option<&str>,
    ) -> Self {
        Self {
            dob_self: dob_self.and_then(parse_demographic_date),
            dob_spouse: dob_spouse.and_then(parse_demographic_date),
            anniversary: anniversary.and_then(parse_demographic_date),
        }
    }

    /// Dates in detection order: self, spouse, anniversary.
    pub(crate) fn in_check_order(&self) -> [Option<NaiveDate>; 3] {
        [self.dob_self, self.dob_spouse, self.anniversary]
    }
}

fn parse_demographic_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw, DATE_FORMAT).ok()
}
