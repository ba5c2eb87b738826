//! Date-correlation detector - flags MPINs derived from personal dates.

use chrono::{Datelike, NaiveDate};
use secrecy::{ExposeSecret, SecretString};

use super::DetectorResult;
use crate::dates::DemographicDates;

/// Digit encodings a date is rendered into, in check order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum DateEncoding {
    DdMm,
    MmDd,
    YyMm,
    MmYy,
    Yyyy,
    DdMmYy,
    MmDdYy,
    YyMmDd,
    YyyyMm,
    YyyyDd,
    MmYyyy,
    DdYyyy,
}

impl DateEncoding {
    const ALL: [Self; 12] = [
        Self::DdMm,
        Self::MmDd,
        Self::YyMm,
        Self::MmYy,
        Self::Yyyy,
        Self::DdMmYy,
        Self::MmDdYy,
        Self::YyMmDd,
        Self::YyyyMm,
        Self::YyyyDd,
        Self::MmYyyy,
        Self::DdYyyy,
    ];

    fn code(self) -> &'static str {
        match self {
            Self::DdMm => "DDMM",
            Self::MmDd => "MMDD",
            Self::YyMm => "YYMM",
            Self::MmYy => "MMYY",
            Self::Yyyy => "YYYY",
            Self::DdMmYy => "DDMMYY",
            Self::MmDdYy => "MMDDYY",
            Self::YyMmDd => "YYMMDD",
            Self::YyyyMm => "YYYYMM",
            Self::YyyyDd => "YYYYDD",
            Self::MmYyyy => "MMYYYY",
            Self::DdYyyy => "DDYYYY",
        }
    }

    fn render(self, date: NaiveDate) -> String {
        let dd = format!("{:02}", date.day());
        let mm = format!("{:02}", date.month());
        let yy = format!("{:02}", date.year().rem_euclid(100));
        let yyyy = format!("{:04}", date.year());
        match self {
            Self::DdMm => format!("{dd}{mm}"),
            Self::MmDd => format!("{mm}{dd}"),
            Self::YyMm => format!("{yy}{mm}"),
            Self::MmYy => format!("{mm}{yy}"),
            Self::Yyyy => yyyy,
            Self::DdMmYy => format!("{dd}{mm}{yy}"),
            Self::MmDdYy => format!("{mm}{dd}{yy}"),
            Self::YyMmDd => format!("{yy}{mm}{dd}"),
            Self::YyyyMm => format!("{yyyy}{mm}"),
            Self::YyyyDd => format!("{yyyy}{dd}"),
            Self::MmYyyy => format!("{mm}{yyyy}"),
            Self::DdYyyy => format!("{dd}{yyyy}"),
        }
    }
}

/// Compares the MPIN against every same-length digit encoding of each
/// provided date, dates in order self, spouse, anniversary.
///
/// The search stops at the first matching (date, encoding) pair, so at most
/// one date reason is ever produced.
pub fn date_correlation_detector(mpin: &SecretString, dates: &DemographicDates) -> DetectorResult {
    let pin = mpin.expose_secret();

    for date in dates.in_check_order().into_iter().flatten() {
        for encoding in DateEncoding::ALL {
            let digits = encoding.render(date);
            if digits.len() == pin.len() && digits == pin {
                return Ok(Some(format!(
                    "Uses your {} date ({}, {}).",
                    date.year(),
                    encoding.code(),
                    digits
                )));
            }
        }
    }
    Ok(None)
}
