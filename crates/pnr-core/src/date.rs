//! # Calendar Validation
//!
//! Month/day validation for the birth-date segment, including the
//! coordination-number day transform.
//!
//! ## Coordination numbers
//!
//! Individuals without permanent registration in Sweden receive a
//! coordination number (samordningsnummer) instead of a personnummer: the
//! same digit layout, but with 60 added to the day of birth. Allocation
//! starts at day 1 + 60 = 61, so a raw day of exactly 60 never occurs and
//! is rejected here. Raw days 1–31 validate directly; raw days 61 and up
//! validate as `day - 60` against the month length.

use crate::options::Options;

/// Day of month as decoded from the raw two-digit day field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DecodedDay {
    /// An ordinary day of month, 1–31 as encoded.
    Ordinary(u8),
    /// A coordination-number day; the value is the calendar day after
    /// removing the +60 offset.
    Coordination(u8),
}

impl DecodedDay {
    /// The calendar day of month this decodes to.
    pub(crate) fn calendar_day(self) -> u8 {
        match self {
            Self::Ordinary(day) | Self::Coordination(day) => day,
        }
    }
}

/// Decode the raw day field, applying the coordination-number transform.
///
/// Returns `None` for raw values that can never be a day: 0, 32–60, and —
/// when coordination numbers are disabled in `options` — everything from
/// 61 up. Values that decode but overflow the month (e.g. raw 92 in a
/// 31-day month) are caught by [`validate_date`].
pub(crate) fn decode_day(raw: u8, options: Options) -> Option<DecodedDay> {
    match raw {
        1..=31 => Some(DecodedDay::Ordinary(raw)),
        61..=99 if options.allow_coordination_number => {
            Some(DecodedDay::Coordination(raw - 60))
        }
        _ => None,
    }
}

/// Number of days in `month` of `year`, or `None` for an invalid month.
pub(crate) fn days_in_month(year: i32, month: u8) -> Option<u8> {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => Some(31),
        4 | 6 | 9 | 11 => Some(30),
        2 if is_leap_year(year) => Some(29),
        2 => Some(28),
        _ => None,
    }
}

/// Gregorian leap rule over the resolved calendar year.
///
/// This governs validation only. The `leap_year` flag on a parsed record
/// is a different computation, evaluated on the two-digit year component
/// (see [`crate::century::encoded_year_is_leap`]).
pub(crate) fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Check the decoded day against the month length for the resolved year.
pub(crate) fn validate_date(year: i32, month: u8, day: DecodedDay) -> bool {
    match days_in_month(year, month) {
        Some(limit) => {
            let day = day.calendar_day();
            day >= 1 && day <= limit
        }
        None => false,
    }
}
