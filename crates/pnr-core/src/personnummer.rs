//! # The Validated Record
//!
//! `Personnummer` is the parsed, validated value object. The only way to
//! obtain one is through the parse pipeline, so an instance in hand has
//! already passed sanitization, calendar validation, and the checksum — it
//! can never represent an invalid number. For the same reason the type
//! does not implement `Deserialize`: a record materialized from serialized
//! data would sidestep validation.
//!
//! ## Pipeline
//!
//! raw input → sanitize → century resolution → calendar validation →
//! checksum → record construction. Calendar validation runs before the
//! checksum; both failure classes surface as the one public error.
//!
//! ## Clock handling
//!
//! Century inference for short-form input and the age derivation both need
//! a reference instant. Every such operation has an `_at` form taking an
//! explicit `DateTime<Utc>`; the plain forms read the system clock at the
//! call site. There is no global clock state.

use chrono::{DateTime, Datelike, NaiveDate, NaiveTime, Utc};

use crate::century;
use crate::date::{self, DecodedDay};
use crate::error::PnrError;
use crate::input::{DigitSequence, NumericInput};
use crate::luhn;
use crate::options::Options;

/// Milliseconds in a 365.25-day year.
///
/// The age derivation divides by this fixed value and floors, rather than
/// comparing calendar dates. Near a leap-year boundary or the exact
/// anniversary the result can differ by a day from a birthday-exact
/// calculation; existing records depend on this arithmetic, so it is
/// preserved as-is.
const MILLIS_PER_YEAR: f64 = 3.15576e10;

/// A validated Swedish personal identity number.
///
/// ```
/// use pnr_core::Personnummer;
///
/// let pnr = Personnummer::parse("19850709-9805")?;
/// assert_eq!(pnr.format(true), "198507099805");
/// assert!(pnr.is_female());
/// # Ok::<(), pnr_core::PnrError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Personnummer {
    century: u8,
    year: u8,
    full_year: u16,
    month: u8,
    /// Day exactly as encoded; carries the +60 offset for coordination numbers.
    day: u8,
    serial: u16,
    check: u8,
    separator: char,
    birth_date: NaiveDate,
    coordination_number: bool,
    leap_year: bool,
}

impl Personnummer {
    /// Parse with default [`Options`] against the system clock.
    ///
    /// # Errors
    ///
    /// Returns [`PnrError::InvalidPersonalNumber`] for any malformed,
    /// impossible, or checksum-failing input.
    pub fn parse(input: impl Into<NumericInput>) -> Result<Self, PnrError> {
        Self::parse_at(input, Options::default(), Utc::now())
    }

    /// Parse with explicit options and reference instant.
    ///
    /// The reference instant drives century inference for 10-digit input
    /// and the age from which the short-format separator is derived. Two
    /// parses of the same input against the same instant yield identical
    /// records.
    ///
    /// # Errors
    ///
    /// Returns [`PnrError::InvalidPersonalNumber`] for any malformed,
    /// impossible, or checksum-failing input.
    pub fn parse_at(
        input: impl Into<NumericInput>,
        options: Options,
        now: DateTime<Utc>,
    ) -> Result<Self, PnrError> {
        let input = input.into();
        let sequence = DigitSequence::sanitize(&input)?;
        let digits = sequence.digits();

        // Split off the century, leaving the 10 checksum-bearing digits.
        let (resolved, rest) = if sequence.has_century() {
            let century = digits[0] * 10 + digits[1];
            let year = digits[2] * 10 + digits[3];
            (century::resolve_long(century, year), &digits[2..])
        } else {
            let year = digits[0] * 10 + digits[1];
            (
                century::resolve_short(year, sequence.has_plus(), now.year()),
                digits,
            )
        };

        let month = rest[2] * 10 + rest[3];
        let day = rest[4] * 10 + rest[5];
        let serial =
            u16::from(rest[6]) * 100 + u16::from(rest[7]) * 10 + u16::from(rest[8]);
        let check = rest[9];

        let decoded =
            date::decode_day(day, options).ok_or(PnrError::InvalidPersonalNumber)?;

        if !date::validate_date(i32::from(resolved.full_year), month, decoded) {
            return Err(PnrError::InvalidPersonalNumber);
        }

        if !luhn::valid_checksum(rest) {
            return Err(PnrError::InvalidPersonalNumber);
        }

        let birth_date = NaiveDate::from_ymd_opt(
            i32::from(resolved.full_year),
            u32::from(month),
            u32::from(decoded.calendar_day()),
        )
        .ok_or(PnrError::InvalidPersonalNumber)?;

        let age = age_between(birth_date, now);
        let separator = if age >= 100 { '+' } else { '-' };

        Ok(Self {
            century: resolved.century,
            year: resolved.year,
            full_year: resolved.full_year,
            month,
            day,
            serial,
            check,
            separator,
            birth_date,
            coordination_number: matches!(decoded, DecodedDay::Coordination(_)),
            leap_year: century::encoded_year_is_leap(resolved.year),
        })
    }

    /// True when the input parses with default [`Options`] against the
    /// system clock.
    pub fn valid(input: impl Into<NumericInput>) -> bool {
        Self::parse(input).is_ok()
    }

    /// True when the input parses with the given options and reference
    /// instant.
    pub fn valid_at(
        input: impl Into<NumericInput>,
        options: Options,
        now: DateTime<Utc>,
    ) -> bool {
        Self::parse_at(input, options, now).is_ok()
    }

    /// Render one of the two canonical forms.
    ///
    /// Long: `CCYYMMDDNNNC`, 12 digits, no separator. Short:
    /// `YYMMDD<sep>NNNC`, where the separator is `+` when the subject's
    /// age had reached 100 at parse time and `-` otherwise.
    pub fn format(&self, long: bool) -> String {
        if long {
            format!(
                "{:02}{:02}{:02}{:02}{:03}{}",
                self.century, self.year, self.month, self.day, self.serial, self.check
            )
        } else {
            format!(
                "{:02}{:02}{:02}{}{:03}{}",
                self.year, self.month, self.day, self.separator, self.serial, self.check
            )
        }
    }

    /// Age in whole years against the system clock.
    pub fn age(&self) -> i64 {
        self.age_at(Utc::now())
    }

    /// Age in whole years at the given instant: the elapsed time since
    /// midnight UTC of the birth date, divided by a fixed 365.25-day year
    /// and floored. Negative for birth dates after `now`.
    pub fn age_at(&self, now: DateTime<Utc>) -> i64 {
        age_between(self.birth_date, now)
    }

    /// True when the third serial digit is odd.
    pub fn is_male(&self) -> bool {
        self.serial % 2 == 1
    }

    /// True when the third serial digit is even.
    pub fn is_female(&self) -> bool {
        !self.is_male()
    }

    /// True when the number is a coordination number (day encoded +60).
    pub fn is_coordination_number(&self) -> bool {
        self.coordination_number
    }

    /// The leap flag as exposed on parsed records: computed from the
    /// two-digit year component, not the resolved calendar year.
    pub fn is_leap_year(&self) -> bool {
        self.leap_year
    }

    /// Leading two digits of the birth year.
    pub fn century(&self) -> u8 {
        self.century
    }

    /// Trailing two digits of the birth year.
    pub fn year(&self) -> u8 {
        self.year
    }

    /// The resolved four-digit birth year.
    pub fn full_year(&self) -> u16 {
        self.full_year
    }

    /// Birth month, 1–12.
    pub fn month(&self) -> u8 {
        self.month
    }

    /// Day exactly as encoded; for coordination numbers this still carries
    /// the +60 offset. See [`Personnummer::birth_date`] for the calendar day.
    pub fn day(&self) -> u8 {
        self.day
    }

    /// The three-digit serial segment, 0–999.
    pub fn serial(&self) -> u16 {
        self.serial
    }

    /// The final checksum digit.
    pub fn check_digit(&self) -> u8 {
        self.check
    }

    /// Short-format separator: `+` when the subject's age had reached 100
    /// at parse time, `-` otherwise.
    pub fn separator(&self) -> char {
        self.separator
    }

    /// The de-offset calendar birth date.
    pub fn birth_date(&self) -> NaiveDate {
        self.birth_date
    }
}

impl std::fmt::Display for Personnummer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.format(false))
    }
}

/// Whole years between midnight UTC of `birth_date` and `now`, using the
/// fixed 365.25-day divisor.
fn age_between(birth_date: NaiveDate, now: DateTime<Utc>) -> i64 {
    let birth = birth_date.and_time(NaiveTime::MIN).and_utc();
    let millis = now.signed_duration_since(birth).num_milliseconds();
    (millis as f64 / MILLIS_PER_YEAR).floor() as i64
}


#[cfg(test)]
mod proptests {
    use super::*;
    use chrono::TimeZone;
    use proptest::prelude::*;

    fn reference() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2019, 7, 13, 0, 0, 0).unwrap()
    }

    /// Substitution table mirrored from the checksum module, used to
    /// complete generated digit prefixes.
    fn check_digit_for(digits: &[u8]) -> u8 {
        const DOUBLED: [u32; 10] = [0, 2, 4, 6, 8, 1, 3, 5, 7, 9];
        // With the check digit appended the slice is 10 long, so even
        // indices carry weight 2.
        let sum: u32 = digits
            .iter()
            .enumerate()
            .map(|(i, &d)| {
                if i % 2 == 0 {
                    DOUBLED[d as usize]
                } else {
                    u32::from(d)
                }
            })
            .sum();
        ((10 - sum % 10) % 10) as u8
    }

    /// Generate the 12-digit long form of a structurally valid number.
    ///
    /// Years are drawn from both sides of the century horizon but skip
    /// `reference_year - 100` itself: a 99-year-old born late in that year
    /// shares a short form with a newborn, so the short form is genuinely
    /// lossy there (covered by a dedicated unit test instead).
    fn valid_long_form() -> impl Strategy<Value = String> {
        let year = prop_oneof![1830u16..=1918, 1920u16..=2019];
        (year, 1u8..=12, 1u8..=28, 0u16..=999).prop_map(
            |(year, month, day, serial)| {
                let yy = (year % 100) as u8;
                let digits = [
                    yy / 10,
                    yy % 10,
                    month / 10,
                    month % 10,
                    day / 10,
                    day % 10,
                    (serial / 100) as u8,
                    ((serial / 10) % 10) as u8,
                    (serial % 10) as u8,
                ];
                let check = check_digit_for(&digits);
                format!("{year:04}{month:02}{day:02}{serial:03}{check}")
            },
        )
    }

    proptest! {
        /// Long-form output reproduces valid long-form input exactly.
        #[test]
        fn long_format_round_trips(input in valid_long_form()) {
            let pnr = Personnummer::parse_at(
                input.as_str(),
                Options::default(),
                reference(),
            );
            prop_assert!(pnr.is_ok(), "rejected {input}");
            prop_assert_eq!(pnr.unwrap().format(true), input);
        }

        /// The short form re-parses to the same record under the same
        /// reference instant.
        #[test]
        fn short_format_round_trips(input in valid_long_form()) {
            let pnr = Personnummer::parse_at(
                input.as_str(),
                Options::default(),
                reference(),
            )
            .unwrap();
            let reparsed = Personnummer::parse_at(
                pnr.format(false).as_str(),
                Options::default(),
                reference(),
            );
            prop_assert!(reparsed.is_ok(), "rejected {}", pnr.format(false));
            prop_assert_eq!(reparsed.unwrap(), pnr);
        }

        /// Input containing a letter never parses.
        #[test]
        fn garbage_never_parses(
            input in "[0-9]{0,6}[a-zA-Z][0-9]{0,6}",
        ) {
            prop_assert!(Personnummer::parse_at(
                input.as_str(),
                Options::default(),
                reference(),
            )
            .is_err());
        }
    }
}
