//! # Input Sanitization
//!
//! Turns caller-supplied input into a fixed-width digit sequence plus the
//! detected separator, rejecting everything else.
//!
//! ## Accepted shapes
//!
//! Exactly two input shapes exist: text and signed 64-bit integers.
//! Integers are rendered to their base-10 text form before sanitization,
//! which means an integer can never carry a leading zero — a short-form
//! number starting with `0` only validates as text.
//!
//! The separator (`-` or `+`) may appear at most once; a second occurrence
//! is treated as any other stray character and fails the parse. The `+`
//! separator is recorded because it changes century inference.

use serde::{Deserialize, Serialize};

use crate::error::PnrError;

const LENGTH_WITHOUT_CENTURY: usize = 10;
const LENGTH_WITH_CENTURY: usize = 12;

/// Caller-supplied input: text or an integer rendered as base-10 text.
///
/// No other shapes are accepted. Construct via the `From` impls:
///
/// ```
/// use pnr_core::NumericInput;
///
/// let a = NumericInput::from("19850709-9805");
/// let b = NumericInput::from(198507099805_i64);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum NumericInput {
    /// Textual input, possibly containing one separator character.
    Text(String),
    /// Integer input; converted to its base-10 textual form first.
    Integer(i64),
}

impl From<&str> for NumericInput {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for NumericInput {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for NumericInput {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

/// Sanitized digit sequence: 10 or 12 digits, separator stripped.
///
/// Built fresh for each parse and consumed by the record constructor;
/// the only constructor is [`DigitSequence::sanitize`], so a sequence in
/// hand always has a valid length and digit range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct DigitSequence {
    digits: Vec<u8>,
    has_plus: bool,
}

impl DigitSequence {
    /// Sanitize raw input into a digit sequence.
    ///
    /// Strips at most one `+` or `-`, rejects any other non-digit
    /// character, and requires exactly 10 or 12 remaining digits.
    pub(crate) fn sanitize(input: &NumericInput) -> Result<Self, PnrError> {
        let text = match input {
            NumericInput::Text(s) => s.clone(),
            // A negative sign is not a separator; reject it before it can
            // be mistaken for one.
            NumericInput::Integer(i) if *i < 0 => {
                return Err(PnrError::InvalidPersonalNumber)
            }
            NumericInput::Integer(i) => i.to_string(),
        };

        let mut digits = Vec::with_capacity(LENGTH_WITH_CENTURY);
        let mut separator = None;

        for c in text.chars() {
            match c {
                '0'..='9' => digits.push(c as u8 - b'0'),
                '+' | '-' if separator.is_none() => separator = Some(c),
                _ => return Err(PnrError::InvalidPersonalNumber),
            }
        }

        if digits.len() != LENGTH_WITHOUT_CENTURY && digits.len() != LENGTH_WITH_CENTURY {
            return Err(PnrError::InvalidPersonalNumber);
        }

        Ok(Self {
            digits,
            has_plus: separator == Some('+'),
        })
    }

    /// The sanitized digits, each in `0..=9`.
    pub(crate) fn digits(&self) -> &[u8] {
        &self.digits
    }

    /// True when the sequence includes explicit century digits.
    pub(crate) fn has_century(&self) -> bool {
        self.digits.len() == LENGTH_WITH_CENTURY
    }

    /// True when the input carried the `+` separator.
    pub(crate) fn has_plus(&self) -> bool {
        self.has_plus
    }
}
