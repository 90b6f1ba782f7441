//! # Error Types
//!
//! Defines the single error type for the personnummer engine. All errors
//! use `thiserror` for derive-based `Display` and `Error` implementations.
//!
//! ## Design
//!
//! A personal identity number is either fully valid or it is not — there is
//! no partially-valid state a caller could act on, and no failure that a
//! retry with the same input could repair. The individual checks (character
//! set, length, calendar date, checksum) therefore collapse into one error
//! kind at the public boundary, while remaining separable as private
//! functions inside the crate for testing.

use thiserror::Error;

/// Top-level error type for `pnr-core`.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PnrError {
    /// The input is not a valid Swedish personal identity number.
    ///
    /// Covers every failure class: non-digit characters, a digit count
    /// other than 10 or 12, an impossible calendar date, a rejected
    /// coordination-number day, and a failed checksum.
    #[error("invalid swedish personal identity number")]
    InvalidPersonalNumber,
}
