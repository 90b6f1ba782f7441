//! # pnr-core — Swedish Personal Identity Numbers
//!
//! Parsing, validation, and formatting of Swedish personal identity
//! numbers (personnummer) and coordination numbers (samordningsnummer).
//! The engine is pure arithmetic over the digit string: sanitization,
//! century inference, calendar validation, the alternating-weight mod-10
//! checksum, and the derived attributes (age, sex, coordination flag, the
//! two canonical text forms). No registry lookups, no I/O.
//!
//! ## Key Design Principles
//!
//! 1. **Validation by construction.** [`Personnummer`] has private fields
//!    and a single construction path through the parse pipeline. An
//!    instance can never represent an invalid number, and the type
//!    deliberately does not implement `Deserialize` — deserialization
//!    would be a second, unvalidated construction path.
//!
//! 2. **Typed input boundary.** [`NumericInput`] admits exactly text and
//!    `i64`; everything else is unrepresentable rather than stringified.
//!
//! 3. **Explicit clocks.** Operations that need "now" (century inference
//!    for short-form input, age) come in `_at` variants taking a
//!    `DateTime<Utc>`. The plain variants read the system clock at the
//!    call site; there is no process-wide clock to override.
//!
//! 4. **One error.** Every failure class — character set, length,
//!    calendar, checksum — surfaces as
//!    [`PnrError::InvalidPersonalNumber`]. A number is either fully valid
//!    or not; no caller decision branches on the failure cause.
//!
//! ## Crate Policy
//!
//! - No dependencies on other workspace crates (leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//!
//! ## Example
//!
//! ```
//! use pnr_core::Personnummer;
//!
//! let pnr = Personnummer::parse("198507099805")?;
//! assert_eq!(pnr.format(false), "850709-9805");
//! assert!(pnr.is_female());
//! assert!(!pnr.is_coordination_number());
//!
//! assert!(Personnummer::valid("198507099805"));
//! assert!(!Personnummer::valid("198507099806"));
//! # Ok::<(), pnr_core::PnrError>(())
//! ```

mod century;
mod date;
mod luhn;

pub mod error;
pub mod input;
pub mod options;
pub mod personnummer;

// Re-export primary types for ergonomic imports.
pub use error::PnrError;
pub use input::NumericInput;
pub use options::Options;
pub use personnummer::Personnummer;
