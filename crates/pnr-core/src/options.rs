//! # Parse Options
//!
//! A single by-value configuration struct with documented defaults,
//! passed to the explicit-clock entry points.

use serde::{Deserialize, Serialize};

/// Configuration for a parse call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Options {
    /// Accept coordination numbers (day encoded with a +60 offset).
    ///
    /// Default `true`. When `false`, any raw day of 61 or more is rejected
    /// outright, regardless of what it would decode to.
    pub allow_coordination_number: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            allow_coordination_number: true,
        }
    }
}
