//! Error types for configuration boundaries
//!
//! The calculation engine itself is total and never returns an error.
//! Errors only arise when an emission factor table is loaded from outside
//! the crate and fails validation.

use thiserror::Error;

/// Invalid entry in an emission factor table
#[derive(Debug, Error, PartialEq)]
pub enum FactorError {
    #[error("emission factor '{name}' is negative ({value})")]
    Negative { name: &'static str, value: f64 },

    #[error("emission factor '{name}' is not a finite number")]
    NonFinite { name: &'static str },
}
