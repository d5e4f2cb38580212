//! Configuration error types
//!
//! A failed match is never an error: matching functions return `None` for
//! that. These errors only report configuration that cannot be used, and
//! they are raised before any matching work starts.

use std::fmt;
use thiserror::Error;

/// Which end of a name a strip pattern applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StripRole {
    Prefix,
    Suffix,
}

impl fmt::Display for StripRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StripRole::Prefix => f.write_str("prefix"),
            StripRole::Suffix => f.write_str("suffix"),
        }
    }
}

/// Errors raised while validating matcher configuration
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MatchError {
    /// An edit cost below zero (or NaN)
    #[error("invalid {operation} cost {cost}: edit costs must be non-negative")]
    NegativeCost { operation: &'static str, cost: f64 },

    /// Caller-supplied regular expression failed to compile
    #[error("invalid {role} pattern: {message}")]
    InvalidPattern { role: StripRole, message: String },
}

/// Result type for configuration-checked operations
pub type MatchResult<T> = Result<T, MatchError>;
