//! Error types for the teleoperation core.
//!
//! The control path itself never faults: out-of-range inputs are clamped,
//! resource conflicts are resolved structurally by cancellation, and the
//! arm's logic conflicts are resolved by a fixed priority order.  The only
//! fallible operation left is configuration validation.  Variants are
//! `Copy` so they pass through the composition root without allocation.

use core::fmt;

/// Configuration is invalid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// A config field failed range validation.
    /// The `&'static str` describes which field and why.
    ValidationFailed(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ValidationFailed(msg) => write!(f, "validation failed: {msg}"),
        }
    }
}
