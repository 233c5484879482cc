//! Error types for value coercion
//!
//! This module defines all error types produced while converting between
//! application values and wire values.
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.
//!
//! Null and blank input are never errors. They convert to `null`.

use std::io;
use thiserror::Error;

/// Result type alias for coercion operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the coercion subsystem
#[derive(Debug, Error)]
pub enum Error {
    /// Non-empty input that cannot be parsed or converted to the target type
    #[error("Invalid format for {target}: {input:?} ({reason})")]
    InvalidFormat {
        /// Target type name (e.g. "Date")
        target: String,
        /// Offending input, rendered for diagnostics
        input: String,
        /// Why the input was rejected
        reason: String,
    },

    /// No coercion rule exists for this input type, or no converter is
    /// registered for the requested field type
    #[error("Unsupported type: no conversion from {actual} to {target}")]
    UnsupportedType {
        /// Target type name
        target: String,
        /// Type name of the rejected input
        actual: String,
    },

    /// Configuration could not be applied (unknown zone, malformed file)
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// I/O error while reading or writing configuration
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl Error {
    /// Build an `InvalidFormat` error
    pub fn invalid_format(
        target: impl Into<String>,
        input: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Error::InvalidFormat {
            target: target.into(),
            input: input.into(),
            reason: reason.into(),
        }
    }

    /// Build an `UnsupportedType` error
    pub fn unsupported_type(target: impl Into<String>, actual: impl Into<String>) -> Self {
        Error::UnsupportedType {
            target: target.into(),
            actual: actual.into(),
        }
    }

    /// Build an `InvalidConfig` error
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Error::InvalidConfig(message.into())
    }

    /// True for `InvalidFormat`
    pub fn is_invalid_format(&self) -> bool {
        matches!(self, Error::InvalidFormat { .. })
    }

    /// True for `UnsupportedType`
    pub fn is_unsupported_type(&self) -> bool {
        matches!(self, Error::UnsupportedType { .. })
    }
}
