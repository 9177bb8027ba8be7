//! Error types for fib-report.
//!
//! Generating a sequence cannot fail. The only errors come from writing
//! the report to its sink and from inconsistent report layouts.

use std::io;

use thiserror::Error;

/// Errors raised while configuring or writing a report.
#[derive(Error, Debug)]
pub enum ReportError {
    /// Writing to the output sink failed.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Invalid configuration was provided.
    #[error("Invalid configuration: {reason}")]
    InvalidConfig {
        /// Description of the configuration error.
        reason: String,
    },
}

impl ReportError {
    /// Create a new `InvalidConfig` error.
    pub fn invalid_config(reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            reason: reason.into(),
        }
    }

    /// Returns `true` if the output sink rejected a write.
    pub fn is_io(&self) -> bool {
        matches!(self, Self::Io(_))
    }
}
