//! Configuration file structures for fib-report.
//!
//! This module defines the TOML configuration file layout:
//! - [`ConfigFile`]: Top-level configuration file structure
//! - [`ConfigFileError`]: Failures while reading or validating it

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{ReportError, ReportLayout, SequenceConfig};

/// Top-level configuration file structure.
///
/// # Example
///
/// ```toml
/// [sequence]
/// terms = 1000
///
/// [report]
/// head_terms = 10
/// middle_start = 100
/// middle_end = 105
/// tail_terms = 5
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ConfigFile {
    /// Sequence generation settings.
    #[serde(default)]
    pub sequence: SequenceConfig,

    /// Report window settings.
    #[serde(default)]
    pub report: ReportLayout,
}

impl ConfigFile {
    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed, or describes
    /// an inconsistent report layout.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigFileError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| ConfigFileError::Io {
            path: path.as_ref().display().to_string(),
            source: e,
        })?;

        Self::from_toml(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self, ConfigFileError> {
        let config: Self = toml::from_str(content).map_err(|e| ConfigFileError::Parse {
            message: e.to_string(),
        })?;

        config.report.validate()?;
        Ok(config)
    }
}

/// Configuration file errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigFileError {
    /// Failed to read configuration file.
    #[error("Failed to read config file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse configuration file.
    #[error("Failed to parse config file: {message}")]
    Parse { message: String },

    /// The file parsed but its values are inconsistent.
    #[error(transparent)]
    Invalid(#[from] ReportError),
}
