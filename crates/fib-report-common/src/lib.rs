//! Common types and errors for fib-report.
//!
//! This crate provides shared functionality used across the fib-report workspace:
//! - Error types using `thiserror`
//! - Configuration structures with serde defaults
//! - TOML configuration file loading

pub mod config;
pub mod config_file;
pub mod error;

pub use config::{ReportLayout, SequenceConfig};
pub use config_file::{ConfigFile, ConfigFileError};
pub use error::ReportError;
