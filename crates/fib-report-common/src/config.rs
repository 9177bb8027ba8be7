//! Configuration structures for fib-report.
//!
//! - [`SequenceConfig`]: How many terms the generator produces
//! - [`ReportLayout`]: Which windows of the sequence the reporter prints

use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::ReportError;

/// Sequence generation settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SequenceConfig {
    /// Number of terms to generate.
    ///
    /// Zero or negative values produce an empty sequence, which the
    /// reporter turns into a single diagnostic line.
    #[serde(default = "defaults::terms")]
    pub terms: i64,
}

impl Default for SequenceConfig {
    fn default() -> Self {
        Self {
            terms: defaults::terms(),
        }
    }
}

/// Windows of the sequence printed by the reporter.
///
/// The defaults print the first 10 terms, terms 100 to 104 and the
/// last 5 terms.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ReportLayout {
    /// Number of leading terms to print.
    #[serde(default = "defaults::head_terms")]
    pub head_terms: usize,

    /// First index of the middle window (inclusive).
    #[serde(default = "defaults::middle_start")]
    pub middle_start: usize,

    /// End of the middle window (exclusive).
    #[serde(default = "defaults::middle_end")]
    pub middle_end: usize,

    /// Number of trailing terms to print.
    #[serde(default = "defaults::tail_terms")]
    pub tail_terms: usize,
}

impl Default for ReportLayout {
    fn default() -> Self {
        Self {
            head_terms: defaults::head_terms(),
            middle_start: defaults::middle_start(),
            middle_end: defaults::middle_end(),
            tail_terms: defaults::tail_terms(),
        }
    }
}

impl ReportLayout {
    /// Check that the window bounds are consistent.
    pub fn validate(&self) -> Result<(), ReportError> {
        if self.middle_end < self.middle_start {
            return Err(ReportError::invalid_config(format!(
                "middle_end ({}) must not precede middle_start ({})",
                self.middle_end, self.middle_start
            )));
        }
        Ok(())
    }

    /// Indices of the head window for a sequence of `len` terms.
    pub fn head_range(&self, len: usize) -> Range<usize> {
        0..len.min(self.head_terms)
    }

    /// Indices of the middle window, or `None` if the sequence does not
    /// reach `middle_start`.
    pub fn middle_range(&self, len: usize) -> Option<Range<usize>> {
        (self.middle_start < len).then(|| self.middle_start..len.min(self.middle_end))
    }

    /// Indices of the tail window, or `None` if the window would start at 0.
    ///
    /// A sequence no longer than `tail_terms` has no tail: the window must
    /// start strictly after index 0.
    pub fn tail_range(&self, len: usize) -> Option<Range<usize>> {
        let start = len.saturating_sub(self.tail_terms);
        (start > 0).then_some(start..len)
    }
}

/// Default value functions for serde.
mod defaults {
    pub const fn terms() -> i64 {
        1000
    }

    pub const fn head_terms() -> usize {
        10
    }

    pub const fn middle_start() -> usize {
        100
    }

    pub const fn middle_end() -> usize {
        105
    }

    pub const fn tail_terms() -> usize {
        5
    }
}
