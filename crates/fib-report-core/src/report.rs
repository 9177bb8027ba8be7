//! Range reporting for generated sequences.
//!
//! The [`Reporter`] writes a head window, a middle window and a tail
//! window of a [`Sequence`] to any [`Write`] sink. Each term is printed as
//! `F(index): value` with the value right-aligned in 20 columns.

use std::io::Write;

use tracing::debug;

use fib_report_common::{ReportError, ReportLayout};

use crate::sequence::{FIRST_WRAPPED_INDEX, Sequence, Term};

/// Line written instead of a report when the sequence is empty.
pub const EMPTY_SEQUENCE_MESSAGE: &str = "Error: term count must be greater than 0.";

/// Writes sequence reports to a sink.
///
/// # Example
///
/// ```
/// use fib_report_core::{Reporter, generate};
///
/// let mut reporter = Reporter::new(Vec::new());
/// reporter.report(&generate(1000))?;
///
/// let output = String::from_utf8(reporter.into_inner()).unwrap();
/// assert!(output.starts_with("--- Fibonacci Sequence Calculation Test (1000 terms) ---"));
/// # Ok::<(), fib_report_common::ReportError>(())
/// ```
pub struct Reporter<W: Write> {
    sink: W,
    layout: ReportLayout,
}

impl<W: Write> Reporter<W> {
    /// Create a reporter using the default layout.
    pub fn new(sink: W) -> Self {
        Self {
            sink,
            layout: ReportLayout::default(),
        }
    }

    /// Create a reporter with a custom layout.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::InvalidConfig`] if the layout's middle window
    /// ends before it starts.
    pub fn with_layout(sink: W, layout: ReportLayout) -> Result<Self, ReportError> {
        layout.validate()?;
        Ok(Self { sink, layout })
    }

    /// Get the layout in use.
    pub fn layout(&self) -> &ReportLayout {
        &self.layout
    }

    /// Consume the reporter and return its sink.
    pub fn into_inner(self) -> W {
        self.sink
    }

    /// Write the report for `seq`.
    ///
    /// An empty sequence produces the single [`EMPTY_SEQUENCE_MESSAGE`]
    /// line and nothing else.
    pub fn report(&mut self, seq: &Sequence) -> Result<(), ReportError> {
        if seq.is_empty() {
            writeln!(self.sink, "{EMPTY_SEQUENCE_MESSAGE}")?;
            self.sink.flush()?;
            return Ok(());
        }

        let len = seq.len();
        debug!(terms = len, "Writing report");

        writeln!(
            self.sink,
            "--- Fibonacci Sequence Calculation Test ({len} terms) ---"
        )?;

        writeln!(self.sink, "\n## First {} Terms:", self.layout.head_terms)?;
        for term in seq.terms(self.layout.head_range(len)) {
            self.write_term(term, "")?;
        }

        writeln!(
            self.sink,
            "\n## Middle Sample (Terms {} to {}):",
            self.layout.middle_start, self.layout.middle_end
        )?;
        match self.layout.middle_range(len) {
            Some(range) => {
                for term in seq.terms(range) {
                    self.write_term(term, "")?;
                }
            }
            None => writeln!(self.sink, "Sequence is too short to show middle sample.")?,
        }

        writeln!(
            self.sink,
            "\n## Last {} Terms (Demonstrating i64 overflow):",
            self.layout.tail_terms
        )?;
        match self.layout.tail_range(len) {
            Some(range) => {
                let note = format!(" (Overflown value from F({FIRST_WRAPPED_INDEX}) onward)");
                for term in seq.terms(range) {
                    self.write_term(term, &note)?;
                }
            }
            None => writeln!(self.sink, "Sequence is too short to show last sample.")?,
        }

        writeln!(self.sink, "\n--- End of Test ---")?;
        self.sink.flush()?;
        Ok(())
    }

    fn write_term(&mut self, term: Term, suffix: &str) -> Result<(), ReportError> {
        writeln!(
            self.sink,
            "{:>4}{}): {:>20}{suffix}",
            "F(", term.index, term.value
        )?;
        Ok(())
    }
}

/// Write the report for `seq` to `sink` using the default layout.
pub fn report<W: Write>(seq: &Sequence, sink: W) -> Result<(), ReportError> {
    Reporter::new(sink).report(seq)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sequence::generate;

    fn render(seq: &Sequence) -> String {
        let mut out = Vec::new();
        report(seq, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_empty_sequence_single_line() {
        let output = render(&generate(0));
        assert_eq!(output, format!("{EMPTY_SEQUENCE_MESSAGE}\n"));
    }

    #[test]
    fn test_term_line_format() {
        let output = render(&generate(10));
        assert!(output.contains("\n  F(0):                    0\n"));
        assert!(output.contains("\n  F(9):                   34\n"));
    }

    #[test]
    fn test_short_sequence_sections() {
        let output = render(&generate(3));
        let expected = "\
--- Fibonacci Sequence Calculation Test (3 terms) ---

## First 10 Terms:
  F(0):                    0
  F(1):                    1
  F(2):                    1

## Middle Sample (Terms 100 to 105):
Sequence is too short to show middle sample.

## Last 5 Terms (Demonstrating i64 overflow):
Sequence is too short to show last sample.

--- End of Test ---
";
        assert_eq!(output, expected);
    }

    #[test]
    fn test_tail_shown_past_five_terms() {
        let output = render(&generate(6));

        assert!(output.contains("  F(1):                    1 (Overflown value from F(93) onward)"));
        assert!(output.contains("  F(5):                    5 (Overflown value from F(93) onward)"));
        assert!(!output.contains("too short to show last sample"));
    }

    #[test]
    fn test_custom_layout() {
        let layout = ReportLayout {
            head_terms: 2,
            middle_start: 3,
            middle_end: 5,
            tail_terms: 1,
        };
        let mut reporter = Reporter::with_layout(Vec::new(), layout.clone()).unwrap();
        assert_eq!(reporter.layout(), &layout);
        reporter.report(&generate(8)).unwrap();
        let output = String::from_utf8(reporter.into_inner()).unwrap();

        assert!(output.contains("## First 2 Terms:"));
        assert!(output.contains("## Middle Sample (Terms 3 to 5):\n  F(3):                    2\n  F(4):                    3\n"));
        assert!(output.contains("## Last 1 Terms"));
        assert!(output.contains("  F(7):                   13 (Overflown"));
        assert!(!output.contains("F(2):"));
    }

    #[test]
    fn test_with_layout_rejects_invalid() {
        let layout = ReportLayout {
            middle_start: 10,
            middle_end: 0,
            ..Default::default()
        };

        let result = Reporter::with_layout(Vec::new(), layout);
        assert!(matches!(result, Err(ReportError::InvalidConfig { .. })));
    }
}
