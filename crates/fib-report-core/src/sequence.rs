//! Fibonacci sequence generation with fixed-width wraparound.
//!
//! Terms are `i64` and every addition wraps on overflow. F(92) is the
//! largest term that fits; from F(93) onward the stored values are the
//! low 64 bits of the true Fibonacci numbers, read as two's complement.

use std::ops::Range;

use tracing::debug;

/// Index of the first term whose true value does not fit in an `i64`.
pub const FIRST_WRAPPED_INDEX: usize = 93;

/// A single term of the sequence, `F(index) = value`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Term {
    /// Position in the sequence, starting at 0.
    pub index: usize,
    /// Stored value, possibly wrapped.
    pub value: i64,
}

/// An immutable, generated Fibonacci sequence.
///
/// Holds `F(0)` through `F(len - 1)`, where each term past the first two
/// is the wrapping sum of the two before it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sequence {
    terms: Vec<i64>,
}

impl Sequence {
    /// Generate the first `n` terms.
    ///
    /// Returns an empty sequence when `n <= 0`, or when `n` terms cannot be
    /// allocated on this platform.
    pub fn generate(n: i64) -> Self {
        if n <= 0 {
            debug!(requested = n, "Non-positive term count, sequence is empty");
            return Self::default();
        }

        let Ok(len) = usize::try_from(n) else {
            debug!(requested = n, "Term count exceeds addressable size");
            return Self::default();
        };

        let mut terms: Vec<i64> = Vec::new();
        if let Err(e) = terms.try_reserve_exact(len) {
            debug!(requested = n, error = %e, "Cannot allocate requested terms");
            return Self::default();
        }
        terms.push(0);
        if len >= 2 {
            terms.push(1);
        }
        for i in 2..len {
            terms.push(terms[i - 1].wrapping_add(terms[i - 2]));
        }

        debug!(terms = len, "Sequence generated");

        Self { terms }
    }

    /// Number of terms.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Returns `true` if the sequence has no terms.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Get `F(index)`, if generated.
    pub fn get(&self, index: usize) -> Option<i64> {
        self.terms.get(index).copied()
    }

    /// All terms as a slice.
    pub fn as_slice(&self) -> &[i64] {
        &self.terms
    }

    /// Iterate the terms whose indices fall in `range`.
    ///
    /// Indices past the end of the sequence are skipped.
    pub fn terms(&self, range: Range<usize>) -> impl Iterator<Item = Term> + '_ {
        let end = range.end.min(self.terms.len());
        let start = range.start.min(end);
        self.terms[start..end]
            .iter()
            .enumerate()
            .map(move |(offset, &value)| Term {
                index: start + offset,
                value,
            })
    }
}

/// Generate the first `n` terms of the sequence.
///
/// Shorthand for [`Sequence::generate`].
pub fn generate(n: i64) -> Sequence {
    Sequence::generate(n)
}
