//! Sequence generation and reporting for fib-report.
//!
//! This crate provides the two stages of a run:
//! - [`Sequence`]: Fixed-length Fibonacci sequence with `i64` wraparound
//! - [`Reporter`]: Writes head, middle and tail windows of a sequence
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │                  Sequence::generate(n)                  │
//! │  - F(0) = 0, F(1) = 1                                   │
//! │  - F(i) = F(i-1) wrapping_add F(i-2)                    │
//! └─────────────────────────────────────────────────────────┘
//!                            │
//!                            ▼
//! ┌─────────────────────────────────────────────────────────┐
//! │                 Reporter<W: Write>                      │
//! │  - Head window        (first 10 terms)                  │
//! │  - Middle window      (terms 100..105)                  │
//! │  - Tail window        (last 5 terms)                    │
//! └─────────────────────────────────────────────────────────┘
//! ```

pub mod report;
pub mod sequence;

pub use report::{EMPTY_SEQUENCE_MESSAGE, Reporter, report};
pub use sequence::{FIRST_WRAPPED_INDEX, Sequence, Term, generate};
