//! Table generation and fixed-width rendering.
//!
//! The sequence and the grid are computed, never stored between invocations.
//! All arithmetic is `f64` regardless of the kind the inputs were parsed
//! with, so the step count comes from floating-point division and integral
//! inputs past 2^53 keep the widened values' rounding.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::range::Range;

/// Printed width of one cell, padding included.
pub const CELL_WIDTH: usize = 10;
/// Fractional digits printed per cell.
pub const CELL_PRECISION: usize = 6;

/// Number of increment steps from min toward max.
///
/// Computed as `(max - min) / increment` truncated toward zero. Negative
/// when min exceeds max, which downstream iterators treat as an empty
/// sequence. An increment of zero or less trips the assertion here; the
/// predicate matches the validator's, so a range the validator passed never
/// panics. A NaN increment passes both and truncates to step count 0.
pub fn step_count(range: &Range) -> i64 {
    assert!(
        range.increment > 0.0 || range.increment.is_nan(),
        "increment must be positive, got {}",
        range.increment
    );
    ((range.max - range.min) / range.increment) as i64
}

/// The arithmetic sequence min, min + increment, ... capped at max.
///
/// Empty when min exceeds max.
pub fn terms(range: &Range) -> impl Iterator<Item = f64> {
    let steps = step_count(range);
    let Range { min, increment, .. } = *range;
    (0..=steps).map(move |i| min + i as f64 * increment)
}

/// Build the streaming row iterator for a range.
pub fn rows(range: &Range) -> Rows {
    Rows {
        terms: terms(range).collect(),
        next: 0,
    }
}

/// Streaming iterator over the rows of the multiplication table.
///
/// Row r holds term(r) × term(c) for every column c, so the whole grid is
/// never resident; one row exists at a time. The iterator is finite and not
/// restartable. Call [`rows`] again for a fresh pass.
#[derive(Debug, Clone)]
pub struct Rows {
    terms: Vec<f64>,
    next: usize,
}

impl Iterator for Rows {
    type Item = Vec<f64>;

    fn next(&mut self) -> Option<Vec<f64>> {
        let row_term = *self.terms.get(self.next)?;
        self.next += 1;
        Some(self.terms.iter().map(|term| row_term * term).collect())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.terms.len() - self.next;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Rows {}

/// Fully materialized multiplication table, for JSON output and assertions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table {
    /// The sequence the grid is built from.
    pub terms: Vec<f64>,
    /// One inner vec per row, in sequence order.
    pub rows: Vec<Vec<f64>>,
}

impl Table {
    /// Generate the eager grid for a range.
    pub fn generate(range: &Range) -> Self {
        Table {
            terms: terms(range).collect(),
            rows: rows(range).collect(),
        }
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.rows {
            writeln!(f, "{}", format_row(row))?;
        }
        Ok(())
    }
}

/// Render one row as fixed-width cells, right-aligned, no separator beyond
/// the padding.
pub fn format_row(row: &[f64]) -> String {
    let mut line = String::with_capacity(row.len() * CELL_WIDTH);
    for value in row {
        line.push_str(&format!(
            "{value:width$.precision$}",
            width = CELL_WIDTH,
            precision = CELL_PRECISION
        ));
    }
    line
}
