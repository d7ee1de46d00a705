//! The (min, max, increment) triple that drives table generation.

use crate::kind::NumericKind;
use crate::Result;

/// Bounds and step of the arithmetic sequence, held as `f64` regardless of
/// the kind they were parsed with.
///
/// Construction stores the values verbatim; whether a range is usable is the
/// validator's call, so callers can still inspect and report nonsensical
/// input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Range {
    /// First term of the sequence.
    pub min: f64,
    /// Upper bound; the last term is the largest one not exceeding it.
    pub max: f64,
    /// Distance between consecutive terms.
    pub increment: f64,
}

impl Range {
    /// Build a range from already-parsed values.
    pub fn new(min: f64, max: f64, increment: f64) -> Self {
        Range {
            min,
            max,
            increment,
        }
    }

    /// Coerce the three raw configuration values through `kind`'s parser.
    ///
    /// The increment is parsed first, then min, then max; when several
    /// values are malformed the failure names the first in that order.
    pub fn parse(kind: NumericKind, min: &str, max: &str, increment: &str) -> Result<Self> {
        let increment = kind.parse_value("increment", increment)?;
        let min = kind.parse_value("min", min)?;
        let max = kind.parse_value("max", max)?;
        Ok(Range {
            min,
            max,
            increment,
        })
    }
}
