//! Range validation ahead of table generation.

use crate::diag::Diagnostics;
use crate::range::Range;

/// Check a range against the rules the generator assumes.
///
/// Checks run in order and stop at the first failure: min must not exceed
/// max, the increment must be positive, and neither bound may be zero. Each
/// failure emits exactly one error through `diag`; a valid range emits
/// nothing. Invalidity is an ordinary `false`, not an error value, since a
/// bad configuration is expected input rather than a fault.
pub fn validate(range: &Range, diag: &dyn Diagnostics) -> bool {
    if range.min > range.max {
        diag.error(&format!(
            "min ({}) cannot be greater than max ({})",
            range.min, range.max
        ));
        return false;
    }
    if range.increment <= 0.0 {
        diag.error(&format!(
            "increment must be positive, got {}",
            range.increment
        ));
        return false;
    }
    if range.min == 0.0 || range.max == 0.0 {
        diag.error(&format!(
            "min ({}) or max ({}) cannot be zero",
            range.min, range.max
        ));
        return false;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diag::MemoryDiagnostics;

    #[test]
    fn test_valid_range_is_quiet() {
        let diag = MemoryDiagnostics::new();
        assert!(validate(&Range::new(1.0, 10.0, 1.0), &diag));
        assert!(diag.is_empty());
    }

    #[test]
    fn test_min_greater_than_max() {
        let diag = MemoryDiagnostics::new();
        assert!(!validate(&Range::new(5.0, 1.0, 1.0), &diag));
        assert_eq!(diag.errors(), vec!["min (5) cannot be greater than max (1)"]);
    }

    #[test]
    fn test_zero_increment() {
        let diag = MemoryDiagnostics::new();
        assert!(!validate(&Range::new(1.0, 10.0, 0.0), &diag));
        assert_eq!(diag.errors(), vec!["increment must be positive, got 0"]);
    }

    #[test]
    fn test_negative_increment() {
        let diag = MemoryDiagnostics::new();
        assert!(!validate(&Range::new(1.0, 10.0, -2.0), &diag));
        assert_eq!(diag.errors(), vec!["increment must be positive, got -2"]);
    }

    #[test]
    fn test_zero_min() {
        let diag = MemoryDiagnostics::new();
        assert!(!validate(&Range::new(0.0, 5.0, 1.0), &diag));
        assert_eq!(diag.errors(), vec!["min (0) or max (5) cannot be zero"]);
    }

    #[test]
    fn test_zero_max() {
        let diag = MemoryDiagnostics::new();
        assert!(!validate(&Range::new(-5.0, 0.0, 1.0), &diag));
        assert_eq!(diag.errors(), vec!["min (-5) or max (0) cannot be zero"]);
    }

    #[test]
    fn test_equal_bounds_are_valid() {
        let diag = MemoryDiagnostics::new();
        assert!(validate(&Range::new(7.0, 7.0, 1.0), &diag));
        assert!(diag.is_empty());
    }

    #[test]
    fn test_negative_range_is_valid() {
        let diag = MemoryDiagnostics::new();
        assert!(validate(&Range::new(-10.0, -2.0, 3.0), &diag));
        assert!(diag.is_empty());
    }

    #[test]
    fn test_uneven_increment_is_valid() {
        let diag = MemoryDiagnostics::new();
        assert!(validate(&Range::new(1.0, 10.0, 4.0), &diag));
        assert!(diag.is_empty());
    }

    #[test]
    fn test_nan_increment_is_not_rejected() {
        // NaN compares false against every rule; the generator degrades it
        // to a single NaN cell rather than a panic.
        let diag = MemoryDiagnostics::new();
        assert!(validate(&Range::new(1.0, 5.0, f64::NAN), &diag));
        assert!(diag.is_empty());
    }

    #[test]
    fn test_first_failure_wins() {
        // min > max and a zero increment together report only the bounds.
        let diag = MemoryDiagnostics::new();
        assert!(!validate(&Range::new(5.0, 1.0, 0.0), &diag));
        assert_eq!(diag.errors(), vec!["min (5) cannot be greater than max (1)"]);
    }
}
