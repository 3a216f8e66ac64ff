//! Point set derivation for one input dimension.
//!
//! A point set is the sorted, duplicate-free list of boundary test values
//! for a range under a given strategy, plus the range's nominal value used
//! as the "held" value in single-fault pairing.

use crate::range::Range;
use crate::strategy::Strategy;

/// Boundary test values for one dimension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PointSet {
    /// Sorted ascending, deduplicated test values
    pub points: Vec<i64>,
    /// Midpoint of the source range, floor((min + max) / 2)
    pub nominal: i64,
}

impl PointSet {
    /// Derive the point set for a range under a strategy.
    ///
    /// The base set is {min, min+1, nominal, max-1, max}; robust strategies
    /// add {min-1, max+1}. Duplicates collapse naturally for narrow ranges
    /// (max - min < 2 yields fewer than 5 distinct points), which is
    /// accepted behavior rather than an error.
    pub fn generate(range: Range, strategy: Strategy) -> Self {
        let nominal = range.nominal();

        // Adjacent values saturate at the i64 extremes, where they collapse
        // into the bounds like any other duplicate.
        let mut points = vec![
            range.min,
            range.min.saturating_add(1),
            nominal,
            range.max.saturating_sub(1),
            range.max,
        ];
        if strategy.is_robust() {
            points.push(range.min.saturating_sub(1));
            points.push(range.max.saturating_add(1));
        }

        points.sort_unstable();
        points.dedup();

        Self { points, nominal }
    }

    /// Number of distinct test values.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True when the set holds no values (cannot happen for any input, but
    /// kept so callers can use the usual len/is_empty pair).
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
