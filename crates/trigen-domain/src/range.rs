//! Range module - an integer input dimension

/// An inclusive integer range for one input dimension (width or height).
///
/// min <= max is assumed, not enforced: an out-of-order range still produces
/// a point set, just a degenerate one. This mirrors the form the tool
/// replaces, where the fields are free numeric inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Range {
    /// Lower bound (inclusive)
    pub min: i64,
    /// Upper bound (inclusive)
    pub max: i64,
}

impl Range {
    /// Create a new range.
    pub fn new(min: i64, max: i64) -> Self {
        Self { min, max }
    }

    /// The nominal (midpoint) value: floor((min + max) / 2).
    ///
    /// Floor division, not truncation: a range summing to a negative odd
    /// number rounds down, matching `Math.floor` semantics. The sum is
    /// widened to i128 so bounds near the i64 extremes cannot overflow;
    /// the midpoint itself always fits back in i64.
    pub fn nominal(&self) -> i64 {
        (self.min as i128 + self.max as i128).div_euclid(2) as i64
    }
}
