//! Test plan module - the full result of one generation request.

use crate::pairing::pair;
use crate::points::PointSet;
use crate::range::Range;
use crate::strategy::Strategy;
use crate::testcase::TestCase;

/// Everything derived from one (width range, height range, strategy) input.
///
/// A plan is recomputed wholesale on every generation request; nothing here
/// depends on any previous plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestPlan {
    /// Strategy the plan was generated under
    pub strategy: Strategy,
    /// Width boundary values
    pub widths: PointSet,
    /// Height boundary values
    pub heights: PointSet,
    /// Paired, identified test cases in emission order
    pub cases: Vec<TestCase>,
}

impl TestPlan {
    /// Generate a plan for the given ranges and strategy.
    pub fn generate(width: Range, height: Range, strategy: Strategy) -> Self {
        let widths = PointSet::generate(width, strategy);
        let heights = PointSet::generate(height, strategy);
        let cases = pair(&widths, &heights, strategy);

        Self {
            strategy,
            widths,
            heights,
            cases,
        }
    }

    /// Total number of generated test cases.
    pub fn total(&self) -> usize {
        self.cases.len()
    }
}
