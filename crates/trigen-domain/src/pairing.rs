//! Pairing module - combining width and height point sets into test cases.
//!
//! Two pairing schemes exist:
//! - worst case: the full cross product, width outer, height inner
//! - single fault: hold one dimension at its nominal value while the other
//!   walks its point set

use crate::points::PointSet;
use crate::strategy::Strategy;
use crate::testcase::TestCase;

/// Pair two point sets into an ordered list of identified test cases.
///
/// Worst-case strategies emit the row-major cross product over both sorted
/// sets. Single-fault strategies emit (width_nominal, h) for every height
/// point, then (w, height_nominal) for every width point except the nominal
/// width itself, which would repeat the center pair. IDs are contiguous
/// 1-based integers in emission order.
pub fn pair(widths: &PointSet, heights: &PointSet, strategy: Strategy) -> Vec<TestCase> {
    let mut pairs: Vec<(i64, i64)> = Vec::new();

    if strategy.is_worst_case() {
        for &w in &widths.points {
            for &h in &heights.points {
                pairs.push((w, h));
            }
        }
    } else {
        for &h in &heights.points {
            pairs.push((widths.nominal, h));
        }
        for &w in &widths.points {
            if w != widths.nominal {
                pairs.push((w, heights.nominal));
            }
        }
    }

    pairs
        .into_iter()
        .enumerate()
        .map(|(idx, (w, h))| TestCase::new(idx as u32 + 1, w, h))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::range::Range;
    use crate::strategy::Strategy;
    use proptest::prelude::*;

    fn sets(strategy: Strategy) -> (PointSet, PointSet) {
        (
            PointSet::generate(Range::new(1, 10), strategy),
            PointSet::generate(Range::new(1, 10), strategy),
        )
    }

    #[test]
    fn test_single_fault_order_and_count() {
        let (widths, heights) = sets(Strategy::BoundaryValueAnalysis);
        let cases = pair(&widths, &heights, Strategy::BoundaryValueAnalysis);

        // |H| + |W| - 1 = 5 + 5 - 1
        assert_eq!(cases.len(), 9);

        let pairs: Vec<(i64, i64)> = cases.iter().map(|c| (c.width, c.height)).collect();
        assert_eq!(
            pairs,
            vec![
                (5, 1),
                (5, 2),
                (5, 5),
                (5, 9),
                (5, 10),
                (1, 5),
                (2, 5),
                (9, 5),
                (10, 5),
            ]
        );
    }

    #[test]
    fn test_single_fault_skips_nominal_width_only() {
        let (widths, heights) = sets(Strategy::BoundaryValueAnalysis);
        let cases = pair(&widths, &heights, Strategy::BoundaryValueAnalysis);

        // The center pair appears exactly once
        let center = cases
            .iter()
            .filter(|c| c.width == widths.nominal && c.height == heights.nominal)
            .count();
        assert_eq!(center, 1);
    }

    #[test]
    fn test_worst_case_cross_product() {
        let (widths, heights) = sets(Strategy::WorstCase);
        let cases = pair(&widths, &heights, Strategy::WorstCase);

        assert_eq!(cases.len(), 25);
        assert_eq!((cases[0].width, cases[0].height), (1, 1));
        assert_eq!((cases[24].width, cases[24].height), (10, 10));

        // Row-major: width advances only after a full height sweep
        assert_eq!((cases[4].width, cases[4].height), (1, 10));
        assert_eq!((cases[5].width, cases[5].height), (2, 1));
    }

    #[test]
    fn test_robustness_count() {
        let (widths, heights) = sets(Strategy::Robustness);
        let cases = pair(&widths, &heights, Strategy::Robustness);
        // 7 + 7 - 1
        assert_eq!(cases.len(), 13);
    }

    #[test]
    fn test_worst_case_robustness_count() {
        let (widths, heights) = sets(Strategy::WorstCaseRobustness);
        let cases = pair(&widths, &heights, Strategy::WorstCaseRobustness);
        assert_eq!(cases.len(), 49);
    }

    #[test]
    fn test_ids_contiguous_from_one() {
        let (widths, heights) = sets(Strategy::WorstCase);
        let cases = pair(&widths, &heights, Strategy::WorstCase);
        for (idx, case) in cases.iter().enumerate() {
            assert_eq!(case.id, idx as u32 + 1);
        }
    }

    #[test]
    fn test_asymmetric_ranges() {
        let widths = PointSet::generate(Range::new(1, 2), Strategy::BoundaryValueAnalysis);
        let heights = PointSet::generate(Range::new(1, 10), Strategy::BoundaryValueAnalysis);
        let cases = pair(&widths, &heights, Strategy::BoundaryValueAnalysis);
        // |H| + |W| - 1 = 5 + 2 - 1
        assert_eq!(cases.len(), 6);
    }

    proptest! {
        #[test]
        fn prop_pair_counts(
            w_min in -100i64..100, w_width in 0i64..100,
            h_min in -100i64..100, h_width in 0i64..100,
        ) {
            for strategy in Strategy::all() {
                let widths = PointSet::generate(Range::new(w_min, w_min + w_width), strategy);
                let heights = PointSet::generate(Range::new(h_min, h_min + h_width), strategy);
                let cases = pair(&widths, &heights, strategy);

                let expected = if strategy.is_worst_case() {
                    widths.len() * heights.len()
                } else {
                    // The nominal width is always a member of its point set,
                    // so exactly one width pair is skipped.
                    heights.len() + widths.len() - 1
                };
                prop_assert_eq!(cases.len(), expected);

                for (idx, case) in cases.iter().enumerate() {
                    prop_assert_eq!(case.id, idx as u32 + 1);
                }
            }
        }
    }
}
