//! Strategy module - how boundary points are derived and paired

/// Test-case generation strategy.
///
/// The strategy controls two independent choices:
/// - point derivation: robust strategies extend the boundary set one step
///   beyond each bound (min-1, max+1)
/// - pairing: worst-case strategies take the full cross product of both
///   dimensions instead of varying one dimension at a time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Boundary Value Analysis: 5-point set, single-fault pairing
    BoundaryValueAnalysis,

    /// BVA extended one step past each bound, single-fault pairing
    Robustness,

    /// 5-point set, full cross product of both dimensions
    WorstCase,

    /// Extended point set, full cross product
    WorstCaseRobustness,
}

impl Strategy {
    /// Display name as it appears in report headers.
    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::BoundaryValueAnalysis => "BVA",
            Strategy::Robustness => "Robustness",
            Strategy::WorstCase => "Worst Case",
            Strategy::WorstCaseRobustness => "Worst Case Robustness",
        }
    }

    /// Parse a strategy from a string (internal use)
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().replace([' ', '_'], "-").as_str() {
            "bva" | "boundary-value-analysis" => Some(Strategy::BoundaryValueAnalysis),
            "robustness" => Some(Strategy::Robustness),
            "worst-case" => Some(Strategy::WorstCase),
            "worst-case-robustness" => Some(Strategy::WorstCaseRobustness),
            _ => None,
        }
    }

    /// Whether the point set extends one step beyond each bound.
    pub fn is_robust(&self) -> bool {
        match self {
            Strategy::Robustness | Strategy::WorstCaseRobustness => true,
            Strategy::BoundaryValueAnalysis | Strategy::WorstCase => false,
        }
    }

    /// Whether pairing takes the full cross product of both dimensions.
    pub fn is_worst_case(&self) -> bool {
        match self {
            Strategy::WorstCase | Strategy::WorstCaseRobustness => true,
            Strategy::BoundaryValueAnalysis | Strategy::Robustness => false,
        }
    }

    /// All strategies, in menu order.
    pub fn all() -> [Strategy; 4] {
        [
            Strategy::BoundaryValueAnalysis,
            Strategy::Robustness,
            Strategy::WorstCase,
            Strategy::WorstCaseRobustness,
        ]
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid strategy: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strategy_flags() {
        assert!(!Strategy::BoundaryValueAnalysis.is_robust());
        assert!(!Strategy::BoundaryValueAnalysis.is_worst_case());
        assert!(Strategy::Robustness.is_robust());
        assert!(!Strategy::Robustness.is_worst_case());
        assert!(!Strategy::WorstCase.is_robust());
        assert!(Strategy::WorstCase.is_worst_case());
        assert!(Strategy::WorstCaseRobustness.is_robust());
        assert!(Strategy::WorstCaseRobustness.is_worst_case());
    }

    #[test]
    fn test_strategy_parsing() {
        assert_eq!(Strategy::parse("bva"), Some(Strategy::BoundaryValueAnalysis));
        assert_eq!(
            Strategy::parse("Boundary Value Analysis"),
            Some(Strategy::BoundaryValueAnalysis)
        );
        assert_eq!(Strategy::parse("robustness"), Some(Strategy::Robustness));
        assert_eq!(Strategy::parse("worst-case"), Some(Strategy::WorstCase));
        assert_eq!(Strategy::parse("worst_case"), Some(Strategy::WorstCase));
        assert_eq!(
            Strategy::parse("Worst Case Robustness"),
            Some(Strategy::WorstCaseRobustness)
        );
        assert_eq!(Strategy::parse("exhaustive"), None);
    }

    #[test]
    fn test_display_names() {
        assert_eq!(Strategy::BoundaryValueAnalysis.to_string(), "BVA");
        assert_eq!(Strategy::WorstCaseRobustness.to_string(), "Worst Case Robustness");
    }
}
