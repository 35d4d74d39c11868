//! Constraint evaluation result types.

/// Ordinal seriousness of a constraint violation.
///
/// Ordered: `None < Low < Medium < High < Critical`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RiskLevel {
    /// No violation.
    None,
    /// Minor concern.
    Low,
    /// Noteworthy; typically attached to soft violations.
    Medium,
    /// Serious; typically attached to hard violations.
    High,
    /// Route should not be used.
    Critical,
}

/// Outcome of evaluating one rule against one segment or route.
///
/// Invariants, upheld by the constructors:
///
/// - `severity ∈ [0, 1]`
/// - `passed` implies `severity == 0.0` and `risk == RiskLevel::None`
/// - `!passed` implies `severity > 0.0`
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConstraintResult {
    /// Whether the rule was satisfied.
    pub passed: bool,
    /// Hard violations block route admissibility; soft ones penalize.
    pub is_hard: bool,
    /// Normalized violation magnitude; exactly `0.0` on pass.
    pub severity: f64,
    /// Risk tier of the violation.
    pub risk: RiskLevel,
}

impl ConstraintResult {
    /// A passing result: zero severity, no risk.
    pub fn pass() -> Self {
        Self {
            passed: true,
            is_hard: false,
            severity: 0.0,
            risk: RiskLevel::None,
        }
    }

    /// A failing result with the given hardness, severity and risk.
    ///
    /// Severity must be in `(0, 1]`.
    pub fn violation(is_hard: bool, severity: f64, risk: RiskLevel) -> Self {
        debug_assert!(
            severity > 0.0 && severity <= 1.0,
            "violation severity {severity} outside (0, 1]"
        );
        Self {
            passed: false,
            is_hard,
            severity,
            risk,
        }
    }

    /// Whether this result disqualifies the route outright.
    pub fn blocks_route(&self) -> bool {
        !self.passed && self.is_hard
    }
}
