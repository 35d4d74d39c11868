//! Candidate routes in objective space.

use super::DomainError;

/// A complete candidate route, reduced to its objective values.
///
/// Cost, time and carbon are minimized; the labor-compliance score is
/// maximized. The identifier distinguishes solutions within one batch and
/// carries no ordering significance.
///
/// The constructor rejects NaN, infinite and negative objective values,
/// so the Pareto engine never has to reason about unordered comparisons.
///
/// # Examples
///
/// ```
/// use route_eval::domain::Solution;
///
/// let a = Solution::new("via-hamburg", 100.0, 500.0, 100.0, 0.5).unwrap();
/// let b = Solution::new("via-lyon", 300.0, 300.0, 100.0, 0.5).unwrap();
///
/// // Cost/time trade-off: neither route dominates the other.
/// assert!(!a.dominates(&b));
/// assert!(!b.dominates(&a));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Solution {
    id: String,
    cost: f64,
    time: f64,
    carbon: f64,
    labor_score: f64,
}

impl Solution {
    /// Creates a solution from its objective values.
    ///
    /// # Errors
    ///
    /// - [`DomainError::InvalidObjective`] if `cost`, `time` or `carbon`
    ///   is NaN, infinite or negative.
    /// - [`DomainError::InvalidLaborScore`] unless
    ///   `labor_score ∈ [0, 1]` and finite.
    pub fn new(
        id: impl Into<String>,
        cost: f64,
        time: f64,
        carbon: f64,
        labor_score: f64,
    ) -> Result<Self, DomainError> {
        for (name, value) in [("cost", cost), ("time", time), ("carbon", carbon)] {
            if !value.is_finite() || value < 0.0 {
                return Err(DomainError::InvalidObjective { name, value });
            }
        }
        if !(0.0..=1.0).contains(&labor_score) {
            return Err(DomainError::InvalidLaborScore(labor_score));
        }
        Ok(Self {
            id: id.into(),
            cost,
            time,
            carbon,
            labor_score,
        })
    }

    /// Batch-unique identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Total route cost (minimized).
    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// Total transit time (minimized).
    pub fn time(&self) -> f64 {
        self.time
    }

    /// Total carbon emitted (minimized).
    pub fn carbon(&self) -> f64 {
        self.carbon
    }

    /// Labor-compliance score in `[0, 1]` (maximized).
    pub fn labor_score(&self) -> f64 {
        self.labor_score
    }

    /// Pareto dominance: `self` is at least as good as `other` on every
    /// objective and strictly better on at least one.
    ///
    /// The relation is irreflexive, asymmetric and transitive; solutions
    /// with identical objective vectors never dominate each other.
    pub fn dominates(&self, other: &Solution) -> bool {
        let at_least_as_good = self.cost <= other.cost
            && self.time <= other.time
            && self.carbon <= other.carbon
            && self.labor_score >= other.labor_score;
        let strictly_better = self.cost < other.cost
            || self.time < other.time
            || self.carbon < other.carbon
            || self.labor_score > other.labor_score;
        at_least_as_good && strictly_better
    }
}
