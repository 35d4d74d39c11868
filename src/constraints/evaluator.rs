//! Rule-family evaluation functions.

use super::catalogue::WageTable;
use super::types::{ConstraintResult, RiskLevel};

/// Checks a paid wage against the statutory minimum for a country.
///
/// Passes iff `wage_cents >= minimum`. Failures are always hard and rated
/// [`RiskLevel::High`]; severity is tiered by the relative shortfall:
///
/// | shortfall            | severity |
/// |----------------------|----------|
/// | `> minimum / 2`      | 1.0      |
/// | `> minimum / 4`      | 0.7      |
/// | otherwise            | 0.4      |
///
/// Tier boundaries are strict: a shortfall of exactly half the minimum
/// rates 0.7, not 1.0. The comparisons are evaluated in exact integer
/// arithmetic (`2·shortfall > minimum`), so no rounding is involved.
///
/// # Examples
///
/// ```
/// use route_eval::constraints::{check_minimum_wage, RiskLevel, WageTable};
///
/// let table = WageTable::default();
/// let result = check_minimum_wage(100, "DE", &table); // minimum 1260
/// assert!(!result.passed);
/// assert!(result.is_hard);
/// assert_eq!(result.severity, 1.0);
/// assert_eq!(result.risk, RiskLevel::High);
/// ```
pub fn check_minimum_wage(wage_cents: u64, country: &str, table: &WageTable) -> ConstraintResult {
    let minimum = table.minimum_for(country);
    if wage_cents >= minimum {
        return ConstraintResult::pass();
    }

    // minimum > wage_cents >= 0 here, so minimum > 0 and shortfall > 0.
    let shortfall = minimum - wage_cents;
    let severity = if (shortfall as u128) * 2 > minimum as u128 {
        1.0
    } else if (shortfall as u128) * 4 > minimum as u128 {
        0.7
    } else {
        0.4
    };
    ConstraintResult::violation(true, severity, RiskLevel::High)
}

/// Checks weekly working hours against a three-band working-time policy.
///
/// - `<= 48` hours: pass.
/// - `49..=60` hours: soft violation, severity 0.5, [`RiskLevel::Medium`].
/// - `> 60` hours: hard violation, severity 0.9, [`RiskLevel::High`].
pub fn check_working_time(weekly_hours: u32) -> ConstraintResult {
    if weekly_hours <= 48 {
        ConstraintResult::pass()
    } else if weekly_hours <= 60 {
        ConstraintResult::violation(false, 0.5, RiskLevel::Medium)
    } else {
        ConstraintResult::violation(true, 0.9, RiskLevel::High)
    }
}

/// Checks emitted carbon against a carbon budget.
///
/// Passes iff `actual_kg <= budget_kg`. Failures are always soft and
/// rated [`RiskLevel::Medium`]; severity is tiered by the relative
/// overage when the budget is positive (strict boundaries, exact integer
/// arithmetic as in [`check_minimum_wage`]):
///
/// | overage             | severity |
/// |---------------------|----------|
/// | `> budget / 2`      | 0.9      |
/// | `> budget / 4`      | 0.6      |
/// | otherwise           | 0.3      |
///
/// A zero budget makes any positive emission a full failure
/// (severity 1.0).
pub fn check_carbon_budget(actual_kg: u64, budget_kg: u64) -> ConstraintResult {
    if actual_kg <= budget_kg {
        return ConstraintResult::pass();
    }

    let overage = actual_kg - budget_kg;
    let severity = if budget_kg == 0 {
        1.0
    } else if (overage as u128) * 2 > budget_kg as u128 {
        0.9
    } else if (overage as u128) * 4 > budget_kg as u128 {
        0.6
    } else {
        0.3
    };
    ConstraintResult::violation(false, severity, RiskLevel::Medium)
}

/// Checks a route safety score against a threshold.
///
/// Both values must lie in `[0, 1]`. Passes iff `score >= threshold`.
/// Failures are always hard, with severity `1 - score` and a risk tier
/// determined by the absolute score: [`RiskLevel::Critical`] below 0.5,
/// [`RiskLevel::High`] below 0.7, [`RiskLevel::Medium`] otherwise.
pub fn check_safety_score(score: f64, threshold: f64) -> ConstraintResult {
    debug_assert!(
        (0.0..=1.0).contains(&score),
        "safety score {score} outside [0, 1]"
    );
    debug_assert!(
        (0.0..=1.0).contains(&threshold),
        "safety threshold {threshold} outside [0, 1]"
    );

    if score >= threshold {
        return ConstraintResult::pass();
    }

    let severity = 1.0 - score;
    let risk = if score < 0.5 {
        RiskLevel::Critical
    } else if score < 0.7 {
        RiskLevel::High
    } else {
        RiskLevel::Medium
    };
    ConstraintResult::violation(true, severity, risk)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // ---- Minimum wage ----

    #[test]
    fn test_wage_at_and_above_minimum_passes() {
        let table = WageTable::default();
        for country in ["DE", "NL", "CN", "SG", "US"] {
            let minimum = table.minimum_for(country);
            assert!(check_minimum_wage(minimum, country, &table).passed);
            assert!(check_minimum_wage(minimum + 1, country, &table).passed);
        }
    }

    #[test]
    fn test_zero_minimum_always_passes() {
        let table = WageTable::default();
        assert!(check_minimum_wage(0, "SG", &table).passed);
    }

    #[test]
    fn test_wage_severity_ladder_strict_boundaries() {
        // Minimum 1000: shortfall 500 is exactly half, so the top tier
        // (strict >) is not reached.
        let table = WageTable::empty(500).with_country("ZZ", 1000);
        assert_eq!(check_minimum_wage(499, "ZZ", &table).severity, 1.0);
        assert_eq!(check_minimum_wage(500, "ZZ", &table).severity, 0.7);
        assert_eq!(check_minimum_wage(749, "ZZ", &table).severity, 0.7);
        assert_eq!(check_minimum_wage(750, "ZZ", &table).severity, 0.4);
        assert_eq!(check_minimum_wage(999, "ZZ", &table).severity, 0.4);
    }

    #[test]
    fn test_wage_failure_is_hard_high_risk() {
        let table = WageTable::default();
        let result = check_minimum_wage(100, "DE", &table);
        assert!(!result.passed);
        assert!(result.is_hard);
        assert_eq!(result.severity, 1.0); // shortfall 1160 > 1260/2
        assert_eq!(result.risk, RiskLevel::High);
    }

    // ---- Working time ----

    #[test]
    fn test_working_time_bands() {
        assert!(check_working_time(0).passed);
        assert!(check_working_time(48).passed);

        let soft = check_working_time(49);
        assert!(!soft.passed && !soft.is_hard);

        let mid = check_working_time(55);
        assert!(!mid.passed && !mid.is_hard);
        assert_eq!(mid.severity, 0.5);
        assert_eq!(mid.risk, RiskLevel::Medium);

        let edge = check_working_time(60);
        assert!(!edge.passed && !edge.is_hard);

        let hard = check_working_time(61);
        assert!(!hard.passed && hard.is_hard);
        assert_eq!(hard.severity, 0.9);
        assert_eq!(hard.risk, RiskLevel::High);
    }

    // ---- Carbon budget ----

    #[test]
    fn test_carbon_within_budget_passes() {
        assert!(check_carbon_budget(0, 0).passed);
        assert!(check_carbon_budget(100, 100).passed);
        assert!(check_carbon_budget(99, 100).passed);
    }

    #[test]
    fn test_carbon_overage_ladder() {
        // Budget 1000: overage 500 is exactly half, strict boundary.
        assert_eq!(check_carbon_budget(1501, 1000).severity, 0.9);
        assert_eq!(check_carbon_budget(1500, 1000).severity, 0.6);
        assert_eq!(check_carbon_budget(1251, 1000).severity, 0.6);
        assert_eq!(check_carbon_budget(1250, 1000).severity, 0.3);
        assert_eq!(check_carbon_budget(1001, 1000).severity, 0.3);
    }

    #[test]
    fn test_zero_budget_full_severity() {
        let result = check_carbon_budget(1, 0);
        assert!(!result.passed);
        assert_eq!(result.severity, 1.0);
    }

    // ---- Safety score ----

    #[test]
    fn test_safety_threshold_inclusive() {
        assert!(check_safety_score(0.7, 0.7).passed);
        assert!(check_safety_score(0.71, 0.7).passed);
        assert!(!check_safety_score(0.69, 0.7).passed);
    }

    #[test]
    fn test_safety_risk_tiers() {
        assert_eq!(check_safety_score(0.49, 0.7).risk, RiskLevel::Critical);
        assert_eq!(check_safety_score(0.5, 0.7).risk, RiskLevel::High);
        assert_eq!(check_safety_score(0.69, 0.7).risk, RiskLevel::High);
        assert_eq!(check_safety_score(0.75, 0.8).risk, RiskLevel::Medium);
    }

    #[test]
    fn test_safety_severity_is_complement() {
        let result = check_safety_score(0.3, 0.7);
        assert!(result.is_hard);
        assert!((result.severity - 0.7).abs() < 1e-12);
    }

    // ---- Properties ----

    fn country_code() -> impl Strategy<Value = &'static str> {
        prop::sample::select(vec!["DE", "NL", "CN", "SG", "US", "GB", "FR"])
    }

    proptest! {
        #[test]
        fn prop_wage_contract(wage in 0u64..50_000, country in country_code()) {
            let table = WageTable::default();
            let result = check_minimum_wage(wage, country, &table);
            prop_assert!((0.0..=1.0).contains(&result.severity));
            prop_assert_eq!(result.passed, result.severity == 0.0);
            if !result.passed {
                prop_assert!(result.is_hard);
                prop_assert_eq!(result.risk, RiskLevel::High);
            }
        }

        #[test]
        fn prop_wage_at_or_above_minimum_passes(extra in 0u64..100_000, country in country_code()) {
            let table = WageTable::default();
            let minimum = table.minimum_for(country);
            prop_assert!(check_minimum_wage(minimum + extra, country, &table).passed);
        }

        #[test]
        fn prop_working_time_contract(hours in 0u32..=168) {
            let result = check_working_time(hours);
            prop_assert!((0.0..=1.0).contains(&result.severity));
            prop_assert_eq!(result.passed, result.severity == 0.0);
            prop_assert_eq!(result.passed, hours <= 48);
            if (49..=60).contains(&hours) {
                prop_assert!(!result.is_hard);
            }
            if hours > 60 {
                prop_assert!(result.is_hard);
            }
        }

        #[test]
        fn prop_carbon_contract(actual in 0u64..=100_000_000, budget in 0u64..=100_000_000) {
            let result = check_carbon_budget(actual, budget);
            prop_assert!((0.0..=1.0).contains(&result.severity));
            prop_assert_eq!(result.passed, actual <= budget);
            prop_assert_eq!(result.passed, result.severity == 0.0);
            // Carbon violations never block a route.
            prop_assert!(!result.is_hard);
        }

        #[test]
        fn prop_safety_contract(score in 0.0f64..=1.0, threshold in 0.0f64..=1.0) {
            let result = check_safety_score(score, threshold);
            prop_assert!((0.0..=1.0).contains(&result.severity));
            prop_assert_eq!(result.passed, score >= threshold);
            if !result.passed {
                prop_assert!(result.is_hard);
                if score < 0.5 {
                    prop_assert_eq!(result.risk, RiskLevel::Critical);
                }
            }
        }
    }
}
