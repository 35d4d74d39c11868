//! Route-segment constraint evaluation.
//!
//! One pure function per rule family, each returning a
//! [`ConstraintResult`]: pass/fail, hardness, a normalized severity and a
//! [`RiskLevel`]. Hard violations disqualify a route outright; soft
//! violations only penalize it. The functions are independent of each
//! other — no rule reads another rule's output — and total over their
//! documented preconditions.
//!
//! # Rule Families
//!
//! - [`check_minimum_wage`]: statutory minimum wage per country
//! - [`check_working_time`]: weekly working-time directive bands
//! - [`check_carbon_budget`]: per-route carbon allowance
//! - [`check_safety_score`]: minimum route safety threshold
//!
//! Lookup data ([`WageTable`]) is injected by the caller so the catalogue
//! can be swapped without touching the evaluator.
//!
//! # Contract
//!
//! For every rule: severity is in `[0, 1]`, `passed` implies severity is
//! exactly `0.0`, and a failure implies severity is strictly positive.

mod catalogue;
mod evaluator;
mod types;

pub use catalogue::WageTable;
pub use evaluator::{
    check_carbon_budget, check_minimum_wage, check_safety_score, check_working_time,
};
pub use types::{ConstraintResult, RiskLevel};
