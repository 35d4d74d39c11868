//! Segment carbon estimation and overflow-safe accumulation.
//!
//! The emission model is deliberately coarse: a per-mode factor applied
//! to tonne-kilometers, floor arithmetic throughout, clamped to
//! [`CARBON_CAP_KG`]. Factors live in the injected [`EmissionFactors`]
//! table so the model can be recalibrated without touching the
//! calculator.
//!
//! [`safe_add`] is the accumulation primitive the planner uses for
//! route-level running totals (cost, carbon): saturating against an
//! explicit ceiling instead of wrapping or erroring.

mod calculator;
mod factors;

pub use calculator::{calculate_segment_carbon, safe_add, CARBON_CAP_KG};
pub use factors::EmissionFactors;
