//! Route-constraint evaluation and Pareto ranking core.
//!
//! Pure, deterministic building blocks for a multimodal transport route
//! planner:
//!
//! - **Constraints**: score a route segment against legal, safety and
//!   environmental rule families (minimum wage, working time, carbon
//!   budget, safety score), yielding pass/fail, severity, hardness and a
//!   risk tier per rule.
//! - **Carbon**: per-segment emission estimation from distance, cargo
//!   weight and transport mode, plus overflow-safe accumulation for
//!   route-level running totals.
//! - **Pareto**: non-dominated frontier extraction and full front ranking
//!   of candidate routes across competing objectives (cost, time, carbon,
//!   labor compliance).
//!
//! # Architecture
//!
//! This crate is a leaf computation library: no I/O, no global state, no
//! caching between calls. The surrounding planner owns graph search,
//! storage and transport; it feeds [`domain::Segment`] and
//! [`domain::Solution`] values in and interprets the results to accept,
//! reject or penalize candidate routes. Rule thresholds and lookup tables
//! ([`constraints::WageTable`], [`carbon::EmissionFactors`]) are injected
//! configuration, not hard-coded policy.
//!
//! Every function is deterministic and total over its documented
//! preconditions, and safe to call concurrently from any number of
//! threads without coordination.

pub mod carbon;
pub mod constraints;
pub mod domain;
pub mod pareto;
