//! Shared domain value types.
//!
//! All types here are immutable value objects: validated at construction,
//! never mutated afterwards. Precondition violations (out-of-range
//! coordinates, NaN objective values, scores outside `[0, 1]`) are
//! programmer errors and are rejected by the constructors as
//! [`DomainError`] rather than clamped or tolerated downstream.
//!
//! # Key Types
//!
//! - [`Segment`]: one leg of a route, with geography, mode and metrics
//! - [`Solution`]: a whole candidate route in objective space, carrying
//!   the Pareto dominance relation
//! - [`TransportMode`]: the closed set of supported transport modes

mod error;
mod segment;
mod solution;

pub use error::DomainError;
pub use segment::{GeoPoint, Segment, TransportMode};
pub use solution::Solution;
