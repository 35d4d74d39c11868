//! Constructor precondition errors.

use thiserror::Error;

/// Precondition violation raised when constructing a domain value.
///
/// Every function in this crate is total over well-formed inputs, so the
/// constructors are the only place malformed data can be caught. Callers
/// are expected to treat these as programmer errors, not recoverable
/// runtime conditions.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainError {
    /// Latitude outside `[-90, 90]` (or NaN).
    #[error("latitude {0} outside [-90, 90]")]
    InvalidLatitude(f64),

    /// Longitude outside `[-180, 180]` (or NaN).
    #[error("longitude {0} outside [-180, 180]")]
    InvalidLongitude(f64),

    /// Safety score outside `[0, 1]` (or NaN).
    #[error("safety score {0} outside [0, 1]")]
    InvalidSafetyScore(f64),

    /// Segment carbon above the per-segment emission cap.
    #[error("segment carbon {0} kg exceeds the emission cap")]
    CarbonAboveCap(u64),

    /// A minimized objective value that is NaN, infinite or negative.
    #[error("objective `{name}` value {value} is not a finite non-negative number")]
    InvalidObjective {
        /// Which objective was rejected.
        name: &'static str,
        /// The offending value.
        value: f64,
    },

    /// Labor-compliance score outside `[0, 1]` (or NaN).
    #[error("labor score {0} outside [0, 1]")]
    InvalidLaborScore(f64),
}
