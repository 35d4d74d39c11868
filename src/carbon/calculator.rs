//! Carbon calculation and saturating arithmetic.

use super::factors::EmissionFactors;
use crate::domain::TransportMode;

/// Upper bound on per-segment emissions, in kg CO₂ (100k tonnes).
pub const CARBON_CAP_KG: u64 = 100_000_000;

/// Estimates carbon emitted over one segment, in kg CO₂.
///
/// `floor(floor(distance·weight / 1000) · factor(mode) / 1000)`, clamped
/// to [`CARBON_CAP_KG`]. Intermediate products are computed in `u128`, so
/// the calculation cannot overflow for any `u64` inputs. Zero distance or
/// zero weight yields exactly zero regardless of mode.
///
/// # Examples
///
/// ```
/// use route_eval::carbon::{calculate_segment_carbon, EmissionFactors};
/// use route_eval::domain::TransportMode;
///
/// let factors = EmissionFactors::default();
/// let kg = calculate_segment_carbon(1000, 10_000, TransportMode::Maritime, &factors);
/// assert_eq!(kg, 150); // 10_000 tonne-km × 15 / 1000
/// ```
pub fn calculate_segment_carbon(
    distance_km: u64,
    weight_kg: u64,
    mode: TransportMode,
    factors: &EmissionFactors,
) -> u64 {
    let tonne_km = (distance_km as u128) * (weight_kg as u128) / 1000;
    let carbon = tonne_km * factors.factor(mode) as u128 / 1000;
    carbon.min(CARBON_CAP_KG as u128) as u64
}

/// Overflow-safe accumulation against an explicit ceiling.
///
/// Returns `a + b` when the sum does not exceed `max_value`, otherwise
/// `max_value` (saturating, not wrapping, not erroring). Sums that
/// overflow `u64` itself also saturate to `max_value`.
pub fn safe_add(a: u64, b: u64, max_value: u64) -> u64 {
    match a.checked_add(b) {
        Some(sum) if sum <= max_value => sum,
        _ => max_value,
    }
}
