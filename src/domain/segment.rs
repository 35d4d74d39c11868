//! Route segments and their constituent types.

use super::DomainError;
use crate::carbon::CARBON_CAP_KG;

/// Transport mode of a route segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TransportMode {
    /// Ocean or inland-waterway shipping.
    Maritime,
    /// Rail freight.
    Rail,
    /// Road haulage.
    Road,
    /// Air freight.
    Air,
}

impl TransportMode {
    /// All modes, in ascending order of default emission factor.
    pub const ALL: [TransportMode; 4] = [
        TransportMode::Maritime,
        TransportMode::Rail,
        TransportMode::Road,
        TransportMode::Air,
    ];
}

/// A geographic coordinate pair (WGS84 degrees).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoPoint {
    lat: f64,
    lon: f64,
}

impl GeoPoint {
    /// Creates a coordinate pair.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidLatitude`] unless `lat ∈ [-90, 90]`,
    /// and [`DomainError::InvalidLongitude`] unless `lon ∈ [-180, 180]`.
    /// NaN fails both range checks.
    pub fn new(lat: f64, lon: f64) -> Result<Self, DomainError> {
        if !(-90.0..=90.0).contains(&lat) {
            return Err(DomainError::InvalidLatitude(lat));
        }
        if !(-180.0..=180.0).contains(&lon) {
            return Err(DomainError::InvalidLongitude(lon));
        }
        Ok(Self { lat, lon })
    }

    /// Latitude in degrees.
    pub fn lat(&self) -> f64 {
        self.lat
    }

    /// Longitude in degrees.
    pub fn lon(&self) -> f64 {
        self.lon
    }
}

/// One leg of a route.
///
/// Immutable once constructed. Quantities are integers in the smallest
/// practical unit (km, kg, minor currency units, whole hours), so
/// non-negativity is carried by the type; the constructor validates the
/// remaining invariants (safety score range, carbon cap).
///
/// # Examples
///
/// ```
/// use route_eval::domain::{GeoPoint, Segment, TransportMode};
///
/// let rotterdam = GeoPoint::new(51.95, 4.14).unwrap();
/// let hamburg = GeoPoint::new(53.55, 9.99).unwrap();
/// let leg = Segment::new(
///     rotterdam,
///     hamburg,
///     TransportMode::Rail,
///     480,     // distance km
///     12_000,  // cargo kg
///     85_000,  // cost, minor units
///     9,       // hours
///     161,     // carbon kg
///     1_400,   // wage, minor units / hour
///     0.93,    // safety score
/// )
/// .unwrap();
/// assert_eq!(leg.mode(), TransportMode::Rail);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Segment {
    origin: GeoPoint,
    destination: GeoPoint,
    mode: TransportMode,
    distance_km: u64,
    weight_kg: u64,
    cost_cents: u64,
    time_hours: u32,
    carbon_kg: u64,
    wage_cents_per_hour: u64,
    safety_score: f64,
}

impl Segment {
    /// Creates a segment.
    ///
    /// # Errors
    ///
    /// - [`DomainError::InvalidSafetyScore`] unless
    ///   `safety_score ∈ [0, 1]` and finite.
    /// - [`DomainError::CarbonAboveCap`] if `carbon_kg` exceeds
    ///   [`CARBON_CAP_KG`].
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        origin: GeoPoint,
        destination: GeoPoint,
        mode: TransportMode,
        distance_km: u64,
        weight_kg: u64,
        cost_cents: u64,
        time_hours: u32,
        carbon_kg: u64,
        wage_cents_per_hour: u64,
        safety_score: f64,
    ) -> Result<Self, DomainError> {
        if !(0.0..=1.0).contains(&safety_score) {
            return Err(DomainError::InvalidSafetyScore(safety_score));
        }
        if carbon_kg > CARBON_CAP_KG {
            return Err(DomainError::CarbonAboveCap(carbon_kg));
        }
        Ok(Self {
            origin,
            destination,
            mode,
            distance_km,
            weight_kg,
            cost_cents,
            time_hours,
            carbon_kg,
            wage_cents_per_hour,
            safety_score,
        })
    }

    /// Origin coordinates.
    pub fn origin(&self) -> GeoPoint {
        self.origin
    }

    /// Destination coordinates.
    pub fn destination(&self) -> GeoPoint {
        self.destination
    }

    /// Transport mode of this leg.
    pub fn mode(&self) -> TransportMode {
        self.mode
    }

    /// Leg distance in kilometers.
    pub fn distance_km(&self) -> u64 {
        self.distance_km
    }

    /// Cargo weight in kilograms.
    pub fn weight_kg(&self) -> u64 {
        self.weight_kg
    }

    /// Monetary cost in minor currency units.
    pub fn cost_cents(&self) -> u64 {
        self.cost_cents
    }

    /// Elapsed transit time in whole hours.
    pub fn time_hours(&self) -> u32 {
        self.time_hours
    }

    /// Carbon emitted over this leg, in kg CO₂.
    pub fn carbon_kg(&self) -> u64 {
        self.carbon_kg
    }

    /// Wage paid on this leg, in minor currency units per hour.
    pub fn wage_cents_per_hour(&self) -> u64 {
        self.wage_cents_per_hour
    }

    /// Safety score in `[0, 1]`, higher is safer.
    pub fn safety_score(&self) -> f64 {
        self.safety_score
    }
}
