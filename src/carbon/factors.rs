//! Per-mode emission factor table.

use crate::domain::TransportMode;

/// Emission factors per transport mode, in kg CO₂ per tonne-km proxy
/// units (scaled by 1000 in the calculator).
///
/// Immutable injected configuration. The default factors preserve the
/// ordering `maritime < rail < road < air`; replacement tables should
/// too, since downstream mode-preference logic relies on it.
///
/// # Defaults
///
/// ```
/// use route_eval::carbon::EmissionFactors;
/// use route_eval::domain::TransportMode;
///
/// let factors = EmissionFactors::default();
/// assert_eq!(factors.factor(TransportMode::Maritime), 15);
/// assert_eq!(factors.factor(TransportMode::Air), 500);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EmissionFactors {
    maritime: u64,
    rail: u64,
    road: u64,
    air: u64,
}

impl Default for EmissionFactors {
    fn default() -> Self {
        Self {
            maritime: 15,
            rail: 28,
            road: 62,
            air: 500,
        }
    }
}

impl EmissionFactors {
    /// The factor for a mode.
    pub fn factor(&self, mode: TransportMode) -> u64 {
        match mode {
            TransportMode::Maritime => self.maritime,
            TransportMode::Rail => self.rail,
            TransportMode::Road => self.road,
            TransportMode::Air => self.air,
        }
    }

    /// Replaces the factor for a mode.
    pub fn with_factor(mut self, mode: TransportMode, factor: u64) -> Self {
        match mode {
            TransportMode::Maritime => self.maritime = factor,
            TransportMode::Rail => self.rail = factor,
            TransportMode::Road => self.road = factor,
            TransportMode::Air => self.air = factor,
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_factors_ordered() {
        let f = EmissionFactors::default();
        assert!(f.factor(TransportMode::Maritime) < f.factor(TransportMode::Rail));
        assert!(f.factor(TransportMode::Rail) < f.factor(TransportMode::Road));
        assert!(f.factor(TransportMode::Road) < f.factor(TransportMode::Air));
    }

    #[test]
    fn test_with_factor_replaces_one_mode() {
        let f = EmissionFactors::default().with_factor(TransportMode::Rail, 30);
        assert_eq!(f.factor(TransportMode::Rail), 30);
        assert_eq!(f.factor(TransportMode::Maritime), 15);
    }
}
