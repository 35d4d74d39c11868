//! Injected constraint catalogue data.

use std::collections::HashMap;

/// Statutory minimum-wage catalogue, keyed by ISO 3166 country code.
///
/// Values are minor currency units per hour. Countries missing from the
/// table fall back to the default minimum. The table is immutable after
/// construction; swapping catalogues never requires touching the
/// evaluator.
///
/// # Defaults
///
/// ```
/// use route_eval::constraints::WageTable;
///
/// let table = WageTable::default();
/// assert_eq!(table.minimum_for("DE"), 1260);
/// assert_eq!(table.minimum_for("XX"), 500); // unknown code
/// ```
///
/// # Builder Pattern
///
/// ```
/// use route_eval::constraints::WageTable;
///
/// let table = WageTable::empty(600)
///     .with_country("FR", 1150)
///     .with_country("PL", 780);
/// assert_eq!(table.minimum_for("FR"), 1150);
/// assert_eq!(table.minimum_for("DE"), 600);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WageTable {
    minimums: HashMap<String, u64>,
    default_minimum: u64,
}

/// Fallback minimum for countries absent from the catalogue.
const DEFAULT_MINIMUM_CENTS: u64 = 500;

impl Default for WageTable {
    /// The reference catalogue: DE 1260, NL 1355, CN 350, SG 0,
    /// unknown codes 500.
    fn default() -> Self {
        Self::empty(DEFAULT_MINIMUM_CENTS)
            .with_country("DE", 1260)
            .with_country("NL", 1355)
            .with_country("CN", 350)
            .with_country("SG", 0)
    }
}

impl WageTable {
    /// Creates a table with no country entries and the given fallback.
    pub fn empty(default_minimum: u64) -> Self {
        Self {
            minimums: HashMap::new(),
            default_minimum,
        }
    }

    /// Adds or replaces a country entry.
    pub fn with_country(mut self, code: impl Into<String>, minimum_cents: u64) -> Self {
        self.minimums.insert(code.into(), minimum_cents);
        self
    }

    /// Sets the fallback minimum for unknown codes.
    pub fn with_default_minimum(mut self, minimum_cents: u64) -> Self {
        self.default_minimum = minimum_cents;
        self
    }

    /// Statutory minimum for a country, or the fallback if unknown.
    pub fn minimum_for(&self, country: &str) -> u64 {
        self.minimums
            .get(country)
            .copied()
            .unwrap_or(self.default_minimum)
    }

    /// Number of explicit country entries.
    pub fn country_count(&self) -> usize {
        self.minimums.len()
    }
}
