//! Rate bounds and coverage tier table
//!
//! Holds the authoritative constants every calculation mode must respect.
//! The table is a plain value handed to the calculator at construction, so
//! a test or a product variant can run against different bounds without
//! touching global state.

use core_kernel::Rate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::PricingError;

/// Flat annual rate charged by the simplified model (1.2% of coverage)
pub const FLAT_ANNUAL_RATE: Decimal = dec!(0.012);

/// Nominal base annual rate the dynamic model starts from
pub const BASE_ANNUAL_RATE: Decimal = dec!(0.011);

/// Dynamic-rate floor (0.7% per annum)
pub const RATE_FLOOR: Decimal = dec!(0.007);

/// Dynamic-rate ceiling (1.5% per annum)
pub const RATE_CEILING: Decimal = dec!(0.015);

/// Minimum coverage the simplified model is sold at
pub const MIN_COVERAGE: Decimal = dec!(30000);

/// Maximum coverage the simplified model is sold at
pub const MAX_COVERAGE: Decimal = dec!(200000);

/// Coverage amounts offered as quick-select tiers in the quoting flow
pub const RECOMMENDED_TIERS: [Decimal; 6] = [
    dec!(30000),
    dec!(50000),
    dec!(75000),
    dec!(100000),
    dec!(150000),
    dec!(200000),
];

/// The rate configuration a calculator instance runs against
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateTable {
    /// Simplified-model flat annual rate
    pub flat_annual_rate: Decimal,
    /// Dynamic-model nominal base annual rate
    pub base_annual_rate: Decimal,
    /// Lower clamp applied to every computed dynamic rate
    pub rate_floor: Decimal,
    /// Upper clamp applied to every computed dynamic rate
    pub rate_ceiling: Decimal,
    /// Simplified-model minimum coverage
    pub min_coverage: Decimal,
    /// Simplified-model maximum coverage
    pub max_coverage: Decimal,
    /// Ordered recommended coverage tiers
    pub recommended_tiers: Vec<Decimal>,
}

impl Default for RateTable {
    fn default() -> Self {
        Self {
            flat_annual_rate: FLAT_ANNUAL_RATE,
            base_annual_rate: BASE_ANNUAL_RATE,
            rate_floor: RATE_FLOOR,
            rate_ceiling: RATE_CEILING,
            min_coverage: MIN_COVERAGE,
            max_coverage: MAX_COVERAGE,
            recommended_tiers: RECOMMENDED_TIERS.to_vec(),
        }
    }
}

impl RateTable {
    /// Returns the dynamic-rate clamp bounds as rates
    pub fn rate_bounds(&self) -> (Rate, Rate) {
        (Rate::new(self.rate_floor), Rate::new(self.rate_ceiling))
    }

    /// Returns true when the amount is one of the recommended tiers
    pub fn is_recommended_tier(&self, amount: Decimal) -> bool {
        self.recommended_tiers.contains(&amount)
    }

    /// Returns the coverage limits descriptor for callers and UI layers
    pub fn coverage_limits(&self) -> CoverageLimits {
        CoverageLimits {
            min: self.min_coverage,
            max: self.max_coverage,
            recommended_tiers: self.recommended_tiers.clone(),
        }
    }
}

/// Static coverage-limit descriptor
///
/// Used by validation and UI layers; the legacy/full calculation mode has
/// no ceiling and never consults this.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoverageLimits {
    /// Minimum insurable coverage (ZAR)
    pub min: Decimal,
    /// Maximum insurable coverage (ZAR)
    pub max: Decimal,
    /// Ordered recommended coverage tiers (ZAR)
    pub recommended_tiers: Vec<Decimal>,
}

impl CoverageLimits {
    /// Returns true when the amount falls inside the inclusive bounds
    pub fn contains(&self, amount: Decimal) -> bool {
        amount >= self.min && amount <= self.max
    }

    /// Validates an amount against the bounds
    ///
    /// Bounds enforcement for the simplified model is a caller
    /// responsibility; this is the helper those callers use.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::InvalidCoverageAmount`] naming the allowed
    /// range when the amount is outside it.
    pub fn validate(&self, amount: Decimal) -> Result<(), PricingError> {
        if self.contains(amount) {
            return Ok(());
        }
        Err(PricingError::coverage_amount(format!(
            "coverage amount {amount} is outside the allowed range R{min}-R{max}",
            min = self.min,
            max = self.max,
        )))
    }
}
