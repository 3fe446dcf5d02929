//! Premium calculator facade
//!
//! The public entry point of the pricing engine. Exposes three calculation
//! modes: the legacy itemized-coverage premium, the amount-based premium
//! with risk factors, and the simplified flat-rate model, plus quote-number
//! generation and coverage-limit introspection.
//!
//! A calculator is an explicitly constructed value carrying its
//! [`RateTable`]; build one per process or request context and pass it
//! where needed rather than reaching for global state.
//!
//! # Rounding discipline
//!
//! Intermediate figures stay unrounded; each money field of a result is
//! rounded to cents (round-half-up) exactly once, at construction. The
//! annual premium and the adjusted premium are the same rounded figure, so
//! the two compare equal exactly; the monthly premium is rounded
//! independently and may drift from `annual / 12` by fractions of a cent.

use core_kernel::{Money, Rate};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::coverage::{total_coverage, CoverageMap, CoverageSpec, PolicyType};
use crate::error::PricingError;
use crate::limits::{CoverageLimits, RateTable};
use crate::quote::QuoteNumber;
use crate::rates::effective_annual_rate;
use crate::risk::{assess, RiskFactors};

/// Voluntary-excess credit per full R1,000 of deductible
const DEDUCTIBLE_CREDIT_PER_1000: Decimal = dec!(0.01);

/// Ceiling on the total voluntary-excess credit
const MAX_DEDUCTIBLE_CREDIT: Decimal = dec!(0.10);

/// Per-component detail accompanying a premium figure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PremiumBreakdown {
    /// Total coverage the premium was computed against
    pub base_coverage: Money,
    /// Premium movement attributable to risk factors (signed)
    pub risk_adjustment: Money,
    /// Location factor used in the assessment
    pub location_factor: Decimal,
    /// Age factor used in the assessment
    pub age_factor: Decimal,
    /// Total credits applied (voluntary excess)
    pub discounts: Money,
}

/// The universal output of every calculation mode
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PremiumResult {
    /// Premium at the nominal base rate, before risk adjustment
    pub base_premium: Money,
    /// Premium after risk adjustment and credits
    pub adjusted_premium: Money,
    /// Combined risk multiplier applied
    pub risk_multiplier: Decimal,
    /// Monthly installment
    pub monthly_premium: Money,
    /// Annual premium; equals `adjusted_premium`
    pub annual_premium: Money,
    /// Per-component detail
    pub breakdown: PremiumBreakdown,
}

/// Premium calculation service
///
/// Pure and stateless apart from its rate configuration: safe to share
/// across request-handling tasks without coordination.
#[derive(Debug, Clone)]
pub struct PremiumCalculator {
    table: RateTable,
}

impl PremiumCalculator {
    /// Creates a calculator with the standard rate table
    pub fn new() -> Self {
        Self {
            table: RateTable::default(),
        }
    }

    /// Creates a calculator with an explicit rate table
    pub fn with_table(table: RateTable) -> Self {
        Self { table }
    }

    /// Returns the rate table this calculator runs against
    pub fn table(&self) -> &RateTable {
        &self.table
    }

    /// Calculates a premium for an itemized coverage schedule (legacy mode)
    ///
    /// Sums the schedule to a total, assesses the risk factors, and prices
    /// at the dynamic rate.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::InvalidTotalCoverage`] when the schedule is
    /// empty or sums to a non-positive amount.
    pub fn calculate_premium(
        &self,
        policy_type: PolicyType,
        coverage: &CoverageMap,
        risk_factors: &RiskFactors,
        deductible: Option<Decimal>,
    ) -> Result<PremiumResult, PricingError> {
        let spec = CoverageSpec::Itemized(coverage.clone());
        self.quote(policy_type, &spec, risk_factors, deductible)
    }

    /// Calculates a premium for a single total coverage amount
    ///
    /// Same risk/dynamic-rate pipeline as the itemized mode, against one
    /// total figure. The annual premium equals the adjusted premium
    /// exactly.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::InvalidCoverageAmount`] for non-positive
    /// amounts.
    pub fn calculate_premium_per_amount(
        &self,
        policy_type: PolicyType,
        coverage_amount: Decimal,
        risk_factors: &RiskFactors,
        deductible: Option<Decimal>,
    ) -> Result<PremiumResult, PricingError> {
        let spec = CoverageSpec::Total(coverage_amount);
        self.quote(policy_type, &spec, risk_factors, deductible)
    }

    /// Calculates a flat-rate premium (simplified model)
    ///
    /// No risk factors are accepted or considered: the annual premium is
    /// exactly the flat rate times the coverage amount, and the risk
    /// multiplier is exactly 1.0.
    ///
    /// This method does not enforce the coverage bounds; callers that sell
    /// the simplified model use [`CoverageLimits::validate`] before
    /// quoting.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::InvalidCoverageAmount`] when the amount is
    /// non-positive.
    pub fn calculate_simple_premium(
        &self,
        coverage_amount: Decimal,
    ) -> Result<PremiumResult, PricingError> {
        if coverage_amount <= dec!(0) {
            return Err(PricingError::coverage_amount(format!(
                "coverage amount must be greater than zero, got {coverage_amount}"
            )));
        }

        let annual_raw = coverage_amount * self.table.flat_annual_rate;
        let annual = Money::zar(annual_raw).round_cents();
        let monthly = Money::zar(annual_raw / dec!(12)).round_cents();

        debug!(coverage = %coverage_amount, annual = %annual, "computed flat-rate premium");

        Ok(PremiumResult {
            base_premium: annual,
            adjusted_premium: annual,
            risk_multiplier: dec!(1.0),
            monthly_premium: monthly,
            annual_premium: annual,
            breakdown: PremiumBreakdown {
                base_coverage: Money::zar(coverage_amount).round_cents(),
                risk_adjustment: Money::zar(dec!(0)),
                location_factor: dec!(1.0),
                age_factor: dec!(1.0),
                discounts: Money::zar(dec!(0)),
            },
        })
    }

    /// Computes the effective annual rate without a full premium breakdown
    pub fn calculate_dynamic_rate(
        &self,
        coverage_amount: Decimal,
        risk_factors: &RiskFactors,
    ) -> Rate {
        effective_annual_rate(&self.table, coverage_amount, &assess(risk_factors))
    }

    /// Generates a fresh quote number
    pub fn generate_quote_number(&self) -> QuoteNumber {
        QuoteNumber::generate()
    }

    /// Returns the static coverage-limits descriptor
    pub fn coverage_limits(&self) -> CoverageLimits {
        self.table.coverage_limits()
    }

    /// Calculates a flat-rate premium for a recommended coverage tier
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::InvalidTier`] when the tier is not in the
    /// recommended list.
    pub fn calculate_tier_premium(&self, tier: Decimal) -> Result<PremiumResult, PricingError> {
        if !self.table.is_recommended_tier(tier) {
            let tiers = self
                .table
                .recommended_tiers
                .iter()
                .map(|t| t.to_string())
                .collect::<Vec<_>>()
                .join(", ");
            return Err(PricingError::tier(format!(
                "{tier} is not a recommended coverage tier (expected one of: {tiers})"
            )));
        }
        self.calculate_simple_premium(tier)
    }

    /// Sums an optional itemized schedule (legacy helper)
    ///
    /// Absent schedules sum to zero rather than erroring.
    pub fn total_coverage(&self, coverage: Option<&CoverageMap>) -> Decimal {
        total_coverage(coverage)
    }

    /// Shared risk-adjusted pipeline behind both legacy modes
    fn quote(
        &self,
        policy_type: PolicyType,
        coverage: &CoverageSpec,
        risk_factors: &RiskFactors,
        deductible: Option<Decimal>,
    ) -> Result<PremiumResult, PricingError> {
        let amount = coverage.validated_total()?;
        let assessment = assess(risk_factors);
        let rate = effective_annual_rate(&self.table, amount, &assessment);

        let base_raw = amount * self.table.base_annual_rate;
        let risk_raw = amount * rate.as_decimal();
        let credit_raw = risk_raw * deductible_credit(deductible);
        let adjusted_raw = risk_raw - credit_raw;

        let annual = Money::zar(adjusted_raw).round_cents();
        let monthly = Money::zar(adjusted_raw / dec!(12)).round_cents();

        debug!(
            policy_type = %policy_type,
            coverage = %amount,
            rate = %rate,
            multiplier = %assessment.multiplier,
            annual = %annual,
            "computed risk-adjusted premium"
        );

        Ok(PremiumResult {
            base_premium: Money::zar(base_raw).round_cents(),
            adjusted_premium: annual,
            risk_multiplier: assessment.multiplier,
            monthly_premium: monthly,
            annual_premium: annual,
            breakdown: PremiumBreakdown {
                base_coverage: Money::zar(amount).round_cents(),
                risk_adjustment: Money::zar(risk_raw - base_raw).round_cents(),
                location_factor: assessment.location_factor,
                age_factor: assessment.age_factor,
                discounts: Money::zar(credit_raw).round_cents(),
            },
        })
    }
}

impl Default for PremiumCalculator {
    fn default() -> Self {
        Self::new()
    }
}

/// Credit fraction earned by a voluntary excess: 1% per full R1,000,
/// capped, and nothing for absent or non-positive deductibles.
fn deductible_credit(deductible: Option<Decimal>) -> Decimal {
    let Some(deductible) = deductible else {
        return dec!(0);
    };
    if deductible <= dec!(0) {
        return dec!(0);
    }

    let thousands = (deductible / dec!(1000)).floor();
    (thousands * DEDUCTIBLE_CREDIT_PER_1000).min(MAX_DEDUCTIBLE_CREDIT)
}
