//! Coverage representations
//!
//! The facade accepts coverage in two shapes that coexisted in the legacy
//! quoting flow: an itemized per-category schedule and a single total
//! amount. [`CoverageSpec`] is the tagged union that resolves the two at the
//! entry point, so validation and summing live in exactly one place.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use crate::error::PricingError;

/// Product lines the legacy calculator quotes for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PolicyType {
    /// Buildings-only home policy
    Home,
    /// Contents-only policy
    Contents,
    /// Combined buildings and contents
    BuildingsAndContents,
}

impl PolicyType {
    /// Returns the wire code for this policy type
    pub fn code(&self) -> &'static str {
        match self {
            PolicyType::Home => "HOME",
            PolicyType::Contents => "CONTENTS",
            PolicyType::BuildingsAndContents => "BUILDINGS_AND_CONTENTS",
        }
    }
}

impl fmt::Display for PolicyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Well-known coverage category names
///
/// The schedule accepts arbitrary category names; these are the ones the
/// quoting flow sends today.
pub mod categories {
    pub const DWELLING: &str = "dwelling";
    pub const PERSONAL_PROPERTY: &str = "personalProperty";
    pub const LIABILITY: &str = "liability";
    pub const MEDICAL_PAYMENTS: &str = "medicalPayments";
}

/// An itemized coverage schedule: category name to ZAR amount
pub type CoverageMap = HashMap<String, Decimal>;

/// Coverage supplied with a quote request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum CoverageSpec {
    /// Per-category schedule (legacy mode)
    Itemized(CoverageMap),
    /// Single total coverage amount
    Total(Decimal),
}

impl CoverageSpec {
    /// Resolves the coverage to a validated total amount
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::InvalidTotalCoverage`] when an itemized
    /// schedule is empty or sums to a non-positive amount, and
    /// [`PricingError::InvalidCoverageAmount`] for a non-positive total.
    pub fn validated_total(&self) -> Result<Decimal, PricingError> {
        match self {
            CoverageSpec::Itemized(schedule) => {
                if schedule.is_empty() {
                    return Err(PricingError::total_coverage(
                        "coverage schedule has no categories",
                    ));
                }
                let total: Decimal = schedule.values().sum();
                if total <= dec!(0) {
                    return Err(PricingError::total_coverage(format!(
                        "coverage schedule must sum to a positive amount, got {total}"
                    )));
                }
                Ok(total)
            }
            CoverageSpec::Total(amount) => {
                if *amount <= dec!(0) {
                    return Err(PricingError::coverage_amount(format!(
                        "coverage amount must be greater than zero, got {amount}"
                    )));
                }
                Ok(*amount)
            }
        }
    }
}

/// Sums an optional itemized schedule
///
/// Legacy helper: absent or empty schedules sum to zero rather than
/// erroring, so callers that only need a display total never fail.
pub fn total_coverage(schedule: Option<&CoverageMap>) -> Decimal {
    schedule
        .map(|map| map.values().sum())
        .unwrap_or_else(|| dec!(0))
}
