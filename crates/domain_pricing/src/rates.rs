//! Dynamic rate calculation
//!
//! Produces the single effective annual rate used by amount-based quoting:
//! nominal base rate, times the combined risk multiplier, times a volume
//! discount that rewards larger sums insured, clamped into the configured
//! floor/ceiling before it ever touches a premium figure.

use core_kernel::Rate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tracing::debug;

use crate::limits::RateTable;
use crate::risk::RiskAssessment;

/// Volume discount curve as (coverage amount, discount factor) breakpoints.
///
/// Linear interpolation between adjacent points, flat beyond either end,
/// so the factor is non-increasing across the whole amount axis.
const VOLUME_CURVE: [(Decimal, Decimal); 5] = [
    (dec!(30000), dec!(1.00)),
    (dec!(100000), dec!(0.97)),
    (dec!(250000), dec!(0.93)),
    (dec!(500000), dec!(0.89)),
    (dec!(1000000), dec!(0.85)),
];

/// Returns the volume discount factor for a coverage amount
pub fn volume_factor(amount: Decimal) -> Decimal {
    let (first_amount, first_factor) = VOLUME_CURVE[0];
    if amount <= first_amount {
        return first_factor;
    }

    for window in VOLUME_CURVE.windows(2) {
        let (lo_amount, lo_factor) = window[0];
        let (hi_amount, hi_factor) = window[1];
        if amount <= hi_amount {
            let progress = (amount - lo_amount) / (hi_amount - lo_amount);
            return lo_factor + (hi_factor - lo_factor) * progress;
        }
    }

    VOLUME_CURVE[VOLUME_CURVE.len() - 1].1
}

/// Computes the effective annual rate for a coverage amount and assessment
///
/// The returned rate always lies inside the table's floor/ceiling bounds,
/// regardless of how extreme the risk multiplier is.
pub fn effective_annual_rate(
    table: &RateTable,
    amount: Decimal,
    assessment: &RiskAssessment,
) -> Rate {
    let raw = table.base_annual_rate * assessment.multiplier * volume_factor(amount);
    let (floor, ceiling) = table.rate_bounds();
    let rate = Rate::new(raw).clamp(floor, ceiling);

    if rate.as_decimal() != raw {
        debug!(%raw, clamped = %rate, "dynamic rate clamped into bounds");
    }

    rate
}
