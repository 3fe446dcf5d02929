//! Custom Test Assertions
//!
//! Specialized assertion helpers for pricing types that give more
//! meaningful failure messages than the standard macros.

use core_kernel::{Money, Rate};
use domain_pricing::limits::RateTable;
use domain_pricing::PremiumResult;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Asserts that two Money values are approximately equal within a tolerance
///
/// # Panics
///
/// Panics if the currencies differ or the amounts differ by more than
/// `tolerance`.
pub fn assert_money_approx_eq(actual: &Money, expected: &Money, tolerance: Decimal) {
    assert_eq!(
        actual.currency(),
        expected.currency(),
        "Currency mismatch: actual={}, expected={}",
        actual.currency(),
        expected.currency()
    );

    let diff = (actual.amount() - expected.amount()).abs();
    assert!(
        diff <= tolerance,
        "Money amounts differ by more than tolerance: actual={}, expected={}, diff={}, tolerance={}",
        actual.amount(),
        expected.amount(),
        diff,
        tolerance
    );
}

/// Asserts the cross-field invariants every premium result must satisfy
///
/// - `annual_premium` equals `adjusted_premium` exactly
/// - `monthly_premium * 12` matches `annual_premium` within cent rounding
/// - every money field is rounded to at most two decimals
/// - the risk multiplier is strictly positive
///
/// # Panics
///
/// Panics with a field-naming message when any invariant is violated.
pub fn assert_premium_invariants(result: &PremiumResult) {
    assert_eq!(
        result.annual_premium, result.adjusted_premium,
        "annual premium must equal adjusted premium"
    );

    // Twelve independently rounded installments can drift by up to half a
    // cent each from the exact division.
    let monthly_total = result.monthly_premium.multiply(dec!(12));
    assert_money_approx_eq(&monthly_total, &result.annual_premium, dec!(0.06));

    for (name, money) in [
        ("base_premium", &result.base_premium),
        ("adjusted_premium", &result.adjusted_premium),
        ("monthly_premium", &result.monthly_premium),
        ("annual_premium", &result.annual_premium),
        ("breakdown.base_coverage", &result.breakdown.base_coverage),
        ("breakdown.risk_adjustment", &result.breakdown.risk_adjustment),
        ("breakdown.discounts", &result.breakdown.discounts),
    ] {
        assert!(
            money.amount().scale() <= 2,
            "{name} not rounded to cents: {}",
            money.amount()
        );
    }

    assert!(
        result.risk_multiplier > dec!(0),
        "risk multiplier must be strictly positive, got {}",
        result.risk_multiplier
    );
}

/// Asserts that a rate lies inside the table's floor/ceiling bounds
///
/// # Panics
///
/// Panics when the rate falls outside the inclusive bounds.
pub fn assert_rate_within_bounds(rate: Rate, table: &RateTable) {
    let (floor, ceiling) = table.rate_bounds();
    assert!(
        rate >= floor && rate <= ceiling,
        "rate {} outside bounds [{}, {}]",
        rate,
        floor,
        ceiling
    );
}
