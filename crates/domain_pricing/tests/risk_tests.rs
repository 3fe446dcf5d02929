//! Risk Model Property Tests
//!
//! Property-based coverage for the invariants the pricing engine guarantees
//! across arbitrary inputs: factor clamping, rate bounds, volume-discount
//! monotonicity, and the cross-field consistency of every premium result.

use core_kernel::Money;
use domain_pricing::limits::RateTable;
use domain_pricing::risk::{assess, FACTOR_CEILING, FACTOR_FLOOR};
use domain_pricing::{volume_factor, PolicyType, PremiumCalculator};
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use test_utils::{
    assert_premium_invariants, assert_rate_within_bounds, coverage_amount_strategy,
    coverage_map_strategy, risk_factors_strategy, simple_coverage_amount_strategy,
};

proptest! {
    /// Every sub-factor stays clamped and the multiplier stays positive,
    /// whatever combination of sections, descriptors, and tags arrives
    #[test]
    fn assessment_factors_always_clamped(factors in risk_factors_strategy()) {
        let assessment = assess(&factors);

        for factor in [
            assessment.age_factor,
            assessment.location_factor,
            assessment.property_factor,
        ] {
            prop_assert!(factor >= FACTOR_FLOOR);
            prop_assert!(factor <= FACTOR_CEILING);
        }
        prop_assert!(assessment.multiplier > dec!(0));
    }

    /// The dynamic rate lands inside the configured bounds for any
    /// amount/risk combination
    #[test]
    fn dynamic_rate_always_bounded(
        amount in coverage_amount_strategy(),
        factors in risk_factors_strategy(),
    ) {
        let calculator = PremiumCalculator::new();
        let rate = calculator.calculate_dynamic_rate(amount, &factors);

        assert_rate_within_bounds(rate, calculator.table());
    }

    /// The volume discount never increases with the amount
    #[test]
    fn volume_factor_non_increasing(
        smaller in 1i64..5_000_000i64,
        step in 0i64..5_000_000i64,
    ) {
        let lo = Decimal::from(smaller);
        let hi = Decimal::from(smaller + step);

        prop_assert!(volume_factor(hi) <= volume_factor(lo));
    }

    /// Simplified-mode contract over the sold range: 1.2% per annum within
    /// cent rounding, and internally consistent monthly/annual figures
    #[test]
    fn simple_premium_contract(amount in simple_coverage_amount_strategy()) {
        let calculator = PremiumCalculator::new();
        let result = calculator.calculate_simple_premium(amount).unwrap();

        let expected = Money::zar(amount * dec!(0.012)).round_cents();
        prop_assert_eq!(result.annual_premium.amount(), expected.amount());
        assert_premium_invariants(&result);
    }

    /// Amount-based quotes satisfy the cross-field invariants for any
    /// positive amount, risk inputs, and deductible
    #[test]
    fn amount_mode_invariants(
        amount in coverage_amount_strategy(),
        factors in risk_factors_strategy(),
        deductible in proptest::option::of(0i64..100_000i64),
    ) {
        let calculator = PremiumCalculator::new();
        let result = calculator
            .calculate_premium_per_amount(
                PolicyType::Home,
                amount,
                &factors,
                deductible.map(Decimal::from),
            )
            .unwrap();

        assert_premium_invariants(&result);
    }

    /// A deductible only ever reduces the premium, and by at most the cap
    #[test]
    fn deductible_credit_bounded(
        amount in 10_000i64..2_000_000i64,
        factors in risk_factors_strategy(),
        deductible in 1i64..1_000_000i64,
    ) {
        let calculator = PremiumCalculator::new();
        let amount = Decimal::from(amount);

        let without = calculator
            .calculate_premium_per_amount(PolicyType::Home, amount, &factors, None)
            .unwrap();
        let with = calculator
            .calculate_premium_per_amount(
                PolicyType::Home,
                amount,
                &factors,
                Some(Decimal::from(deductible)),
            )
            .unwrap();

        prop_assert!(with.annual_premium.amount() <= without.annual_premium.amount());
        let floor = without.annual_premium.amount() * dec!(0.90) - dec!(0.01);
        prop_assert!(with.annual_premium.amount() >= floor);
    }

    /// Itemized schedules price identically to their summed totals
    #[test]
    fn itemized_matches_summed_total(
        schedule in coverage_map_strategy(),
        factors in risk_factors_strategy(),
    ) {
        let calculator = PremiumCalculator::new();
        let total: Decimal = schedule.values().sum();

        let itemized = calculator
            .calculate_premium(PolicyType::Home, &schedule, &factors, None)
            .unwrap();
        let per_amount = calculator
            .calculate_premium_per_amount(PolicyType::Home, total, &factors, None)
            .unwrap();

        prop_assert_eq!(itemized.annual_premium, per_amount.annual_premium);
        prop_assert_eq!(itemized.risk_multiplier, per_amount.risk_multiplier);
    }

    /// Rates only move within the clamp band, so premiums scale at most
    /// ceiling/floor apart for the same amount
    #[test]
    fn premium_spread_bounded_by_rate_band(
        amount in 10_000i64..2_000_000i64,
        a in risk_factors_strategy(),
        b in risk_factors_strategy(),
    ) {
        let calculator = PremiumCalculator::new();
        let table = RateTable::default();
        let amount = Decimal::from(amount);

        let quote_a = calculator
            .calculate_premium_per_amount(PolicyType::Home, amount, &a, None)
            .unwrap();
        let quote_b = calculator
            .calculate_premium_per_amount(PolicyType::Home, amount, &b, None)
            .unwrap();

        let ratio_cap = table.rate_ceiling / table.rate_floor;
        let (lo, hi) = if quote_a.annual_premium.amount() <= quote_b.annual_premium.amount() {
            (quote_a.annual_premium.amount(), quote_b.annual_premium.amount())
        } else {
            (quote_b.annual_premium.amount(), quote_a.annual_premium.amount())
        };

        // Half-cent rounding slack on both figures.
        prop_assert!(hi <= lo * ratio_cap + dec!(0.02));
    }
}
