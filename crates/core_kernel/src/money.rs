//! Money and rate types with precise decimal arithmetic
//!
//! This module provides type-safe representations of monetary values and
//! annual rates using rust_decimal, so premium figures never pick up
//! floating-point noise.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};
use thiserror::Error;

/// Currency codes following ISO 4217
///
/// ZAR is the primary currency of the pricing engine; the other codes exist
/// for cross-border quoting support.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    ZAR,
    USD,
    EUR,
    GBP,
}

impl Currency {
    /// Returns the number of decimal places for this currency
    pub fn decimal_places(&self) -> u32 {
        2
    }

    /// Returns the currency symbol
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::ZAR => "R",
            Currency::USD => "$",
            Currency::EUR => "€",
            Currency::GBP => "£",
        }
    }

    /// Returns the ISO 4217 code
    pub fn code(&self) -> &'static str {
        match self {
            Currency::ZAR => "ZAR",
            Currency::USD => "USD",
            Currency::EUR => "EUR",
            Currency::GBP => "GBP",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Errors that can occur during money operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MoneyError {
    #[error("Currency mismatch: cannot operate on {0} and {1}")]
    CurrencyMismatch(String, String),

    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Division by zero")]
    DivisionByZero,
}

/// A monetary amount with associated currency
///
/// Amounts are held at 4 decimal places internally so intermediate rate
/// arithmetic keeps sub-cent precision; [`Money::round_cents`] produces the
/// customer-facing 2-decimal figure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Money {
    amount: Decimal,
    currency: Currency,
}

impl Money {
    /// Creates a new Money value
    pub fn new(amount: Decimal, currency: Currency) -> Self {
        Self {
            amount: amount.round_dp(4),
            currency,
        }
    }

    /// Creates a rand-denominated amount
    pub fn zar(amount: Decimal) -> Self {
        Self::new(amount, Currency::ZAR)
    }

    /// Creates a zero amount in the specified currency
    pub fn zero(currency: Currency) -> Self {
        Self {
            amount: dec!(0),
            currency,
        }
    }

    /// Returns the amount
    pub fn amount(&self) -> Decimal {
        self.amount
    }

    /// Returns the currency
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Returns true if the amount is zero
    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    /// Returns true if the amount is positive
    pub fn is_positive(&self) -> bool {
        self.amount.is_sign_positive() && !self.amount.is_zero()
    }

    /// Returns true if the amount is negative
    pub fn is_negative(&self) -> bool {
        self.amount.is_sign_negative() && !self.amount.is_zero()
    }

    /// Rounds to whole cents using round-half-up
    ///
    /// Every money figure returned to a caller goes through this exactly
    /// once; intermediate arithmetic stays unrounded.
    pub fn round_cents(&self) -> Self {
        Self {
            amount: self.amount.round_dp_with_strategy(
                self.currency.decimal_places(),
                rust_decimal::RoundingStrategy::MidpointAwayFromZero,
            ),
            currency: self.currency,
        }
    }

    /// Checked addition that returns an error on currency mismatch
    pub fn checked_add(&self, other: &Money) -> Result<Money, MoneyError> {
        if self.currency != other.currency {
            return Err(MoneyError::CurrencyMismatch(
                self.currency.to_string(),
                other.currency.to_string(),
            ));
        }
        Ok(Self::new(self.amount + other.amount, self.currency))
    }

    /// Checked subtraction that returns an error on currency mismatch
    pub fn checked_sub(&self, other: &Money) -> Result<Money, MoneyError> {
        if self.currency != other.currency {
            return Err(MoneyError::CurrencyMismatch(
                self.currency.to_string(),
                other.currency.to_string(),
            ));
        }
        Ok(Self::new(self.amount - other.amount, self.currency))
    }

    /// Multiplies by a scalar (e.g., for rate calculations)
    pub fn multiply(&self, factor: Decimal) -> Self {
        Self::new(self.amount * factor, self.currency)
    }

    /// Divides by a scalar
    pub fn divide(&self, divisor: Decimal) -> Result<Self, MoneyError> {
        if divisor.is_zero() {
            return Err(MoneyError::DivisionByZero);
        }
        Ok(Self::new(self.amount / divisor, self.currency))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dp = self.currency.decimal_places();
        write!(
            f,
            "{} {:.dp$}",
            self.currency.symbol(),
            self.amount,
            dp = dp as usize
        )
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        self.checked_add(&other)
            .expect("Currency mismatch in Money::add")
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        self.checked_sub(&other)
            .expect("Currency mismatch in Money::sub")
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.amount, self.currency)
    }
}

impl Mul<Decimal> for Money {
    type Output = Self;

    fn mul(self, factor: Decimal) -> Self {
        self.multiply(factor)
    }
}

/// An annual percentage rate expressed as a decimal fraction
///
/// Rates flow through the dynamic-rate pipeline as plain fractions
/// (0.012 = 1.2% per annum) and are clamped into configured bounds before
/// they ever touch a premium figure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Rate {
    value: Decimal,
}

impl Rate {
    /// Creates a rate from a decimal fraction (e.g., 0.012 for 1.2%)
    pub fn new(value: Decimal) -> Self {
        Self { value }
    }

    /// Creates a rate from a percentage (e.g., 1.2 for 1.2%)
    pub fn from_percentage(percentage: Decimal) -> Self {
        Self {
            value: percentage / dec!(100),
        }
    }

    /// Returns the rate as a decimal fraction
    pub fn as_decimal(&self) -> Decimal {
        self.value
    }

    /// Returns the rate as a percentage
    pub fn as_percentage(&self) -> Decimal {
        self.value * dec!(100)
    }

    /// Applies this rate to a money amount
    pub fn apply(&self, money: &Money) -> Money {
        money.multiply(self.value)
    }

    /// Clamps the rate into the inclusive `[floor, ceiling]` interval
    pub fn clamp(&self, floor: Rate, ceiling: Rate) -> Rate {
        if self.value < floor.value {
            floor
        } else if self.value > ceiling.value {
            ceiling
        } else {
            *self
        }
    }
}

impl fmt::Display for Rate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.as_percentage().round_dp(4))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zar_creation() {
        let m = Money::zar(dec!(1250.50));
        assert_eq!(m.amount(), dec!(1250.50));
        assert_eq!(m.currency(), Currency::ZAR);
        assert_eq!(m.to_string(), "R 1250.50");
    }

    #[test]
    fn test_money_arithmetic() {
        let a = Money::zar(dec!(100.00));
        let b = Money::zar(dec!(50.00));

        assert_eq!((a + b).amount(), dec!(150.00));
        assert_eq!((a - b).amount(), dec!(50.00));
    }

    #[test]
    fn test_currency_mismatch() {
        let zar = Money::zar(dec!(100.00));
        let usd = Money::new(dec!(100.00), Currency::USD);

        let result = zar.checked_add(&usd);
        assert!(matches!(result, Err(MoneyError::CurrencyMismatch(_, _))));
    }

    #[test]
    fn test_round_cents_is_half_up() {
        // Midpoints round away from zero, not to even.
        assert_eq!(Money::zar(dec!(0.125)).round_cents().amount(), dec!(0.13));
        assert_eq!(Money::zar(dec!(0.135)).round_cents().amount(), dec!(0.14));
        assert_eq!(Money::zar(dec!(-0.125)).round_cents().amount(), dec!(-0.13));
    }

    #[test]
    fn test_divide_by_zero() {
        let m = Money::zar(dec!(100));
        assert_eq!(m.divide(dec!(0)), Err(MoneyError::DivisionByZero));
    }

    #[test]
    fn test_rate_conversions() {
        let rate = Rate::from_percentage(dec!(1.2));
        assert_eq!(rate.as_decimal(), dec!(0.012));
        assert_eq!(rate.as_percentage(), dec!(1.2));
    }

    #[test]
    fn test_rate_application() {
        let rate = Rate::new(dec!(0.012));
        let coverage = Money::zar(dec!(100000));

        assert_eq!(rate.apply(&coverage).amount(), dec!(1200));
    }

    #[test]
    fn test_rate_clamp() {
        let floor = Rate::new(dec!(0.007));
        let ceiling = Rate::new(dec!(0.015));

        assert_eq!(Rate::new(dec!(0.02)).clamp(floor, ceiling), ceiling);
        assert_eq!(Rate::new(dec!(0.001)).clamp(floor, ceiling), floor);
        assert_eq!(
            Rate::new(dec!(0.011)).clamp(floor, ceiling),
            Rate::new(dec!(0.011))
        );
    }
}
