//! Pricing Domain
//!
//! This crate implements the premium calculation engine for the insurance
//! platform: a pure, synchronous, stateless pricing core invoked by the
//! policy-quoting flow.
//!
//! # Architecture
//!
//! Leaves first:
//! - **Rate bounds & tier table** (`limits`): the authoritative constants
//!   every calculation mode must respect
//! - **Risk factor model** (`risk`): pure functions turning optional
//!   location/demographics/property inputs into clamped multiplicative
//!   factors
//! - **Dynamic rate calculator** (`rates`): base rate x risk multiplier x
//!   volume discount, clamped into bounds
//! - **Premium calculator facade** (`calculator`): the three calculation
//!   modes plus quote numbers and coverage-limit introspection
//!
//! No component performs I/O; every operation is a deterministic function
//! of its inputs (modulo the randomness in quote-number generation) and is
//! safe to invoke concurrently without coordination.
//!
//! # Example
//!
//! ```rust,ignore
//! use domain_pricing::{PremiumCalculator, RiskFactors};
//! use rust_decimal_macros::dec;
//!
//! let calculator = PremiumCalculator::new();
//! let quote = calculator.calculate_premium_per_amount(
//!     PolicyType::Home,
//!     dec!(350000),
//!     &RiskFactors::none(),
//!     None,
//! )?;
//! println!("{} per month", quote.monthly_premium);
//! ```

pub mod calculator;
pub mod coverage;
pub mod error;
pub mod limits;
pub mod quote;
pub mod rates;
pub mod risk;

pub use calculator::{PremiumBreakdown, PremiumCalculator, PremiumResult};
pub use coverage::{total_coverage, CoverageMap, CoverageSpec, PolicyType};
pub use error::PricingError;
pub use limits::{CoverageLimits, RateTable};
pub use quote::{ParseQuoteNumberError, QuoteNumber};
pub use rates::{effective_annual_rate, volume_factor};
pub use risk::{
    assess, CrimeRate, Demographics, LocationRisk, PropertyRisk, RiskAssessment, RiskFactors,
};
