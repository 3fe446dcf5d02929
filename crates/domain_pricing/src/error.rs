//! Pricing domain errors
//!
//! This module defines all error types that can occur within the
//! pricing domain.

use thiserror::Error;

/// Errors that can occur during premium calculation
///
/// Calculations are pure, so there are no transient failure modes: every
/// error is a terminal input-validation failure surfaced immediately to the
/// caller.
#[derive(Debug, Error)]
pub enum PricingError {
    /// Coverage amount is non-positive or outside configured bounds
    #[error("Invalid coverage amount: {0}")]
    InvalidCoverageAmount(String),

    /// Itemized coverage schedule is empty or sums to a non-positive total
    #[error("Invalid total coverage: {0}")]
    InvalidTotalCoverage(String),

    /// Requested tier is not in the recommended-tiers list
    #[error("Invalid tier: {0}")]
    InvalidTier(String),
}

impl PricingError {
    /// Creates an invalid coverage amount error
    pub fn coverage_amount(message: impl Into<String>) -> Self {
        PricingError::InvalidCoverageAmount(message.into())
    }

    /// Creates an invalid total coverage error
    pub fn total_coverage(message: impl Into<String>) -> Self {
        PricingError::InvalidTotalCoverage(message.into())
    }

    /// Creates an invalid tier error
    pub fn tier(message: impl Into<String>) -> Self {
        PricingError::InvalidTier(message.into())
    }
}
