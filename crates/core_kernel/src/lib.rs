//! Core Kernel - Foundational types for the pricing engine
//!
//! This crate provides the fundamental building blocks used by the pricing
//! domain:
//! - Money types with precise decimal arithmetic and cent rounding
//! - Annual rate values with bound clamping

pub mod money;

pub use money::{Currency, Money, MoneyError, Rate};
