//! Quote number generation
//!
//! Quote numbers take the shape `QTE-<base36 timestamp>-<random suffix>`,
//! uppercase throughout. The millisecond timestamp makes them sortable by
//! issue time and the random suffix makes collisions within the same
//! millisecond vanishingly unlikely; uniqueness is not formally guaranteed.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use uuid::Uuid;

const QUOTE_PREFIX: &str = "QTE";
const SUFFIX_LEN: usize = 6;

/// A generated quote identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuoteNumber(String);

impl QuoteNumber {
    /// Generates a fresh quote number
    pub fn generate() -> Self {
        let timestamp = encode_base36(chrono::Utc::now().timestamp_millis().unsigned_abs());
        let suffix: String = Uuid::new_v4()
            .simple()
            .to_string()
            .chars()
            .take(SUFFIX_LEN)
            .collect::<String>()
            .to_ascii_uppercase();

        Self(format!("{QUOTE_PREFIX}-{timestamp}-{suffix}"))
    }

    /// Returns the quote number as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for QuoteNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error returned when parsing a malformed quote number
#[derive(Debug, Error, PartialEq, Eq)]
#[error("Malformed quote number: {0}")]
pub struct ParseQuoteNumberError(String);

impl FromStr for QuoteNumber {
    type Err = ParseQuoteNumberError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split('-').collect();
        let segment_ok = |segment: &str| {
            !segment.is_empty()
                && segment
                    .chars()
                    .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
        };

        if parts.len() == 3 && parts[0] == QUOTE_PREFIX && segment_ok(parts[1]) && segment_ok(parts[2])
        {
            Ok(Self(s.to_string()))
        } else {
            Err(ParseQuoteNumberError(s.to_string()))
        }
    }
}

fn encode_base36(mut value: u64) -> String {
    const ALPHABET: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

    if value == 0 {
        return "0".to_string();
    }

    let mut digits = Vec::new();
    while value > 0 {
        digits.push(ALPHABET[(value % 36) as usize] as char);
        value /= 36;
    }

    digits.into_iter().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_shape() {
        let quote = QuoteNumber::generate();
        let parts: Vec<&str> = quote.as_str().split('-').collect();

        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0], "QTE");
        assert!(!parts[1].is_empty());
        assert_eq!(parts[2].len(), SUFFIX_LEN);
        for segment in &parts[1..] {
            assert!(
                segment
                    .chars()
                    .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()),
                "unexpected character in {segment}"
            );
        }
    }

    #[test]
    fn test_successive_numbers_differ() {
        assert_ne!(QuoteNumber::generate(), QuoteNumber::generate());
    }

    #[test]
    fn test_parse_round_trip() {
        let quote = QuoteNumber::generate();
        let parsed: QuoteNumber = quote.as_str().parse().unwrap();

        assert_eq!(quote, parsed);
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert!("QTE-ABC".parse::<QuoteNumber>().is_err());
        assert!("POL-ABC-123".parse::<QuoteNumber>().is_err());
        assert!("QTE-abc-123".parse::<QuoteNumber>().is_err());
        assert!("QTE--123456".parse::<QuoteNumber>().is_err());
    }

    #[test]
    fn test_base36_encoding() {
        assert_eq!(encode_base36(0), "0");
        assert_eq!(encode_base36(35), "Z");
        assert_eq!(encode_base36(36), "10");
        assert_eq!(encode_base36(1295), "ZZ");
    }
}
