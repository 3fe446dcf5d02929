//! Pre-built Test Fixtures
//!
//! Ready-to-use pricing inputs for unit tests: coverage schedules at known
//! totals and risk profiles at known ends of the rating spectrum.

use domain_pricing::coverage::{categories, CoverageMap};
use domain_pricing::risk::{CrimeRate, Demographics, LocationRisk, PropertyRisk, RiskFactors};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Fixture for coverage test data
pub struct CoverageFixtures;

impl CoverageFixtures {
    /// A representative itemized home schedule, total R400,000
    pub fn standard_home_schedule() -> CoverageMap {
        let mut schedule = CoverageMap::new();
        schedule.insert(categories::DWELLING.to_string(), dec!(250000));
        schedule.insert(categories::PERSONAL_PROPERTY.to_string(), dec!(75000));
        schedule.insert(categories::LIABILITY.to_string(), dec!(50000));
        schedule.insert(categories::MEDICAL_PAYMENTS.to_string(), dec!(25000));
        schedule
    }

    /// The total of [`CoverageFixtures::standard_home_schedule`]
    pub fn standard_home_total() -> Decimal {
        dec!(400000)
    }

    /// A coverage amount in the middle of the simplified-model bounds
    pub fn mid_tier_amount() -> Decimal {
        dec!(100000)
    }
}

/// Fixture for risk-input test data
pub struct RiskFixtures;

impl RiskFixtures {
    /// A middle-aged applicant in a quiet Free State town with a secured,
    /// recently built brick house: rates near the bottom of the band
    pub fn low_risk_profile() -> RiskFactors {
        RiskFactors {
            location: Some(LocationRisk {
                province: Some("FS".to_string()),
                postal_code: Some("9301".to_string()),
                crime_rate: Some(CrimeRate::Low),
            }),
            demographics: Some(Demographics { age: Some(45) }),
            property: Some(PropertyRisk {
                year_built: Some(2018),
                floor_area_sqm: Some(180),
                construction_type: Some("BRICK".to_string()),
                roof_type: Some("TILE".to_string()),
                foundation_type: Some("SLAB".to_string()),
                heating_type: Some("ELECTRIC".to_string()),
                safety_features: vec![
                    "MONITORED_ALARM".to_string(),
                    "ELECTRIC_FENCING".to_string(),
                ],
                has_pool: false,
                has_garage: true,
                property_kind: Some("HOUSE".to_string()),
            }),
        }
    }

    /// A young applicant with an old thatched timber smallholding in
    /// high-crime Johannesburg: rates near the top of the band
    pub fn high_risk_profile() -> RiskFactors {
        RiskFactors {
            location: Some(LocationRisk {
                province: Some("GP".to_string()),
                postal_code: Some("2001".to_string()),
                crime_rate: Some(CrimeRate::High),
            }),
            demographics: Some(Demographics { age: Some(22) }),
            property: Some(PropertyRisk {
                year_built: Some(1955),
                floor_area_sqm: Some(520),
                construction_type: Some("TIMBER_FRAME".to_string()),
                roof_type: Some("THATCH".to_string()),
                foundation_type: Some("RAISED".to_string()),
                heating_type: Some("FIREPLACE".to_string()),
                safety_features: vec![],
                has_pool: true,
                has_garage: false,
                property_kind: Some("SMALLHOLDING".to_string()),
            }),
        }
    }

    /// Location-only inputs for a high-crime metro address
    pub fn high_crime_location() -> RiskFactors {
        RiskFactors {
            location: Some(LocationRisk {
                province: Some("GP".to_string()),
                postal_code: Some("2092".to_string()),
                crime_rate: Some(CrimeRate::High),
            }),
            ..RiskFactors::none()
        }
    }

    /// Location-only inputs for a low-crime address in the same metro
    pub fn low_crime_location() -> RiskFactors {
        RiskFactors {
            location: Some(LocationRisk {
                province: Some("GP".to_string()),
                postal_code: Some("2092".to_string()),
                crime_rate: Some(CrimeRate::Low),
            }),
            ..RiskFactors::none()
        }
    }
}
