//! Risk factor model
//!
//! Converts the optional risk sections supplied with a quote request into
//! independent multiplicative adjustment factors. The model is total: a
//! missing section, a missing field, or an unrecognized tag contributes a
//! neutral 1.0 instead of failing, and every sub-factor is clamped into
//! [`FACTOR_FLOOR`]..=[`FACTOR_CEILING`] so the combined multiplier stays
//! strictly positive for any input.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Lower clamp for each individual risk factor
pub const FACTOR_FLOOR: Decimal = dec!(0.5);

/// Upper clamp for each individual risk factor
pub const FACTOR_CEILING: Decimal = dec!(3.0);

/// Crime-rate tier of the risk address
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CrimeRate {
    Low,
    Medium,
    High,
}

impl CrimeRate {
    /// Rate multiplier for the tier; strictly increasing with severity
    pub fn factor(&self) -> Decimal {
        match self {
            CrimeRate::Low => dec!(0.90),
            CrimeRate::Medium => dec!(1.05),
            CrimeRate::High => dec!(1.30),
        }
    }
}

/// Location section of the risk inputs
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LocationRisk {
    /// Province code (GP, WC, KZN, ...)
    pub province: Option<String>,
    /// Four-digit postal code
    pub postal_code: Option<String>,
    /// Crime-rate tier for the address
    pub crime_rate: Option<CrimeRate>,
}

/// Demographics section of the risk inputs
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Demographics {
    /// Applicant age in years
    pub age: Option<u32>,
}

/// Property section of the risk inputs
///
/// Type descriptors arrive as free-form strings from the quoting flow;
/// unrecognized values rate neutral rather than being rejected.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PropertyRisk {
    /// Year the dwelling was built
    pub year_built: Option<i32>,
    /// Floor area in square metres
    pub floor_area_sqm: Option<u32>,
    /// Wall construction (BRICK, CONCRETE, TIMBER_FRAME, ...)
    pub construction_type: Option<String>,
    /// Roof covering (TILE, THATCH, METAL, ...)
    pub roof_type: Option<String>,
    /// Foundation (SLAB, RAISED, BASEMENT, ...)
    pub foundation_type: Option<String>,
    /// Primary heating (ELECTRIC, GAS, FIREPLACE, ...)
    pub heating_type: Option<String>,
    /// Installed safety features; recognized tags reduce risk,
    /// unrecognized tags are ignored
    pub safety_features: Vec<String>,
    /// Swimming pool on the premises
    pub has_pool: bool,
    /// Lockable garage on the premises
    pub has_garage: bool,
    /// Dwelling kind (HOUSE, APARTMENT, TOWNHOUSE, ...)
    pub property_kind: Option<String>,
}

/// Optional risk inputs supplied with a quote request
///
/// Every section is independent; an absent section contributes a neutral
/// multiplier of exactly 1.0.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RiskFactors {
    pub location: Option<LocationRisk>,
    pub demographics: Option<Demographics>,
    pub property: Option<PropertyRisk>,
}

impl RiskFactors {
    /// Risk inputs with every section absent (neutral assessment)
    pub fn none() -> Self {
        Self::default()
    }
}

/// The computed adjustment factors for a quote
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RiskAssessment {
    /// Applicant-age factor, clamped
    pub age_factor: Decimal,
    /// Address factor (crime tier, province, metro), clamped
    pub location_factor: Decimal,
    /// Dwelling factor (age, construction, safety features, ...), clamped
    pub property_factor: Decimal,
    /// Product of the three factors; always strictly positive
    pub multiplier: Decimal,
}

impl RiskAssessment {
    /// The assessment produced by empty risk inputs
    pub fn neutral() -> Self {
        Self {
            age_factor: dec!(1.0),
            location_factor: dec!(1.0),
            property_factor: dec!(1.0),
            multiplier: dec!(1.0),
        }
    }
}

/// Assesses risk inputs into adjustment factors
///
/// Pure and total: defined for every field combination, including
/// adversarial extremes, and never returns a non-positive factor.
pub fn assess(factors: &RiskFactors) -> RiskAssessment {
    let age_factor = clamp_factor(age_factor(factors.demographics.as_ref()));
    let location_factor = clamp_factor(location_factor(factors.location.as_ref()));
    let property_factor = clamp_factor(property_factor(factors.property.as_ref()));

    RiskAssessment {
        age_factor,
        location_factor,
        property_factor,
        multiplier: age_factor * location_factor * property_factor,
    }
}

fn clamp_factor(factor: Decimal) -> Decimal {
    factor.clamp(FACTOR_FLOOR, FACTOR_CEILING)
}

/// Entry-age curve: the 35-60 band carries the best claims experience;
/// younger applicants rate above standard.
fn age_factor(demographics: Option<&Demographics>) -> Decimal {
    let Some(age) = demographics.and_then(|d| d.age) else {
        return dec!(1.0);
    };

    match age {
        0..=24 => dec!(1.30),
        25..=34 => dec!(1.10),
        35..=60 => dec!(0.90),
        61..=75 => dec!(1.00),
        _ => dec!(1.15),
    }
}

fn location_factor(location: Option<&LocationRisk>) -> Decimal {
    let Some(location) = location else {
        return dec!(1.0);
    };

    let crime = location
        .crime_rate
        .map(|tier| tier.factor())
        .unwrap_or(dec!(1.0));
    let province = location
        .province
        .as_deref()
        .map(province_factor)
        .unwrap_or(dec!(1.0));
    let metro = location
        .postal_code
        .as_deref()
        .map(postal_factor)
        .unwrap_or(dec!(1.0));

    crime * province * metro
}

fn province_factor(code: &str) -> Decimal {
    match code.trim().to_ascii_uppercase().as_str() {
        "GP" => dec!(1.10),
        "KZN" => dec!(1.08),
        "WC" => dec!(1.02),
        "EC" => dec!(1.00),
        "FS" | "MP" | "LP" | "NW" | "NC" => dec!(0.96),
        _ => dec!(1.0),
    }
}

/// Metro postal ranges carry a burglary/theft uplift; everywhere else is
/// neutral, as is anything that does not parse as a numeric code.
fn postal_factor(postal_code: &str) -> Decimal {
    match postal_code.trim().parse::<u32>() {
        Ok(code) if (1..=299).contains(&code) => dec!(1.05),
        Ok(code) if (2000..=2199).contains(&code) => dec!(1.06),
        Ok(code) if (4000..=4099).contains(&code) => dec!(1.04),
        Ok(code) if (8000..=8099).contains(&code) => dec!(1.03),
        _ => dec!(1.0),
    }
}

fn property_factor(property: Option<&PropertyRisk>) -> Decimal {
    let Some(property) = property else {
        return dec!(1.0);
    };

    let mut factor = dec!(1.0);

    if let Some(year_built) = property.year_built {
        factor *= building_age_factor(year_built);
    }
    if let Some(area) = property.floor_area_sqm {
        factor *= floor_area_factor(area);
    }
    if let Some(construction) = property.construction_type.as_deref() {
        factor *= construction_factor(construction);
    }
    if let Some(roof) = property.roof_type.as_deref() {
        factor *= roof_factor(roof);
    }
    if let Some(foundation) = property.foundation_type.as_deref() {
        factor *= foundation_factor(foundation);
    }
    if let Some(heating) = property.heating_type.as_deref() {
        factor *= heating_factor(heating);
    }
    for feature in &property.safety_features {
        factor *= safety_feature_factor(feature);
    }
    if property.has_pool {
        factor *= dec!(1.05);
    }
    if property.has_garage {
        factor *= dec!(0.97);
    }
    if let Some(kind) = property.property_kind.as_deref() {
        factor *= property_kind_factor(kind);
    }

    factor
}

/// Construction-era bands anchored to fixed years, so the factor is a
/// deterministic function of the inputs; the boundaries are refreshed with
/// the rest of the rate configuration.
fn building_age_factor(year_built: i32) -> Decimal {
    if year_built < 1975 {
        dec!(1.15)
    } else if year_built < 1995 {
        dec!(1.08)
    } else if year_built < 2015 {
        dec!(1.00)
    } else {
        dec!(0.95)
    }
}

fn floor_area_factor(area_sqm: u32) -> Decimal {
    if area_sqm > 400 {
        dec!(1.10)
    } else if area_sqm > 250 {
        dec!(1.05)
    } else {
        dec!(1.00)
    }
}

fn construction_factor(construction: &str) -> Decimal {
    match construction.trim().to_ascii_uppercase().as_str() {
        "BRICK" => dec!(0.95),
        "CONCRETE" => dec!(0.92),
        "STEEL" | "STEEL_FRAME" => dec!(0.96),
        "TIMBER" | "TIMBER_FRAME" | "WOOD" => dec!(1.20),
        _ => dec!(1.0),
    }
}

fn roof_factor(roof: &str) -> Decimal {
    match roof.trim().to_ascii_uppercase().as_str() {
        "TILE" => dec!(0.95),
        "SLATE" => dec!(0.97),
        "METAL" | "CORRUGATED_IRON" => dec!(1.00),
        "FLAT" | "FLAT_CONCRETE" => dec!(1.05),
        // Thatch is the dominant fire exposure on SA dwellings
        "THATCH" => dec!(1.35),
        _ => dec!(1.0),
    }
}

fn foundation_factor(foundation: &str) -> Decimal {
    match foundation.trim().to_ascii_uppercase().as_str() {
        "SLAB" => dec!(0.97),
        "RAISED" | "PIER" => dec!(1.05),
        "BASEMENT" => dec!(1.02),
        _ => dec!(1.0),
    }
}

fn heating_factor(heating: &str) -> Decimal {
    match heating.trim().to_ascii_uppercase().as_str() {
        "ELECTRIC" => dec!(1.00),
        "GAS" => dec!(1.06),
        "FIREPLACE" | "WOOD_STOVE" => dec!(1.12),
        "SOLAR" => dec!(0.98),
        "HEAT_PUMP" => dec!(0.99),
        _ => dec!(1.0),
    }
}

fn safety_feature_factor(tag: &str) -> Decimal {
    match tag.trim().to_ascii_uppercase().as_str() {
        "MONITORED_ALARM" => dec!(0.94),
        "SMOKE_DETECTORS" => dec!(0.97),
        "SECURITY_CAMERAS" => dec!(0.96),
        "ELECTRIC_FENCING" => dec!(0.95),
        "SPRINKLER_SYSTEM" => dec!(0.95),
        "SECURITY_GATES" => dec!(0.97),
        _ => dec!(1.0),
    }
}

fn property_kind_factor(kind: &str) -> Decimal {
    match kind.trim().to_ascii_uppercase().as_str() {
        "HOUSE" | "FREESTANDING" => dec!(1.00),
        "APARTMENT" | "FLAT" => dec!(0.92),
        "TOWNHOUSE" => dec!(0.96),
        "SMALLHOLDING" => dec!(1.10),
        _ => dec!(1.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_inputs_are_neutral() {
        let assessment = assess(&RiskFactors::none());

        assert_eq!(assessment.age_factor, dec!(1.0));
        assert_eq!(assessment.location_factor, dec!(1.0));
        assert_eq!(assessment.property_factor, dec!(1.0));
        assert_eq!(assessment.multiplier, dec!(1.0));
    }

    #[test]
    fn test_missing_sections_are_independent() {
        // Only demographics present: location and property stay neutral.
        let factors = RiskFactors {
            demographics: Some(Demographics { age: Some(40) }),
            ..RiskFactors::none()
        };
        let assessment = assess(&factors);

        assert_eq!(assessment.location_factor, dec!(1.0));
        assert_eq!(assessment.property_factor, dec!(1.0));
        assert_eq!(assessment.multiplier, assessment.age_factor);
    }

    #[test]
    fn test_age_25_rates_above_age_40() {
        let factor_at = |age: u32| {
            assess(&RiskFactors {
                demographics: Some(Demographics { age: Some(age) }),
                ..RiskFactors::none()
            })
            .age_factor
        };

        assert!(factor_at(25) > factor_at(40));
        // The low-risk middle band sits below standard, the young band above.
        assert!(factor_at(40) < dec!(1.0));
        assert!(factor_at(25) > dec!(1.0));
    }

    #[test]
    fn test_crime_tier_ordering() {
        let location_with = |tier: CrimeRate| {
            assess(&RiskFactors {
                location: Some(LocationRisk {
                    province: Some("GP".to_string()),
                    postal_code: Some("2001".to_string()),
                    crime_rate: Some(tier),
                }),
                ..RiskFactors::none()
            })
            .location_factor
        };

        let low = location_with(CrimeRate::Low);
        let medium = location_with(CrimeRate::Medium);
        let high = location_with(CrimeRate::High);

        assert!(high > medium);
        assert!(medium > low);
    }

    #[test]
    fn test_unknown_province_and_postal_are_neutral() {
        let factors = RiskFactors {
            location: Some(LocationRisk {
                province: Some("XX".to_string()),
                postal_code: Some("not-a-code".to_string()),
                crime_rate: None,
            }),
            ..RiskFactors::none()
        };

        assert_eq!(assess(&factors).location_factor, dec!(1.0));
    }

    #[test]
    fn test_safety_features_reduce_risk() {
        let base = PropertyRisk {
            year_built: Some(2015),
            ..PropertyRisk::default()
        };
        let secured = PropertyRisk {
            safety_features: vec![
                "MONITORED_ALARM".to_string(),
                "ELECTRIC_FENCING".to_string(),
            ],
            ..base.clone()
        };

        let factor = |property: PropertyRisk| {
            assess(&RiskFactors {
                property: Some(property),
                ..RiskFactors::none()
            })
            .property_factor
        };

        assert!(factor(secured) < factor(base));
    }

    #[test]
    fn test_unrecognized_safety_tags_ignored() {
        let tagged = PropertyRisk {
            safety_features: vec!["MOAT".to_string(), "DRAGON".to_string()],
            ..PropertyRisk::default()
        };
        let factors = RiskFactors {
            property: Some(tagged),
            ..RiskFactors::none()
        };

        assert_eq!(assess(&factors).property_factor, dec!(1.0));
    }

    #[test]
    fn test_safety_tags_match_case_insensitively() {
        let tagged = PropertyRisk {
            safety_features: vec!["smoke_detectors".to_string()],
            ..PropertyRisk::default()
        };
        let factors = RiskFactors {
            property: Some(tagged),
            ..RiskFactors::none()
        };

        assert_eq!(assess(&factors).property_factor, dec!(0.97));
    }

    #[test]
    fn test_thatch_roof_rates_up() {
        let thatched = RiskFactors {
            property: Some(PropertyRisk {
                roof_type: Some("THATCH".to_string()),
                ..PropertyRisk::default()
            }),
            ..RiskFactors::none()
        };

        assert!(assess(&thatched).property_factor > dec!(1.0));
    }

    #[test]
    fn test_extreme_inputs_stay_clamped_and_positive() {
        // Stack every rating-up field at once; the clamp keeps the factor
        // inside the configured band.
        let factors = RiskFactors {
            location: Some(LocationRisk {
                province: Some("GP".to_string()),
                postal_code: Some("2001".to_string()),
                crime_rate: Some(CrimeRate::High),
            }),
            demographics: Some(Demographics { age: Some(18) }),
            property: Some(PropertyRisk {
                year_built: Some(1890),
                floor_area_sqm: Some(1200),
                construction_type: Some("TIMBER_FRAME".to_string()),
                roof_type: Some("THATCH".to_string()),
                foundation_type: Some("RAISED".to_string()),
                heating_type: Some("FIREPLACE".to_string()),
                safety_features: vec![],
                has_pool: true,
                has_garage: false,
                property_kind: Some("SMALLHOLDING".to_string()),
            }),
        };

        let assessment = assess(&factors);
        for factor in [
            assessment.age_factor,
            assessment.location_factor,
            assessment.property_factor,
        ] {
            assert!(factor >= FACTOR_FLOOR);
            assert!(factor <= FACTOR_CEILING);
        }
        assert!(assessment.multiplier > dec!(0));
    }

    #[test]
    fn test_neutral_assessment_constant() {
        let neutral = RiskAssessment::neutral();
        assert_eq!(neutral.multiplier, dec!(1.0));
    }
}
