//! Property-Based Test Generators
//!
//! Proptest strategies for generating pricing inputs, including the
//! adversarial ones: partial sections, unknown descriptors, and extreme
//! amounts.

use domain_pricing::coverage::CoverageMap;
use domain_pricing::risk::{CrimeRate, Demographics, LocationRisk, PropertyRisk, RiskFactors};
use proptest::prelude::*;
use rust_decimal::Decimal;

const PROVINCES: &[&str] = &["GP", "WC", "KZN", "EC", "FS", "MP", "LP", "NW", "NC", "XX", "gp"];

const CONSTRUCTION_TYPES: &[&str] = &["BRICK", "CONCRETE", "STEEL_FRAME", "TIMBER_FRAME", "STRAW"];

const ROOF_TYPES: &[&str] = &["TILE", "SLATE", "METAL", "FLAT", "THATCH", "UNKNOWN"];

const FOUNDATION_TYPES: &[&str] = &["SLAB", "RAISED", "BASEMENT", "FLOATING"];

const HEATING_TYPES: &[&str] = &["ELECTRIC", "GAS", "FIREPLACE", "SOLAR", "HEAT_PUMP", "GEYSER"];

const PROPERTY_KINDS: &[&str] = &["HOUSE", "APARTMENT", "TOWNHOUSE", "SMALLHOLDING", "HOUSEBOAT"];

const SAFETY_TAGS: &[&str] = &[
    "MONITORED_ALARM",
    "SMOKE_DETECTORS",
    "SECURITY_CAMERAS",
    "ELECTRIC_FENCING",
    "SPRINKLER_SYSTEM",
    "SECURITY_GATES",
    "MOAT",
    "smoke_detectors",
];

const COVERAGE_CATEGORIES: &[&str] = &[
    "dwelling",
    "personalProperty",
    "liability",
    "medicalPayments",
    "outbuildings",
];

/// Strategy for positive coverage amounts across the full quoting range
pub fn coverage_amount_strategy() -> impl Strategy<Value = Decimal> {
    (1i64..10_000_000i64).prop_map(Decimal::from)
}

/// Strategy for amounts inside the simplified-model bounds
pub fn simple_coverage_amount_strategy() -> impl Strategy<Value = Decimal> {
    (30_000i64..=200_000i64).prop_map(Decimal::from)
}

/// Strategy for crime-rate tiers
pub fn crime_rate_strategy() -> impl Strategy<Value = CrimeRate> {
    prop_oneof![
        Just(CrimeRate::Low),
        Just(CrimeRate::Medium),
        Just(CrimeRate::High),
    ]
}

fn descriptor_strategy(options: &'static [&'static str]) -> impl Strategy<Value = String> {
    proptest::sample::select(options).prop_map(str::to_string)
}

fn postal_code_strategy() -> impl Strategy<Value = String> {
    (0u32..10_000u32).prop_map(|code| format!("{code:04}"))
}

/// Strategy for location sections with any combination of fields present
pub fn location_strategy() -> impl Strategy<Value = LocationRisk> {
    (
        proptest::option::of(descriptor_strategy(PROVINCES)),
        proptest::option::of(postal_code_strategy()),
        proptest::option::of(crime_rate_strategy()),
    )
        .prop_map(|(province, postal_code, crime_rate)| LocationRisk {
            province,
            postal_code,
            crime_rate,
        })
}

/// Strategy for demographics sections, age optionally absent
pub fn demographics_strategy() -> impl Strategy<Value = Demographics> {
    proptest::option::of(16u32..100u32).prop_map(|age| Demographics { age })
}

/// Strategy for property sections mixing recognized and unknown descriptors
pub fn property_strategy() -> impl Strategy<Value = PropertyRisk> {
    let descriptors = (
        proptest::option::of(1850i32..2030i32),
        proptest::option::of(20u32..2_000u32),
        proptest::option::of(descriptor_strategy(CONSTRUCTION_TYPES)),
        proptest::option::of(descriptor_strategy(ROOF_TYPES)),
        proptest::option::of(descriptor_strategy(FOUNDATION_TYPES)),
        proptest::option::of(descriptor_strategy(HEATING_TYPES)),
    );
    let extras = (
        proptest::collection::vec(descriptor_strategy(SAFETY_TAGS), 0..4),
        any::<bool>(),
        any::<bool>(),
        proptest::option::of(descriptor_strategy(PROPERTY_KINDS)),
    );

    (descriptors, extras).prop_map(
        |(
            (year_built, floor_area_sqm, construction_type, roof_type, foundation_type, heating_type),
            (safety_features, has_pool, has_garage, property_kind),
        )| PropertyRisk {
            year_built,
            floor_area_sqm,
            construction_type,
            roof_type,
            foundation_type,
            heating_type,
            safety_features,
            has_pool,
            has_garage,
            property_kind,
        },
    )
}

/// Strategy for complete risk inputs with any combination of sections
pub fn risk_factors_strategy() -> impl Strategy<Value = RiskFactors> {
    (
        proptest::option::of(location_strategy()),
        proptest::option::of(demographics_strategy()),
        proptest::option::of(property_strategy()),
    )
        .prop_map(|(location, demographics, property)| RiskFactors {
            location,
            demographics,
            property,
        })
}

/// Strategy for non-empty itemized coverage schedules with positive amounts
pub fn coverage_map_strategy() -> impl Strategy<Value = CoverageMap> {
    proptest::collection::hash_map(
        descriptor_strategy(COVERAGE_CATEGORIES),
        (1_000i64..2_000_000i64).prop_map(Decimal::from),
        1..4,
    )
}
