//! Test Data Builders
//!
//! Builder patterns for constructing pricing inputs with sensible defaults,
//! so tests specify only the fields they care about.

use domain_pricing::coverage::CoverageMap;
use domain_pricing::risk::{CrimeRate, Demographics, LocationRisk, PropertyRisk, RiskFactors};
use rust_decimal::Decimal;

/// Builder for [`RiskFactors`] test inputs
///
/// Starts from fully absent sections; setting any field materializes just
/// that section, which keeps the neutral-default behavior of the model
/// visible in tests.
#[derive(Default)]
pub struct RiskFactorsBuilder {
    location: Option<LocationRisk>,
    demographics: Option<Demographics>,
    property: Option<PropertyRisk>,
}

impl RiskFactorsBuilder {
    /// Creates a builder with every section absent
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the applicant age
    pub fn with_age(mut self, age: u32) -> Self {
        self.demographics = Some(Demographics { age: Some(age) });
        self
    }

    /// Sets the province code
    pub fn with_province(mut self, province: impl Into<String>) -> Self {
        self.location_mut().province = Some(province.into());
        self
    }

    /// Sets the postal code
    pub fn with_postal_code(mut self, postal_code: impl Into<String>) -> Self {
        self.location_mut().postal_code = Some(postal_code.into());
        self
    }

    /// Sets the crime-rate tier
    pub fn with_crime_rate(mut self, crime_rate: CrimeRate) -> Self {
        self.location_mut().crime_rate = Some(crime_rate);
        self
    }

    /// Sets the year the dwelling was built
    pub fn with_year_built(mut self, year_built: i32) -> Self {
        self.property_mut().year_built = Some(year_built);
        self
    }

    /// Sets the floor area in square metres
    pub fn with_floor_area(mut self, floor_area_sqm: u32) -> Self {
        self.property_mut().floor_area_sqm = Some(floor_area_sqm);
        self
    }

    /// Sets the wall construction descriptor
    pub fn with_construction(mut self, construction: impl Into<String>) -> Self {
        self.property_mut().construction_type = Some(construction.into());
        self
    }

    /// Sets the roof descriptor
    pub fn with_roof(mut self, roof: impl Into<String>) -> Self {
        self.property_mut().roof_type = Some(roof.into());
        self
    }

    /// Adds a safety-feature tag
    pub fn with_safety_feature(mut self, tag: impl Into<String>) -> Self {
        self.property_mut().safety_features.push(tag.into());
        self
    }

    /// Sets the pool flag
    pub fn with_pool(mut self, has_pool: bool) -> Self {
        self.property_mut().has_pool = has_pool;
        self
    }

    /// Sets the garage flag
    pub fn with_garage(mut self, has_garage: bool) -> Self {
        self.property_mut().has_garage = has_garage;
        self
    }

    /// Sets the dwelling-kind descriptor
    pub fn with_property_kind(mut self, kind: impl Into<String>) -> Self {
        self.property_mut().property_kind = Some(kind.into());
        self
    }

    /// Builds the risk inputs
    pub fn build(self) -> RiskFactors {
        RiskFactors {
            location: self.location,
            demographics: self.demographics,
            property: self.property,
        }
    }

    fn location_mut(&mut self) -> &mut LocationRisk {
        self.location.get_or_insert_with(LocationRisk::default)
    }

    fn property_mut(&mut self) -> &mut PropertyRisk {
        self.property.get_or_insert_with(PropertyRisk::default)
    }
}

/// Builder for itemized coverage schedules
#[derive(Default)]
pub struct CoverageMapBuilder {
    schedule: CoverageMap,
}

impl CoverageMapBuilder {
    /// Creates an empty schedule builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a category amount
    pub fn with_category(mut self, name: impl Into<String>, amount: Decimal) -> Self {
        self.schedule.insert(name.into(), amount);
        self
    }

    /// Builds the schedule
    pub fn build(self) -> CoverageMap {
        self.schedule
    }
}
