//! Unit Area Value (UAV) assessment for Rajasthan municipal property tax.
//!
//! This module implements the UAV method prescribed under the Rajasthan
//! Municipalities Act, 2009, which derives the annual tax demand from the
//! built-up area of a property and a notified rate schedule.
//!
//! # Methodology
//!
//! | Step | Description |
//! |------|-------------|
//! | 1    | Base tax = built-up area (sq ft) × base rate (₹/sq ft/year) |
//! | 2    | Apply property type factor (usage multiplier) |
//! | 3    | Apply location factor (city multiplier, default for unlisted cities) |
//! | 4    | Apply age depreciation: tax retained = 1 − depreciation/100 |
//! | 5    | Round the demand to whole rupees |
//!
//! Base tax is rounded to whole rupees before the factors are applied, so a
//! stored [`NewTaxCalculation`] record always satisfies
//! `total_tax = round(base_tax × type factor × location factor × (1 − depreciation/100))`
//! over its own `base_tax` field.
//!
//! # Rate Schedule
//!
//! All rates, factors, and depreciation bands live in [`UavSchedule`]; the
//! notified values ship as [`UavSchedule::default`]. Replacing the schedule
//! is a deployment decision, not a per-call concern.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use stms_core::assessment::{UavCalculator, UavSchedule};
//! use stms_core::models::{Property, PropertyType};
//!
//! let property = Property {
//!     id: 1,
//!     name: "Sharma Nivas".to_string(),
//!     city: "Jaipur".to_string(),
//!     property_type: PropertyType::Residential,
//!     area_sqft: dec!(1000),
//!     year_built: 2014,
//!     property_value: dec!(5000000),
//! };
//!
//! let calculator = UavCalculator::new(UavSchedule::default());
//! let breakdown = calculator.calculate(&property, 2024).unwrap();
//!
//! // Base tax: 1000 sq ft × ₹5 = ₹5000
//! assert_eq!(breakdown.base_tax, dec!(5000));
//! // Total: 5000 × 1.0 × 1.2 × (1 − 10%) = ₹5400
//! assert_eq!(breakdown.total_tax, dec!(5400));
//! ```

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::assessment::common::round_rupees;
use crate::models::{FiscalYear, NewTaxCalculation, PaymentStatus, Property, PropertyType};

/// Errors that can occur during UAV assessment.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum UavCalculatorError {
    /// The property's built-up area must be positive.
    #[error("property area must be positive, got {0} sq ft")]
    InvalidArea(Decimal),

    /// The residential base rate must be positive.
    #[error("residential base rate must be positive, got {0}")]
    InvalidResidentialBaseRate(Decimal),

    /// The commercial base rate must be positive.
    #[error("commercial base rate must be positive, got {0}")]
    InvalidCommercialBaseRate(Decimal),

    /// Every property type factor must be positive.
    #[error("type factor for {} must be positive, got {}", .0.as_str(), .1)]
    InvalidTypeFactor(PropertyType, Decimal),

    /// Every listed city's location factor must be positive.
    #[error("location factor for {0} must be positive, got {1}")]
    InvalidLocationFactor(String, Decimal),

    /// The fallback location factor must be positive.
    #[error("default location factor must be positive, got {0}")]
    InvalidDefaultLocationFactor(Decimal),

    /// At least one depreciation band is required.
    #[error("no depreciation bands configured")]
    NoDepreciationBands,

    /// The first depreciation band must cover age zero.
    #[error("first depreciation band must start at age 0, got {0}")]
    InvalidFirstBandAge(u32),

    /// Depreciation bands must be strictly ascending by minimum age.
    #[error("depreciation bands must be in ascending age order, got {0} then {1}")]
    OutOfOrderDepreciationBands(u32, u32),

    /// Every depreciation percentage must lie in 0–100.
    #[error("depreciation percent for the band at age {0} must be between 0 and 100, got {1}")]
    InvalidDepreciationPercent(u32, Decimal),
}

/// Usage multipliers applied on top of the base tax, one per property type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeFactorTable {
    pub residential: Decimal,
    pub commercial: Decimal,
    pub industrial: Decimal,
    pub agricultural: Decimal,
    pub mixed_use: Decimal,
}

impl TypeFactorTable {
    /// Returns the multiplier for the given property type.
    pub fn factor(&self, property_type: PropertyType) -> Decimal {
        match property_type {
            PropertyType::Residential => self.residential,
            PropertyType::Commercial => self.commercial,
            PropertyType::Industrial => self.industrial,
            PropertyType::Agricultural => self.agricultural,
            PropertyType::MixedUse => self.mixed_use,
        }
    }

    fn validate(&self) -> Result<(), UavCalculatorError> {
        if self.residential <= Decimal::ZERO {
            return Err(UavCalculatorError::InvalidTypeFactor(
                PropertyType::Residential,
                self.residential,
            ));
        }
        if self.commercial <= Decimal::ZERO {
            return Err(UavCalculatorError::InvalidTypeFactor(
                PropertyType::Commercial,
                self.commercial,
            ));
        }
        if self.industrial <= Decimal::ZERO {
            return Err(UavCalculatorError::InvalidTypeFactor(
                PropertyType::Industrial,
                self.industrial,
            ));
        }
        if self.agricultural <= Decimal::ZERO {
            return Err(UavCalculatorError::InvalidTypeFactor(
                PropertyType::Agricultural,
                self.agricultural,
            ));
        }
        if self.mixed_use <= Decimal::ZERO {
            return Err(UavCalculatorError::InvalidTypeFactor(
                PropertyType::MixedUse,
                self.mixed_use,
            ));
        }
        Ok(())
    }
}

/// One age depreciation band. A band applies from `min_age` (inclusive) up
/// to the next band's `min_age` (exclusive); the last band is open-ended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepreciationBand {
    pub min_age: u32,
    pub percent: Decimal,
}

/// A city lookup result that records whether the city was listed in the
/// schedule or fell through to the jurisdiction default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LocationFactor {
    /// The city appears in the schedule's location table.
    Listed(Decimal),
    /// The city is not listed; the default factor was applied.
    Fallback(Decimal),
}

impl LocationFactor {
    /// The multiplier to apply, regardless of how it was resolved.
    pub fn value(&self) -> Decimal {
        match self {
            Self::Listed(value) | Self::Fallback(value) => *value,
        }
    }

    pub fn is_listed(&self) -> bool {
        matches!(self, Self::Listed(_))
    }
}

/// The notified rate schedule driving UAV assessments.
///
/// These values change only when the municipal body issues a new
/// notification, so they are injected once at construction rather than
/// passed per call. [`UavSchedule::default`] carries the values currently
/// in force: base rates of ₹5 (residential and allied uses) and ₹8
/// (commercial and industrial) per sq ft per year, type factors 1.0 / 1.5 /
/// 1.3 / 0.5 / 1.2, location factors for Jaipur (1.2), Udaipur (1.1) and
/// Jodhpur (1.0) with 0.8 elsewhere, and depreciation of 0% / 10% / 20%
/// for ages 0–10 / 10–20 / 20+.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use stms_core::assessment::{LocationFactor, UavSchedule};
///
/// let schedule = UavSchedule {
///     default_location_factor: dec!(0.9),
///     ..UavSchedule::default()
/// };
///
/// assert_eq!(schedule.location_factor("Kota"), LocationFactor::Fallback(dec!(0.9)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UavSchedule {
    /// Base rate in ₹ per sq ft per year for residential, agricultural,
    /// and mixed use properties.
    pub residential_base_rate: Decimal,

    /// Base rate in ₹ per sq ft per year for commercial and industrial
    /// properties.
    pub commercial_base_rate: Decimal,

    /// Usage multipliers, one per property type.
    pub type_factors: TypeFactorTable,

    /// City multipliers, keyed by the exact city string on the property
    /// record.
    pub location_factors: HashMap<String, Decimal>,

    /// Multiplier applied when the property's city is not listed.
    pub default_location_factor: Decimal,

    /// Age depreciation bands, ascending by `min_age`, first band at 0.
    pub depreciation_bands: Vec<DepreciationBand>,
}

impl Default for UavSchedule {
    fn default() -> Self {
        Self {
            residential_base_rate: Decimal::from(5),
            commercial_base_rate: Decimal::from(8),
            type_factors: TypeFactorTable {
                residential: Decimal::ONE,
                commercial: Decimal::new(15, 1),
                industrial: Decimal::new(13, 1),
                agricultural: Decimal::new(5, 1),
                mixed_use: Decimal::new(12, 1),
            },
            location_factors: HashMap::from([
                ("Jaipur".to_string(), Decimal::new(12, 1)),
                ("Udaipur".to_string(), Decimal::new(11, 1)),
                ("Jodhpur".to_string(), Decimal::ONE),
            ]),
            default_location_factor: Decimal::new(8, 1),
            depreciation_bands: vec![
                DepreciationBand {
                    min_age: 0,
                    percent: Decimal::ZERO,
                },
                DepreciationBand {
                    min_age: 10,
                    percent: Decimal::from(10),
                },
                DepreciationBand {
                    min_age: 20,
                    percent: Decimal::from(20),
                },
            ],
        }
    }
}

impl UavSchedule {
    /// Returns the base rate for the given property type.
    ///
    /// Commercial and industrial properties use the commercial rate; all
    /// other types use the residential rate.
    pub fn base_rate(&self, property_type: PropertyType) -> Decimal {
        match property_type {
            PropertyType::Commercial | PropertyType::Industrial => self.commercial_base_rate,
            PropertyType::Residential | PropertyType::Agricultural | PropertyType::MixedUse => {
                self.residential_base_rate
            }
        }
    }

    /// Resolves the location factor for a city.
    ///
    /// The lookup is an exact, case-sensitive match on the recorded city
    /// string; anything else resolves to [`LocationFactor::Fallback`] with
    /// the default factor. An unlisted city is not an error — city strings
    /// are free text and new municipalities appear without a schedule
    /// change.
    pub fn location_factor(&self, city: &str) -> LocationFactor {
        match self.location_factors.get(city) {
            Some(factor) => LocationFactor::Listed(*factor),
            None => LocationFactor::Fallback(self.default_location_factor),
        }
    }

    /// Returns the depreciation percentage for a property age in years.
    ///
    /// Band boundaries are lower-inclusive: with the notified bands an age
    /// of exactly 10 falls in the 10% band and exactly 20 in the 20% band.
    pub fn depreciation_percent(&self, age_years: u32) -> Decimal {
        self.depreciation_bands
            .iter()
            .rev()
            .find(|band| age_years >= band.min_age)
            .map(|band| band.percent)
            .unwrap_or(Decimal::ZERO)
    }

    /// Validates the schedule values.
    ///
    /// # Errors
    ///
    /// Returns [`UavCalculatorError`] if:
    /// - either base rate is not positive
    /// - any type factor is not positive
    /// - any listed or default location factor is not positive
    /// - the depreciation bands are empty, do not start at age 0, are not
    ///   strictly ascending, or hold a percentage outside 0–100
    pub fn validate(&self) -> Result<(), UavCalculatorError> {
        if self.residential_base_rate <= Decimal::ZERO {
            return Err(UavCalculatorError::InvalidResidentialBaseRate(
                self.residential_base_rate,
            ));
        }
        if self.commercial_base_rate <= Decimal::ZERO {
            return Err(UavCalculatorError::InvalidCommercialBaseRate(
                self.commercial_base_rate,
            ));
        }
        self.type_factors.validate()?;
        for (city, factor) in &self.location_factors {
            if *factor <= Decimal::ZERO {
                return Err(UavCalculatorError::InvalidLocationFactor(
                    city.clone(),
                    *factor,
                ));
            }
        }
        if self.default_location_factor <= Decimal::ZERO {
            return Err(UavCalculatorError::InvalidDefaultLocationFactor(
                self.default_location_factor,
            ));
        }
        let Some(first) = self.depreciation_bands.first() else {
            return Err(UavCalculatorError::NoDepreciationBands);
        };
        if first.min_age != 0 {
            return Err(UavCalculatorError::InvalidFirstBandAge(first.min_age));
        }
        for pair in self.depreciation_bands.windows(2) {
            if pair[1].min_age <= pair[0].min_age {
                return Err(UavCalculatorError::OutOfOrderDepreciationBands(
                    pair[0].min_age,
                    pair[1].min_age,
                ));
            }
        }
        for band in &self.depreciation_bands {
            if band.percent < Decimal::ZERO || band.percent > Decimal::ONE_HUNDRED {
                return Err(UavCalculatorError::InvalidDepreciationPercent(
                    band.min_age,
                    band.percent,
                ));
            }
        }
        Ok(())
    }
}

/// Result of a UAV assessment.
///
/// Carries every intermediate value alongside the final demand so the
/// breakdown can be shown to the owner exactly as it was computed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UavBreakdown {
    /// Base rate applied, in ₹ per sq ft per year.
    pub base_rate: Decimal,

    /// Area × base rate, rounded to whole rupees.
    pub base_tax: Decimal,

    /// Usage multiplier for the property type.
    pub type_factor: Decimal,

    /// City multiplier, tagged with how it was resolved.
    pub location_factor: LocationFactor,

    /// Property age in years as of the assessment year.
    pub age_years: u32,

    /// Depreciation percentage for that age.
    pub age_depreciation: Decimal,

    /// Final annual demand in whole rupees.
    pub total_tax: Decimal,
}

impl UavBreakdown {
    /// Converts the breakdown into a calculation record ready for insert,
    /// keyed by the fiscal year's label and with payment pending.
    pub fn into_new_calculation(
        self,
        property_id: i64,
        fiscal_year: FiscalYear,
        calculated_at: DateTime<Utc>,
    ) -> NewTaxCalculation {
        NewTaxCalculation {
            property_id,
            fiscal_year: fiscal_year.label(),
            base_tax: self.base_tax,
            property_type_factor: self.type_factor,
            location_factor: self.location_factor.value(),
            age_depreciation: self.age_depreciation,
            total_tax: self.total_tax,
            payment_status: PaymentStatus::Pending,
            calculated_at,
            ai_reasoning: None,
        }
    }
}

/// Calculator for UAV property tax assessments.
///
/// Encapsulates the rate schedule and computes each step of the method,
/// culminating in the annual demand. The same property, assessment year,
/// and schedule always produce the same breakdown.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use stms_core::assessment::{UavCalculator, UavSchedule};
/// use stms_core::models::{Property, PropertyType};
///
/// let calculator = UavCalculator::new(UavSchedule::default());
///
/// let shop = Property {
///     id: 7,
///     name: "Johari Bazaar Shop".to_string(),
///     city: "Jaipur".to_string(),
///     property_type: PropertyType::Commercial,
///     area_sqft: dec!(500),
///     year_built: 2020,
///     property_value: dec!(9000000),
/// };
///
/// let breakdown = calculator.calculate(&shop, 2024).unwrap();
///
/// // Base tax: 500 × ₹8 = ₹4000; total: 4000 × 1.5 × 1.2 = ₹7200
/// assert_eq!(breakdown.total_tax, dec!(7200));
/// ```
#[derive(Debug, Clone)]
pub struct UavCalculator {
    schedule: UavSchedule,
}

impl UavCalculator {
    /// Creates a new calculator over the given rate schedule.
    pub fn new(schedule: UavSchedule) -> Self {
        Self { schedule }
    }

    /// The schedule this calculator assesses against.
    pub fn schedule(&self) -> &UavSchedule {
        &self.schedule
    }

    /// Runs the complete UAV assessment for one property.
    ///
    /// `assessment_year` is the calendar year the assessment is effective
    /// for; the property's age is measured against it. Taking the year as
    /// an argument keeps the result a pure function of its inputs.
    ///
    /// # Errors
    ///
    /// Returns [`UavCalculatorError`] if the schedule fails validation or
    /// the property's area is not positive. An unlisted city and an age
    /// outside every band boundary are handled, not rejected.
    pub fn calculate(
        &self,
        property: &Property,
        assessment_year: i32,
    ) -> Result<UavBreakdown, UavCalculatorError> {
        self.schedule.validate()?;

        if property.area_sqft <= Decimal::ZERO {
            return Err(UavCalculatorError::InvalidArea(property.area_sqft));
        }

        // Step 1: base tax from built-up area and the per-sqft rate
        let base_rate = self.schedule.base_rate(property.property_type);
        let base_tax = self.base_tax(property.area_sqft, base_rate);

        // Steps 2-3: usage and location multipliers, kept at full precision
        let type_factor = self.schedule.type_factors.factor(property.property_type);
        let location_factor = self.location_factor(&property.city);

        // Step 4: age depreciation from the band table
        let age_years = self.property_age(property.year_built, assessment_year);
        let age_depreciation = self.schedule.depreciation_percent(age_years);

        // Step 5: annual demand in whole rupees
        let total_tax = self.total_tax(
            base_tax,
            type_factor,
            location_factor.value(),
            age_depreciation,
        );

        Ok(UavBreakdown {
            base_rate,
            base_tax,
            type_factor,
            location_factor,
            age_years,
            age_depreciation,
            total_tax,
        })
    }

    /// Calculates base tax from area and rate (step 1).
    fn base_tax(
        &self,
        area_sqft: Decimal,
        base_rate: Decimal,
    ) -> Decimal {
        round_rupees(area_sqft * base_rate)
    }

    /// Resolves the city multiplier (step 3), logging fallbacks.
    fn location_factor(
        &self,
        city: &str,
    ) -> LocationFactor {
        let factor = self.schedule.location_factor(city);
        if let LocationFactor::Fallback(value) = factor {
            warn!(
                city = %city,
                factor = %value,
                "city not in location factor table; applying default factor"
            );
        }
        factor
    }

    /// Calculates the property age against the assessment year (step 4).
    ///
    /// A construction year after the assessment year yields age zero; the
    /// record is structurally valid, so this is flagged rather than
    /// rejected.
    fn property_age(
        &self,
        year_built: i32,
        assessment_year: i32,
    ) -> u32 {
        if year_built > assessment_year {
            warn!(
                year_built,
                assessment_year,
                "year built is after the assessment year; treating age as zero"
            );
            return 0;
        }
        (assessment_year - year_built) as u32
    }

    /// Applies the factor chain to the rounded base tax (steps 2-5).
    fn total_tax(
        &self,
        base_tax: Decimal,
        type_factor: Decimal,
        location_factor: Decimal,
        age_depreciation: Decimal,
    ) -> Decimal {
        let retained = Decimal::ONE - age_depreciation / Decimal::ONE_HUNDRED;
        round_rupees(base_tax * type_factor * location_factor * retained)
    }
}
