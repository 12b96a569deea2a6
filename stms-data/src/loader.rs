use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::Deserialize;
use stms_core::assessment::{DepreciationBand, TypeFactorTable, UavCalculatorError, UavSchedule};
use thiserror::Error;

/// Errors that can occur when loading a rate schedule file.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum UavScheduleLoaderError {
    #[error("TOML parse error: {0}")]
    TomlParse(String),

    #[error("Invalid schedule: {0}")]
    InvalidSchedule(#[from] UavCalculatorError),
}

impl From<toml::de::Error> for UavScheduleLoaderError {
    fn from(err: toml::de::Error) -> Self {
        UavScheduleLoaderError::TomlParse(err.to_string())
    }
}

/// A notified rate schedule file.
///
/// The TOML format mirrors the notification tables:
/// - `[base-rates]`: `residential` and `commercial` rates in ₹ per sq ft
///   per year
/// - `[type-factors]`: one usage multiplier per property type
/// - `[location-factors]`: the `default` multiplier plus a `cities` table
/// - `[[depreciation-bands]]`: `min-age` and `percent`, ascending by age
///
/// Rates and factors are written as quoted strings (`"8"`, `"1.5"`) so
/// they parse as exact decimals; bare TOML numbers are accepted too.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ScheduleFile {
    pub base_rates: BaseRates,
    pub type_factors: TypeFactors,
    pub location_factors: LocationFactors,
    pub depreciation_bands: Vec<BandEntry>,
}

/// The `[base-rates]` section.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct BaseRates {
    pub residential: Decimal,
    pub commercial: Decimal,
}

/// The `[type-factors]` section.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct TypeFactors {
    pub residential: Decimal,
    pub commercial: Decimal,
    pub industrial: Decimal,
    pub agricultural: Decimal,
    pub mixed_use: Decimal,
}

/// The `[location-factors]` section. City names in the `cities` table are
/// free text and keep their exact spelling and case.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct LocationFactors {
    pub default: Decimal,
    pub cities: HashMap<String, Decimal>,
}

/// One `[[depreciation-bands]]` entry.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct BandEntry {
    pub min_age: u32,
    pub percent: Decimal,
}

impl ScheduleFile {
    fn into_schedule(self) -> UavSchedule {
        UavSchedule {
            residential_base_rate: self.base_rates.residential,
            commercial_base_rate: self.base_rates.commercial,
            type_factors: TypeFactorTable {
                residential: self.type_factors.residential,
                commercial: self.type_factors.commercial,
                industrial: self.type_factors.industrial,
                agricultural: self.type_factors.agricultural,
                mixed_use: self.type_factors.mixed_use,
            },
            location_factors: self.location_factors.cities,
            default_location_factor: self.location_factors.default,
            depreciation_bands: self
                .depreciation_bands
                .into_iter()
                .map(|band| DepreciationBand {
                    min_age: band.min_age,
                    percent: band.percent,
                })
                .collect(),
        }
    }
}

/// Loader for notified rate schedules from TOML files.
///
/// Rate schedules live outside the binary because rates change by
/// municipal notification, not by release. The loader validates the
/// schedule before returning it, so a file that loads cleanly is ready to
/// hand to a calculator.
pub struct UavScheduleLoader;

impl UavScheduleLoader {
    /// Parse and validate a rate schedule from TOML text.
    pub fn parse(input: &str) -> Result<UavSchedule, UavScheduleLoaderError> {
        let file: ScheduleFile = toml::from_str(input)?;
        let schedule = file.into_schedule();
        schedule.validate()?;
        Ok(schedule)
    }
}
