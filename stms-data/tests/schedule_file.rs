//! Integration tests for rate schedule loading using the shipped fixture.

use pretty_assertions::assert_eq;
use rust_decimal_macros::dec;
use stms_core::assessment::{LocationFactor, UavCalculator, UavSchedule};
use stms_core::models::{Property, PropertyType};
use stms_data::UavScheduleLoader;

const NOTIFIED_RATES: &str = include_str!("../test-data/rates.toml");

fn property(id: i64, city: &str, property_type: PropertyType) -> Property {
    Property {
        id,
        name: "Sharma Nivas".to_string(),
        city: city.to_string(),
        property_type,
        area_sqft: dec!(1000),
        year_built: 2014,
        property_value: dec!(5000000),
    }
}

#[test]
fn test_load_notified_rates() {
    let schedule = UavScheduleLoader::parse(NOTIFIED_RATES).expect("Failed to parse rates.toml");

    // The shipped file carries the same values the calculator defaults to
    assert_eq!(schedule, UavSchedule::default());
}

#[test]
fn test_loaded_schedule_assesses_residential_property() {
    let schedule = UavScheduleLoader::parse(NOTIFIED_RATES).expect("Failed to parse rates.toml");
    let calculator = UavCalculator::new(schedule);

    let breakdown = calculator
        .calculate(&property(1, "Jaipur", PropertyType::Residential), 2024)
        .expect("Failed to assess");

    // 1000 sq ft × ₹5 = 5000; × 1.0 × 1.2 × (1 − 10%) = 5400
    assert_eq!(breakdown.base_tax, dec!(5000));
    assert_eq!(breakdown.location_factor, LocationFactor::Listed(dec!(1.2)));
    assert_eq!(breakdown.age_depreciation, dec!(10));
    assert_eq!(breakdown.total_tax, dec!(5400));
}

#[test]
fn test_loaded_schedule_assesses_commercial_property() {
    let schedule = UavScheduleLoader::parse(NOTIFIED_RATES).expect("Failed to parse rates.toml");
    let calculator = UavCalculator::new(schedule);

    let mut shop = property(2, "Jodhpur", PropertyType::Commercial);
    shop.area_sqft = dec!(500);
    shop.year_built = 2022;

    let breakdown = calculator.calculate(&shop, 2024).expect("Failed to assess");

    // 500 sq ft × ₹8 = 4000; × 1.5 × 1.0, no depreciation at age 2
    assert_eq!(breakdown.base_tax, dec!(4000));
    assert_eq!(breakdown.total_tax, dec!(6000));
}

#[test]
fn test_loaded_schedule_applies_default_for_unlisted_city() {
    let schedule = UavScheduleLoader::parse(NOTIFIED_RATES).expect("Failed to parse rates.toml");
    let calculator = UavCalculator::new(schedule);

    let breakdown = calculator
        .calculate(&property(3, "Kota", PropertyType::Residential), 2024)
        .expect("Failed to assess");

    assert_eq!(
        breakdown.location_factor,
        LocationFactor::Fallback(dec!(0.8))
    );
    // 5000 × 1.0 × 0.8 × 0.9
    assert_eq!(breakdown.total_tax, dec!(3600));
}

#[test]
fn test_loaded_schedule_depreciation_bands_are_lower_inclusive() {
    let schedule = UavScheduleLoader::parse(NOTIFIED_RATES).expect("Failed to parse rates.toml");

    assert_eq!(schedule.depreciation_percent(9), dec!(0));
    assert_eq!(schedule.depreciation_percent(10), dec!(10));
    assert_eq!(schedule.depreciation_percent(19), dec!(10));
    assert_eq!(schedule.depreciation_percent(20), dec!(20));
    assert_eq!(schedule.depreciation_percent(45), dec!(20));
}
