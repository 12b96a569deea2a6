//! Portfolio rollups over property records.
//!
//! Each function is a single pass over its input slice and allocates only
//! its output: inputs are never mutated and nothing is cached, so re-running
//! a rollup over updated records recomputes it from scratch. Distinct
//! grouping keys appear in first-seen input order, which keeps chart
//! segments stable while their values change.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::analytics::truncate_label;
use crate::models::{Property, PropertyType};

/// One lakh in rupees; treemap sizes are expressed in lakhs.
const LAKH_RUPEES: i64 = 100_000;

/// Character budget for treemap tile labels.
const VALUE_LABEL_MAX_CHARS: usize = 15;

/// One property type's share of the portfolio.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeDistribution {
    pub property_type: PropertyType,
    pub count: usize,
    pub total_value: Decimal,
}

/// Counts properties and sums their market value per property type.
///
/// Types appear in the order they are first seen in the input.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use stms_core::analytics::type_distribution;
/// use stms_core::models::{Property, PropertyType};
///
/// let properties = vec![
///     Property {
///         id: 1,
///         name: "Sharma Nivas".to_string(),
///         city: "Jaipur".to_string(),
///         property_type: PropertyType::Residential,
///         area_sqft: dec!(1000),
///         year_built: 2014,
///         property_value: dec!(5000000),
///     },
///     Property {
///         id: 2,
///         name: "Johari Bazaar Shop".to_string(),
///         city: "Jaipur".to_string(),
///         property_type: PropertyType::Commercial,
///         area_sqft: dec!(500),
///         year_built: 2020,
///         property_value: dec!(9000000),
///     },
/// ];
///
/// let distribution = type_distribution(&properties);
///
/// assert_eq!(distribution.len(), 2);
/// assert_eq!(distribution[0].property_type, PropertyType::Residential);
/// assert_eq!(distribution[0].total_value, dec!(5000000));
/// ```
pub fn type_distribution(properties: &[Property]) -> Vec<TypeDistribution> {
    let mut index: HashMap<PropertyType, usize> = HashMap::new();
    let mut distribution: Vec<TypeDistribution> = Vec::new();

    for property in properties {
        match index.get(&property.property_type) {
            Some(&slot) => {
                let entry = &mut distribution[slot];
                entry.count += 1;
                entry.total_value += property.property_value;
            }
            None => {
                index.insert(property.property_type, distribution.len());
                distribution.push(TypeDistribution {
                    property_type: property.property_type,
                    count: 1,
                    total_value: property.property_value,
                });
            }
        }
    }

    distribution
}

/// Per-city totals for the composed value/count chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CityRollup {
    pub city: String,
    pub total_value: Decimal,
    pub count: usize,
    pub total_area: Decimal,
}

/// Sums value, count, and built-up area per city.
///
/// Cities group on the exact recorded string — "Jaipur" and "jaipur" are
/// different rows — and appear in first-seen input order.
pub fn city_rollup(properties: &[Property]) -> Vec<CityRollup> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut rollup: Vec<CityRollup> = Vec::new();

    for property in properties {
        match index.get(property.city.as_str()) {
            Some(&slot) => {
                let entry = &mut rollup[slot];
                entry.total_value += property.property_value;
                entry.count += 1;
                entry.total_area += property.area_sqft;
            }
            None => {
                index.insert(property.city.as_str(), rollup.len());
                rollup.push(CityRollup {
                    city: property.city.clone(),
                    total_value: property.property_value,
                    count: 1,
                    total_area: property.area_sqft,
                });
            }
        }
    }

    rollup
}

/// One treemap tile: a property's value scaled to lakhs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValuePoint {
    pub label: String,
    pub size: Decimal,
    pub property_type: PropertyType,
}

/// Projects every property into a treemap tile, in input order.
///
/// This is a display projection only: `size` is the market value divided
/// by one lakh and `label` is the name cut to its tile budget. Use the
/// property records themselves for anything computational.
pub fn value_distribution(properties: &[Property]) -> Vec<ValuePoint> {
    properties
        .iter()
        .map(|property| ValuePoint {
            label: truncate_label(&property.name, VALUE_LABEL_MAX_CHARS),
            size: property.property_value / Decimal::from(LAKH_RUPEES),
            property_type: property.property_type,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn property(
        id: i64,
        name: &str,
        city: &str,
        property_type: PropertyType,
        property_value: Decimal,
    ) -> Property {
        Property {
            id,
            name: name.to_string(),
            city: city.to_string(),
            property_type,
            area_sqft: dec!(1000),
            year_built: 2014,
            property_value,
        }
    }

    // =========================================================================
    // type_distribution tests
    // =========================================================================

    #[test]
    fn type_distribution_groups_in_first_seen_order() {
        let properties = vec![
            property(1, "A", "Jaipur", PropertyType::Residential, dec!(1000000)),
            property(2, "B", "Jaipur", PropertyType::Commercial, dec!(2000000)),
            property(3, "C", "Udaipur", PropertyType::Residential, dec!(3000000)),
            property(4, "D", "Kota", PropertyType::MixedUse, dec!(4000000)),
        ];

        let distribution = type_distribution(&properties);

        assert_eq!(distribution.len(), 3);
        assert_eq!(distribution[0].property_type, PropertyType::Residential);
        assert_eq!(distribution[1].property_type, PropertyType::Commercial);
        assert_eq!(distribution[2].property_type, PropertyType::MixedUse);
    }

    #[test]
    fn type_distribution_accumulates_counts_and_values() {
        let properties = vec![
            property(1, "A", "Jaipur", PropertyType::Residential, dec!(1000000)),
            property(2, "B", "Jaipur", PropertyType::Residential, dec!(2500000)),
        ];

        let distribution = type_distribution(&properties);

        assert_eq!(distribution.len(), 1);
        assert_eq!(distribution[0].count, 2);
        assert_eq!(distribution[0].total_value, dec!(3500000));
    }

    #[test]
    fn type_distribution_conserves_the_portfolio() {
        let properties = vec![
            property(1, "A", "Jaipur", PropertyType::Residential, dec!(1000000)),
            property(2, "B", "Jaipur", PropertyType::Commercial, dec!(2000000)),
            property(3, "C", "Udaipur", PropertyType::Residential, dec!(3000000)),
            property(4, "D", "Kota", PropertyType::Agricultural, dec!(500000)),
            property(5, "E", "Kota", PropertyType::Industrial, dec!(7000000)),
        ];

        let distribution = type_distribution(&properties);

        let count: usize = distribution.iter().map(|d| d.count).sum();
        let value: Decimal = distribution.iter().map(|d| d.total_value).sum();
        assert_eq!(count, properties.len());
        assert_eq!(value, dec!(13500000));
    }

    #[test]
    fn type_distribution_handles_empty_input() {
        let distribution = type_distribution(&[]);

        assert_eq!(distribution, vec![]);
    }

    // =========================================================================
    // city_rollup tests
    // =========================================================================

    #[test]
    fn city_rollup_accumulates_value_count_and_area() {
        let mut first = property(1, "A", "Jaipur", PropertyType::Residential, dec!(1000000));
        first.area_sqft = dec!(1200);
        let mut second = property(2, "B", "Jaipur", PropertyType::Commercial, dec!(2000000));
        second.area_sqft = dec!(800);

        let rollup = city_rollup(&[first, second]);

        assert_eq!(rollup.len(), 1);
        assert_eq!(rollup[0].city, "Jaipur");
        assert_eq!(rollup[0].total_value, dec!(3000000));
        assert_eq!(rollup[0].count, 2);
        assert_eq!(rollup[0].total_area, dec!(2000));
    }

    #[test]
    fn city_rollup_preserves_first_seen_order() {
        let properties = vec![
            property(1, "A", "Udaipur", PropertyType::Residential, dec!(1000000)),
            property(2, "B", "Jaipur", PropertyType::Residential, dec!(1000000)),
            property(3, "C", "Udaipur", PropertyType::Residential, dec!(1000000)),
        ];

        let rollup = city_rollup(&properties);

        assert_eq!(rollup.len(), 2);
        assert_eq!(rollup[0].city, "Udaipur");
        assert_eq!(rollup[1].city, "Jaipur");
    }

    #[test]
    fn city_rollup_matches_city_strings_exactly() {
        let properties = vec![
            property(1, "A", "Jaipur", PropertyType::Residential, dec!(1000000)),
            property(2, "B", "jaipur", PropertyType::Residential, dec!(1000000)),
        ];

        let rollup = city_rollup(&properties);

        // Case differences are distinct rows; canonicalization is an
        // ingestion concern
        assert_eq!(rollup.len(), 2);
    }

    #[test]
    fn city_rollup_handles_empty_input() {
        let rollup = city_rollup(&[]);

        assert_eq!(rollup, vec![]);
    }

    // =========================================================================
    // value_distribution tests
    // =========================================================================

    #[test]
    fn value_distribution_maps_every_property_in_input_order() {
        let properties = vec![
            property(1, "First", "Jaipur", PropertyType::Residential, dec!(1000000)),
            property(2, "Second", "Kota", PropertyType::Commercial, dec!(2000000)),
        ];

        let points = value_distribution(&properties);

        assert_eq!(points.len(), 2);
        assert_eq!(points[0].label, "First");
        assert_eq!(points[1].label, "Second");
    }

    #[test]
    fn value_distribution_scales_values_to_lakhs() {
        let properties = vec![property(
            1,
            "A",
            "Jaipur",
            PropertyType::Residential,
            dec!(5000000),
        )];

        let points = value_distribution(&properties);

        // ₹50,00,000 = 50 lakh
        assert_eq!(points[0].size, dec!(50));
    }

    #[test]
    fn value_distribution_keeps_fractional_lakhs() {
        let properties = vec![property(
            1,
            "A",
            "Jaipur",
            PropertyType::Residential,
            dec!(250000),
        )];

        let points = value_distribution(&properties);

        assert_eq!(points[0].size, dec!(2.5));
    }

    #[test]
    fn value_distribution_truncates_long_names() {
        let properties = vec![property(
            1,
            "Maharaja Heritage Haveli Complex",
            "Jaipur",
            PropertyType::Residential,
            dec!(1000000),
        )];

        let points = value_distribution(&properties);

        assert_eq!(points[0].label, "Maharaja Herita");
        assert_eq!(points[0].label.chars().count(), 15);
    }

    #[test]
    fn value_distribution_handles_empty_input() {
        let points = value_distribution(&[]);

        assert_eq!(points, vec![]);
    }
}
