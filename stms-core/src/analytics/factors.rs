//! Side-by-side factor comparison for a sample of calculations.
//!
//! Pairs each calculation with its property's name so the adjustment
//! factors driving different bills can be charted next to each other. The
//! sample is capped; pass a pre-sorted slice to control which calculations
//! make the cut.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::analytics::truncate_label;
use crate::models::{Property, TaxCalculation};

/// How many calculations a comparison chart can hold legibly.
const FACTOR_SAMPLE_MAX: usize = 10;

/// Character budget for comparison chart labels.
const FACTOR_LABEL_MAX_CHARS: usize = 10;

/// One calculation's adjustment factors, scaled for charting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactorSample {
    pub label: String,
    /// Property type factor as a percentage, e.g. 1.5 charts as 150.
    pub type_factor_pct: Decimal,
    /// Location factor as a percentage, e.g. 1.2 charts as 120.
    pub location_factor_pct: Decimal,
    /// Depreciation already a percentage; passed through unscaled.
    pub age_depreciation: Decimal,
}

/// Projects the first ten calculations into comparison samples, joining
/// each to its property by id for the label.
///
/// A calculation whose property is missing or unnamed gets a positional
/// `Property N` placeholder instead of dropping out, so the chart always
/// shows the whole sample.
pub fn factor_comparison(
    calculations: &[TaxCalculation],
    properties: &[Property],
) -> Vec<FactorSample> {
    let by_id: HashMap<i64, &Property> = properties
        .iter()
        .map(|property| (property.id, property))
        .collect();

    calculations
        .iter()
        .take(FACTOR_SAMPLE_MAX)
        .enumerate()
        .map(|(index, calc)| {
            let label = by_id
                .get(&calc.property_id)
                .map(|property| property.name.as_str())
                .filter(|name| !name.is_empty())
                .map(|name| truncate_label(name, FACTOR_LABEL_MAX_CHARS))
                .unwrap_or_else(|| {
                    warn!(
                        calculation_id = calc.id,
                        property_id = calc.property_id,
                        "calculation has no named property; using a placeholder label"
                    );
                    format!("Property {}", index + 1)
                });

            FactorSample {
                label,
                type_factor_pct: calc.property_type_factor * Decimal::ONE_HUNDRED,
                location_factor_pct: calc.location_factor * Decimal::ONE_HUNDRED,
                age_depreciation: calc.age_depreciation,
            }
        })
        .collect()
}
