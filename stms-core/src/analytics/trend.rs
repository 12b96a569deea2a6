//! Year-over-year tax demand trend.
//!
//! Buckets hold only the running total and count; the mean is derived when
//! read. Storing a mean and updating it per record would make the stored
//! value depend on accumulation order, so it is never stored at all.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::TaxCalculation;

/// Aggregate tax demand for one fiscal year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FiscalYearTrend {
    /// Fiscal year label exactly as recorded, e.g. `"2024-25"`.
    pub fiscal_year: String,
    pub total_tax: Decimal,
    pub count: usize,
}

impl FiscalYearTrend {
    /// Mean tax per calculation, derived from the stored totals.
    ///
    /// Zero when the bucket is empty.
    pub fn average_tax(&self) -> Decimal {
        if self.count == 0 {
            return Decimal::ZERO;
        }
        self.total_tax / Decimal::from(self.count as u64)
    }
}

/// Buckets calculations by fiscal year, summing totals and counting
/// records.
///
/// Years group on the recorded label string and appear in first-seen input
/// order; no calendar ordering is imposed.
pub fn fiscal_year_trend(calculations: &[TaxCalculation]) -> Vec<FiscalYearTrend> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut trend: Vec<FiscalYearTrend> = Vec::new();

    for calc in calculations {
        match index.get(calc.fiscal_year.as_str()) {
            Some(&slot) => {
                let entry = &mut trend[slot];
                entry.total_tax += calc.total_tax;
                entry.count += 1;
            }
            None => {
                index.insert(calc.fiscal_year.as_str(), trend.len());
                trend.push(FiscalYearTrend {
                    fiscal_year: calc.fiscal_year.clone(),
                    total_tax: calc.total_tax,
                    count: 1,
                });
            }
        }
    }

    trend
}
