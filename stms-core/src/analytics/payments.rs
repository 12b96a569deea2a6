//! Payment compliance rollups over tax calculations.
//!
//! Calculations carry their payment status inline, so both functions here
//! are single passes over the slice with no joins. Rates are derived ratios
//! kept at full precision; callers round for display.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{PaymentStatus, TaxCalculation};

/// How many calculations sit in one payment status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCount {
    pub status: PaymentStatus,
    pub count: usize,
}

/// Counts calculations per payment status, paid before pending.
///
/// Statuses with no calculations are omitted so a pie chart never renders
/// an empty slice; an empty input yields an empty vec.
pub fn payment_status_split(calculations: &[TaxCalculation]) -> Vec<StatusCount> {
    [PaymentStatus::Paid, PaymentStatus::Pending]
        .into_iter()
        .map(|status| StatusCount {
            status,
            count: calculations
                .iter()
                .filter(|calc| calc.payment_status == status)
                .count(),
        })
        .filter(|bucket| bucket.count > 0)
        .collect()
}

/// Demand realized versus outstanding across a set of calculations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplianceSummary {
    /// Share of calculations marked paid, as a percentage at full
    /// precision.
    pub compliance_rate: Decimal,
    /// Sum of `total_tax` over paid calculations.
    pub total_tax_paid: Decimal,
    /// Sum of `total_tax` over pending calculations.
    pub total_tax_pending: Decimal,
    pub paid_count: usize,
    pub total_count: usize,
}

/// Splits the tax demand into realized and outstanding totals.
///
/// The compliance rate is zero, not an error, when there are no
/// calculations to rate.
pub fn compliance_summary(calculations: &[TaxCalculation]) -> ComplianceSummary {
    let mut total_tax_paid = Decimal::ZERO;
    let mut total_tax_pending = Decimal::ZERO;
    let mut paid_count = 0usize;

    for calc in calculations {
        match calc.payment_status {
            PaymentStatus::Paid => {
                total_tax_paid += calc.total_tax;
                paid_count += 1;
            }
            PaymentStatus::Pending => total_tax_pending += calc.total_tax,
        }
    }

    let total_count = calculations.len();
    let compliance_rate = if total_count == 0 {
        Decimal::ZERO
    } else {
        Decimal::from(paid_count as u64) / Decimal::from(total_count as u64)
            * Decimal::ONE_HUNDRED
    };

    ComplianceSummary {
        compliance_rate,
        total_tax_paid,
        total_tax_pending,
        paid_count,
        total_count,
    }
}
