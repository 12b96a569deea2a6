use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    Pending,
    Paid,
}

impl PaymentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Paid => "paid",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(Self::Pending),
            "paid" => Some(Self::Paid),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Paid => "Paid",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxCalculation {
    pub id: i64,
    pub property_id: i64,
    pub fiscal_year: String,

    // Assessment breakdown as of calculated_at; recalculation appends a
    // new record rather than mutating this one
    pub base_tax: Decimal,
    pub property_type_factor: Decimal,
    pub location_factor: Decimal,
    pub age_depreciation: Decimal,
    pub total_tax: Decimal,

    pub payment_status: PaymentStatus,
    pub calculated_at: DateTime<Utc>,
    pub ai_reasoning: Option<String>,
}

/// For creating new calculations (no id; assigned on insert)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTaxCalculation {
    pub property_id: i64,
    pub fiscal_year: String,
    pub base_tax: Decimal,
    pub property_type_factor: Decimal,
    pub location_factor: Decimal,
    pub age_depreciation: Decimal,
    pub total_tax: Decimal,
    pub payment_status: PaymentStatus,
    pub calculated_at: DateTime<Utc>,
    pub ai_reasoning: Option<String>,
}
