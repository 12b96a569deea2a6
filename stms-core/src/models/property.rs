use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertyType {
    Residential,
    Commercial,
    Industrial,
    Agricultural,
    MixedUse,
}

impl PropertyType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Residential => "residential",
            Self::Commercial => "commercial",
            Self::Industrial => "industrial",
            Self::Agricultural => "agricultural",
            Self::MixedUse => "mixed_use",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "residential" => Some(Self::Residential),
            "commercial" => Some(Self::Commercial),
            "industrial" => Some(Self::Industrial),
            "agricultural" => Some(Self::Agricultural),
            "mixed_use" => Some(Self::MixedUse),
            _ => None,
        }
    }

    /// Human-readable label for chart legends and reports.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Residential => "Residential",
            Self::Commercial => "Commercial",
            Self::Industrial => "Industrial",
            Self::Agricultural => "Agricultural",
            Self::MixedUse => "Mixed Use",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Property {
    pub id: i64,
    pub name: String,

    // Municipal attributes driving the UAV assessment
    pub city: String,
    pub property_type: PropertyType,
    pub area_sqft: Decimal,
    pub year_built: i32,
    pub property_value: Decimal,
}
