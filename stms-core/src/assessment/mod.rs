//! UAV property tax assessment.
//!
//! This module provides the calculation logic for annual property tax
//! demands under the Unit Area Value method, driven by an injectable rate
//! schedule.

pub mod common;
pub mod uav;

pub use uav::{
    DepreciationBand, LocationFactor, TypeFactorTable, UavBreakdown, UavCalculator,
    UavCalculatorError, UavSchedule,
};
