pub mod analytics;
pub mod assessment;
pub mod models;

pub use assessment::{UavCalculator, UavCalculatorError, UavSchedule};
pub use models::*;
