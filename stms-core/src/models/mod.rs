mod fiscal_year;
mod property;
mod tax_calculation;

pub use fiscal_year::FiscalYear;
pub use property::{Property, PropertyType};
pub use tax_calculation::{NewTaxCalculation, PaymentStatus, TaxCalculation};
