use chrono::{Datelike, NaiveDate};

/// Indian fiscal year (runs 1 April to 31 March).
/// The year value is the end year (e.g., 2025 = FY 2024-25).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FiscalYear(pub i32);

impl FiscalYear {
    /// Create a fiscal year from a date.
    pub fn from_date(date: NaiveDate) -> Self {
        let year = date.year();
        // On or after 1 April the fiscal year ends next calendar year
        if date >= NaiveDate::from_ymd_opt(year, 4, 1).unwrap() {
            FiscalYear(year + 1)
        } else {
            FiscalYear(year)
        }
    }

    /// Start date of the fiscal year (1 April of the previous year).
    pub fn start_date(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.0 - 1, 4, 1).unwrap()
    }

    /// End date of the fiscal year (31 March).
    pub fn end_date(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.0, 3, 31).unwrap()
    }

    /// The period key used on tax calculation records, e.g. "2024-25".
    pub fn label(&self) -> String {
        format!("{}-{:02}", self.0 - 1, self.0 % 100)
    }
}
