//! Dashboard aggregations over assessed portfolios.
//!
//! Everything here is a pure function of the slices it is given: one pass
//! over the input, no interior state, no persistence. Callers fetch
//! records, aggregate, and render; re-running a function over fresh
//! records is the only cache invalidation there is.

mod factors;
mod payments;
mod portfolio;
mod trend;

pub use factors::{FactorSample, factor_comparison};
pub use payments::{ComplianceSummary, StatusCount, compliance_summary, payment_status_split};
pub use portfolio::{
    CityRollup, TypeDistribution, ValuePoint, city_rollup, type_distribution, value_distribution,
};
pub use trend::{FiscalYearTrend, fiscal_year_trend};

/// Cuts a display label to `max_chars` characters, passing shorter names
/// through whole. Counts characters rather than bytes so multibyte names
/// never split mid-character.
pub(crate) fn truncate_label(name: &str, max_chars: usize) -> String {
    name.chars().take(max_chars).collect()
}
