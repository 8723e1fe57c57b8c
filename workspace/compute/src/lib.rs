//! Aggregations over records that were already loaded from storage.
//!
//! Every function here is pure: the same records always produce the same
//! figures, in the same order. Months are zero-based.

pub mod categories;
pub mod error;
pub mod income;
pub mod monthly;
pub mod summary;

use chrono::NaiveDate;

pub use categories::{budget_comparison, category_totals};
pub use error::{ComputeError, Result};
pub use income::{income_by_source, total_income};
pub use monthly::monthly_totals;
pub use summary::monthly_summary;

/// First and last calendar day of a zero-based month.
pub(crate) fn month_window(month: u32, year: i32) -> Result<(NaiveDate, NaiveDate)> {
    model::period::month_bounds(year, month).ok_or(ComputeError::InvalidPeriod { month, year })
}
