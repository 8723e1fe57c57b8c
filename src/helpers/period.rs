use chrono::{Datelike, Utc};
use model::PeriodFilter;

use crate::error::ApiError;
use crate::schemas::{PeriodQuery, StatsQuery};

/// Current UTC month (zero-based) and year.
pub fn current_month() -> (u32, i32) {
    let today = Utc::now().date_naive();
    (today.month0(), today.year())
}

/// Turns the optional `month`/`year` of a listing into a filter.
///
/// A month is only meaningful together with a year.
pub fn list_filter(query: &PeriodQuery) -> Result<PeriodFilter, ApiError> {
    match (query.month, query.year) {
        (Some(month), Some(year)) => Ok(PeriodFilter::Month { year, month }),
        (None, Some(year)) => Ok(PeriodFilter::Year(year)),
        (None, None) => Ok(PeriodFilter::All),
        (Some(_), None) => Err(ApiError::invalid_field(
            "year",
            "Year is required when filtering by month",
        )),
    }
}

/// Month and year a statistics request is about, defaulting to now.
pub fn stats_period(query: &StatsQuery) -> (u32, i32) {
    let (current_month, current_year) = current_month();
    (
        query.month.unwrap_or(current_month),
        query.year.unwrap_or(current_year),
    )
}
