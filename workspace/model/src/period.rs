//! Calendar periods used to filter records and bound aggregations.
//!
//! Months are zero-based throughout (0 = January, 11 = December).

use chrono::NaiveDate;

/// Restricts a listing to a year or to a single month of a year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PeriodFilter {
    #[default]
    All,
    Year(i32),
    Month { year: i32, month: u32 },
}

impl PeriodFilter {
    /// Inclusive first and last calendar day covered by the filter.
    ///
    /// `None` for [`PeriodFilter::All`] and for months outside 0–11.
    pub fn date_bounds(&self) -> Option<(NaiveDate, NaiveDate)> {
        match *self {
            PeriodFilter::All => None,
            PeriodFilter::Year(year) => year_bounds(year),
            PeriodFilter::Month { year, month } => month_bounds(year, month),
        }
    }
}

/// First and last day of a zero-based month.
pub fn month_bounds(year: i32, month: u32) -> Option<(NaiveDate, NaiveDate)> {
    if month > 11 {
        return None;
    }
    let first = NaiveDate::from_ymd_opt(year, month + 1, 1)?;
    let last = if month == 11 {
        NaiveDate::from_ymd_opt(year, 12, 31)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 2, 1)?.pred_opt()?
    };
    Some((first, last))
}

/// January 1st and December 31st of `year`.
pub fn year_bounds(year: i32) -> Option<(NaiveDate, NaiveDate)> {
    Some((
        NaiveDate::from_ymd_opt(year, 1, 1)?,
        NaiveDate::from_ymd_opt(year, 12, 31)?,
    ))
}
