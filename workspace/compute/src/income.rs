use std::collections::HashMap;

use common::IncomeSourceTotal;
use model::entities::income;
use rust_decimal::Decimal;
use tracing::{debug, instrument};

use crate::error::Result;
use crate::month_window;

fn in_period(month: u32, year: i32) -> impl Fn(&&income::Model) -> bool {
    move |record: &&income::Model| record.month == month && record.year == year
}

/// Sum of the income records booked for a month.
#[instrument(skip(incomes), fields(num_incomes = incomes.len()))]
pub fn total_income(incomes: &[income::Model], month: u32, year: i32) -> Result<Decimal> {
    month_window(month, year)?;
    Ok(incomes
        .iter()
        .filter(in_period(month, year))
        .map(|income| income.amount)
        .sum())
}

/// Income records of a month grouped by source, largest total first.
///
/// Sources with equal totals are ordered alphabetically.
#[instrument(skip(incomes), fields(num_incomes = incomes.len()))]
pub fn income_by_source(
    incomes: &[income::Model],
    month: u32,
    year: i32,
) -> Result<Vec<IncomeSourceTotal>> {
    month_window(month, year)?;

    let mut by_source: HashMap<&str, (Decimal, usize)> = HashMap::new();
    for income in incomes.iter().filter(in_period(month, year)) {
        let entry = by_source
            .entry(income.source.as_str())
            .or_insert((Decimal::ZERO, 0));
        entry.0 += income.amount;
        entry.1 += 1;
    }

    let mut totals: Vec<IncomeSourceTotal> = by_source
        .into_iter()
        .map(|(source, (total, count))| IncomeSourceTotal {
            source: source.to_string(),
            total,
            count,
        })
        .collect();
    totals.sort_by(|a, b| b.total.cmp(&a.total).then_with(|| a.source.cmp(&b.source)));

    debug!("Grouped income into {} sources", totals.len());
    Ok(totals)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::make_income;

    #[test]
    fn test_total_income_uses_stored_period() {
        let incomes = vec![
            make_income("Salary", 0, 2024, 2500),
            make_income("Freelance", 0, 2024, 400),
            make_income("Salary", 1, 2024, 2500),
            make_income("Salary", 0, 2023, 2400),
        ];
        assert_eq!(total_income(&incomes, 0, 2024).unwrap(), Decimal::from(2900));
        assert_eq!(total_income(&incomes, 5, 2024).unwrap(), Decimal::ZERO);
    }

    #[test]
    fn test_income_by_source_sorted_by_total() {
        let incomes = vec![
            make_income("Freelance", 3, 2024, 300),
            make_income("Salary", 3, 2024, 2500),
            make_income("Freelance", 3, 2024, 450),
            make_income("Dividends", 3, 2024, 750),
            make_income("Salary", 4, 2024, 2500),
        ];

        let totals = income_by_source(&incomes, 3, 2024).unwrap();
        let rows: Vec<_> = totals
            .iter()
            .map(|t| (t.source.as_str(), t.total, t.count))
            .collect();

        assert_eq!(
            rows,
            vec![
                ("Salary", Decimal::from(2500), 1),
                ("Dividends", Decimal::from(750), 1),
                ("Freelance", Decimal::from(750), 2),
            ]
        );
    }

    #[test]
    fn test_invalid_month() {
        assert!(total_income(&[], 12, 2024).is_err());
        assert!(income_by_source(&[], 12, 2024).is_err());
    }
}
