use chrono::Datelike;
use common::MonthlyTotal;
use model::entities::transaction;
use rust_decimal::Decimal;
use tracing::{debug, instrument};

/// Spending of every month of `year`, January first.
///
/// Always returns twelve entries; months without spending total zero.
/// Income-category transactions are not spending and are skipped.
#[instrument(skip(transactions), fields(num_transactions = transactions.len()))]
pub fn monthly_totals(transactions: &[transaction::Model], year: i32) -> Vec<MonthlyTotal> {
    let mut totals = [Decimal::ZERO; 12];

    for transaction in transactions
        .iter()
        .filter(|t| t.category.is_expense() && t.date.year() == year)
    {
        totals[transaction.date.month0() as usize] += transaction.amount;
    }

    debug!("Computed monthly totals for {}", year);

    totals
        .into_iter()
        .zip(0u32..)
        .map(|(total, month)| MonthlyTotal { month, year, total })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{date, tx};
    use model::Category;

    #[test]
    fn test_single_february_transaction() {
        let transactions = vec![tx(75, date(2024, 2, 14), Category::Shopping)];

        let totals = monthly_totals(&transactions, 2024);

        assert_eq!(totals.len(), 12);
        for (index, entry) in totals.iter().enumerate() {
            assert_eq!(entry.month, index as u32);
            assert_eq!(entry.year, 2024);
            let expected = if index == 1 { Decimal::from(75) } else { Decimal::ZERO };
            assert_eq!(entry.total, expected);
        }
    }

    #[test]
    fn test_skips_income_and_other_years() {
        let transactions = vec![
            tx(100, date(2024, 1, 1), Category::Food),
            tx(5000, date(2024, 1, 2), Category::Income),
            tx(40, date(2023, 12, 31), Category::Food),
            tx(60, date(2025, 1, 1), Category::Food),
            tx(25, date(2024, 12, 31), Category::Other),
        ];

        let totals = monthly_totals(&transactions, 2024);

        assert_eq!(totals[0].total, Decimal::from(100));
        assert_eq!(totals[11].total, Decimal::from(25));
        let sum: Decimal = totals.iter().map(|t| t.total).sum();
        assert_eq!(sum, Decimal::from(125));
    }

    #[test]
    fn test_empty_input_is_zero_filled() {
        let totals = monthly_totals(&[], 2030);
        assert_eq!(totals.len(), 12);
        assert!(totals.iter().all(|t| t.total.is_zero()));
    }

    #[test]
    fn test_decimal_sums_are_exact() {
        let mut a = tx(0, date(2024, 3, 1), Category::Food);
        a.amount = Decimal::new(10, 2);
        let mut b = tx(0, date(2024, 3, 2), Category::Food);
        b.amount = Decimal::new(20, 2);

        let totals = monthly_totals(&[a, b], 2024);
        assert_eq!(totals[2].total, Decimal::new(30, 2));
    }
}
