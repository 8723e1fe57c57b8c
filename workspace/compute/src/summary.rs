use common::{CategoryTotal, MonthlySummary};
use model::entities::{income, transaction};
use rust_decimal::Decimal;
use tracing::{debug, instrument};

use crate::categories::spending_by_category;
use crate::error::Result;
use crate::income::total_income;
use crate::month_window;

/// Headline figures of a month: spending, both kinds of income and the
/// resulting balance.
///
/// Transactions are matched on their date, income records on their stored
/// month and year.
#[instrument(skip(transactions, incomes), fields(num_transactions = transactions.len(), num_incomes = incomes.len()))]
pub fn monthly_summary(
    transactions: &[transaction::Model],
    incomes: &[income::Model],
    month: u32,
    year: i32,
) -> Result<MonthlySummary> {
    let (start, end) = month_window(month, year)?;

    let spending = spending_by_category(transactions, start, end);
    let total_expenses: Decimal = spending.iter().map(|t| t.total).sum();

    let transaction_income: Decimal = transactions
        .iter()
        .filter(|t| !t.category.is_expense() && t.date >= start && t.date <= end)
        .map(|t| t.amount)
        .sum();

    let recorded_income = total_income(incomes, month, year)?;
    let income_records = incomes
        .iter()
        .filter(|i| i.month == month && i.year == year)
        .count();

    // Strictly greater keeps the earliest category on ties
    let top_category = spending.into_iter().fold(None::<CategoryTotal>, |top, total| match top {
        Some(top) if top.total >= total.total => Some(top),
        _ => Some(total),
    });

    let total_income = transaction_income + recorded_income;
    debug!(
        "Month {}/{}: expenses {}, income {}",
        month, year, total_expenses, total_income
    );

    Ok(MonthlySummary {
        month,
        year,
        total_expenses,
        transaction_income,
        recorded_income,
        total_income,
        balance: total_income - total_expenses,
        income_records,
        top_category,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{date, make_income, tx};
    use model::Category;

    #[test]
    fn test_summary_balance() {
        let transactions = vec![
            tx(50, date(2024, 1, 5), Category::Food),
            tx(20, date(2024, 1, 10), Category::Income),
            tx(30, date(2024, 1, 20), Category::Food),
            tx(120, date(2024, 1, 21), Category::Housing),
            tx(999, date(2024, 2, 1), Category::Housing),
        ];
        let incomes = vec![
            make_income("Salary", 0, 2024, 1000),
            make_income("Salary", 1, 2024, 1000),
        ];

        let summary = monthly_summary(&transactions, &incomes, 0, 2024).unwrap();

        assert_eq!(summary.total_expenses, Decimal::from(200));
        assert_eq!(summary.transaction_income, Decimal::from(20));
        assert_eq!(summary.recorded_income, Decimal::from(1000));
        assert_eq!(summary.total_income, Decimal::from(1020));
        assert_eq!(summary.balance, Decimal::from(820));
        assert_eq!(summary.income_records, 1);
        assert_eq!(
            summary.top_category,
            Some(CategoryTotal { category: Category::Housing, total: Decimal::from(120) })
        );
    }

    #[test]
    fn test_top_category_tie_goes_to_first() {
        let transactions = vec![
            tx(40, date(2024, 6, 1), Category::Shopping),
            tx(40, date(2024, 6, 2), Category::Food),
        ];
        let summary = monthly_summary(&transactions, &[], 5, 2024).unwrap();
        assert_eq!(summary.top_category.map(|t| t.category), Some(Category::Shopping));
    }

    #[test]
    fn test_empty_month() {
        let summary = monthly_summary(&[], &[], 11, 2024).unwrap();
        assert_eq!(summary.balance, Decimal::ZERO);
        assert_eq!(summary.top_category, None);
        assert_eq!(summary.income_records, 0);
    }

    #[test]
    fn test_overspending_gives_negative_balance() {
        let transactions = vec![tx(300, date(2024, 1, 15), Category::Food)];
        let incomes = vec![make_income("Salary", 0, 2024, 100)];
        let summary = monthly_summary(&transactions, &incomes, 0, 2024).unwrap();
        assert_eq!(summary.balance, Decimal::from(-200));
    }
}
