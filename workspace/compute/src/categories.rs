use std::collections::{HashMap, HashSet};

use chrono::NaiveDate;
use common::{BudgetComparison, CategoryTotal};
use model::Category;
use model::entities::{budget, transaction};
use rust_decimal::Decimal;
use tracing::{debug, instrument, warn};

use crate::error::Result;
use crate::month_window;

/// Sums non-Income spending per category between `start` and `end` inclusive.
///
/// Categories appear in the order of their first matching transaction.
pub(crate) fn spending_by_category(
    transactions: &[transaction::Model],
    start: NaiveDate,
    end: NaiveDate,
) -> Vec<CategoryTotal> {
    let mut totals: Vec<CategoryTotal> = Vec::new();
    let mut positions: HashMap<Category, usize> = HashMap::new();

    for transaction in transactions
        .iter()
        .filter(|t| t.category.is_expense() && t.date >= start && t.date <= end)
    {
        match positions.get(&transaction.category) {
            Some(&index) => totals[index].total += transaction.amount,
            None => {
                positions.insert(transaction.category, totals.len());
                totals.push(CategoryTotal {
                    category: transaction.category,
                    total: transaction.amount,
                });
            }
        }
    }

    totals
}

/// Spending per category in a month. Categories without spending are omitted.
#[instrument(skip(transactions), fields(num_transactions = transactions.len()))]
pub fn category_totals(
    transactions: &[transaction::Model],
    month: u32,
    year: i32,
) -> Result<Vec<CategoryTotal>> {
    let (start, end) = month_window(month, year)?;
    let totals = spending_by_category(transactions, start, end);
    debug!("Found spending in {} categories", totals.len());
    Ok(totals)
}

/// Compares the budgets of a month with what was actually spent.
///
/// Budgeted categories come first, in the order of `budgets`. Categories
/// with spending but no budget follow with a budget of zero. Budgets for
/// other months are ignored.
#[instrument(skip(budgets, transactions), fields(num_budgets = budgets.len(), num_transactions = transactions.len()))]
pub fn budget_comparison(
    budgets: &[budget::Model],
    transactions: &[transaction::Model],
    month: u32,
    year: i32,
) -> Result<Vec<BudgetComparison>> {
    let (start, end) = month_window(month, year)?;
    let spending = spending_by_category(transactions, start, end);
    let actual_of = |category: Category| {
        spending
            .iter()
            .find(|total| total.category == category)
            .map_or(Decimal::ZERO, |total| total.total)
    };

    let mut budgeted: HashSet<Category> = HashSet::new();
    let mut comparison = Vec::new();

    for budget in budgets
        .iter()
        .filter(|b| b.month == month && b.year == year)
    {
        if !budgeted.insert(budget.category) {
            warn!(
                "Ignoring second budget {} for {:?} in {}/{}",
                budget.id, budget.category, month, year
            );
            continue;
        }
        let actual = actual_of(budget.category);
        comparison.push(BudgetComparison {
            category: budget.category,
            budgeted: budget.amount,
            actual,
            difference: budget.amount - actual,
        });
    }

    for total in spending.iter().filter(|t| !budgeted.contains(&t.category)) {
        comparison.push(BudgetComparison {
            category: total.category,
            budgeted: Decimal::ZERO,
            actual: total.total,
            difference: -total.total,
        });
    }

    debug!(
        "Compared {} budgeted and {} unbudgeted categories",
        budgeted.len(),
        comparison.len() - budgeted.len()
    );
    Ok(comparison)
}
