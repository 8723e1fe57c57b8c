//! Aggregated views computed from stored records. None of these are persisted.

use model::Category;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Spending of one category over a period.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct CategoryTotal {
    pub category: Category,
    #[schema(value_type = String, example = "80.00")]
    #[serde(serialize_with = "crate::money::serialize")]
    pub total: Decimal,
}

/// Spending of one calendar month.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct MonthlyTotal {
    /// Zero-based month (0 = January)
    pub month: u32,
    pub year: i32,
    #[schema(value_type = String, example = "1250.40")]
    #[serde(serialize_with = "crate::money::serialize")]
    pub total: Decimal,
}

/// Budgeted against actual spending of one category in one month.
///
/// A positive `difference` means the category stayed under budget.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct BudgetComparison {
    pub category: Category,
    #[schema(value_type = String)]
    #[serde(serialize_with = "crate::money::serialize")]
    pub budgeted: Decimal,
    #[schema(value_type = String)]
    #[serde(serialize_with = "crate::money::serialize")]
    pub actual: Decimal,
    #[schema(value_type = String)]
    #[serde(serialize_with = "crate::money::serialize")]
    pub difference: Decimal,
}

/// Headline figures of one month.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct MonthlySummary {
    pub month: u32,
    pub year: i32,
    /// Sum of all non-Income transactions
    #[schema(value_type = String)]
    #[serde(serialize_with = "crate::money::serialize")]
    pub total_expenses: Decimal,
    /// Sum of Income-category transactions
    #[schema(value_type = String)]
    #[serde(serialize_with = "crate::money::serialize")]
    pub transaction_income: Decimal,
    /// Sum of income records
    #[schema(value_type = String)]
    #[serde(serialize_with = "crate::money::serialize")]
    pub recorded_income: Decimal,
    #[schema(value_type = String)]
    #[serde(serialize_with = "crate::money::serialize")]
    pub total_income: Decimal,
    /// `total_income - total_expenses`
    #[schema(value_type = String)]
    #[serde(serialize_with = "crate::money::serialize")]
    pub balance: Decimal,
    pub income_records: usize,
    pub top_category: Option<CategoryTotal>,
}

/// Income records of one month grouped by their source.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct IncomeSourceTotal {
    pub source: String,
    #[schema(value_type = String)]
    #[serde(serialize_with = "crate::money::serialize")]
    pub total: Decimal,
    pub count: usize,
}
