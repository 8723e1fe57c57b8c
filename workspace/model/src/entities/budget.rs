use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;

use super::category::Category;

/// Planned spending for one category in one calendar month.
///
/// The (category, month, year) triple is unique; see
/// [`crate::repository::upsert_budget`].
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "budgets")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub category: Category,
    #[sea_orm(column_type = "Decimal(Some((16, 4)))")]
    pub amount: Decimal,
    /// Zero-based month (0 = January).
    pub month: u32,
    pub year: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
