use chrono::NaiveDate;
use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;

/// Money received from a named source, booked against a month.
///
/// Independent of transactions in the `Income` category; only the monthly
/// summary adds the two together.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "incomes")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_type = "Decimal(Some((16, 4)))")]
    pub amount: Decimal,
    /// Where the money came from (e.g. "Salary").
    pub source: String,
    /// Zero-based month the income is booked against.
    pub month: u32,
    pub year: i32,
    /// The day the money was received.
    pub date: NaiveDate,
    #[sea_orm(default_value = "false")]
    pub recurring: bool,
    pub notes: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
