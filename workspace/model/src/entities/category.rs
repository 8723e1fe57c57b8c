use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Fixed label attached to every transaction and budget.
///
/// Stored and serialized as the variant name (e.g. `"Food"`). `Income` marks
/// money coming in and is excluded from every spending aggregate.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    EnumIter,
    DeriveActiveEnum,
    Serialize,
    Deserialize,
    ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(32))")]
pub enum Category {
    #[sea_orm(string_value = "Food")]
    Food,
    #[sea_orm(string_value = "Housing")]
    Housing,
    #[sea_orm(string_value = "Transportation")]
    Transportation,
    #[sea_orm(string_value = "Entertainment")]
    Entertainment,
    #[sea_orm(string_value = "Shopping")]
    Shopping,
    #[sea_orm(string_value = "Utilities")]
    Utilities,
    #[sea_orm(string_value = "Healthcare")]
    Healthcare,
    #[sea_orm(string_value = "Education")]
    Education,
    #[sea_orm(string_value = "Investments")]
    Investments,
    #[sea_orm(string_value = "Income")]
    Income,
    #[default]
    #[sea_orm(string_value = "Other")]
    Other,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Food => "Food",
            Category::Housing => "Housing",
            Category::Transportation => "Transportation",
            Category::Entertainment => "Entertainment",
            Category::Shopping => "Shopping",
            Category::Utilities => "Utilities",
            Category::Healthcare => "Healthcare",
            Category::Education => "Education",
            Category::Investments => "Investments",
            Category::Income => "Income",
            Category::Other => "Other",
        }
    }

    /// Whether amounts in this category count as spending.
    pub fn is_expense(&self) -> bool {
        *self != Category::Income
    }
}
