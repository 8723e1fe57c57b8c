//! Per-entity storage operations.
//!
//! Every function accepts any [`sea_orm::ConnectionTrait`] so callers can pass
//! a pooled connection or an open transaction. A record that does not exist is
//! reported as `Ok(None)`; `Err` is reserved for storage failures.

pub mod budget;
pub mod income;
pub mod transaction;

pub use budget::{
    Upserted, delete_budget, find_budget, find_budget_by_key, list_budgets, update_budget_amount,
    upsert_budget,
};
pub use income::{
    NewIncome, create_income, delete_income, find_income, list_incomes, update_income,
};
pub use transaction::{
    NewTransaction, create_transaction, delete_transaction, find_transaction, list_transactions,
    update_transaction,
};
