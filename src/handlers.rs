pub mod budgets;
pub mod health;
pub mod incomes;
pub mod statistics;
pub mod transactions;
