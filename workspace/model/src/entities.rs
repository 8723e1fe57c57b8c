//! This file serves as the root for all SeaORM entity modules.
//! The three collections are independent: there are no foreign keys, and
//! budgets relate to transactions only through the shared category label.

pub mod budget;
pub mod category;
pub mod income;
pub mod transaction;

pub mod prelude {
    //! A prelude module for easy importing of all entities.
    pub use super::budget::Entity as Budget;
    pub use super::category::Category;
    pub use super::income::Entity as Income;
    pub use super::transaction::Entity as Transaction;
}
