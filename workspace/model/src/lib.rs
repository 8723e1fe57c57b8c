//! Persistent records of the finance tracker and the repository functions
//! that read and write them.

pub mod entities;
pub mod period;
pub mod repository;

pub use entities::category::Category;
pub use period::PeriodFilter;
