//! Core data models for the expense planner
//!
//! This module contains the data structures that represent the domain:
//! categories, expenses, money amounts, ids, and calendar periods.

pub mod category;
pub mod expense;
pub mod ids;
pub mod money;
pub mod period;

pub use category::Category;
pub use expense::Expense;
pub use ids::ExpenseId;
pub use money::Money;
pub use period::MonthPeriod;
