//! expense-planner - In-memory personal expense tracking and budgeting
//!
//! This library records discrete expense entries, aggregates them by category
//! and date range, and compares aggregates against user-set budgets. All
//! state lives in memory and is owned by a single [`ExpensePlanner`]; there
//! is no persistence, networking, or concurrency layer.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `clock`: current-date source (mockable for tests)
//! - `error`: the validation error type
//! - `models`: core data models (categories, expenses, money, periods)
//! - `planner`: the expense collection and its aggregation queries
//!
//! # Example
//!
//! ```rust
//! use expense_planner::{Category, ExpensePlanner, Money};
//!
//! let mut planner = ExpensePlanner::new();
//! let today = chrono::Local::now().date_naive();
//!
//! let id = planner.add_expense("Groceries", Money::from_cents(2500), Category::Food, today)?;
//! planner.set_category_budget(Category::Food, Money::from_cents(40_000))?;
//!
//! assert_eq!(planner.total_expenses(today, today)?, Money::from_cents(2500));
//! assert!(!planner.is_category_budget_exceeded(Category::Food));
//! assert!(planner.remove_expense(id));
//! # Ok::<(), expense_planner::ValidationError>(())
//! ```

pub mod clock;
pub mod error;
pub mod models;
pub mod planner;

pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{PlannerResult, ValidationError};
pub use models::{Category, Expense, ExpenseId, MonthPeriod, Money};
pub use planner::{ExpensePlanner, ExpenseSummary};
