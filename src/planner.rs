//! Expense planner
//!
//! The in-memory aggregate owning all expenses and budgets for one session.
//! It provides CRUD over expenses, budget configuration, and read-only
//! aggregation queries. Internal state is owned exclusively; read accessors
//! return copies so callers cannot corrupt it.
//!
//! The planner is single-threaded by design. If an instance is shared across
//! callers, the callers are responsible for external mutual exclusion.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::clock::{Clock, SystemClock};
use crate::error::{PlannerResult, ValidationError};
use crate::models::{Category, Expense, ExpenseId, MonthPeriod, Money};

/// Aggregate summary over the full expense history
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseSummary {
    /// Sum of all recorded amounts
    pub total_expenses: Money,
    /// Number of recorded expenses
    pub expense_count: usize,
    /// Mean amount per expense, zero when there are none
    pub average_expense: Money,
    /// The configured monthly budget
    pub monthly_budget: Money,
    /// Copy of the per-category budget map (one entry per category)
    pub category_budgets: BTreeMap<Category, Money>,
}

/// In-memory expense collection with budget tracking and aggregation queries
#[derive(Debug)]
pub struct ExpensePlanner {
    expenses: Vec<Expense>,
    category_budgets: BTreeMap<Category, Money>,
    monthly_budget: Money,
    clock: Box<dyn Clock>,
}

impl ExpensePlanner {
    /// Create a planner using the system clock
    pub fn new() -> Self {
        Self::with_clock(Box::new(SystemClock))
    }

    /// Create a planner with an explicit clock
    ///
    /// The clock supplies "today" for the future-date check on inserts;
    /// tests pass a [`crate::clock::FixedClock`] to pin it.
    pub fn with_clock(clock: Box<dyn Clock>) -> Self {
        // Every category gets a budget entry up front, so lookups are total.
        let category_budgets = Category::all()
            .iter()
            .map(|category| (*category, Money::zero()))
            .collect();

        Self {
            expenses: Vec::new(),
            category_budgets,
            monthly_budget: Money::zero(),
            clock,
        }
    }

    /// Record a new expense and return its id
    ///
    /// Validation failures from [`Expense::new`] propagate unchanged; on
    /// failure nothing is added.
    pub fn add_expense(
        &mut self,
        description: &str,
        amount: Money,
        category: Category,
        date: NaiveDate,
    ) -> PlannerResult<ExpenseId> {
        let expense = Expense::new(description, amount, category, date, self.clock.today())?;
        let id = expense.id();
        self.expenses.push(expense);
        Ok(id)
    }

    /// Remove the expense with the given id
    ///
    /// Returns true if an expense was removed, false if none matched. A
    /// second call with the same id therefore returns false and leaves the
    /// collection unchanged.
    pub fn remove_expense(&mut self, id: ExpenseId) -> bool {
        let initial_count = self.expenses.len();
        self.expenses.retain(|expense| expense.id() != id);
        self.expenses.len() < initial_count
    }

    /// Set the overall monthly budget
    ///
    /// Fails with [`ValidationError::NegativeBudget`] if the amount is
    /// negative.
    pub fn set_monthly_budget(&mut self, amount: Money) -> PlannerResult<()> {
        if amount.is_negative() {
            return Err(ValidationError::NegativeBudget);
        }
        self.monthly_budget = amount;
        Ok(())
    }

    /// Set the budget for one category
    ///
    /// Fails with [`ValidationError::NegativeBudget`] if the amount is
    /// negative. A budget of zero means "unset" for
    /// [`Self::is_category_budget_exceeded`].
    pub fn set_category_budget(&mut self, category: Category, amount: Money) -> PlannerResult<()> {
        if amount.is_negative() {
            return Err(ValidationError::NegativeBudget);
        }
        self.category_budgets.insert(category, amount);
        Ok(())
    }

    /// Sum of amounts for expenses dated within `[start, end]` inclusive
    ///
    /// Fails with [`ValidationError::RangeInverted`] if `start > end`. No
    /// matches sum to zero.
    pub fn total_expenses(&self, start: NaiveDate, end: NaiveDate) -> PlannerResult<Money> {
        if start > end {
            return Err(ValidationError::RangeInverted);
        }
        Ok(self.sum_in_range(start, end))
    }

    /// All expenses with the given category, in insertion order
    pub fn expenses_by_category(&self, category: Category) -> Vec<Expense> {
        self.expenses
            .iter()
            .filter(|expense| expense.category() == category)
            .cloned()
            .collect()
    }

    /// Monthly budget minus the spend inside the given calendar month
    ///
    /// Fails with [`ValidationError::MonthOutOfRange`] unless
    /// `1 <= month <= 12`. The result is negative when the month is over
    /// budget.
    pub fn remaining_monthly_budget(&self, year: i32, month: u32) -> PlannerResult<Money> {
        let period = MonthPeriod::new(year, month)?;
        let spent: Money = self
            .expenses
            .iter()
            .filter(|expense| period.contains(expense.date()))
            .map(Expense::amount)
            .sum();
        Ok(self.monthly_budget - spent)
    }

    /// Whether all-history spend in a category strictly exceeds its budget
    ///
    /// A budget of exactly zero is the "unset" sentinel: the check is always
    /// false then, regardless of spend.
    pub fn is_category_budget_exceeded(&self, category: Category) -> bool {
        let budget = self.category_budget(category);
        if budget.is_zero() {
            return false;
        }

        let spent: Money = self
            .expenses
            .iter()
            .filter(|expense| expense.category() == category)
            .map(Expense::amount)
            .sum();
        spent > budget
    }

    /// Per-category spend totals for expenses dated within `[start, end]`
    ///
    /// Fails with [`ValidationError::RangeInverted`] if `start > end`, the
    /// same check as [`Self::total_expenses`]. Categories without a matching
    /// expense are absent from the result rather than present with zero.
    pub fn category_statistics(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> PlannerResult<BTreeMap<Category, Money>> {
        if start > end {
            return Err(ValidationError::RangeInverted);
        }

        let mut statistics = BTreeMap::new();
        for expense in &self.expenses {
            if expense.date() >= start && expense.date() <= end {
                let entry = statistics.entry(expense.category()).or_insert(Money::zero());
                *entry += expense.amount();
            }
        }
        Ok(statistics)
    }

    /// Up to `limit` expenses sorted by amount descending
    ///
    /// Fails with [`ValidationError::NonPositiveLimit`] if `limit` is zero.
    /// Ties keep their original relative order. Fewer than `limit` recorded
    /// expenses returns all of them.
    pub fn top_expenses(&self, limit: usize) -> PlannerResult<Vec<Expense>> {
        if limit == 0 {
            return Err(ValidationError::NonPositiveLimit);
        }

        let mut sorted = self.expenses.clone();
        // Stable sort, so equal amounts stay in insertion order.
        sorted.sort_by(|a, b| b.amount().cmp(&a.amount()));
        sorted.truncate(limit);
        Ok(sorted)
    }

    /// Aggregate summary over the full history
    pub fn summary(&self) -> ExpenseSummary {
        let total_expenses: Money = self.expenses.iter().map(Expense::amount).sum();
        let expense_count = self.expenses.len();

        ExpenseSummary {
            total_expenses,
            expense_count,
            average_expense: total_expenses.split_even(expense_count),
            monthly_budget: self.monthly_budget,
            category_budgets: self.category_budgets.clone(),
        }
    }

    /// Copy of the full expense collection, in insertion order
    pub fn expenses(&self) -> Vec<Expense> {
        self.expenses.clone()
    }

    /// The configured monthly budget
    pub fn monthly_budget(&self) -> Money {
        self.monthly_budget
    }

    /// The stored budget for a category
    ///
    /// Total over all categories: the map holds an entry for every variant
    /// from construction on.
    pub fn category_budget(&self, category: Category) -> Money {
        self.category_budgets
            .get(&category)
            .copied()
            .unwrap_or_default()
    }

    fn sum_in_range(&self, start: NaiveDate, end: NaiveDate) -> Money {
        self.expenses
            .iter()
            .filter(|expense| expense.date() >= start && expense.date() <= end)
            .map(Expense::amount)
            .sum()
    }
}

impl Default for ExpensePlanner {
    fn default() -> Self {
        Self::new()
    }
}
