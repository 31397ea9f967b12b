//! Expense model
//!
//! One recorded spending event. Validated at construction and immutable
//! afterwards: fields are private and exposed through read accessors only.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{PlannerResult, ValidationError};

use super::category::Category;
use super::ids::ExpenseId;
use super::money::Money;

/// One immutable recorded spending event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    id: ExpenseId,
    description: String,
    amount: Money,
    category: Category,
    date: NaiveDate,
}

impl Expense {
    /// Create a new validated expense
    ///
    /// `today` is the reference date for the future-date check; the planner
    /// supplies it from its clock so tests can pin it.
    ///
    /// Fails with:
    /// - [`ValidationError::EmptyDescription`] if the description is empty
    ///   or all-whitespace
    /// - [`ValidationError::NonPositiveAmount`] if the amount is not
    ///   strictly positive
    /// - [`ValidationError::FutureDate`] if the date is after `today`
    pub fn new(
        description: &str,
        amount: Money,
        category: Category,
        date: NaiveDate,
        today: NaiveDate,
    ) -> PlannerResult<Self> {
        let description = description.trim();
        if description.is_empty() {
            return Err(ValidationError::EmptyDescription);
        }
        if !amount.is_positive() {
            return Err(ValidationError::NonPositiveAmount);
        }
        if date > today {
            return Err(ValidationError::FutureDate);
        }

        Ok(Self {
            id: ExpenseId::new(),
            description: description.to_string(),
            amount,
            category,
            date,
        })
    }

    /// Unique identifier, the sole lookup and removal key
    pub fn id(&self) -> ExpenseId {
        self.id
    }

    /// Trimmed description text
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Amount spent (always positive)
    pub fn amount(&self) -> Money {
        self.amount
    }

    /// Category tag
    pub fn category(&self) -> Category {
        self.category
    }

    /// Date the expense occurred
    pub fn date(&self) -> NaiveDate {
        self.date
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} ({}, {})",
            self.amount, self.description, self.category, self.date
        )
    }
}
