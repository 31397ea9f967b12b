//! Calendar month period
//!
//! A validated (year, month) pair that yields an inclusive date range. The
//! last day of the month is computed as the day before the first of the next
//! month, with December rolling into January of the next year, so short
//! months and leap years need no special cases.

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{PlannerResult, ValidationError};

/// One calendar month, e.g. 2025-06
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MonthPeriod {
    year: i32,
    month: u32,
}

impl MonthPeriod {
    /// Create a month period
    ///
    /// Fails with [`ValidationError::MonthOutOfRange`] unless
    /// `1 <= month <= 12`.
    pub fn new(year: i32, month: u32) -> PlannerResult<Self> {
        if !(1..=12).contains(&month) {
            return Err(ValidationError::MonthOutOfRange);
        }
        Ok(Self { year, month })
    }

    /// The year of this period
    pub fn year(&self) -> i32 {
        self.year
    }

    /// The month of this period (1-12)
    pub fn month(&self) -> u32 {
        self.month
    }

    /// First day of the month
    pub fn start_date(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
            .unwrap_or(NaiveDate::MIN)
    }

    /// Last day of the month (inclusive)
    pub fn end_date(&self) -> NaiveDate {
        let (next_year, next_month) = if self.month == 12 {
            (self.year + 1, 1)
        } else {
            (self.year, self.month + 1)
        };
        NaiveDate::from_ymd_opt(next_year, next_month, 1)
            .map(|first_of_next| first_of_next - Duration::days(1))
            .unwrap_or(NaiveDate::MAX)
    }

    /// Check if a date falls within this month
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start_date() && date <= self.end_date()
    }
}

impl fmt::Display for MonthPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}
