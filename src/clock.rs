//! Current-date source
//!
//! The only external dependency of the planner is "today", read when an
//! expense is created to reject future dates. It sits behind a trait so
//! tests can pin the date and cover boundary cases deterministically.

use chrono::NaiveDate;
use std::fmt;

/// Source of the current calendar date
pub trait Clock: fmt::Debug {
    /// The current date
    fn today(&self) -> NaiveDate;
}

/// Clock backed by the system's local time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        chrono::Local::now().date_naive()
    }
}

/// Clock pinned to a fixed date, for deterministic tests
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
