//! Custom error types for the expense planner
//!
//! This module defines the single error kind the library raises, using
//! thiserror for ergonomic error definitions. Every failure is a violated
//! precondition reported at the call that triggered it; the message strings
//! are stable and part of the public contract, so call sites may match on
//! either the variant or the rendered text.

use thiserror::Error;

/// A violated precondition on a planner or model operation
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// Expense description was empty or all-whitespace
    #[error("empty description")]
    EmptyDescription,

    /// Expense amount was zero or negative
    #[error("non-positive amount")]
    NonPositiveAmount,

    /// Category text did not name a known category
    #[error("invalid category")]
    InvalidCategory,

    /// Expense date was after the current date
    #[error("future date")]
    FutureDate,

    /// Expense id text was empty
    #[error("empty id")]
    EmptyId,

    /// Expense id text was not a valid identifier
    #[error("invalid id")]
    InvalidId,

    /// Amount text could not be parsed as a decimal value
    #[error("invalid amount")]
    InvalidAmount,

    /// A budget value was negative
    #[error("negative budget")]
    NegativeBudget,

    /// A date range had its start after its end
    #[error("range inverted")]
    RangeInverted,

    /// A month number was outside 1..=12
    #[error("month out of range")]
    MonthOutOfRange,

    /// A result limit was zero
    #[error("non-positive limit")]
    NonPositiveLimit,
}

/// Result type alias for planner operations
pub type PlannerResult<T> = Result<T, ValidationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_are_stable() {
        assert_eq!(
            ValidationError::EmptyDescription.to_string(),
            "empty description"
        );
        assert_eq!(
            ValidationError::NonPositiveAmount.to_string(),
            "non-positive amount"
        );
        assert_eq!(
            ValidationError::InvalidCategory.to_string(),
            "invalid category"
        );
        assert_eq!(ValidationError::FutureDate.to_string(), "future date");
        assert_eq!(ValidationError::EmptyId.to_string(), "empty id");
        assert_eq!(ValidationError::InvalidAmount.to_string(), "invalid amount");
        assert_eq!(
            ValidationError::NegativeBudget.to_string(),
            "negative budget"
        );
        assert_eq!(ValidationError::RangeInverted.to_string(), "range inverted");
        assert_eq!(
            ValidationError::MonthOutOfRange.to_string(),
            "month out of range"
        );
        assert_eq!(
            ValidationError::NonPositiveLimit.to_string(),
            "non-positive limit"
        );
    }

    #[test]
    fn test_errors_are_matchable() {
        let err = ValidationError::RangeInverted;
        assert!(matches!(err, ValidationError::RangeInverted));
        assert_ne!(err, ValidationError::FutureDate);
    }
}
