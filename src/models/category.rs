//! Expense category model
//!
//! Categories form a closed set: every expense carries exactly one of these
//! tags, and the planner keeps one budget entry per tag. There is no dynamic
//! extension.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;

/// Classification tag applied to every expense
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Food,
    Transport,
    Entertainment,
    Utilities,
    Health,
    Education,
    Other,
}

impl Category {
    /// Get all categories in declaration order
    ///
    /// The budget map is initialized by iterating this slice once, so every
    /// category always has an entry.
    pub fn all() -> &'static [Self] {
        &[
            Self::Food,
            Self::Transport,
            Self::Entertainment,
            Self::Utilities,
            Self::Health,
            Self::Education,
            Self::Other,
        ]
    }

    /// Get the lowercase name for this category
    pub fn name(&self) -> &'static str {
        match self {
            Self::Food => "food",
            Self::Transport => "transport",
            Self::Entertainment => "entertainment",
            Self::Utilities => "utilities",
            Self::Health => "health",
            Self::Education => "education",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Category {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "food" => Ok(Self::Food),
            "transport" => Ok(Self::Transport),
            "entertainment" => Ok(Self::Entertainment),
            "utilities" => Ok(Self::Utilities),
            "health" => Ok(Self::Health),
            "education" => Ok(Self::Education),
            "other" => Ok(Self::Other),
            _ => Err(ValidationError::InvalidCategory),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_covers_every_variant() {
        let all = Category::all();
        assert_eq!(all.len(), 7);
        assert_eq!(all[0], Category::Food);
        assert_eq!(all[6], Category::Other);
    }

    #[test]
    fn test_display() {
        assert_eq!(Category::Food.to_string(), "food");
        assert_eq!(Category::Entertainment.to_string(), "entertainment");
    }

    #[test]
    fn test_from_str() {
        assert_eq!("food".parse::<Category>().unwrap(), Category::Food);
        assert_eq!("  Transport ".parse::<Category>().unwrap(), Category::Transport);
        assert_eq!(
            "groceries".parse::<Category>(),
            Err(ValidationError::InvalidCategory)
        );
        assert_eq!("".parse::<Category>(), Err(ValidationError::InvalidCategory));
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&Category::Utilities).unwrap();
        assert_eq!(json, "\"utilities\"");

        let deserialized: Category = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, Category::Utilities);
    }
}
