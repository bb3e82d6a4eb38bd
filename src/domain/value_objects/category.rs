//! # Category and Unit Value Objects
//!
//! Validated string wrappers for product categories and units of
//! measurement. Category matching is exact and case-sensitive, mirroring
//! the equality predicate used by the persistence queries.

use crate::domain::errors::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A product category.
///
/// Non-empty after trimming. Categories are compared exactly; there is no
/// normalization or fuzzy matching at this level.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Category(String);

impl Category {
    /// Creates a category from a string.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidCategory` if the trimmed value is empty.
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::invalid_category("must not be blank"));
        }
        Ok(Self(value))
    }

    /// Returns the category name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Category {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

/// A unit of measurement for a listing or an order.
///
/// Non-empty after trimming. The default unit is `"piece"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Unit(String);

impl Unit {
    /// Creates a unit from a string.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidUnit` if the trimmed value is empty.
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::invalid_unit("must not be blank"));
        }
        Ok(Self(value))
    }

    /// Returns the unit name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Unit {
    fn default() -> Self {
        Self("piece".to_string())
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Unit {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn category_new_valid() {
        let category = Category::new("electronics").unwrap();
        assert_eq!(category.as_str(), "electronics");
    }

    #[test]
    fn category_blank_rejected() {
        assert!(Category::new("").is_err());
        assert!(Category::new("   ").is_err());
    }

    #[test]
    fn category_exact_match_is_case_sensitive() {
        let a = Category::new("Electronics").unwrap();
        let b = Category::new("electronics").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn unit_new_valid() {
        let unit = Unit::new("kg").unwrap();
        assert_eq!(unit.as_str(), "kg");
    }

    #[test]
    fn unit_blank_rejected() {
        assert!(Unit::new("  ").is_err());
    }

    #[test]
    fn unit_default_is_piece() {
        assert_eq!(Unit::default().as_str(), "piece");
    }

    #[test]
    fn category_from_str() {
        let category: Category = "machinery".parse().unwrap();
        assert_eq!(category.as_str(), "machinery");
    }
}
