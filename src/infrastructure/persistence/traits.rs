//! # Market Data Repository Port
//!
//! Read-only data access facade for the analytics engine.
//!
//! The engine depends only on this trait; implementations run fixed,
//! parameterized aggregate queries (active flag, positive-price filter,
//! exact category match, trailing time window). There is no dynamic query
//! composition: every predicate an implementation may apply is spelled out
//! in the method contracts below.
//!
//! Counts and extrema are exact, not sampled. The engine performs no
//! writes, so failed or abandoned reads leave nothing to roll back.

use crate::domain::entities::Comparable;
use crate::domain::value_objects::Category;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Error type for repository operations.
#[derive(Debug, Clone, Error)]
pub enum RepositoryError {
    /// Could not reach the underlying store.
    #[error("connection error: {0}")]
    Connection(String),

    /// A query failed to execute.
    #[error("query error: {0}")]
    Query(String),

    /// A query exceeded its time budget.
    #[error("query timed out: {0}")]
    Timeout(String),

    /// A row could not be mapped into a domain type.
    #[error("row mapping error: {0}")]
    Mapping(String),
}

impl RepositoryError {
    /// Creates a connection error.
    #[must_use]
    pub fn connection(msg: impl Into<String>) -> Self {
        Self::Connection(msg.into())
    }

    /// Creates a query error.
    #[must_use]
    pub fn query(msg: impl Into<String>) -> Self {
        Self::Query(msg.into())
    }

    /// Creates a timeout error.
    #[must_use]
    pub fn timeout(msg: impl Into<String>) -> Self {
        Self::Timeout(msg.into())
    }

    /// Creates a row mapping error.
    #[must_use]
    pub fn mapping(msg: impl Into<String>) -> Self {
        Self::Mapping(msg.into())
    }

    /// Returns true if retrying the read could succeed.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Connection(_) | Self::Timeout(_))
    }
}

/// Result type for repository operations.
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// A category together with its active product count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCount {
    /// Category name.
    pub name: String,
    /// Number of active listings in the category.
    pub product_count: u64,
}

/// Read-only aggregate queries over marketplace data.
///
/// All methods are independent read-only projections of the same dataset
/// and may be issued concurrently.
#[async_trait]
pub trait MarketDataRepository: Send + Sync + fmt::Debug {
    /// Returns all active, positively-priced listings in the category.
    ///
    /// Both filters are applied by the implementation; callers receive
    /// only rows that qualify as pricing evidence.
    async fn find_active_listings(&self, category: &Category)
        -> RepositoryResult<Vec<Comparable>>;

    /// Counts RFQs posted for the category at or after `since`.
    ///
    /// The category must match exactly.
    async fn count_rfqs_since(
        &self,
        category: &Category,
        since: DateTime<Utc>,
    ) -> RepositoryResult<u64>;

    /// Counts distinct suppliers with at least one active, positively-priced
    /// listing in the category.
    async fn count_active_suppliers(&self, category: &Category) -> RepositoryResult<u64>;

    /// Returns all categories with active listings, ordered by product
    /// count descending.
    async fn category_counts(&self) -> RepositoryResult<Vec<CategoryCount>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repository_error_display() {
        let err = RepositoryError::query("syntax error");
        assert!(err.to_string().contains("query error"));
        assert!(err.to_string().contains("syntax error"));
    }

    #[test]
    fn repository_error_retryable() {
        assert!(RepositoryError::connection("refused").is_retryable());
        assert!(RepositoryError::timeout("5s exceeded").is_retryable());
        assert!(!RepositoryError::query("bad sql").is_retryable());
        assert!(!RepositoryError::mapping("bad row").is_retryable());
    }

    #[test]
    fn category_count_serializes_expected_fields() {
        let count = CategoryCount {
            name: "electronics".to_string(),
            product_count: 12,
        };
        let json = serde_json::to_value(&count).unwrap();
        assert_eq!(json["name"], "electronics");
        assert_eq!(json["product_count"], 12);
    }
}
