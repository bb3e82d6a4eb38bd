//! # Domain Errors
//!
//! Error types for domain-level validation failures.
//!
//! These errors are raised when constructing value objects from raw data
//! (prices, categories, units). They never represent infrastructure
//! failures; those live in the persistence and application layers.

use thiserror::Error;

/// Domain layer error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Price is not a valid positive number.
    #[error("invalid price: {0}")]
    InvalidPrice(String),

    /// Category is empty or blank.
    #[error("invalid category: {0}")]
    InvalidCategory(String),

    /// Unit of measurement is empty or blank.
    #[error("invalid unit: {0}")]
    InvalidUnit(String),

    /// Supplier identifier is empty or blank.
    #[error("invalid supplier id: {0}")]
    InvalidSupplierId(String),
}

impl DomainError {
    /// Creates an invalid price error.
    #[must_use]
    pub fn invalid_price(message: impl Into<String>) -> Self {
        Self::InvalidPrice(message.into())
    }

    /// Creates an invalid category error.
    #[must_use]
    pub fn invalid_category(message: impl Into<String>) -> Self {
        Self::InvalidCategory(message.into())
    }

    /// Creates an invalid unit error.
    #[must_use]
    pub fn invalid_unit(message: impl Into<String>) -> Self {
        Self::InvalidUnit(message.into())
    }

    /// Creates an invalid supplier id error.
    #[must_use]
    pub fn invalid_supplier_id(message: impl Into<String>) -> Self {
        Self::InvalidSupplierId(message.into())
    }
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
