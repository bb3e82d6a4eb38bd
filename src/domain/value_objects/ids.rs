//! # Identifier Value Objects
//!
//! String-based identifiers for external entities referenced by the engine.

use crate::domain::errors::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier for a supplier.
///
/// The engine only reads supplier identity off listing snapshots to count
/// distinct suppliers and attribute comparables; it never creates suppliers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SupplierId(String);

impl SupplierId {
    /// Creates a supplier id from a string.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidSupplierId` if the trimmed value is empty.
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::invalid_supplier_id("must not be blank"));
        }
        Ok(Self(value))
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SupplierId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn supplier_id_new_valid() {
        let id = SupplierId::new("supplier-42").unwrap();
        assert_eq!(id.as_str(), "supplier-42");
        assert_eq!(id.to_string(), "supplier-42");
    }

    #[test]
    fn supplier_id_blank_rejected() {
        assert!(SupplierId::new("").is_err());
    }

    #[test]
    fn supplier_id_equality() {
        let a = SupplierId::new("s1").unwrap();
        let b = SupplierId::new("s1").unwrap();
        assert_eq!(a, b);
    }
}
