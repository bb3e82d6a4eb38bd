//! # Application Errors
//!
//! Error taxonomy for the analytics engine.
//!
//! Three kinds of failure are distinguished:
//!
//! - `InvalidInput` - a required parameter is missing or out of range;
//!   rejected before any query executes.
//! - `ServiceUnavailable` - every underlying read failed; nothing can be
//!   computed.
//! - Everything else is recovered locally: a single failed metric degrades
//!   to zero evidence for that metric and the call still returns a
//!   well-formed response. Zero comparables is NOT an error at all.

use crate::infrastructure::persistence::RepositoryError;
use thiserror::Error;

/// Application layer error.
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// A request parameter failed validation.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// All required data reads failed; no degraded response is possible.
    #[error("service unavailable: {0}")]
    ServiceUnavailable(String),

    /// A repository failure that could not be recovered locally.
    #[error("repository error: {0}")]
    Repository(#[from] RepositoryError),

    /// Unexpected internal failure.
    #[error("internal error: {0}")]
    Internal(String),
}

impl ApplicationError {
    /// Creates an invalid input error.
    #[must_use]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    /// Creates a service unavailable error.
    #[must_use]
    pub fn service_unavailable(message: impl Into<String>) -> Self {
        Self::ServiceUnavailable(message.into())
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Returns true if this is a validation error.
    #[must_use]
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }

    /// Returns true if this is a total data unavailability error.
    #[must_use]
    pub fn is_service_unavailable(&self) -> bool {
        matches!(self, Self::ServiceUnavailable(_))
    }
}

impl From<crate::domain::DomainError> for ApplicationError {
    fn from(err: crate::domain::DomainError) -> Self {
        Self::InvalidInput(err.to_string())
    }
}

/// Result type for application operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DomainError;

    #[test]
    fn invalid_input_display() {
        let err = ApplicationError::invalid_input("quantity must be at least 1");
        assert!(err.to_string().contains("invalid input"));
        assert!(err.is_invalid_input());
        assert!(!err.is_service_unavailable());
    }

    #[test]
    fn service_unavailable_display() {
        let err = ApplicationError::service_unavailable("all market data reads failed");
        assert!(err.to_string().contains("service unavailable"));
        assert!(err.is_service_unavailable());
    }

    #[test]
    fn domain_error_maps_to_invalid_input() {
        let err: ApplicationError = DomainError::invalid_category("must not be blank").into();
        assert!(err.is_invalid_input());
    }

    #[test]
    fn repository_error_wraps() {
        let err: ApplicationError = RepositoryError::query("bad sql").into();
        assert!(err.to_string().contains("repository error"));
    }
}
