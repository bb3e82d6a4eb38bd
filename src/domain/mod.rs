//! # Domain Layer
//!
//! Entities, value objects, and pure services for market analytics.
//!
//! Everything in this layer is deterministic and free of I/O. The
//! statistical aggregator and scoring engine are pure functions of their
//! inputs, which is what makes suggestion output reproducible for a fixed
//! data snapshot.

pub mod entities;
pub mod errors;
pub mod services;
pub mod value_objects;

pub use errors::{DomainError, DomainResult};
