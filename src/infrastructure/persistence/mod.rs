//! # Persistence Layer
//!
//! Data access facade for the analytics engine.
//!
//! ## Port
//!
//! - [`MarketDataRepository`]: Read-only aggregate queries over listings,
//!   RFQs, and suppliers
//!
//! ## Implementations
//!
//! - `in_memory`: In-memory implementation for tests and local development
//! - `postgres`: PostgreSQL implementation using sqlx

pub mod in_memory;
pub mod postgres;
pub mod traits;

pub use traits::{CategoryCount, MarketDataRepository, RepositoryError, RepositoryResult};
