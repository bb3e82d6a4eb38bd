//! # Application Layer
//!
//! Orchestration of domain logic and infrastructure: request validation,
//! concurrent data reads with graceful degradation, and synthesis of
//! suggestion and analysis responses.

pub mod error;
pub mod services;

pub use error::{ApplicationError, ApplicationResult};
