//! # In-Memory Persistence
//!
//! In-memory repository implementation for tests and local development.

pub mod market_data_repository;

pub use market_data_repository::InMemoryMarketDataRepository;
