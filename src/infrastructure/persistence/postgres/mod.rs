//! # PostgreSQL Persistence
//!
//! sqlx-backed repository implementation.

pub mod market_data_repository;

pub use market_data_repository::PostgresMarketDataRepository;
