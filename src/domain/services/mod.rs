//! # Domain Services
//!
//! Pure computations over domain entities.
//!
//! - [`aggregate`]: Statistical aggregation over comparable prices
//! - [`scoring`]: Market scoring and classification

pub mod aggregate;
pub mod scoring;

pub use aggregate::{AggregateStats, PriceSummary};
pub use scoring::{MarketScore, ScoringEngine};
