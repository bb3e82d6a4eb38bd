//! # Value Objects
//!
//! Immutable types with validation and domain semantics.
//!
//! ## Identity Types
//!
//! - [`SupplierId`]: String-based supplier identifier
//!
//! ## Numeric Types
//!
//! - [`Price`]: Strictly positive decimal unit price
//!
//! ## String Types
//!
//! - [`Category`]: Non-empty product category, exact-match semantics
//! - [`Unit`]: Unit of measurement, defaults to `"piece"`
//!
//! ## Classifications
//!
//! - [`DemandLevel`], [`CompetitionLevel`], [`PriceStability`],
//!   [`PriceTrend`]: lowercase-serialized market classifications

pub mod category;
pub mod enums;
pub mod ids;
pub mod price;

pub use category::{Category, Unit};
pub use enums::{CompetitionLevel, DemandLevel, PriceStability, PriceTrend};
pub use ids::SupplierId;
pub use price::Price;
