//! # Domain Entities
//!
//! Request-scoped snapshots of marketplace data.
//!
//! - [`Comparable`]: A listing used as pricing evidence
//! - [`DemandSignal`]: Trailing-window RFQ count for a category
//!
//! All entities here are transient: copied from the persistence layer per
//! request, never mutated, never shared between concurrent requests.

pub mod comparable;

pub use comparable::{Comparable, DemandSignal, DEMAND_WINDOW_DAYS};
