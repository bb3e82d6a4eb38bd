//! # Comparable Entity
//!
//! A product listing used as pricing evidence.
//!
//! Comparables are read-only snapshots copied out of the persistence layer
//! once per request. They are never mutated, never cached across requests,
//! and carry no lifecycle of their own.

use crate::domain::value_objects::{Category, Price, SupplierId, Unit};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Trailing window, in days, over which demand (RFQ postings) is counted.
pub const DEMAND_WINDOW_DAYS: i64 = 30;

/// A listing snapshot used as pricing evidence.
///
/// Only active listings with a strictly positive price become comparables;
/// the repository applies both filters before the snapshot is built, and
/// [`Price`] enforces positivity for values built in code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comparable {
    category: Category,
    name: String,
    unit_price: Price,
    unit: Unit,
    supplier_id: SupplierId,
    is_active: bool,
    listed_at: DateTime<Utc>,
}

impl Comparable {
    /// Creates a comparable from already-validated parts.
    #[must_use]
    pub fn new(
        category: Category,
        name: impl Into<String>,
        unit_price: Price,
        unit: Unit,
        supplier_id: SupplierId,
        is_active: bool,
        listed_at: DateTime<Utc>,
    ) -> Self {
        Self {
            category,
            name: name.into(),
            unit_price,
            unit,
            supplier_id,
            is_active,
            listed_at,
        }
    }

    /// Returns the category this listing belongs to.
    #[must_use]
    pub fn category(&self) -> &Category {
        &self.category
    }

    /// Returns the listing name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the unit price.
    #[must_use]
    pub fn unit_price(&self) -> Price {
        self.unit_price
    }

    /// Returns the unit of measurement.
    #[must_use]
    pub fn unit(&self) -> &Unit {
        &self.unit
    }

    /// Returns the supplier that owns the listing.
    #[must_use]
    pub fn supplier_id(&self) -> &SupplierId {
        &self.supplier_id
    }

    /// Returns true if the listing was active when snapshotted.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.is_active
    }

    /// Returns when the listing was created.
    #[must_use]
    pub fn listed_at(&self) -> DateTime<Utc> {
        self.listed_at
    }

    /// Returns the listing age relative to `as_of`, in whole days.
    #[must_use]
    pub fn age_days(&self, as_of: DateTime<Utc>) -> i64 {
        (as_of - self.listed_at).num_days()
    }
}

impl fmt::Display for Comparable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Comparable({} @ {} {} from {})",
            self.name, self.unit_price, self.unit, self.supplier_id
        )
    }
}

/// Count of RFQ postings for a category within a trailing window.
///
/// Ephemeral, recomputed per call against the evaluation time. RFQs count
/// only when their category matches exactly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemandSignal {
    category: Category,
    rfq_count: u64,
    window_days: i64,
    as_of: DateTime<Utc>,
}

impl DemandSignal {
    /// Creates a demand signal for the default trailing window.
    #[must_use]
    pub fn new(category: Category, rfq_count: u64, as_of: DateTime<Utc>) -> Self {
        Self {
            category,
            rfq_count,
            window_days: DEMAND_WINDOW_DAYS,
            as_of,
        }
    }

    /// Returns the category the signal was measured for.
    #[must_use]
    pub fn category(&self) -> &Category {
        &self.category
    }

    /// Returns the RFQ count inside the window.
    #[must_use]
    pub fn rfq_count(&self) -> u64 {
        self.rfq_count
    }

    /// Returns the window width in days.
    #[must_use]
    pub fn window_days(&self) -> i64 {
        self.window_days
    }

    /// Returns the evaluation time the window trails from.
    #[must_use]
    pub fn as_of(&self) -> DateTime<Utc> {
        self.as_of
    }

    /// Returns the start of the trailing window.
    #[must_use]
    pub fn window_start(&self) -> DateTime<Utc> {
        self.as_of - chrono::Duration::days(self.window_days)
    }
}
