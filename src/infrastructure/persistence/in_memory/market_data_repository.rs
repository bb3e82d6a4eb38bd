//! # In-Memory Market Data Repository
//!
//! In-memory implementation of [`MarketDataRepository`] for tests and
//! local development, backed by thread-safe vectors.
//!
//! Listings are stored as [`Comparable`] snapshots, so the positive-price
//! filter holds by construction; the active flag is filtered here the same
//! way the SQL implementation filters it.

use crate::domain::entities::Comparable;
use crate::domain::value_objects::Category;
use crate::infrastructure::persistence::traits::{
    CategoryCount, MarketDataRepository, RepositoryResult,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// An RFQ posting as seen by the demand counter.
#[derive(Debug, Clone)]
struct RfqRecord {
    category: Category,
    created_at: DateTime<Utc>,
}

/// In-memory implementation of [`MarketDataRepository`].
#[derive(Debug, Clone, Default)]
pub struct InMemoryMarketDataRepository {
    listings: Arc<RwLock<Vec<Comparable>>>,
    rfqs: Arc<RwLock<Vec<RfqRecord>>>,
}

impl InMemoryMarketDataRepository {
    /// Creates an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a listing snapshot.
    pub async fn add_listing(&self, listing: Comparable) {
        let mut listings = self.listings.write().await;
        listings.push(listing);
    }

    /// Records an RFQ posting.
    pub async fn add_rfq(&self, category: Category, created_at: DateTime<Utc>) {
        let mut rfqs = self.rfqs.write().await;
        rfqs.push(RfqRecord {
            category,
            created_at,
        });
    }

    /// Removes all stored data.
    pub async fn clear(&self) {
        self.listings.write().await.clear();
        self.rfqs.write().await.clear();
    }

    /// Returns the number of stored listings, active or not.
    pub async fn listing_count(&self) -> usize {
        self.listings.read().await.len()
    }
}

#[async_trait]
impl MarketDataRepository for InMemoryMarketDataRepository {
    async fn find_active_listings(
        &self,
        category: &Category,
    ) -> RepositoryResult<Vec<Comparable>> {
        let listings = self.listings.read().await;
        Ok(listings
            .iter()
            .filter(|l| l.is_active() && l.category() == category)
            .cloned()
            .collect())
    }

    async fn count_rfqs_since(
        &self,
        category: &Category,
        since: DateTime<Utc>,
    ) -> RepositoryResult<u64> {
        let rfqs = self.rfqs.read().await;
        Ok(rfqs
            .iter()
            .filter(|r| &r.category == category && r.created_at >= since)
            .count() as u64)
    }

    async fn count_active_suppliers(&self, category: &Category) -> RepositoryResult<u64> {
        let listings = self.listings.read().await;
        let suppliers: std::collections::HashSet<&str> = listings
            .iter()
            .filter(|l| l.is_active() && l.category() == category)
            .map(|l| l.supplier_id().as_str())
            .collect();
        Ok(suppliers.len() as u64)
    }

    async fn category_counts(&self) -> RepositoryResult<Vec<CategoryCount>> {
        let listings = self.listings.read().await;
        let mut counts: HashMap<&str, u64> = HashMap::new();
        for listing in listings.iter().filter(|l| l.is_active()) {
            *counts.entry(listing.category().as_str()).or_insert(0) += 1;
        }

        let mut result: Vec<CategoryCount> = counts
            .into_iter()
            .map(|(name, product_count)| CategoryCount {
                name: name.to_string(),
                product_count,
            })
            .collect();
        // Descending by count, name ascending for a deterministic order.
        result.sort_by(|a, b| {
            b.product_count
                .cmp(&a.product_count)
                .then_with(|| a.name.cmp(&b.name))
        });
        Ok(result)
    }
}
