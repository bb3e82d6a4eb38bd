//! # PostgreSQL Market Data Repository
//!
//! PostgreSQL implementation of [`MarketDataRepository`] using sqlx.
//!
//! Every query is fixed and parameterized; the only runtime inputs are the
//! category and the window start, always passed as binds. Filter
//! predicates (active flag, positive price, exact category match) are
//! spelled out in the SQL itself.

use crate::domain::entities::Comparable;
use crate::domain::value_objects::{Category, Price, SupplierId, Unit};
use crate::infrastructure::persistence::traits::{
    CategoryCount, MarketDataRepository, RepositoryError, RepositoryResult,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;

/// PostgreSQL implementation of [`MarketDataRepository`].
///
/// Uses connection pooling via `sqlx::PgPool`. All queries are read-only.
#[derive(Debug, Clone)]
pub struct PostgresMarketDataRepository {
    pool: PgPool,
}

impl PostgresMarketDataRepository {
    /// Creates a new PostgreSQL market data repository.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Returns a reference to the connection pool.
    #[must_use]
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

/// Row shape for listing queries.
#[derive(Debug, sqlx::FromRow)]
struct ListingRow {
    category: String,
    name: String,
    price: Decimal,
    unit: String,
    supplier_id: i64,
    is_active: bool,
    created_at: DateTime<Utc>,
}

impl ListingRow {
    fn into_comparable(self) -> RepositoryResult<Comparable> {
        let category =
            Category::new(self.category).map_err(|e| RepositoryError::mapping(e.to_string()))?;
        let price =
            Price::new(self.price).map_err(|e| RepositoryError::mapping(e.to_string()))?;
        let unit = Unit::new(self.unit).map_err(|e| RepositoryError::mapping(e.to_string()))?;
        let supplier_id = SupplierId::new(self.supplier_id.to_string())
            .map_err(|e| RepositoryError::mapping(e.to_string()))?;

        Ok(Comparable::new(
            category,
            self.name,
            price,
            unit,
            supplier_id,
            self.is_active,
            self.created_at,
        ))
    }
}

/// Row shape for the category listing.
#[derive(Debug, sqlx::FromRow)]
struct CategoryRow {
    category: String,
    product_count: i64,
}

#[async_trait]
impl MarketDataRepository for PostgresMarketDataRepository {
    async fn find_active_listings(
        &self,
        category: &Category,
    ) -> RepositoryResult<Vec<Comparable>> {
        let rows: Vec<ListingRow> = sqlx::query_as(
            r#"
            SELECT category, name, price, unit, supplier_id, is_active, created_at
            FROM products
            WHERE category = $1
              AND is_active = TRUE
              AND price > 0
            ORDER BY created_at DESC
            "#,
        )
        .bind(category.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| RepositoryError::query(e.to_string()))?;

        rows.into_iter().map(ListingRow::into_comparable).collect()
    }

    async fn count_rfqs_since(
        &self,
        category: &Category,
        since: DateTime<Utc>,
    ) -> RepositoryResult<u64> {
        let count: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(id)
            FROM rfqs
            WHERE category = $1
              AND created_at >= $2
            "#,
        )
        .bind(category.as_str())
        .bind(since)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| RepositoryError::query(e.to_string()))?;

        Ok(u64::try_from(count).unwrap_or(0))
    }

    async fn count_active_suppliers(&self, category: &Category) -> RepositoryResult<u64> {
        let count: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(DISTINCT supplier_id)
            FROM products
            WHERE category = $1
              AND is_active = TRUE
              AND price > 0
            "#,
        )
        .bind(category.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| RepositoryError::query(e.to_string()))?;

        Ok(u64::try_from(count).unwrap_or(0))
    }

    async fn category_counts(&self) -> RepositoryResult<Vec<CategoryCount>> {
        let rows: Vec<CategoryRow> = sqlx::query_as(
            r#"
            SELECT category, COUNT(id) AS product_count
            FROM products
            WHERE is_active = TRUE
            GROUP BY category
            ORDER BY COUNT(id) DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| RepositoryError::query(e.to_string()))?;

        Ok(rows
            .into_iter()
            .map(|r| CategoryCount {
                name: r.category,
                product_count: u64::try_from(r.product_count).unwrap_or(0),
            })
            .collect())
    }
}
