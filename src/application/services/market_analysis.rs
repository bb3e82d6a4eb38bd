//! # Market Analysis Reporter
//!
//! Category-wide market overview, distinct from per-product suggestion.
//!
//! Reuses the statistical aggregator and scoring engine over the same
//! three concurrent reads as the suggestion engine. The reporter is a pure
//! read with no shared mutable state, so analysis and suggestion calls for
//! the same category can run concurrently without interference.
//!
//! When a category has no active listings, avg/min/max are reported as
//! explicit absences (`null` on the wire), never as zero: a zero here
//! would be indistinguishable from a real price.

use crate::application::error::{ApplicationError, ApplicationResult};
use crate::domain::entities::{Comparable, DemandSignal, DEMAND_WINDOW_DAYS};
use crate::domain::services::aggregate::AggregateStats;
use crate::domain::services::scoring::ScoringEngine;
use crate::domain::value_objects::{Category, CompetitionLevel, DemandLevel, PriceStability};
use crate::infrastructure::persistence::{
    CategoryCount, MarketDataRepository, RepositoryError, RepositoryResult,
};
use chrono::{DateTime, Duration, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::future::Future;
use std::sync::Arc;
use tokio::time::timeout;

use super::suggestion::EngineConfig;

/// Category-wide price and supply overview.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketOverview {
    /// Number of active, positively-priced listings.
    pub total_products: u64,
    /// Mean listing price, absent when there are no listings.
    pub avg_price: Option<Decimal>,
    /// Lowest listing price, absent when there are no listings.
    pub min_price: Option<Decimal>,
    /// Highest listing price, absent when there are no listings.
    pub max_price: Option<Decimal>,
    /// Distinct suppliers with at least one active listing.
    pub active_suppliers: u64,
}

/// Demand indicators for a category.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DemandIndicators {
    /// RFQs posted in the trailing 30-day window.
    pub rfqs_last_30_days: u64,
    /// Demand classification.
    pub demand_level: DemandLevel,
}

/// Composite market health classification.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarketHealth {
    /// Competition classification.
    pub competition_level: CompetitionLevel,
    /// Price stability classification.
    pub price_stability: PriceStability,
}

/// A category-level market analysis response.
///
/// Field names and nesting are a compatibility contract with existing
/// consumers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketAnalysisReport {
    /// The analyzed category.
    pub category: String,
    /// Price and supply overview.
    pub market_overview: MarketOverview,
    /// Demand indicators.
    pub demand_indicators: DemandIndicators,
    /// Market health classification.
    pub market_health: MarketHealth,
}

/// The category listing response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoriesResponse {
    /// Categories with active listings, ordered by product count descending.
    pub categories: Vec<CategoryCount>,
}

/// Produces category-level market analysis reports.
#[derive(Debug)]
pub struct MarketAnalysisReporter {
    repository: Arc<dyn MarketDataRepository>,
    scoring: ScoringEngine,
    config: EngineConfig,
}

impl MarketAnalysisReporter {
    /// Creates a new reporter.
    #[must_use]
    pub fn new(repository: Arc<dyn MarketDataRepository>, config: EngineConfig) -> Self {
        Self {
            repository,
            scoring: ScoringEngine::new(),
            config,
        }
    }

    /// Creates a new reporter with default configuration.
    #[must_use]
    pub fn with_defaults(repository: Arc<dyn MarketDataRepository>) -> Self {
        Self::new(repository, EngineConfig::default())
    }

    /// Analyzes a category at the current time.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for a blank category, or `ServiceUnavailable`
    /// when every data read fails. Individual failed metrics degrade to
    /// zero evidence.
    pub async fn analyze(&self, category: &str) -> ApplicationResult<MarketAnalysisReport> {
        self.analyze_at(category, Utc::now()).await
    }

    /// Analyzes a category evaluated at `as_of`.
    ///
    /// # Errors
    ///
    /// See [`MarketAnalysisReporter::analyze`].
    pub async fn analyze_at(
        &self,
        category: &str,
        as_of: DateTime<Utc>,
    ) -> ApplicationResult<MarketAnalysisReport> {
        let category = Category::new(category)
            .map_err(|e| ApplicationError::invalid_input(e.to_string()))?;
        let window_start = as_of - Duration::days(DEMAND_WINDOW_DAYS);

        let (listings, rfq_count, supplier_count) = tokio::join!(
            self.bounded(self.repository.find_active_listings(&category)),
            self.bounded(self.repository.count_rfqs_since(&category, window_start)),
            self.bounded(self.repository.count_active_suppliers(&category)),
        );

        let mut failed = 0;
        let listings: Vec<Comparable> = listings.unwrap_or_else(|e| {
            tracing::warn!(error = %e, category = %category, "listings read failed, degrading to empty set");
            failed += 1;
            Vec::new()
        });
        let rfq_count = rfq_count.unwrap_or_else(|e| {
            tracing::warn!(error = %e, category = %category, "rfq count read failed, degrading to zero");
            failed += 1;
            0
        });
        let supplier_count = supplier_count.unwrap_or_else(|e| {
            tracing::warn!(error = %e, category = %category, "supplier count read failed, degrading to zero");
            failed += 1;
            0
        });

        if failed == 3 {
            return Err(ApplicationError::service_unavailable(
                "all market data reads failed",
            ));
        }

        let stats = AggregateStats::from_comparables(&listings);
        let demand = DemandSignal::new(category.clone(), rfq_count, as_of);
        let score = self.scoring.score(&stats, &demand, supplier_count);

        Ok(MarketAnalysisReport {
            category: category.as_str().to_string(),
            market_overview: MarketOverview {
                total_products: stats.count as u64,
                avg_price: stats.summary.map(|s| s.mean.round_dp(2)),
                min_price: stats.summary.map(|s| s.min.round_dp(2)),
                max_price: stats.summary.map(|s| s.max.round_dp(2)),
                active_suppliers: supplier_count,
            },
            demand_indicators: DemandIndicators {
                rfqs_last_30_days: rfq_count,
                demand_level: score.demand_level,
            },
            market_health: MarketHealth {
                competition_level: score.competition_level,
                price_stability: score.price_stability,
            },
        })
    }

    /// Lists categories with active listings, most populated first.
    ///
    /// # Errors
    ///
    /// Returns a repository error when the read fails; there is no partial
    /// result to degrade to for a single-query operation.
    pub async fn list_categories(&self) -> ApplicationResult<CategoriesResponse> {
        let categories = self.bounded(self.repository.category_counts()).await?;
        Ok(CategoriesResponse { categories })
    }

    /// Bounds a repository read by the configured timeout.
    async fn bounded<T, F>(&self, read: F) -> RepositoryResult<T>
    where
        F: Future<Output = RepositoryResult<T>>,
    {
        let budget = std::time::Duration::from_millis(self.config.query_timeout_ms);
        match timeout(budget, read).await {
            Ok(result) => result,
            Err(_) => Err(RepositoryError::timeout(format!(
                "query exceeded {}ms",
                self.config.query_timeout_ms
            ))),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use crate::domain::value_objects::{Price, SupplierId, Unit};
    use crate::infrastructure::persistence::in_memory::InMemoryMarketDataRepository;

    fn listing(category: &str, supplier: &str, price: f64, as_of: DateTime<Utc>) -> Comparable {
        Comparable::new(
            Category::new(category).unwrap(),
            format!("{category} listing"),
            Price::from_f64(price).unwrap(),
            Unit::default(),
            SupplierId::new(supplier).unwrap(),
            true,
            as_of - Duration::days(1),
        )
    }

    #[tokio::test]
    async fn electronics_scenario_report() {
        let as_of = Utc::now();
        let repo = InMemoryMarketDataRepository::new();
        for (i, price) in [100.0, 120.0, 110.0, 130.0, 90.0].iter().enumerate() {
            let supplier = if i % 2 == 0 { "s1" } else { "s2" };
            repo.add_listing(listing("electronics", supplier, *price, as_of))
                .await;
        }

        let reporter = MarketAnalysisReporter::with_defaults(Arc::new(repo));
        let report = reporter.analyze_at("electronics", as_of).await.unwrap();

        assert_eq!(report.category, "electronics");
        assert_eq!(report.market_overview.total_products, 5);
        assert_eq!(report.market_overview.avg_price, Some(Decimal::from(110)));
        assert_eq!(report.market_overview.min_price, Some(Decimal::from(90)));
        assert_eq!(report.market_overview.max_price, Some(Decimal::from(130)));
        assert_eq!(report.market_overview.active_suppliers, 2);
        assert_eq!(report.demand_indicators.rfqs_last_30_days, 0);
        assert_eq!(report.demand_indicators.demand_level, DemandLevel::Low);
        assert_eq!(
            report.market_health.competition_level,
            CompetitionLevel::Low
        );
        assert_eq!(report.market_health.price_stability, PriceStability::Stable);
    }

    #[tokio::test]
    async fn empty_category_reports_absent_prices_not_zero() {
        let reporter =
            MarketAnalysisReporter::with_defaults(Arc::new(InMemoryMarketDataRepository::new()));
        let report = reporter.analyze("widgets").await.unwrap();

        assert_eq!(report.market_overview.total_products, 0);
        assert_eq!(report.market_overview.avg_price, None);
        assert_eq!(report.market_overview.min_price, None);
        assert_eq!(report.market_overview.max_price, None);
        assert_eq!(
            report.market_health.price_stability,
            PriceStability::Volatile
        );
        assert_eq!(report.demand_indicators.demand_level, DemandLevel::Low);

        let json = serde_json::to_value(&report).unwrap();
        assert!(json["market_overview"]["avg_price"].is_null());
    }

    #[tokio::test]
    async fn blank_category_rejected() {
        let reporter =
            MarketAnalysisReporter::with_defaults(Arc::new(InMemoryMarketDataRepository::new()));
        let err = reporter.analyze("   ").await.unwrap_err();
        assert!(err.is_invalid_input());
    }

    #[tokio::test]
    async fn demand_counted_within_window_only() {
        let as_of = Utc::now();
        let repo = InMemoryMarketDataRepository::new();
        let category = Category::new("electronics").unwrap();
        repo.add_listing(listing("electronics", "s1", 100.0, as_of))
            .await;
        for days_ago in [1, 10, 29, 31, 90] {
            repo.add_rfq(category.clone(), as_of - Duration::days(days_ago))
                .await;
        }

        let reporter = MarketAnalysisReporter::with_defaults(Arc::new(repo));
        let report = reporter.analyze_at("electronics", as_of).await.unwrap();
        assert_eq!(report.demand_indicators.rfqs_last_30_days, 3);
    }

    #[tokio::test]
    async fn list_categories_ordered_by_count() {
        let as_of = Utc::now();
        let repo = InMemoryMarketDataRepository::new();
        repo.add_listing(listing("machinery", "s1", 500.0, as_of))
            .await;
        for i in 0..3 {
            repo.add_listing(listing("electronics", &format!("s{i}"), 100.0, as_of))
                .await;
        }

        let reporter = MarketAnalysisReporter::with_defaults(Arc::new(repo));
        let response = reporter.list_categories().await.unwrap();

        assert_eq!(response.categories.len(), 2);
        assert_eq!(response.categories[0].name, "electronics");
        assert_eq!(response.categories[0].product_count, 3);
    }

    #[tokio::test]
    async fn report_wire_shape() {
        let as_of = Utc::now();
        let repo = InMemoryMarketDataRepository::new();
        repo.add_listing(listing("electronics", "s1", 100.0, as_of))
            .await;

        let reporter = MarketAnalysisReporter::with_defaults(Arc::new(repo));
        let report = reporter.analyze_at("electronics", as_of).await.unwrap();
        let json = serde_json::to_value(&report).unwrap();

        for key in ["category", "market_overview", "demand_indicators", "market_health"] {
            assert!(json.get(key).is_some(), "missing {key}");
        }
        for key in [
            "total_products",
            "avg_price",
            "min_price",
            "max_price",
            "active_suppliers",
        ] {
            assert!(json["market_overview"].get(key).is_some(), "missing {key}");
        }
        assert!(json["demand_indicators"].get("rfqs_last_30_days").is_some());
        assert!(json["demand_indicators"].get("demand_level").is_some());
        assert!(json["market_health"].get("competition_level").is_some());
        assert!(json["market_health"].get("price_stability").is_some());
    }
}
