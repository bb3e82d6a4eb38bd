//! # Price Suggestion Engine
//!
//! Orchestrates market data reads and synthesizes a price suggestion.
//!
//! The engine issues three independent read-only queries concurrently
//! (listings, trailing RFQ count, distinct supplier count), joins them, and
//! only then synthesizes the suggestion; it never runs on partial data.
//! Each read is bounded by the configured timeout. A failed or timed-out
//! metric degrades to zero evidence for that metric with a warning; only
//! when every read fails does the call surface `ServiceUnavailable`.
//!
//! The synthesis step is pure: for a fixed data snapshot, evaluation time,
//! and inputs, the output (including the reasoning text) is identical on
//! every call.
//!
//! # Chosen constants
//!
//! - Bulk discount tiers: quantity >= 100 takes 10%, >= 50 takes 7%,
//!   >= 10 takes 3%, otherwise none. The discount never exceeds
//!   [`MAX_BULK_DISCOUNT`], so the adjusted price never drops below 90% of
//!   the baseline mean, and larger quantities never price higher.
//! - Trend: mean of listings from the trailing 30 days against the mean of
//!   listings from 30-60 days ago; a relative move beyond
//!   [`TREND_THRESHOLD`] classifies rising/falling. An empty comparison
//!   window reports stable with confidence scaled by
//!   [`TREND_UNKNOWN_PENALTY`] instead of guessing.
//! - Confidence: `0.6 * min(count / 10, 1) + 0.4 * (1 - min(spread, 1))`,
//!   clamped to [0, 1]; exactly 0 with no comparables.

use crate::application::error::{ApplicationError, ApplicationResult};
use crate::application::services::comparable_selector::{ComparableSelector, Selection};
use crate::domain::entities::{Comparable, DemandSignal, DEMAND_WINDOW_DAYS};
use crate::domain::services::aggregate::AggregateStats;
use crate::domain::services::scoring::ScoringEngine;
use crate::domain::value_objects::{Category, PriceTrend, Unit};
use crate::infrastructure::persistence::{MarketDataRepository, RepositoryError, RepositoryResult};
use chrono::{DateTime, Duration, Utc};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::future::Future;
use std::sync::Arc;
use tokio::time::timeout;

/// Relative price move beyond which a trend counts as rising or falling.
pub const TREND_THRESHOLD: Decimal = Decimal::from_parts(5, 0, 0, false, 2);

/// Confidence multiplier applied when the older trend window is empty.
pub const TREND_UNKNOWN_PENALTY: f64 = 0.9;

/// Upper bound on the bulk discount fraction.
pub const MAX_BULK_DISCOUNT: Decimal = Decimal::from_parts(10, 0, 0, false, 2);

/// Bulk discount tiers as (minimum quantity, discount fraction), checked
/// top-down. Discounts are non-decreasing in quantity by construction.
pub const BULK_DISCOUNT_TIERS: [(u64, Decimal); 3] = [
    (100, Decimal::from_parts(10, 0, 0, false, 2)),
    (50, Decimal::from_parts(7, 0, 0, false, 2)),
    (10, Decimal::from_parts(3, 0, 0, false, 2)),
];

/// Comparable count at which the evidence component of confidence saturates.
pub const FULL_EVIDENCE_COUNT: usize = 10;

/// Weight of the evidence-count component of confidence.
pub const CONFIDENCE_COUNT_WEIGHT: f64 = 0.6;

/// Weight of the price-agreement component of confidence.
pub const CONFIDENCE_STABILITY_WEIGHT: f64 = 0.4;

/// Configuration for the suggestion engine.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Per-query timeout in milliseconds.
    pub query_timeout_ms: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            query_timeout_ms: 5000,
        }
    }
}

impl EngineConfig {
    /// Creates a configuration with the specified per-query timeout.
    #[must_use]
    pub fn with_timeout(query_timeout_ms: u64) -> Self {
        Self { query_timeout_ms }
    }
}

/// A price suggestion request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestionRequest {
    /// Product category (required).
    pub category: String,
    /// Optional product name for better matching.
    pub product_name: Option<String>,
    /// Order quantity, at least 1.
    pub quantity: u64,
    /// Unit of measurement.
    pub unit: String,
}

/// Observed price extremes across the matching comparables.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceRange {
    /// Lowest observed unit price, absent without evidence.
    pub min: Option<Decimal>,
    /// Highest observed unit price, absent without evidence.
    pub max: Option<Decimal>,
}

/// A comparable listing as carried in a suggestion response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparableProduct {
    /// Listing name.
    pub name: String,
    /// Category of the listing.
    pub category: String,
    /// Unit price.
    pub unit_price: Decimal,
    /// Unit of measurement.
    pub unit: String,
    /// Supplier identity.
    pub supplier_id: String,
    /// When the listing was created.
    pub listed_at: DateTime<Utc>,
}

impl From<&Comparable> for ComparableProduct {
    fn from(comparable: &Comparable) -> Self {
        Self {
            name: comparable.name().to_string(),
            category: comparable.category().as_str().to_string(),
            unit_price: comparable.unit_price().rounded(),
            unit: comparable.unit().as_str().to_string(),
            supplier_id: comparable.supplier_id().as_str().to_string(),
            listed_at: comparable.listed_at(),
        }
    }
}

/// A price suggestion response.
///
/// The field names and nesting are a compatibility contract with existing
/// consumers. `suggested_price` is `null` (never 0) when no evidence
/// exists, and `confidence` is 0 in that case.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceSuggestion {
    /// Suggested unit price, absent when there is no evidence.
    pub suggested_price: Option<Decimal>,
    /// Observed min/max across comparables.
    pub price_range: PriceRange,
    /// Reliability of the suggestion in [0, 1].
    pub confidence: f64,
    /// Recent price direction.
    pub trend: PriceTrend,
    /// Demand score in [0, 1].
    pub demand_score: f64,
    /// Supply score in [0, 1].
    pub supply_score: f64,
    /// Deterministic, template-driven explanation.
    pub reasoning: String,
    /// Most relevant comparables, capped, most relevant first.
    pub comparable_products: Vec<ComparableProduct>,
}

/// Raw metric results after the concurrent read phase.
#[derive(Debug)]
struct MarketReads {
    listings: Vec<Comparable>,
    rfq_count: u64,
    supplier_count: u64,
}

/// Synthesizes price suggestions from market data.
#[derive(Debug)]
pub struct PriceSuggestionEngine {
    repository: Arc<dyn MarketDataRepository>,
    selector: ComparableSelector,
    scoring: ScoringEngine,
    config: EngineConfig,
}

impl PriceSuggestionEngine {
    /// Creates a new engine.
    #[must_use]
    pub fn new(repository: Arc<dyn MarketDataRepository>, config: EngineConfig) -> Self {
        Self {
            repository,
            selector: ComparableSelector::new(),
            scoring: ScoringEngine::new(),
            config,
        }
    }

    /// Creates a new engine with default configuration.
    #[must_use]
    pub fn with_defaults(repository: Arc<dyn MarketDataRepository>) -> Self {
        Self::new(repository, EngineConfig::default())
    }

    /// Computes a price suggestion for the request at the current time.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` before any query runs when validation fails,
    /// or `ServiceUnavailable` when every data read fails. Individual
    /// failed metrics degrade instead of erroring.
    pub async fn suggest(&self, request: &SuggestionRequest) -> ApplicationResult<PriceSuggestion> {
        self.suggest_at(request, Utc::now()).await
    }

    /// Computes a price suggestion evaluated at `as_of`.
    ///
    /// The explicit evaluation time keeps window-dependent behavior (demand
    /// counting, trend classification) reproducible.
    ///
    /// # Errors
    ///
    /// See [`PriceSuggestionEngine::suggest`].
    pub async fn suggest_at(
        &self,
        request: &SuggestionRequest,
        as_of: DateTime<Utc>,
    ) -> ApplicationResult<PriceSuggestion> {
        let (category, unit) = validate(request)?;
        let reads = self.fetch_reads(&category, as_of).await?;

        Ok(self.synthesize(
            &category,
            &unit,
            request.product_name.as_deref(),
            request.quantity,
            reads,
            as_of,
        ))
    }

    /// Runs the three independent reads concurrently and joins them.
    ///
    /// Missing metrics degrade to zero evidence unless all reads failed.
    async fn fetch_reads(
        &self,
        category: &Category,
        as_of: DateTime<Utc>,
    ) -> ApplicationResult<MarketReads> {
        let window_start = as_of - Duration::days(DEMAND_WINDOW_DAYS);

        let (listings, rfq_count, supplier_count) = tokio::join!(
            self.bounded(self.repository.find_active_listings(category)),
            self.bounded(self.repository.count_rfqs_since(category, window_start)),
            self.bounded(self.repository.count_active_suppliers(category)),
        );

        let mut failed = 0;
        let listings = listings.unwrap_or_else(|e| {
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

        Ok(MarketReads {
            listings,
            rfq_count,
            supplier_count,
        })
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

    /// Pure synthesis over joined reads.
    fn synthesize(
        &self,
        category: &Category,
        unit: &Unit,
        product_name: Option<&str>,
        quantity: u64,
        reads: MarketReads,
        as_of: DateTime<Utc>,
    ) -> PriceSuggestion {
        let selection = self.selector.select(reads.listings, product_name);
        let stats = AggregateStats::from_comparables(selection.ranked());
        let demand = DemandSignal::new(category.clone(), reads.rfq_count, as_of);
        let score = self.scoring.score(&stats, &demand, reads.supplier_count);

        let (trend, has_history) = classify_trend(selection.ranked(), as_of);
        let confidence = confidence(&stats, has_history);

        let Some(summary) = stats.summary else {
            return PriceSuggestion {
                suggested_price: None,
                price_range: PriceRange {
                    min: None,
                    max: None,
                },
                confidence: 0.0,
                trend: PriceTrend::Stable,
                demand_score: score.demand_score,
                supply_score: score.supply_score,
                reasoning: format!(
                    "No active listings found in category '{category}'; \
                     insufficient data for a price suggestion."
                ),
                comparable_products: Vec::new(),
            };
        };

        let discount = bulk_discount(quantity);
        let suggested = (summary.mean * (Decimal::ONE - discount)).round_dp(2);
        let reasoning = reasoning_text(
            category,
            unit,
            product_name,
            quantity,
            &selection,
            &stats,
            &demand,
            reads.supplier_count,
            trend,
            has_history,
            discount,
        );

        PriceSuggestion {
            suggested_price: Some(suggested),
            price_range: PriceRange {
                min: Some(summary.min.round_dp(2)),
                max: Some(summary.max.round_dp(2)),
            },
            confidence,
            trend,
            demand_score: score.demand_score,
            supply_score: score.supply_score,
            reasoning,
            comparable_products: selection.display().iter().map(Into::into).collect(),
        }
    }
}

/// Validates raw request parameters before any query runs.
fn validate(request: &SuggestionRequest) -> ApplicationResult<(Category, Unit)> {
    if request.quantity < 1 {
        return Err(ApplicationError::invalid_input(
            "quantity must be at least 1",
        ));
    }
    let category = Category::new(request.category.clone())
        .map_err(|e| ApplicationError::invalid_input(e.to_string()))?;
    let unit = Unit::new(request.unit.clone())
        .map_err(|e| ApplicationError::invalid_input(e.to_string()))?;
    Ok((category, unit))
}

/// Returns the bulk discount fraction for a quantity.
///
/// Monotonic non-decreasing in quantity and capped at
/// [`MAX_BULK_DISCOUNT`], so the adjusted price is monotonic non-increasing
/// and bounded below by `(1 - MAX_BULK_DISCOUNT) * baseline`.
#[must_use]
pub fn bulk_discount(quantity: u64) -> Decimal {
    for (min_quantity, discount) in BULK_DISCOUNT_TIERS {
        if quantity >= min_quantity {
            return discount.min(MAX_BULK_DISCOUNT);
        }
    }
    Decimal::ZERO
}

/// Classifies the price trend from listing history.
///
/// Compares the mean price of listings from the trailing demand window
/// against listings from the preceding window of the same width. Returns
/// the trend and whether enough history existed to compare; without
/// history the trend is stable, never guessed.
fn classify_trend(comparables: &[Comparable], as_of: DateTime<Utc>) -> (PriceTrend, bool) {
    let recent_start = as_of - Duration::days(DEMAND_WINDOW_DAYS);
    let older_start = as_of - Duration::days(2 * DEMAND_WINDOW_DAYS);

    let recent: Vec<Decimal> = comparables
        .iter()
        .filter(|c| c.listed_at() >= recent_start)
        .map(|c| c.unit_price().get())
        .collect();
    let older: Vec<Decimal> = comparables
        .iter()
        .filter(|c| c.listed_at() >= older_start && c.listed_at() < recent_start)
        .map(|c| c.unit_price().get())
        .collect();

    let recent_mean = AggregateStats::from_prices(&recent).mean();
    let older_mean = AggregateStats::from_prices(&older).mean();

    let (Some(recent_mean), Some(older_mean)) = (recent_mean, older_mean) else {
        return (PriceTrend::Stable, false);
    };

    let relative = (recent_mean - older_mean)
        .checked_div(older_mean)
        .unwrap_or(Decimal::ZERO);

    let trend = if relative > TREND_THRESHOLD {
        PriceTrend::Rising
    } else if relative < -TREND_THRESHOLD {
        PriceTrend::Falling
    } else {
        PriceTrend::Stable
    };
    (trend, true)
}

/// Confidence in [0, 1]: grows with evidence count, shrinks with spread.
fn confidence(stats: &AggregateStats, has_trend_history: bool) -> f64 {
    if stats.is_empty() {
        return 0.0;
    }

    let count_component = (stats.count as f64 / FULL_EVIDENCE_COUNT as f64).min(1.0);
    let spread = stats
        .spread_ratio_or_zero()
        .to_f64()
        .unwrap_or(1.0)
        .clamp(0.0, 1.0);

    let mut value = CONFIDENCE_COUNT_WEIGHT * count_component
        + CONFIDENCE_STABILITY_WEIGHT * (1.0 - spread);
    if !has_trend_history {
        value *= TREND_UNKNOWN_PENALTY;
    }
    value.clamp(0.0, 1.0)
}

/// Builds the deterministic reasoning text.
#[allow(clippy::too_many_arguments)]
fn reasoning_text(
    category: &Category,
    unit: &Unit,
    product_name: Option<&str>,
    quantity: u64,
    selection: &Selection,
    stats: &AggregateStats,
    demand: &DemandSignal,
    supplier_count: u64,
    trend: PriceTrend,
    has_history: bool,
    discount: Decimal,
) -> String {
    let mean = stats
        .mean()
        .map_or_else(|| "n/a".to_string(), |m| m.round_dp(2).to_string());

    let mut parts = vec![format!(
        "Based on {} comparable listings in '{category}' with a mean price of {mean} per {unit}.",
        stats.count
    )];

    if let Some(name) = product_name {
        if selection.matched() == 0 {
            parts.push(format!(
                "No listings matched '{name}'; category-wide evidence was used instead."
            ));
        }
    }

    parts.push(format!(
        "Demand is {} ({} RFQs in the last {} days) and competition is {} ({} active suppliers).",
        ScoringEngine::classify_demand(demand.rfq_count()),
        demand.rfq_count(),
        demand.window_days(),
        ScoringEngine::classify_competition(supplier_count),
        supplier_count
    ));

    if has_history {
        parts.push(format!("Recent prices are {trend}."));
    } else {
        parts.push("Not enough listing history to compare price windows; trend reported as stable.".to_string());
    }

    if discount > Decimal::ZERO {
        let percent = (discount * Decimal::from(100)).round_dp(0);
        parts.push(format!(
            "A {percent}% volume adjustment was applied for quantity {quantity}."
        ));
    }

    parts.join(" ")
}
