//! # Scoring Engine
//!
//! Deterministic market scoring and classification.
//!
//! Given aggregate price statistics, a demand signal, and a supplier count,
//! the engine produces a [`MarketScore`]. Same inputs always produce the
//! same score; there is no randomness, which keeps the output reproducible
//! in tests.
//!
//! Classification thresholds are fixed policy constants, not per-call
//! configuration. Tests assert against the named constants below.

use crate::domain::entities::DemandSignal;
use crate::domain::services::aggregate::AggregateStats;
use crate::domain::value_objects::{CompetitionLevel, DemandLevel, PriceStability};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// RFQ count above which demand is classified high (exclusive bound:
/// exactly this many is still medium).
pub const HIGH_DEMAND_RFQS: u64 = 30;

/// RFQ count above which demand is classified medium (exclusive bound).
pub const MEDIUM_DEMAND_RFQS: u64 = 10;

/// Supplier count above which competition is classified high (exclusive
/// bound: exactly this many is still medium).
pub const HIGH_COMPETITION_SUPPLIERS: u64 = 10;

/// Supplier count above which competition is classified medium (exclusive
/// bound).
pub const MEDIUM_COMPETITION_SUPPLIERS: u64 = 3;

/// Spread ratio below which a market with evidence counts as stable.
pub const STABLE_SPREAD_RATIO: Decimal = Decimal::from_parts(5, 0, 0, false, 1);

/// Composite market score for a category.
///
/// Derived per request, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarketScore {
    /// Demand normalized against [`HIGH_DEMAND_RFQS`], clamped to [0, 1].
    pub demand_score: f64,
    /// Supply normalized against [`HIGH_COMPETITION_SUPPLIERS`], clamped to [0, 1].
    pub supply_score: f64,
    /// Demand classification from the trailing RFQ count.
    pub demand_level: DemandLevel,
    /// Competition classification from the distinct supplier count.
    pub competition_level: CompetitionLevel,
    /// Price stability classification from the comparable spread.
    pub price_stability: PriceStability,
}

/// Pure scoring functions over aggregates.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScoringEngine;

impl ScoringEngine {
    /// Creates a scoring engine.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Scores a market from its aggregates.
    #[must_use]
    pub fn score(
        &self,
        stats: &AggregateStats,
        demand: &DemandSignal,
        supplier_count: u64,
    ) -> MarketScore {
        MarketScore {
            demand_score: normalized(demand.rfq_count(), HIGH_DEMAND_RFQS),
            supply_score: normalized(supplier_count, HIGH_COMPETITION_SUPPLIERS),
            demand_level: Self::classify_demand(demand.rfq_count()),
            competition_level: Self::classify_competition(supplier_count),
            price_stability: Self::classify_stability(stats),
        }
    }

    /// Classifies demand from a trailing-window RFQ count.
    #[must_use]
    pub fn classify_demand(rfq_count: u64) -> DemandLevel {
        if rfq_count > HIGH_DEMAND_RFQS {
            DemandLevel::High
        } else if rfq_count > MEDIUM_DEMAND_RFQS {
            DemandLevel::Medium
        } else {
            DemandLevel::Low
        }
    }

    /// Classifies competition from a distinct active supplier count.
    #[must_use]
    pub fn classify_competition(supplier_count: u64) -> CompetitionLevel {
        if supplier_count > HIGH_COMPETITION_SUPPLIERS {
            CompetitionLevel::High
        } else if supplier_count > MEDIUM_COMPETITION_SUPPLIERS {
            CompetitionLevel::Medium
        } else {
            CompetitionLevel::Low
        }
    }

    /// Classifies price stability from the comparable spread.
    ///
    /// Zero comparables is volatile: no evidence of stability exists.
    #[must_use]
    pub fn classify_stability(stats: &AggregateStats) -> PriceStability {
        match stats.summary {
            Some(summary) if summary.spread_ratio < STABLE_SPREAD_RATIO => PriceStability::Stable,
            _ => PriceStability::Volatile,
        }
    }
}

/// Clamps `count / reference` to [0, 1].
fn normalized(count: u64, reference: u64) -> f64 {
    let reference = Decimal::from(reference);
    let ratio = Decimal::from(count)
        .checked_div(reference)
        .unwrap_or(Decimal::ZERO)
        .to_f64()
        .unwrap_or(0.0);
    ratio.clamp(0.0, 1.0)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::domain::value_objects::Category;
    use chrono::Utc;
    use rust_decimal::prelude::FromPrimitive;

    fn stats_with_spread(values: &[f64]) -> AggregateStats {
        let prices: Vec<Decimal> = values
            .iter()
            .map(|v| Decimal::from_f64(*v).unwrap())
            .collect();
        AggregateStats::from_prices(&prices)
    }

    fn demand(rfq_count: u64) -> DemandSignal {
        DemandSignal::new(Category::new("electronics").unwrap(), rfq_count, Utc::now())
    }

    #[test]
    fn stable_spread_ratio_constant_is_half() {
        assert_eq!(STABLE_SPREAD_RATIO, Decimal::from_f64(0.5).unwrap());
    }

    #[test]
    fn demand_boundary_exactly_thirty_is_medium() {
        assert_eq!(ScoringEngine::classify_demand(30), DemandLevel::Medium);
        assert_eq!(ScoringEngine::classify_demand(31), DemandLevel::High);
    }

    #[test]
    fn demand_boundary_exactly_ten_is_low() {
        assert_eq!(ScoringEngine::classify_demand(10), DemandLevel::Low);
        assert_eq!(ScoringEngine::classify_demand(11), DemandLevel::Medium);
        assert_eq!(ScoringEngine::classify_demand(0), DemandLevel::Low);
    }

    #[test]
    fn competition_boundary_exactly_ten_is_medium() {
        assert_eq!(
            ScoringEngine::classify_competition(10),
            CompetitionLevel::Medium
        );
        assert_eq!(
            ScoringEngine::classify_competition(11),
            CompetitionLevel::High
        );
    }

    #[test]
    fn competition_boundary_exactly_three_is_low() {
        assert_eq!(
            ScoringEngine::classify_competition(3),
            CompetitionLevel::Low
        );
        assert_eq!(
            ScoringEngine::classify_competition(4),
            CompetitionLevel::Medium
        );
    }

    #[test]
    fn stability_tight_spread_is_stable() {
        let stats = stats_with_spread(&[100.0, 120.0, 110.0, 130.0, 90.0]);
        assert_eq!(
            ScoringEngine::classify_stability(&stats),
            PriceStability::Stable
        );
    }

    #[test]
    fn stability_wide_spread_is_volatile() {
        let stats = stats_with_spread(&[10.0, 200.0]);
        assert_eq!(
            ScoringEngine::classify_stability(&stats),
            PriceStability::Volatile
        );
    }

    #[test]
    fn stability_no_evidence_is_volatile() {
        let stats = stats_with_spread(&[]);
        assert_eq!(
            ScoringEngine::classify_stability(&stats),
            PriceStability::Volatile
        );
    }

    #[test]
    fn scores_are_normalized_and_clamped() {
        let engine = ScoringEngine::new();
        let stats = stats_with_spread(&[100.0]);

        let score = engine.score(&stats, &demand(15), 5);
        assert!((score.demand_score - 0.5).abs() < f64::EPSILON);
        assert!((score.supply_score - 0.5).abs() < f64::EPSILON);

        let saturated = engine.score(&stats, &demand(300), 100);
        assert!((saturated.demand_score - 1.0).abs() < f64::EPSILON);
        assert!((saturated.supply_score - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn score_is_deterministic() {
        let engine = ScoringEngine::new();
        let stats = stats_with_spread(&[100.0, 120.0]);
        let signal = demand(12);

        let first = engine.score(&stats, &signal, 4);
        let second = engine.score(&stats, &signal, 4);
        assert_eq!(first, second);
    }

    #[test]
    fn electronics_scenario_classifications() {
        // 5 comparables, 0 RFQs, 2 suppliers.
        let engine = ScoringEngine::new();
        let stats = stats_with_spread(&[100.0, 120.0, 110.0, 130.0, 90.0]);
        let score = engine.score(&stats, &demand(0), 2);

        assert_eq!(score.demand_level, DemandLevel::Low);
        assert_eq!(score.competition_level, CompetitionLevel::Low);
        assert_eq!(score.price_stability, PriceStability::Stable);
    }
}
