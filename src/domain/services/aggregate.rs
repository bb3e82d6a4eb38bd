//! # Statistical Aggregator
//!
//! Distributional summaries over comparable prices.
//!
//! The aggregator runs over the FULL matching set of comparables, not the
//! capped display subset: what a response shows is bounded, what the
//! statistics see is not.
//!
//! # Invariant
//!
//! An empty set has no mean, min, or max. Absence is represented as an
//! explicit `None` summary and must never be coerced to zero, where it
//! would be indistinguishable from a real price.

use crate::domain::entities::Comparable;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Distributional summary of a non-empty price set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceSummary {
    /// Arithmetic mean of unit prices.
    pub mean: Decimal,
    /// Lowest observed unit price.
    pub min: Decimal,
    /// Highest observed unit price.
    pub max: Decimal,
    /// `(max - min) / mean`; 0 when the mean is zero.
    pub spread_ratio: Decimal,
}

/// Aggregate statistics over a set of comparables.
///
/// `count` is always the full matching set size; `summary` is `None`
/// exactly when `count == 0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AggregateStats {
    /// Number of comparables in the full matching set.
    pub count: usize,
    /// Price summary, absent when there is no evidence.
    pub summary: Option<PriceSummary>,
}

impl AggregateStats {
    /// Computes aggregate statistics over the given comparables.
    #[must_use]
    pub fn from_comparables(comparables: &[Comparable]) -> Self {
        Self::from_prices(
            &comparables
                .iter()
                .map(|c| c.unit_price().get())
                .collect::<Vec<_>>(),
        )
    }

    /// Computes aggregate statistics over raw decimal prices.
    #[must_use]
    pub fn from_prices(prices: &[Decimal]) -> Self {
        let count = prices.len();
        let Some(first) = prices.first() else {
            return Self {
                count: 0,
                summary: None,
            };
        };

        let mut min = *first;
        let mut max = *first;
        let mut sum = Decimal::ZERO;
        for price in prices {
            min = min.min(*price);
            max = max.max(*price);
            sum += *price;
        }

        let mean = sum / Decimal::from(count as u64);
        // Positive-price filtering makes a zero mean unreachable in
        // practice; the division is still guarded.
        let spread_ratio = (max - min).checked_div(mean).unwrap_or(Decimal::ZERO);

        Self {
            count,
            summary: Some(PriceSummary {
                mean,
                min,
                max,
                spread_ratio,
            }),
        }
    }

    /// Returns true if there is no evidence to summarize.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Returns the mean price, if any evidence exists.
    #[must_use]
    pub fn mean(&self) -> Option<Decimal> {
        self.summary.map(|s| s.mean)
    }

    /// Returns the spread ratio, treating no evidence as zero spread.
    ///
    /// Callers that need to distinguish "tight market" from "no data" must
    /// check [`AggregateStats::is_empty`]; the reasoning layer flags the
    /// empty case as insufficient data.
    #[must_use]
    pub fn spread_ratio_or_zero(&self) -> Decimal {
        self.summary.map_or(Decimal::ZERO, |s| s.spread_ratio)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use rust_decimal::prelude::FromPrimitive;

    fn prices(values: &[f64]) -> Vec<Decimal> {
        values
            .iter()
            .map(|v| Decimal::from_f64(*v).unwrap())
            .collect()
    }

    #[test]
    fn empty_set_has_no_summary() {
        let stats = AggregateStats::from_prices(&[]);
        assert_eq!(stats.count, 0);
        assert!(stats.summary.is_none());
        assert!(stats.is_empty());
        assert!(stats.mean().is_none());
        assert_eq!(stats.spread_ratio_or_zero(), Decimal::ZERO);
    }

    #[test]
    fn electronics_scenario_summary() {
        // mean 110, spread (130 - 90) / 110 ~= 0.36
        let stats = AggregateStats::from_prices(&prices(&[100.0, 120.0, 110.0, 130.0, 90.0]));
        assert_eq!(stats.count, 5);

        let summary = stats.summary.unwrap();
        assert_eq!(summary.mean, Decimal::from(110));
        assert_eq!(summary.min, Decimal::from(90));
        assert_eq!(summary.max, Decimal::from(130));

        let expected = Decimal::from(40) / Decimal::from(110);
        assert_eq!(summary.spread_ratio, expected);
        assert!(summary.spread_ratio < Decimal::from_f64(0.5).unwrap());
    }

    #[test]
    fn single_price_has_zero_spread() {
        let stats = AggregateStats::from_prices(&prices(&[55.0]));
        let summary = stats.summary.unwrap();
        assert_eq!(summary.mean, summary.min);
        assert_eq!(summary.min, summary.max);
        assert_eq!(summary.spread_ratio, Decimal::ZERO);
    }

    #[test]
    fn zero_mean_guard() {
        // Unreachable through Comparable (prices are positive), exercised
        // directly against the raw-price entry point.
        let stats = AggregateStats::from_prices(&[Decimal::from(-5), Decimal::from(5)]);
        let summary = stats.summary.unwrap();
        assert_eq!(summary.mean, Decimal::ZERO);
        assert_eq!(summary.spread_ratio, Decimal::ZERO);
    }

    #[test]
    fn from_comparables_matches_from_prices() {
        use crate::domain::value_objects::{Category, Price, SupplierId, Unit};
        use chrono::Utc;

        let comparables: Vec<_> = [100.0, 120.0]
            .iter()
            .map(|p| {
                crate::domain::entities::Comparable::new(
                    Category::new("electronics").unwrap(),
                    "listing",
                    Price::from_f64(*p).unwrap(),
                    Unit::default(),
                    SupplierId::new("s1").unwrap(),
                    true,
                    Utc::now(),
                )
            })
            .collect();

        let from_comparables = AggregateStats::from_comparables(&comparables);
        let from_prices = AggregateStats::from_prices(&prices(&[100.0, 120.0]));
        assert_eq!(from_comparables, from_prices);
    }
}
