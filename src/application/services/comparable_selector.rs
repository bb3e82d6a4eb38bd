//! # Comparable Selector
//!
//! Selects and orders the comparables relevant for a price comparison.
//!
//! Input listings are already filtered to active, positively-priced rows in
//! the requested category by the repository. The selector only decides
//! relevance ordering:
//!
//! - With a product name: token-overlap similarity between the query and
//!   each listing name, ties broken by most-recently-listed first.
//! - Without: most-recently-listed first.
//!
//! The returned [`Selection`] keeps the FULL ordered matching set so the
//! statistical aggregator sees everything; only
//! [`Selection::display`] applies the [`MAX_COMPARABLES`] cap that bounds
//! what a response carries.
//!
//! An empty selection is valid evidence of nothing, never an error.

use crate::domain::entities::Comparable;
use std::collections::HashSet;

/// Maximum number of comparables carried in a response.
///
/// Bounds downstream cost only; statistics are computed over the full
/// matching set regardless.
pub const MAX_COMPARABLES: usize = 10;

/// An ordered selection of comparables.
#[derive(Debug, Clone)]
pub struct Selection {
    /// Full matching set, most relevant first.
    ranked: Vec<Comparable>,
    /// Number of listings with a positive similarity to the query, or the
    /// full count when no product name was given.
    matched: usize,
}

impl Selection {
    /// Returns the full ordered matching set.
    #[must_use]
    pub fn ranked(&self) -> &[Comparable] {
        &self.ranked
    }

    /// Returns the capped subset shown in responses.
    #[must_use]
    pub fn display(&self) -> &[Comparable] {
        let cap = self.ranked.len().min(MAX_COMPARABLES);
        &self.ranked[..cap]
    }

    /// Returns how many listings matched the product-name query.
    ///
    /// Zero with a non-empty [`Selection::ranked`] means the name matched
    /// nothing and the category-wide set is serving as fallback evidence.
    #[must_use]
    pub fn matched(&self) -> usize {
        self.matched
    }

    /// Returns true if there is no evidence at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ranked.is_empty()
    }

    /// Consumes the selection, returning the full matching set.
    #[must_use]
    pub fn into_ranked(self) -> Vec<Comparable> {
        self.ranked
    }
}

/// Selects comparables for a price comparison.
#[derive(Debug, Clone, Copy, Default)]
pub struct ComparableSelector;

impl ComparableSelector {
    /// Creates a selector.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Orders the given listings by relevance to an optional product name.
    #[must_use]
    pub fn select(&self, listings: Vec<Comparable>, product_name: Option<&str>) -> Selection {
        match product_name {
            Some(name) if !name.trim().is_empty() => Self::rank_by_similarity(listings, name),
            _ => Self::rank_by_recency(listings),
        }
    }

    fn rank_by_recency(mut listings: Vec<Comparable>) -> Selection {
        listings.sort_by(|a, b| b.listed_at().cmp(&a.listed_at()));
        let matched = listings.len();
        Selection {
            ranked: listings,
            matched,
        }
    }

    fn rank_by_similarity(listings: Vec<Comparable>, query: &str) -> Selection {
        let query_tokens = tokenize(query);

        let mut scored: Vec<(f64, Comparable)> = listings
            .into_iter()
            .map(|listing| {
                let score = token_overlap(&query_tokens, listing.name());
                (score, listing)
            })
            .collect();

        // Similarity descending, then recency descending.
        scored.sort_by(|a, b| {
            b.0.partial_cmp(&a.0)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| b.1.listed_at().cmp(&a.1.listed_at()))
        });

        let matched = scored.iter().filter(|(score, _)| *score > 0.0).count();
        Selection {
            ranked: scored.into_iter().map(|(_, listing)| listing).collect(),
            matched,
        }
    }
}

/// Splits a name into lowercase whitespace-separated tokens.
fn tokenize(text: &str) -> HashSet<String> {
    text.split_whitespace()
        .map(|t| t.to_lowercase())
        .filter(|t| !t.is_empty())
        .collect()
}

/// Fraction of query tokens present in the listing name.
fn token_overlap(query_tokens: &HashSet<String>, name: &str) -> f64 {
    if query_tokens.is_empty() {
        return 0.0;
    }
    let name_tokens = tokenize(name);
    let hits = query_tokens.intersection(&name_tokens).count();
    hits as f64 / query_tokens.len() as f64
}
