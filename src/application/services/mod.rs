//! # Application Services
//!
//! The analytics engine proper.
//!
//! - [`ComparableSelector`]: relevance ordering of pricing evidence
//! - [`PriceSuggestionEngine`]: concurrent reads + suggestion synthesis
//! - [`MarketAnalysisReporter`]: category-wide overview and category listing

pub mod comparable_selector;
pub mod market_analysis;
pub mod suggestion;

pub use comparable_selector::{ComparableSelector, Selection, MAX_COMPARABLES};
pub use market_analysis::{
    CategoriesResponse, DemandIndicators, MarketAnalysisReport, MarketAnalysisReporter,
    MarketHealth, MarketOverview,
};
pub use suggestion::{
    ComparableProduct, EngineConfig, PriceRange, PriceSuggestion, PriceSuggestionEngine,
    SuggestionRequest,
};
