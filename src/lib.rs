//! # Market Analytics
//!
//! Market analytics and price suggestion engine for a B2B marketplace.
//!
//! The engine turns historical listing, RFQ, and supplier data into a
//! price recommendation with a confidence score, a price range, a trend
//! classification, and the comparable listings backing it, plus a
//! category-wide market analysis. Every call is a fresh, stateless
//! computation over current data: no suggestion history is persisted and
//! no state is shared between concurrent requests.
//!
//! # Layers
//!
//! - [`domain`]: entities, value objects, and the pure aggregation and
//!   scoring services
//! - [`application`]: the selector, suggestion engine, and analysis
//!   reporter orchestrating concurrent reads
//! - [`infrastructure`]: the read-only market data facade (in-memory and
//!   PostgreSQL)
//! - [`api`]: the axum REST surface
//!
//! # Example
//!
//! ```
//! use market_analytics::application::services::suggestion::{
//!     PriceSuggestionEngine, SuggestionRequest,
//! };
//! use market_analytics::infrastructure::persistence::in_memory::InMemoryMarketDataRepository;
//! use std::sync::Arc;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let repository = Arc::new(InMemoryMarketDataRepository::new());
//! let engine = PriceSuggestionEngine::with_defaults(repository);
//!
//! let suggestion = engine
//!     .suggest(&SuggestionRequest {
//!         category: "electronics".to_string(),
//!         product_name: Some("laptop".to_string()),
//!         quantity: 10,
//!         unit: "piece".to_string(),
//!     })
//!     .await
//!     .unwrap();
//!
//! // No listings yet: explicit absence, not a fabricated price.
//! assert!(suggestion.suggested_price.is_none());
//! assert_eq!(suggestion.confidence, 0.0);
//! # }
//! ```

pub mod api;
pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
