//! # REST API
//!
//! REST endpoints using axum.
//!
//! # Endpoints
//!
//! - `GET /ai/price-suggestion` - Price suggestion for a category/product
//! - `GET /ai/market-analysis` - Category-wide market overview
//! - `GET /ai/categories` - Categories ranked by active product count
//! - `GET /health` - Health check
//!
//! # Usage
//!
//! ```ignore
//! use market_analytics::api::rest::{create_router, AppState};
//! use std::sync::Arc;
//!
//! let state = Arc::new(AppState {
//!     suggestion_engine: /* ... */,
//!     reporter: /* ... */,
//! });
//!
//! let router = create_router(state, &[]);
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:8000").await?;
//! axum::serve(listener, router).await?;
//! ```

pub mod handlers;
pub mod routes;

pub use handlers::{
    AnalysisParams, ApiError, AppState, ErrorResponse, HealthResponse, SuggestionParams,
};
pub use routes::create_router;
