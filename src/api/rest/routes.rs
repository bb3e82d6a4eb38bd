//! # REST Routes
//!
//! Router assembly for the analytics API.

use crate::api::rest::handlers::{
    self, AppState,
};
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderValue, Method};
use axum::routing::get;
use axum::Router;
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Builds the API router.
///
/// `cors_origins` restricts cross-origin access; an empty list allows any
/// origin (local development).
pub fn create_router(state: Arc<AppState>, cors_origins: &[String]) -> Router {
    let cors = build_cors(cors_origins);

    Router::new()
        .route("/ai/price-suggestion", get(handlers::price_suggestion))
        .route("/ai/market-analysis", get(handlers::market_analysis))
        .route("/ai/categories", get(handlers::categories))
        .route("/health", get(handlers::health))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

fn build_cors(origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET])
        .allow_headers([CONTENT_TYPE]);

    if origins.is_empty() {
        return layer.allow_origin(Any);
    }

    let parsed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|o| o.parse::<HeaderValue>().ok())
        .collect();
    layer.allow_origin(AllowOrigin::list(parsed))
}
