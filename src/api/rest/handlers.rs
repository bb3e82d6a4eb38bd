//! # REST Handlers
//!
//! Request handlers for the analytics endpoints.
//!
//! The routing layer is a thin collaborator: it parses query parameters,
//! delegates to the engine, and maps the application error taxonomy onto
//! HTTP statuses. A degraded (no-evidence) response is a 200 with explicit
//! absence fields, never an error status.

use crate::application::error::ApplicationError;
use crate::application::services::market_analysis::{
    CategoriesResponse, MarketAnalysisReport, MarketAnalysisReporter,
};
use crate::application::services::suggestion::{
    PriceSuggestion, PriceSuggestionEngine, SuggestionRequest,
};
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Shared state for the REST API.
#[derive(Debug)]
pub struct AppState {
    /// Per-product price suggestion engine.
    pub suggestion_engine: PriceSuggestionEngine,
    /// Category-level analysis reporter.
    pub reporter: MarketAnalysisReporter,
}

/// Query parameters for the price suggestion endpoint.
#[derive(Debug, Deserialize)]
pub struct SuggestionParams {
    /// Product category (required).
    pub category: String,
    /// Optional product name for better matching.
    pub product_name: Option<String>,
    /// Order quantity, defaults to 1.
    #[serde(default = "default_quantity")]
    pub quantity: u64,
    /// Unit of measurement, defaults to "piece".
    #[serde(default = "default_unit")]
    pub unit: String,
}

fn default_quantity() -> u64 {
    1
}

fn default_unit() -> String {
    "piece".to_string()
}

/// Query parameters for the market analysis endpoint.
#[derive(Debug, Deserialize)]
pub struct AnalysisParams {
    /// Product category (required).
    pub category: String,
}

/// Error payload returned to clients.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Stable machine-readable error code.
    pub error: String,
    /// Human-readable message.
    pub message: String,
}

/// Health check payload.
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always "healthy" while the process serves requests.
    pub status: String,
    /// Crate version.
    pub version: String,
}

/// Application error wrapped for HTTP responses.
#[derive(Debug)]
pub struct ApiError(ApplicationError);

impl From<ApplicationError> for ApiError {
    fn from(err: ApplicationError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = match &self.0 {
            ApplicationError::InvalidInput(_) => (StatusCode::BAD_REQUEST, "invalid_input"),
            ApplicationError::ServiceUnavailable(_) => {
                (StatusCode::SERVICE_UNAVAILABLE, "service_unavailable")
            }
            ApplicationError::Repository(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "repository_error")
            }
            ApplicationError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "internal_error"),
        };

        let body = ErrorResponse {
            error: code.to_string(),
            message: self.0.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

/// `GET /ai/price-suggestion`
pub async fn price_suggestion(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SuggestionParams>,
) -> Result<Json<PriceSuggestion>, ApiError> {
    let request = SuggestionRequest {
        category: params.category,
        product_name: params.product_name,
        quantity: params.quantity,
        unit: params.unit,
    };
    let suggestion = state.suggestion_engine.suggest(&request).await?;
    Ok(Json(suggestion))
}

/// `GET /ai/market-analysis`
pub async fn market_analysis(
    State(state): State<Arc<AppState>>,
    Query(params): Query<AnalysisParams>,
) -> Result<Json<MarketAnalysisReport>, ApiError> {
    let report = state.reporter.analyze(&params.category).await?;
    Ok(Json(report))
}

/// `GET /ai/categories`
pub async fn categories(
    State(state): State<Arc<AppState>>,
) -> Result<Json<CategoriesResponse>, ApiError> {
    let response = state.reporter.list_categories().await?;
    Ok(Json(response))
}

/// `GET /health`
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
