//! Service binary: configuration, tracing, database pool, HTTP server.

use anyhow::Context;
use market_analytics::api::rest::{create_router, AppState};
use market_analytics::application::services::market_analysis::MarketAnalysisReporter;
use market_analytics::application::services::suggestion::{EngineConfig, PriceSuggestionEngine};
use market_analytics::config::Settings;
use market_analytics::infrastructure::persistence::postgres::PostgresMarketDataRepository;
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let settings = Settings::load().context("loading configuration")?;

    let pool = PgPoolOptions::new()
        .max_connections(settings.database.max_connections)
        .connect(&settings.database.url)
        .await
        .context("connecting to database")?;

    let repository = Arc::new(PostgresMarketDataRepository::new(pool));
    let engine_config = EngineConfig::with_timeout(settings.engine.query_timeout_ms);

    let state = Arc::new(AppState {
        suggestion_engine: PriceSuggestionEngine::new(repository.clone(), engine_config.clone()),
        reporter: MarketAnalysisReporter::new(repository, engine_config),
    });

    let router = create_router(state, &settings.server.cors_origins);
    let listener = tokio::net::TcpListener::bind(&settings.server.bind_addr)
        .await
        .with_context(|| format!("binding {}", settings.server.bind_addr))?;

    tracing::info!(addr = %settings.server.bind_addr, "market analytics service listening");
    axum::serve(listener, router).await.context("serving")?;

    Ok(())
}
