//! # Configuration
//!
//! Settings for the analytics service, loaded from environment variables
//! with the `MARKET` prefix (`MARKET__SERVER__BIND_ADDR`,
//! `MARKET__DATABASE__URL`, ...) on top of local-development defaults.
//!
//! Note the classification thresholds of the scoring engine are fixed
//! policy constants, not configuration; only operational concerns (bind
//! address, database, query time budget, CORS) are configurable.

use config::{Config, ConfigError, Environment};
use serde::Deserialize;

/// HTTP server settings.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    /// Address the server binds to.
    pub bind_addr: String,
    /// Allowed CORS origins; empty allows any origin.
    pub cors_origins: Vec<String>,
}

/// Database settings.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseSettings {
    /// PostgreSQL connection URL.
    pub url: String,
    /// Connection pool size.
    pub max_connections: u32,
}

/// Engine settings.
#[derive(Debug, Clone, Deserialize)]
pub struct EngineSettings {
    /// Per-query timeout in milliseconds.
    pub query_timeout_ms: u64,
}

/// Service settings.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// HTTP server settings.
    pub server: ServerSettings,
    /// Database settings.
    pub database: DatabaseSettings,
    /// Engine settings.
    pub engine: EngineSettings,
}

impl Settings {
    /// Loads settings from the environment over defaults.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` when an override cannot be parsed into the
    /// expected shape.
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("server.bind_addr", "0.0.0.0:8000")?
            .set_default("server.cors_origins", Vec::<String>::new())?
            .set_default("database.url", "postgres://localhost/marketplace")?
            .set_default("database.max_connections", 5_i64)?
            .set_default("engine.query_timeout_ms", 5000_i64)?
            .add_source(Environment::with_prefix("MARKET").separator("__"))
            .build()?
            .try_deserialize()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn defaults_load() {
        let settings = Settings::load().unwrap();
        assert_eq!(settings.server.bind_addr, "0.0.0.0:8000");
        assert!(settings.server.cors_origins.is_empty());
        assert_eq!(settings.database.max_connections, 5);
        assert_eq!(settings.engine.query_timeout_ms, 5000);
    }
}
