//! Server configuration module

use clap::Parser;

use crate::config::{
    db::DatabaseConfig,
    kitchen::KitchenConfig,
    observability::{LoggingConfig, ObservabilityConfig},
    server::ServerRuntimeConfig,
};

pub(crate) mod db;
pub(crate) mod kitchen;
pub(crate) mod observability;
pub(crate) mod server;

pub(crate) use observability::LogFormat;

/// Lunchline JSON API Server configuration
#[derive(Debug, Parser)]
#[command(name = "lunchline-json", about = "Lunchline JSON API Server", long_about = None)]
pub struct ServerConfig {
    /// Server network settings.
    #[command(flatten)]
    pub server: ServerRuntimeConfig,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,

    /// Observability (traces) settings.
    #[command(flatten)]
    pub observability: ObservabilityConfig,

    /// Application database settings.
    #[command(flatten)]
    pub database: DatabaseConfig,

    /// Kitchen clock settings.
    #[command(flatten)]
    pub kitchen: KitchenConfig,
}

impl ServerConfig {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }

    /// Get the socket address for binding
    #[must_use]
    pub fn socket_addr(&self) -> String {
        self.server.socket_addr()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_database_url_and_kitchen_zone() {
        let config = ServerConfig::try_parse_from([
            "lunchline-json",
            "--database-url",
            "postgres://localhost/lunchline",
            "--kitchen-time-zone",
            "Europe/Madrid",
        ]);

        let Ok(config) = config else {
            panic!("expected config to parse, got {config:?}");
        };

        assert_eq!(
            config.kitchen.kitchen_time_zone, "Europe/Madrid",
            "flag should override the default zone"
        );
        assert!(config.kitchen.time_zone().is_ok(), "zone should resolve");
    }

    #[test]
    fn pool_and_shutdown_defaults() {
        let config = ServerConfig::try_parse_from([
            "lunchline-json",
            "--database-url",
            "postgres://localhost/lunchline",
            "--database-max-connections",
            "0",
        ]);

        let Ok(config) = config else {
            panic!("expected config to parse, got {config:?}");
        };

        assert_eq!(
            config.database.pool_settings().max_connections,
            1,
            "an empty pool is raised to one connection"
        );
        assert_eq!(config.socket_addr(), "0.0.0.0:8698");
        assert!(config.server.shutdown_grace().is_some());
    }
}
