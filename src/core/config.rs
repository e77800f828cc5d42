//! Configuration management for the catalog service.
//!
//! Configuration is read from environment variables (a `.env` file in the
//! working directory is loaded first). `DATABASE_URL` is required; every
//! other setting has a default.

use super::error::{Error, Result};
use super::transport::TransportConfig;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Main configuration structure for the catalog service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Storage connection settings.
    pub database: DatabaseConfig,

    /// REST API listener settings.
    pub api: ApiConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// MCP transport configuration.
    pub transport: TransportConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Storage connection configuration.
#[derive(Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Connection string (`postgres://...` or `memory://`).
    pub url: String,

    /// Upper bound on pooled connections.
    pub max_connections: u32,

    /// Seconds to wait for a pooled connection before failing.
    pub acquire_timeout_secs: u64,
}

/// Custom Debug implementation to keep credentials out of logs.
impl std::fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("url", &"[REDACTED]")
            .field("max_connections", &self.max_connections)
            .field("acquire_timeout_secs", &self.acquire_timeout_secs)
            .finish()
    }
}

/// REST API listener configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Host address to bind to.
    pub host: String,

    /// Port number to listen on.
    pub port: u16,

    /// Enable permissive CORS for browser clients.
    pub enable_cors: bool,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "memory://".to_string(),
            max_connections: 5,
            acquire_timeout_secs: 8,
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8000,
            enable_cors: true,
        }
    }
}

impl ApiConfig {
    /// Get the bind address.
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "product-catalog".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            database: DatabaseConfig::default(),
            api: ApiConfig::default(),
            logging: LoggingConfig {
                level: "info".to_string(),
            },
            transport: TransportConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Fails when `DATABASE_URL` is unset or empty, or when a numeric
    /// setting cannot be parsed.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        config.database.url = match std::env::var("DATABASE_URL") {
            Ok(url) if !url.trim().is_empty() => url,
            _ => {
                return Err(Error::config(
                    "DATABASE_URL environment variable is not set. \
                     Please set it in your .env file or environment.",
                ));
            }
        };

        if let Ok(name) = std::env::var("CATALOG_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("CATALOG_LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Some(max) = parse_var("CATALOG_DB_MAX_CONNECTIONS")? {
            config.database.max_connections = max;
        }

        if let Some(secs) = parse_var("CATALOG_DB_ACQUIRE_TIMEOUT_SECS")? {
            config.database.acquire_timeout_secs = secs;
        }

        if let Ok(host) = std::env::var("CATALOG_API_HOST") {
            config.api.host = host;
        }

        if let Some(port) = parse_var("CATALOG_API_PORT")? {
            config.api.port = port;
        }

        if let Ok(cors) = std::env::var("CATALOG_API_CORS") {
            config.api.enable_cors = cors.to_lowercase() != "false" && cors != "0";
            if !config.api.enable_cors {
                info!("CORS disabled for the REST API");
            }
        }

        if config.database.url.starts_with("memory://") {
            warn!("Using the in-memory product store; data is lost on exit");
        }

        config.transport = TransportConfig::from_env();

        Ok(config)
    }
}

fn parse_var<T: std::str::FromStr>(key: &str) -> Result<Option<T>> {
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| Error::config(format!("{} has an invalid value: '{}'", key, raw))),
        Err(_) => Ok(None),
    }
}
