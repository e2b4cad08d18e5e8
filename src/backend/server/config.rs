/**
 * Server Configuration
 *
 * This module loads the server configuration and owns the process-wide
 * database connection pool.
 *
 * # Configuration Sources
 *
 * 1. An optional TOML file named by `GROUPDESK_CONFIG`
 * 2. Environment variables, which override the file:
 *    `SERVER_PORT`, `DATABASE_URL`, `DATABASE_MAX_CONNECTIONS`
 *
 * # Database Pool
 *
 * The pool is created at most once per process. Later calls return the
 * existing pool; the first successful connection wins.
 *
 * # Error Handling
 *
 * Database errors are logged but do not prevent server startup. Without a
 * usable database the server falls back to the in-memory store.
 */

#[cfg(feature = "ssr")]
use std::sync::Arc;
#[cfg(feature = "ssr")]
use serde::Deserialize;
#[cfg(feature = "ssr")]
use sqlx::{postgres::PgPoolOptions, PgPool};
#[cfg(feature = "ssr")]
use thiserror::Error;
#[cfg(feature = "ssr")]
use tokio::sync::OnceCell;
#[cfg(feature = "ssr")]
use crate::backend::groups::{MemoryStore, PostgresStore, SharedStore};

#[cfg(feature = "ssr")]
const DEFAULT_PORT: u16 = 3000;
#[cfg(feature = "ssr")]
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Process-wide database pool
#[cfg(feature = "ssr")]
static DATABASE_POOL: OnceCell<PgPool> = OnceCell::const_new();

/// Server configuration
#[cfg(feature = "ssr")]
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Port to listen on
    pub port: u16,
    /// PostgreSQL connection string; the in-memory store is used when absent
    pub database_url: Option<String>,
    /// Upper bound on pooled connections
    pub max_connections: u32,
}

#[cfg(feature = "ssr")]
impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            database_url: None,
            max_connections: DEFAULT_MAX_CONNECTIONS,
        }
    }
}

/// Configuration loading errors
#[cfg(feature = "ssr")]
#[derive(Debug, Error)]
pub enum ServerConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid value for {key}: {value}")]
    InvalidValue { key: &'static str, value: String },
}

#[cfg(feature = "ssr")]
impl ServerConfig {
    /// Load from `GROUPDESK_CONFIG` (if set) and then apply environment overrides
    pub fn load() -> Result<Self, ServerConfigError> {
        let base = match std::env::var("GROUPDESK_CONFIG") {
            Ok(path) => {
                tracing::info!("Loading configuration from {}", path);
                let contents = std::fs::read_to_string(&path)
                    .map_err(|source| ServerConfigError::Read { path, source })?;
                Self::from_toml_str(&contents)?
            }
            Err(_) => Self::default(),
        };
        base.with_env_overrides()
    }

    /// Parse a TOML document; missing keys take their defaults
    pub fn from_toml_str(contents: &str) -> Result<Self, ServerConfigError> {
        Ok(toml::from_str(contents)?)
    }

    fn with_env_overrides(mut self) -> Result<Self, ServerConfigError> {
        if let Ok(port) = std::env::var("SERVER_PORT") {
            self.port = port
                .parse()
                .map_err(|_| ServerConfigError::InvalidValue { key: "SERVER_PORT", value: port })?;
        }
        if let Ok(url) = std::env::var("DATABASE_URL") {
            if !url.is_empty() {
                self.database_url = Some(url);
            }
        }
        if let Ok(max) = std::env::var("DATABASE_MAX_CONNECTIONS") {
            self.max_connections = max.parse().map_err(|_| ServerConfigError::InvalidValue {
                key: "DATABASE_MAX_CONNECTIONS",
                value: max,
            })?;
        }
        Ok(self)
    }
}

/// Get the process-wide pool, connecting and migrating on first use
#[cfg(feature = "ssr")]
pub async fn database_pool(config: &ServerConfig) -> Option<&'static PgPool> {
    let database_url = match config.database_url.as_deref() {
        Some(url) => url,
        None => {
            tracing::warn!("DATABASE_URL not set. Serving groups from memory.");
            return None;
        }
    };

    let pool = DATABASE_POOL
        .get_or_try_init(|| async {
            tracing::info!("Connecting to database...");
            let pool = PgPoolOptions::new()
                .max_connections(config.max_connections)
                .connect(database_url)
                .await?;

            tracing::info!("Running database migrations...");
            if let Err(e) = sqlx::migrate!().run(&pool).await {
                tracing::error!("Failed to run database migrations: {}", e);
                tracing::warn!("Continuing without migrations - schema might not be up to date");
            }
            Ok::<_, sqlx::Error>(pool)
        })
        .await;

    match pool {
        Ok(pool) => Some(pool),
        Err(e) => {
            tracing::error!("Failed to create database connection pool: {:?}", e);
            None
        }
    }
}

/// Pick the store backing the gateway
#[cfg(feature = "ssr")]
pub async fn load_store(config: &ServerConfig) -> SharedStore {
    match database_pool(config).await {
        Some(pool) => {
            tracing::info!("Using PostgreSQL group store");
            Arc::new(PostgresStore::new(pool.clone()))
        }
        None => {
            tracing::warn!("Using in-memory group store; changes are lost on exit");
            Arc::new(MemoryStore::new())
        }
    }
}
