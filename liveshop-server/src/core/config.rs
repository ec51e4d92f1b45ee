//! Server configuration
//!
//! All settings come from environment variables with sensible defaults:
//!
//! | Variable | Default | Purpose |
//! |----------|---------|---------|
//! | WORK_DIR | ./data | work directory holding the database files |
//! | HTTP_PORT | 3000 | HTTP API port |
//! | APP_DATABASE | liveshop | logical database name |
//! | ENVIRONMENT | development | development \| staging \| production |
//! | LOG_LEVEL | info | tracing level filter |
//! | LOG_DIR | (unset) | when set, daily-rolling log files land here |

use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    /// Work directory holding the database files
    pub work_dir: String,
    /// HTTP API port
    pub http_port: u16,
    /// Logical database name
    pub database: String,
    /// Running environment: development | staging | production
    pub environment: String,
    /// Tracing level filter
    pub log_level: String,
    /// Optional directory for rolling log files
    pub log_dir: Option<String>,
}

impl Config {
    /// Load the configuration from environment variables, falling back to
    /// defaults for anything unset.
    pub fn from_env() -> Self {
        Self {
            work_dir: std::env::var("WORK_DIR").unwrap_or_else(|_| "./data".into()),
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            database: std::env::var("APP_DATABASE").unwrap_or_else(|_| "liveshop".into()),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: std::env::var("LOG_DIR").ok(),
        }
    }

    /// Override work directory and port, typically from tests.
    pub fn with_overrides(work_dir: impl Into<String>, http_port: u16) -> Self {
        let mut config = Self::from_env();
        config.work_dir = work_dir.into();
        config.http_port = http_port;
        config
    }

    /// Directory the embedded database files live in.
    pub fn database_dir(&self) -> PathBuf {
        PathBuf::from(&self.work_dir).join("database")
    }
}
