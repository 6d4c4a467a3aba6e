use std::time::Duration;

use crate::error::{config::ConfigError, AppError};

const DEFAULT_LOG_LEVEL: &str = "info";

pub struct Config {
    pub database_url: String,

    /// Default deadline applied to store operations when the caller supplies none.
    pub store_timeout: Option<Duration>,
    /// Emit SQLx statement logs.
    pub sqlx_logging: bool,
    /// Fallback tracing filter when `RUST_LOG` is unset.
    pub log_level: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            store_timeout: optional_var("STORE_TIMEOUT_MS", |raw| {
                raw.parse::<u64>()
                    .map(Duration::from_millis)
                    .map_err(|e| e.to_string())
            })?,
            sqlx_logging: optional_var("SQLX_LOGGING", |raw| {
                raw.parse::<bool>().map_err(|e| e.to_string())
            })?
            .unwrap_or(false),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string()),
        })
    }
}

/// Reads and parses an optional variable; unset means `None`, unparsable is an error.
fn optional_var<T>(
    name: &str,
    parse: impl FnOnce(&str) -> Result<T, String>,
) -> Result<Option<T>, ConfigError> {
    match std::env::var(name) {
        Ok(raw) => parse(raw.trim())
            .map(Some)
            .map_err(|reason| ConfigError::InvalidEnvVar {
                name: name.to_string(),
                value: raw,
                reason,
            }),
        Err(_) => Ok(None),
    }
}
