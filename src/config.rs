//! Application configuration loaded from environment variables.
//!
//! Values are read once at startup. A `.env` file in the working directory is
//! honoured when present.
//!
//! | Variable | Default |
//! |---|---|
//! | `API_HOST` | `0.0.0.0` |
//! | `API_PORT` | `3000` |
//! | `DATABASE_URL` | unset (in-memory store) |
//! | `DATABASE_POOL_SIZE` | `10` |
//! | `LOG_FORMAT` | `pretty` |

use std::env;
use std::str::FromStr;
use thiserror::Error;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_POOL_SIZE: u32 = 10;

/// Errors raised while loading configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// An environment variable has a value that cannot be used.
    #[error("invalid value for {key}: {message}")]
    InvalidValue {
        /// Name of the environment variable.
        key: String,
        /// Why the value was rejected.
        message: String,
    },
}

/// Output format of the tracing subscriber.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable multi-field lines.
    #[default]
    Pretty,
    /// One JSON object per event.
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "pretty" | "text" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            other => Err(format!("unsupported log format `{other}`; expected pretty|json")),
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// HTTP bind host.
    pub host: String,
    /// HTTP bind port.
    pub port: u16,
    /// `PostgreSQL` connection URL; `None` selects the in-memory store.
    pub database_url: Option<String>,
    /// Maximum number of pooled database connections.
    pub database_pool_size: u32,
    /// Log output format.
    pub log_format: LogFormat,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_owned(),
            port: DEFAULT_PORT,
            database_url: None,
            database_pool_size: DEFAULT_POOL_SIZE,
            log_format: LogFormat::default(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from the process environment, reading `.env`
    /// first when it exists.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] when a variable is set to an
    /// unusable value.
    pub fn from_env() -> Result<Self, ConfigError> {
        // A missing .env file is the normal case outside development.
        drop(dotenvy::dotenv());
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Loads configuration through an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] when a value is unusable.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let host = lookup("API_HOST")
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_HOST.to_owned());
        let port = parse_or("API_PORT", lookup("API_PORT"), DEFAULT_PORT)?;
        let database_url = lookup("DATABASE_URL").filter(|value| !value.trim().is_empty());
        let database_pool_size = parse_or(
            "DATABASE_POOL_SIZE",
            lookup("DATABASE_POOL_SIZE"),
            DEFAULT_POOL_SIZE,
        )?;
        if database_pool_size == 0 {
            return Err(invalid("DATABASE_POOL_SIZE", "must be at least 1"));
        }
        let log_format = parse_or("LOG_FORMAT", lookup("LOG_FORMAT"), LogFormat::default())?;

        Ok(Self {
            host,
            port,
            database_url,
            database_pool_size,
            log_format,
        })
    }

    /// Returns the `host:port` socket address string.
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_or<T>(key: &str, value: Option<String>, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value.map_or(Ok(default), |raw| {
        raw.trim().parse().map_err(|err: T::Err| invalid(key, err))
    })
}

fn invalid(key: &str, message: impl std::fmt::Display) -> ConfigError {
    ConfigError::InvalidValue {
        key: key.to_owned(),
        message: message.to_string(),
    }
}
