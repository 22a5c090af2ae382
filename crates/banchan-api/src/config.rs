//! Environment-driven configuration for the banchan-api binary.
//!
//! # Environment Variables
//!
//! | Variable | Default |
//! |----------|---------|
//! | `DATABASE_URL` | `postgres://localhost/banchan` |
//! | `HOST` | `0.0.0.0` |
//! | `PORT` | `3000` |
//! | `DB_MAX_CONNECTIONS` | `10` |
//! | `DB_CONNECT_TIMEOUT_SECS` | `30` |
//! | `LOG_FORMAT` | `text` (`json` for structured output) |
//! | `LOG_FILE` | unset (stdout only) |
//! | `LOG_ANSI` | auto |

use std::str::FromStr;
use std::time::Duration;

use banchan_core::defaults::{DATABASE_URL, SERVER_HOST, SERVER_PORT};
use banchan_core::{Error, Result};
use banchan_db::pool::{DEFAULT_CONNECT_TIMEOUT_SECS, DEFAULT_MAX_CONNECTIONS};
use banchan_db::PoolConfig;

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

/// Logging settings read from `LOG_*` variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogSettings {
    pub format: LogFormat,
    /// Path of a daily-rotated log file; stdout when unset.
    pub file: Option<String>,
    /// Force ANSI colors on or off; auto-detected when unset.
    pub ansi: Option<bool>,
}

/// Full service configuration.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub pool: PoolConfig,
    pub log: LogSettings,
}

impl ApiConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through `lookup`, which returns a variable's value if set.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL").unwrap_or_else(|| DATABASE_URL.to_string());
        let host = lookup("HOST").unwrap_or_else(|| SERVER_HOST.to_string());
        let port = parse_var(&lookup, "PORT", SERVER_PORT)?;

        let max_connections = parse_var(&lookup, "DB_MAX_CONNECTIONS", DEFAULT_MAX_CONNECTIONS)?;
        if max_connections == 0 {
            return Err(Error::Config("DB_MAX_CONNECTIONS must be >= 1".to_string()));
        }
        let connect_timeout_secs =
            parse_var(&lookup, "DB_CONNECT_TIMEOUT_SECS", DEFAULT_CONNECT_TIMEOUT_SECS)?;

        let pool = PoolConfig::new()
            .max_connections(max_connections)
            .connect_timeout(Duration::from_secs(connect_timeout_secs));

        let format = match lookup("LOG_FORMAT").as_deref() {
            Some("json") => LogFormat::Json,
            _ => LogFormat::Text,
        };
        let log = LogSettings {
            format,
            file: lookup("LOG_FILE").filter(|path| !path.is_empty()),
            ansi: lookup("LOG_ANSI").map(|v| v == "true" || v == "1"),
        };

        Ok(Self {
            database_url,
            host,
            port,
            pool,
            log,
        })
    }

    /// `host:port` for binding the listener.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_var<F, T>(lookup: &F, key: &str, default: T) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|e| Error::Config(format!("{} has invalid value {:?}: {}", key, raw, e))),
    }
}
