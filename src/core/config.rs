//! Configuration management for the MCP server.
//!
//! This module provides a centralized configuration structure that can be
//! populated from environment variables or defaults. Database credentials are
//! deliberately absent: they are read from `DB_*` variables on every call.

use super::error::{Error, Result};
use super::transport::TransportConfig;
use crate::domains::employees::Locale;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{info, warn};

/// Main configuration structure for the MCP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,

    /// Timeouts and limits applied to database calls.
    pub database: DatabaseConfig,

    /// Language of user-facing messages.
    pub messages: MessagesConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,

    /// Whether to include timestamps in log output.
    pub with_timestamps: bool,
}

/// Database call configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Seconds allowed for establishing a connection.
    pub connect_timeout_secs: u64,

    /// Seconds allowed for a single statement.
    pub query_timeout_secs: u64,
}

/// Message catalog configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MessagesConfig {
    pub locale: Locale,
}

impl DatabaseConfig {
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    pub fn query_timeout(&self) -> Duration {
        Duration::from_secs(self.query_timeout_secs)
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            connect_timeout_secs: 10,
            query_timeout_secs: 30,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "company_db_server".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                with_timestamps: true,
            },
            transport: TransportConfig::default(),
            database: DatabaseConfig::default(),
            messages: MessagesConfig::default(),
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables.
    ///
    /// Environment variables are expected to be prefixed with `MCP_`.
    /// For example: `MCP_SERVER_NAME`, `MCP_LOG_LEVEL`, `MCP_LOCALE`.
    /// A `.env` file in the working directory is loaded first if present.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        // Load transport configuration from environment
        config.transport = TransportConfig::from_env();

        if let Some(secs) = parse_env("MCP_DB_CONNECT_TIMEOUT_SECS") {
            config.database.connect_timeout_secs = secs;
        }

        if let Some(secs) = parse_env("MCP_DB_QUERY_TIMEOUT_SECS") {
            config.database.query_timeout_secs = secs;
        }

        if let Ok(locale) = std::env::var("MCP_LOCALE") {
            match locale.parse() {
                Ok(locale) => {
                    config.messages.locale = locale;
                    info!("Message locale set to {:?}", config.messages.locale);
                }
                Err(_) => warn!(
                    "Unknown MCP_LOCALE '{}', keeping {:?}",
                    locale, config.messages.locale
                ),
            }
        }

        config
    }

    /// Check that the loaded values can actually be used.
    pub fn validate(&self) -> Result<()> {
        if self.database.connect_timeout_secs == 0 {
            return Err(Error::config("MCP_DB_CONNECT_TIMEOUT_SECS must be at least 1"));
        }
        if self.database.query_timeout_secs == 0 {
            return Err(Error::config("MCP_DB_QUERY_TIMEOUT_SECS must be at least 1"));
        }
        Ok(())
    }
}

fn parse_env<T: std::str::FromStr>(key: &str) -> Option<T> {
    let raw = std::env::var(key).ok()?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!("Ignoring unparsable value for {}: '{}'", key, raw);
            None
        }
    }
}

// Mutex to ensure env var tests run serially, across all test modules
#[cfg(test)]
pub(crate) static ENV_TEST_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_database_limits_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("MCP_DB_QUERY_TIMEOUT_SECS", "7");
        }
        let config = Config::from_env();
        assert_eq!(config.database.query_timeout_secs, 7);
        unsafe {
            std::env::remove_var("MCP_DB_QUERY_TIMEOUT_SECS");
        }
    }

    #[test]
    fn test_unparsable_value_keeps_default() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("MCP_DB_CONNECT_TIMEOUT_SECS", "soon");
        }
        let config = Config::from_env();
        assert_eq!(config.database.connect_timeout_secs, 10);
        unsafe {
            std::env::remove_var("MCP_DB_CONNECT_TIMEOUT_SECS");
        }
    }

    #[test]
    fn test_locale_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("MCP_LOCALE", "en");
        }
        let config = Config::from_env();
        assert_eq!(config.messages.locale, Locale::En);
        unsafe {
            std::env::remove_var("MCP_LOCALE");
        }
    }

    #[test]
    fn test_default_locale_is_spanish() {
        assert_eq!(Config::default().messages.locale, Locale::Es);
    }

    #[test]
    fn test_validate_rejects_zero_timeout() {
        let mut config = Config::default();
        assert!(config.validate().is_ok());
        config.database.query_timeout_secs = 0;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("MCP_DB_QUERY_TIMEOUT_SECS"));
    }
}
