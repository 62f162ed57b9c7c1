//! Application configuration management
//!
//! This module handles loading and validating configuration from environment variables.
//! Configuration is loaded once at startup and handed to [`AppState`](crate::state::AppState);
//! nothing reads the environment after that.

use std::env;

use crate::constants::{
    DEFAULT_DATABASE_MAX_CONNECTIONS, DEFAULT_GROUP_POINTS, DEFAULT_INDIVIDUAL_POINTS,
    DEFAULT_LOG_LEVEL, DEFAULT_SERVER_HOST, DEFAULT_SERVER_PORT,
};
use crate::scoring::PointTable;

/// Main application configuration
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub realtime: RealtimeConfig,
    pub scoring: PointTable,
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub rust_log: String,
    pub log_format: LogFormat,
}

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Database configuration
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// Connection string with read credentials
    pub read_url: String,
    /// Connection string with write credentials, `None` reuses `read_url`
    pub write_url: Option<String>,
    pub max_connections: u32,
}

/// Connection parameters for the client-side realtime subscription.
/// Passed through to clients untouched.
#[derive(Debug, Clone, Default)]
pub struct RealtimeConfig {
    pub url: Option<String>,
    pub anon_key: Option<String>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Ok(Self {
            server: ServerConfig::from_env()?,
            database: DatabaseConfig::from_env()?,
            realtime: RealtimeConfig::from_env(),
            scoring: scoring_from_env()?,
        })
    }
}

impl ServerConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            host: env::var("SERVER_HOST").unwrap_or_else(|_| DEFAULT_SERVER_HOST.to_string()),
            port: env::var("SERVER_PORT")
                .unwrap_or_else(|_| DEFAULT_SERVER_PORT.to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("SERVER_PORT".to_string()))?,
            rust_log: env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string()),
            log_format: match env::var("LOG_FORMAT") {
                Ok(value) => value.parse()?,
                Err(_) => LogFormat::default(),
            },
        })
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_SERVER_HOST.to_string(),
            port: DEFAULT_SERVER_PORT,
            rust_log: DEFAULT_LOG_LEVEL.to_string(),
            log_format: LogFormat::default(),
        }
    }
}

impl std::str::FromStr for LogFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pretty" | "text" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            _ => Err(ConfigError::InvalidValue("LOG_FORMAT".to_string())),
        }
    }
}

impl DatabaseConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            read_url: env::var("DATABASE_URL")
                .map_err(|_| ConfigError::Missing("DATABASE_URL".to_string()))?,
            write_url: env::var("DATABASE_WRITE_URL").ok().filter(|url| !url.is_empty()),
            max_connections: env::var("DATABASE_MAX_CONNECTIONS")
                .unwrap_or_else(|_| DEFAULT_DATABASE_MAX_CONNECTIONS.to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("DATABASE_MAX_CONNECTIONS".to_string()))?,
        })
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            read_url: "postgres://localhost/medalboard".to_string(),
            write_url: None,
            max_connections: DEFAULT_DATABASE_MAX_CONNECTIONS,
        }
    }
}

impl RealtimeConfig {
    fn from_env() -> Self {
        Self {
            url: env::var("REALTIME_URL").ok(),
            anon_key: env::var("REALTIME_ANON_KEY").ok(),
        }
    }
}

fn scoring_from_env() -> Result<PointTable, ConfigError> {
    let individual = match env::var("POINTS_INDIVIDUAL") {
        Ok(raw) => parse_points("POINTS_INDIVIDUAL", &raw)?,
        Err(_) => DEFAULT_INDIVIDUAL_POINTS,
    };
    let group = match env::var("POINTS_GROUP") {
        Ok(raw) => parse_points("POINTS_GROUP", &raw)?,
        Err(_) => DEFAULT_GROUP_POINTS,
    };

    Ok(PointTable::new(individual, group))
}

/// Parse a comma separated row of exactly three point values ("10,7,5")
fn parse_points(var: &str, raw: &str) -> Result<[u32; 3], ConfigError> {
    let invalid = || ConfigError::InvalidValue(var.to_string());

    let values = raw
        .split(',')
        .map(|part| part.trim().parse::<u32>().map_err(|_| invalid()))
        .collect::<Result<Vec<_>, _>>()?;

    values.try_into().map_err(|_| invalid())
}

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(String),

    #[error("Invalid value for environment variable: {0}")]
    InvalidValue(String),
}
