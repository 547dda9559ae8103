//! Configuration module
//!
//! Loads configuration from a flat `KEY=VALUE` file or from environment
//! variables. Both sources understand the same keys:
//!
//! | Key              | Default       |
//! |------------------|---------------|
//! | `HOST`           | `127.0.0.1`   |
//! | `PORT`           | `8080`        |
//! | `ENVIRONMENT`    | `development` |
//! | `MONTH_MATCHING` | `lenient`     |

use std::collections::HashMap;
use std::env;
use std::net::{IpAddr, SocketAddr};
use std::path::Path;

use crate::domain::MonthMatching;

/// Environment variable naming the config file
pub const CONFIG_PATH_ENV: &str = "CALENDAR_CONFIG";

/// Config file used when `CALENDAR_CONFIG` is unset
pub const DEFAULT_CONFIG_PATH: &str = "config.conf";

/// Application configuration
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Server host
    pub host: String,

    /// Server port
    pub port: u16,

    /// Environment (development, production)
    pub environment: String,

    /// Rule used by the month range query
    pub month_matching: MonthMatching,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            environment: "development".to_string(),
            month_matching: MonthMatching::default(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from a `KEY=VALUE` file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let file_error = |source| ConfigError::File {
            path: path.display().to_string(),
            source,
        };

        let mut values = HashMap::new();
        for item in dotenvy::from_path_iter(path).map_err(file_error)? {
            let (key, value) = item.map_err(file_error)?;
            values.insert(key, value);
        }

        Self::from_pairs(values)
    }

    /// Build configuration from already parsed key/value pairs
    pub fn from_pairs<I>(pairs: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let values: HashMap<String, String> = pairs.into_iter().collect();
        Self::from_lookup(|key| values.get(key).cloned())
    }

    /// Load from the file named by `CALENDAR_CONFIG` (or `config.conf`)
    /// if it exists, otherwise from the environment
    pub fn load() -> Result<Self, ConfigError> {
        let path = env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());

        if Path::new(&path).exists() {
            Self::from_file(path)
        } else {
            Self::from_env()
        }
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let host = lookup("HOST")
            .map(|h| h.trim().to_string())
            .filter(|h| !h.is_empty())
            .unwrap_or(defaults.host);

        let port = match lookup("PORT") {
            Some(port) => port
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidValue("PORT"))?,
            None => defaults.port,
        };

        let environment = lookup("ENVIRONMENT").unwrap_or(defaults.environment);

        let month_matching = match lookup("MONTH_MATCHING") {
            Some(mode) => mode
                .parse()
                .map_err(|_| ConfigError::InvalidValue("MONTH_MATCHING"))?,
            None => defaults.month_matching,
        };

        Ok(Self {
            host,
            port,
            environment,
            month_matching,
        })
    }

    /// Address to listen on
    pub fn addr(&self) -> Result<SocketAddr, ConfigError> {
        let ip: IpAddr = if self.host == "localhost" {
            IpAddr::from([127, 0, 0, 1])
        } else {
            self.host
                .parse()
                .map_err(|_| ConfigError::InvalidValue("HOST"))?
        };
        Ok(SocketAddr::new(ip, self.port))
    }

    /// Check if running in production
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

/// Configuration error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for configuration key: {0}")]
    InvalidValue(&'static str),

    #[error("Failed to read config file {path}: {source}")]
    File {
        path: String,
        #[source]
        source: dotenvy::Error,
    },
}
