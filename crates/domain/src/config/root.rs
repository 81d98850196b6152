use super::{CacheBackend, CacheConfig, ConfigError, DatabaseConfig, LoggingConfig, ServerConfig};
use serde::{Deserialize, Serialize};
use std::path::Path;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Longest accepted cache lifetime: one year.
pub const MAX_CACHE_TTL_SECS: u64 = 365 * 24 * 60 * 60;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub database: DatabaseConfig,

    #[serde(default)]
    pub cache: CacheConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Values passed on the command line; they win over the config file.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub bind_address: Option<String>,
    pub port: Option<u16>,
    pub database_url: Option<String>,
    pub cache_backend: Option<CacheBackend>,
    pub redis_url: Option<String>,
    pub log_level: Option<String>,
}

impl Config {
    /// Loads the TOML file at `config_path` (defaults when `None`) and
    /// applies CLI overrides on top.
    pub fn load(config_path: Option<&str>, overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = match config_path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_overrides(overrides);
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::FileRead {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn apply_overrides(&mut self, overrides: CliOverrides) {
        if let Some(bind) = overrides.bind_address {
            self.server.bind_address = bind;
        }
        if let Some(port) = overrides.port {
            self.server.port = port;
        }
        if let Some(url) = overrides.database_url {
            self.database.url = url;
        }
        if let Some(backend) = overrides.cache_backend {
            self.cache.backend = backend;
        }
        if let Some(url) = overrides.redis_url {
            self.cache.redis_url = url;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("server.port cannot be 0".into()));
        }
        if self.database.url.trim().is_empty() {
            return Err(ConfigError::Validation("database.url cannot be empty".into()));
        }
        if self.database.max_connections == 0 {
            return Err(ConfigError::Validation(
                "database.max_connections must be at least 1".into(),
            ));
        }
        if self.database.min_connections > self.database.max_connections {
            return Err(ConfigError::Validation(format!(
                "database.min_connections ({}) exceeds max_connections ({})",
                self.database.min_connections, self.database.max_connections
            )));
        }
        if self.database.query_timeout_ms == 0 {
            return Err(ConfigError::Validation(
                "database.query_timeout_ms must be greater than 0".into(),
            ));
        }
        if self.database.connect_retries == 0 {
            return Err(ConfigError::Validation(
                "database.connect_retries must be at least 1".into(),
            ));
        }
        if self.cache.ttl_secs == 0 || self.cache.ttl_secs > MAX_CACHE_TTL_SECS {
            return Err(ConfigError::Validation(format!(
                "cache.ttl_secs must be between 1 and {MAX_CACHE_TTL_SECS}, got {}",
                self.cache.ttl_secs
            )));
        }
        if self.cache.timeout_ms == 0 {
            return Err(ConfigError::Validation(
                "cache.timeout_ms must be greater than 0".into(),
            ));
        }
        if self.cache.backend == CacheBackend::Redis && self.cache.redis_url.trim().is_empty() {
            return Err(ConfigError::Validation(
                "cache.redis_url is required when cache.backend = \"redis\"".into(),
            ));
        }
        if !LOG_LEVELS.contains(&self.logging.level.to_ascii_lowercase().as_str()) {
            return Err(ConfigError::Validation(format!(
                "logging.level must be one of {:?}, got '{}'",
                LOG_LEVELS, self.logging.level
            )));
        }
        Ok(())
    }
}
