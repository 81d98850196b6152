use crate::lookup::DEFAULT_CACHE_TTL_SECS;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CacheBackend {
    /// In-process map, lost on restart
    Memory,
    /// Shared Redis instance
    Redis,
    /// Every lookup goes to the record store
    Disabled,
}

impl CacheBackend {
    pub fn as_str(&self) -> &'static str {
        match self {
            CacheBackend::Memory => "memory",
            CacheBackend::Redis => "redis",
            CacheBackend::Disabled => "disabled",
        }
    }
}

impl fmt::Display for CacheBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for CacheBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "memory" => Ok(CacheBackend::Memory),
            "redis" => Ok(CacheBackend::Redis),
            "disabled" | "none" | "off" => Ok(CacheBackend::Disabled),
            other => Err(format!("unknown cache backend '{other}'")),
        }
    }
}

/// Lookup cache configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CacheConfig {
    #[serde(default = "default_backend")]
    pub backend: CacheBackend,

    /// Only read when `backend = "redis"`
    #[serde(default = "default_redis_url")]
    pub redis_url: String,

    /// Lifetime of a cached lookup in seconds (default: 3600)
    #[serde(default = "default_ttl_secs")]
    pub ttl_secs: u64,

    /// Upper bound on a single cache get/set, in milliseconds (default: 250)
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// How often expired in-process entries are swept (default: 60)
    #[serde(default = "default_sweep_interval_secs")]
    pub sweep_interval_secs: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            backend: default_backend(),
            redis_url: default_redis_url(),
            ttl_secs: default_ttl_secs(),
            timeout_ms: default_timeout_ms(),
            sweep_interval_secs: default_sweep_interval_secs(),
        }
    }
}

fn default_backend() -> CacheBackend {
    CacheBackend::Memory
}

fn default_redis_url() -> String {
    "redis://127.0.0.1:6379".to_string()
}

fn default_ttl_secs() -> u64 {
    DEFAULT_CACHE_TTL_SECS
}

fn default_timeout_ms() -> u64 {
    250
}

fn default_sweep_interval_secs() -> u64 {
    60
}
