use serde::{Deserialize, Serialize};

/// Record store configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    /// Connection URL (default: "sqlite://./breach-checker.db")
    #[serde(default = "default_url")]
    pub url: String,

    /// Maximum pooled connections (default: 25)
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,

    /// Connections kept open when idle (default: 5)
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,

    /// Seconds to wait for a free pooled connection (default: 5)
    #[serde(default = "default_acquire_timeout_secs")]
    pub acquire_timeout_secs: u64,

    /// Upper bound on a single existence query, in milliseconds (default: 2000)
    #[serde(default = "default_query_timeout_ms")]
    pub query_timeout_ms: u64,

    /// Connection attempts made at startup before giving up (default: 5)
    #[serde(default = "default_connect_retries")]
    pub connect_retries: u32,

    /// Base backoff between connection attempts; attempt `n` waits `n * base` (default: 1)
    #[serde(default = "default_retry_backoff_secs")]
    pub retry_backoff_secs: u64,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            max_connections: default_max_connections(),
            min_connections: default_min_connections(),
            acquire_timeout_secs: default_acquire_timeout_secs(),
            query_timeout_ms: default_query_timeout_ms(),
            connect_retries: default_connect_retries(),
            retry_backoff_secs: default_retry_backoff_secs(),
        }
    }
}

fn default_url() -> String {
    "sqlite://./breach-checker.db".to_string()
}

fn default_max_connections() -> u32 {
    25
}

fn default_min_connections() -> u32 {
    5
}

fn default_acquire_timeout_secs() -> u64 {
    5
}

fn default_query_timeout_ms() -> u64 {
    2000
}

fn default_connect_retries() -> u32 {
    5
}

fn default_retry_backoff_secs() -> u64 {
    1
}
