use async_trait::async_trait;
use std::time::Duration;

/// Volatile key-value cache in front of the record store.
///
/// The cache is an optimization only. Implementations never surface their
/// own failures: an unreachable or failing backend reads as a miss and
/// writes as a no-op, logged at warn level or below.
#[async_trait]
pub trait LookupCache: Send + Sync {
    /// Returns the stored value if present and not expired.
    async fn get(&self, key: &str) -> Option<String>;

    /// Stores `value` under `key` until `ttl` elapses, replacing any
    /// existing entry.
    async fn set(&self, key: &str, value: String, ttl: Duration);

    /// Short backend name for logs.
    fn backend_name(&self) -> &'static str;
}
