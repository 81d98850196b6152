use async_trait::async_trait;
use breach_checker_application::ports::{CacheMaintenance, LookupCache};
use compact_str::CompactString;
use dashmap::DashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::Instant;
use tracing::{debug, warn};

struct MemoryEntry {
    value: Arc<str>,
    expires_at: Instant,
}

impl MemoryEntry {
    #[inline]
    fn is_live(&self, now: Instant) -> bool {
        now < self.expires_at
    }
}

/// Process-local cache backed by a sharded concurrent map.
///
/// Expired entries are dropped lazily on read and in bulk by
/// [`InMemoryLookupCache::purge_expired`], which the sweep job calls
/// periodically. There is no capacity bound beyond TTL expiry.
pub struct InMemoryLookupCache {
    entries: DashMap<CompactString, MemoryEntry>,
}

impl InMemoryLookupCache {
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
        }
    }

    /// Number of stored entries, including expired ones not yet purged.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Removes every expired entry and returns how many were dropped.
    pub fn purge_expired(&self) -> usize {
        let now = Instant::now();
        let before = self.entries.len();
        self.entries.retain(|_, entry| entry.is_live(now));
        let removed = before.saturating_sub(self.entries.len());
        if removed > 0 {
            debug!(removed, remaining = self.entries.len(), "Purged expired cache entries");
        }
        removed
    }
}

impl Default for InMemoryLookupCache {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LookupCache for InMemoryLookupCache {
    async fn get(&self, key: &str) -> Option<String> {
        let now = Instant::now();
        {
            // Guard must be released before remove_if below to avoid a shard deadlock
            let entry = self.entries.get(key)?;
            if entry.is_live(now) {
                return Some(entry.value.to_string());
            }
        }
        self.entries.remove_if(key, |_, entry| !entry.is_live(now));
        None
    }

    async fn set(&self, key: &str, value: String, ttl: Duration) {
        let Some(expires_at) = Instant::now().checked_add(ttl) else {
            warn!(key, ttl_secs = ttl.as_secs(), "Cache TTL out of range, result not cached");
            return;
        };
        let entry = MemoryEntry {
            value: Arc::from(value),
            expires_at,
        };
        self.entries.insert(CompactString::from(key), entry);
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}

impl CacheMaintenance for InMemoryLookupCache {
    fn purge_expired(&self) -> usize {
        InMemoryLookupCache::purge_expired(self)
    }

    fn entry_count(&self) -> usize {
        self.len()
    }
}
