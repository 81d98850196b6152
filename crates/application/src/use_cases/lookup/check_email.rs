use breach_checker_domain::{
    cache_key, normalize, CachedLookup, CompromisedRecord, DomainError, Identifier, LookupResult,
    StoreError,
};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::timeout;
use tracing::{debug, error, info, instrument, warn};

use crate::ports::{BreachRepository, LookupCache};

/// Timing knobs for the cache-aside pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LookupPolicy {
    /// Lifetime of entries written after a store query.
    pub cache_ttl: Duration,
    /// Upper bound on each cache get/set. Exceeding it reads as a miss.
    pub cache_timeout: Duration,
    /// Upper bound on the store query. Exceeding it fails the request.
    pub store_timeout: Duration,
}

impl Default for LookupPolicy {
    fn default() -> Self {
        Self {
            cache_ttl: Duration::from_secs(3600),
            cache_timeout: Duration::from_millis(250),
            store_timeout: Duration::from_secs(2),
        }
    }
}

/// Answers "has this address appeared in a breach?".
///
/// Reads the cache first and falls through to the record store on a miss,
/// then repopulates the cache with the store's answer. Concurrent checks for
/// the same cold key are not coalesced: each one queries the store.
pub struct CheckEmailUseCase {
    store: Arc<dyn BreachRepository>,
    cache: Arc<dyn LookupCache>,
    policy: LookupPolicy,
}

impl CheckEmailUseCase {
    pub fn new(store: Arc<dyn BreachRepository>, cache: Arc<dyn LookupCache>) -> Self {
        Self {
            store,
            cache,
            policy: LookupPolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: LookupPolicy) -> Self {
        self.policy = policy;
        self
    }

    #[instrument(skip(self, raw), fields(cache = self.cache.backend_name()))]
    pub async fn execute(&self, raw: &str) -> Result<LookupResult, DomainError> {
        let identifier = normalize(raw)?;
        let key = cache_key(&identifier);

        if let Some(hit) = self.read_cache(&key, &identifier).await {
            debug!(identifier = %identifier, compromised = hit.compromised, "Cache HIT");
            return Ok(hit);
        }

        let record = self.query_store(&identifier).await?;
        let compromised = record.is_some();
        let source = record.and_then(|r| r.breach_source);
        let result = LookupResult::from_store(identifier, compromised, source);

        self.write_cache(&key, &result).await;

        info!(
            identifier = %result.identifier,
            compromised = result.compromised,
            served_from_cache = false,
            "Lookup completed"
        );

        Ok(result)
    }

    async fn read_cache(&self, key: &str, identifier: &Identifier) -> Option<LookupResult> {
        let raw = match timeout(self.policy.cache_timeout, self.cache.get(key)).await {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!(key, "Cache MISS");
                return None;
            }
            Err(_) => {
                warn!(
                    key,
                    timeout_ms = self.policy.cache_timeout.as_millis() as u64,
                    "Cache read timed out, treating as miss"
                );
                return None;
            }
        };

        match CachedLookup::decode(&raw) {
            Ok(entry) if entry.identifier == *identifier => Some(entry.into_cache_hit()),
            Ok(entry) => {
                warn!(
                    key,
                    cached_identifier = %entry.identifier,
                    "Cache entry belongs to another identifier, ignoring"
                );
                None
            }
            Err(e) => {
                warn!(key, error = %e, "Undecodable cache entry, ignoring");
                None
            }
        }
    }

    async fn query_store(
        &self,
        identifier: &Identifier,
    ) -> Result<Option<CompromisedRecord>, StoreError> {
        match timeout(self.policy.store_timeout, self.store.find(identifier)).await {
            Ok(Ok(record)) => Ok(record),
            Ok(Err(e)) => {
                error!(identifier = %identifier, error = %e, "Record store lookup failed");
                Err(e)
            }
            Err(_) => {
                let timeout_ms = self.policy.store_timeout.as_millis() as u64;
                error!(identifier = %identifier, timeout_ms, "Record store lookup timed out");
                Err(StoreError::Timeout(timeout_ms))
            }
        }
    }

    async fn write_cache(&self, key: &str, result: &LookupResult) {
        let value = match CachedLookup::encode(result) {
            Ok(value) => value,
            Err(e) => {
                warn!(key, error = %e, "Failed to encode lookup for cache");
                return;
            }
        };

        if timeout(
            self.policy.cache_timeout,
            self.cache.set(key, value, self.policy.cache_ttl),
        )
        .await
        .is_err()
        {
            warn!(key, "Cache write timed out, result not cached");
        }
    }
}
