#![allow(dead_code)]

use async_trait::async_trait;
use breach_checker_application::ports::{BreachRepository, LookupCache};
use breach_checker_domain::{CompromisedRecord, Identifier, StoreError};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;

// ============================================================================
// Mock BreachRepository
// ============================================================================

#[derive(Clone)]
pub struct MockBreachRepository {
    records: Arc<RwLock<HashMap<String, CompromisedRecord>>>,
    call_count: Arc<AtomicU64>,
    failure: Arc<RwLock<Option<StoreError>>>,
    delay: Arc<RwLock<Option<Duration>>>,
}

impl MockBreachRepository {
    pub fn new() -> Self {
        Self {
            records: Arc::new(RwLock::new(HashMap::new())),
            call_count: Arc::new(AtomicU64::new(0)),
            failure: Arc::new(RwLock::new(None)),
            delay: Arc::new(RwLock::new(None)),
        }
    }

    /// Builds a store already holding the given `(address, source)` pairs.
    pub async fn with_compromised(entries: Vec<(&str, &str)>) -> Self {
        let repo = Self::new();
        for (address, source) in entries {
            repo.add(address, source).await;
        }
        repo
    }

    pub async fn add(&self, address: &str, source: &str) {
        let identifier = Identifier::parse(address).unwrap();
        self.records.write().await.insert(
            identifier.as_str().to_string(),
            CompromisedRecord {
                id: None,
                identifier,
                breach_date: None,
                breach_source: Some(source.to_string()),
            },
        );
    }

    pub async fn set_failure(&self, failure: Option<StoreError>) {
        *self.failure.write().await = failure;
    }

    pub async fn set_delay(&self, delay: Option<Duration>) {
        *self.delay.write().await = delay;
    }

    pub fn call_count(&self) -> u64 {
        self.call_count.load(Ordering::SeqCst)
    }
}

impl Default for MockBreachRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BreachRepository for MockBreachRepository {
    async fn find(&self, identifier: &Identifier) -> Result<Option<CompromisedRecord>, StoreError> {
        self.call_count.fetch_add(1, Ordering::SeqCst);

        let delay = *self.delay.read().await;
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        if let Some(err) = self.failure.read().await.clone() {
            return Err(err);
        }

        Ok(self.records.read().await.get(identifier.as_str()).cloned())
    }
}

// ============================================================================
// Mock LookupCache
// ============================================================================

#[derive(Clone)]
pub struct MockLookupCache {
    entries: Arc<RwLock<HashMap<String, String>>>,
    get_count: Arc<AtomicU64>,
    set_count: Arc<AtomicU64>,
    last_ttl: Arc<RwLock<Option<Duration>>>,
    unreachable: Arc<RwLock<bool>>,
    delay: Arc<RwLock<Option<Duration>>>,
}

impl MockLookupCache {
    pub fn new() -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
            get_count: Arc::new(AtomicU64::new(0)),
            set_count: Arc::new(AtomicU64::new(0)),
            last_ttl: Arc::new(RwLock::new(None)),
            unreachable: Arc::new(RwLock::new(false)),
            delay: Arc::new(RwLock::new(None)),
        }
    }

    /// Simulates a backend that cannot be reached: reads miss, writes vanish.
    pub async fn set_unreachable(&self, unreachable: bool) {
        *self.unreachable.write().await = unreachable;
    }

    pub async fn set_delay(&self, delay: Option<Duration>) {
        *self.delay.write().await = delay;
    }

    /// Writes a value directly, bypassing the pipeline.
    pub async fn insert_raw(&self, key: &str, value: &str) {
        self.entries
            .write()
            .await
            .insert(key.to_string(), value.to_string());
    }

    pub async fn raw(&self, key: &str) -> Option<String> {
        self.entries.read().await.get(key).cloned()
    }

    pub async fn clear(&self) {
        self.entries.write().await.clear();
    }

    pub async fn last_ttl(&self) -> Option<Duration> {
        *self.last_ttl.read().await
    }

    pub fn get_count(&self) -> u64 {
        self.get_count.load(Ordering::SeqCst)
    }

    pub fn set_count(&self) -> u64 {
        self.set_count.load(Ordering::SeqCst)
    }
}

impl Default for MockLookupCache {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LookupCache for MockLookupCache {
    async fn get(&self, key: &str) -> Option<String> {
        self.get_count.fetch_add(1, Ordering::SeqCst);

        let delay = *self.delay.read().await;
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        if *self.unreachable.read().await {
            return None;
        }
        self.entries.read().await.get(key).cloned()
    }

    async fn set(&self, key: &str, value: String, ttl: Duration) {
        self.set_count.fetch_add(1, Ordering::SeqCst);

        let delay = *self.delay.read().await;
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        if *self.unreachable.read().await {
            return;
        }
        *self.last_ttl.write().await = Some(ttl);
        self.entries.write().await.insert(key.to_string(), value);
    }

    fn backend_name(&self) -> &'static str {
        "mock"
    }
}
