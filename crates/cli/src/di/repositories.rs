use breach_checker_application::ports::{BreachRepository, CacheMaintenance, LookupCache};
use breach_checker_domain::config::{CacheBackend, CacheConfig};
use breach_checker_infrastructure::{
    DisabledLookupCache, InMemoryLookupCache, RedisLookupCache, SqliteBreachRepository,
};
use sqlx::SqlitePool;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

type CacheHandles = (Arc<dyn LookupCache>, Option<Arc<dyn CacheMaintenance>>);

pub struct Repositories {
    pub breach: Arc<dyn BreachRepository>,
    pub cache: Arc<dyn LookupCache>,
    /// Present only for caches that need periodic sweeping.
    pub cache_maintenance: Option<Arc<dyn CacheMaintenance>>,
}

impl Repositories {
    pub fn new(pool: SqlitePool, cache_cfg: &CacheConfig) -> anyhow::Result<Self> {
        let breach: Arc<dyn BreachRepository> = Arc::new(SqliteBreachRepository::new(pool));

        let (cache, cache_maintenance) = build_cache(cache_cfg)?;

        info!(
            backend = cache.backend_name(),
            ttl_secs = cache_cfg.ttl_secs,
            "Lookup cache configured"
        );

        Ok(Self {
            breach,
            cache,
            cache_maintenance,
        })
    }
}

fn build_cache(cfg: &CacheConfig) -> anyhow::Result<CacheHandles> {
    match cfg.backend {
        CacheBackend::Memory => {
            let memory = Arc::new(InMemoryLookupCache::new());
            let lookup: Arc<dyn LookupCache> = memory.clone();
            let maintenance: Arc<dyn CacheMaintenance> = memory;
            Ok((lookup, Some(maintenance)))
        }
        CacheBackend::Redis => {
            let redis =
                RedisLookupCache::new(&cfg.redis_url, Duration::from_millis(cfg.timeout_ms))?;
            let lookup: Arc<dyn LookupCache> = Arc::new(redis);
            Ok((lookup, None))
        }
        CacheBackend::Disabled => {
            let lookup: Arc<dyn LookupCache> = Arc::new(DisabledLookupCache);
            Ok((lookup, None))
        }
    }
}
