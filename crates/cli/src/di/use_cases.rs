use super::Repositories;
use breach_checker_application::use_cases::{
    CheckEmailUseCase, LookupPolicy, PurgeExpiredCacheEntriesUseCase,
};
use breach_checker_domain::Config;
use std::sync::Arc;
use std::time::Duration;

pub struct UseCases {
    pub check_email: Arc<CheckEmailUseCase>,
    pub purge_cache: Option<Arc<PurgeExpiredCacheEntriesUseCase>>,
}

impl UseCases {
    pub fn new(repos: &Repositories, config: &Config) -> Self {
        let policy = LookupPolicy {
            cache_ttl: Duration::from_secs(config.cache.ttl_secs),
            cache_timeout: Duration::from_millis(config.cache.timeout_ms),
            store_timeout: Duration::from_millis(config.database.query_timeout_ms),
        };

        Self {
            check_email: Arc::new(
                CheckEmailUseCase::new(repos.breach.clone(), repos.cache.clone())
                    .with_policy(policy),
            ),
            purge_cache: repos
                .cache_maintenance
                .clone()
                .map(|cache| Arc::new(PurgeExpiredCacheEntriesUseCase::new(cache))),
        }
    }
}
