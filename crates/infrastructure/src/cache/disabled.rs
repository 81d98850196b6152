use async_trait::async_trait;
use breach_checker_application::ports::LookupCache;
use std::time::Duration;

/// Cache that stores nothing; every lookup reaches the record store.
#[derive(Debug, Default, Clone, Copy)]
pub struct DisabledLookupCache;

#[async_trait]
impl LookupCache for DisabledLookupCache {
    async fn get(&self, _key: &str) -> Option<String> {
        None
    }

    async fn set(&self, _key: &str, _value: String, _ttl: Duration) {}

    fn backend_name(&self) -> &'static str {
        "disabled"
    }
}
