use std::sync::Arc;
use tracing::debug;

use crate::ports::CacheMaintenance;

pub struct PurgeExpiredCacheEntriesUseCase {
    cache: Arc<dyn CacheMaintenance>,
}

impl PurgeExpiredCacheEntriesUseCase {
    pub fn new(cache: Arc<dyn CacheMaintenance>) -> Self {
        Self { cache }
    }

    /// Returns the number of entries removed.
    pub fn execute(&self) -> usize {
        let removed = self.cache.purge_expired();
        debug!(removed, remaining = self.cache.entry_count(), "Cache purge pass");
        removed
    }
}
