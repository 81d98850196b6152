use breach_checker_application::use_cases::PurgeExpiredCacheEntriesUseCase;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

/// Periodically reclaims memory held by expired in-process cache entries.
pub struct CacheSweepJob {
    purge: Arc<PurgeExpiredCacheEntriesUseCase>,
    interval_secs: u64,
    shutdown: CancellationToken,
}

impl CacheSweepJob {
    pub fn new(purge: Arc<PurgeExpiredCacheEntriesUseCase>) -> Self {
        Self {
            purge,
            interval_secs: 60,
            shutdown: CancellationToken::new(),
        }
    }

    pub fn with_interval(mut self, interval_secs: u64) -> Self {
        self.interval_secs = interval_secs.max(1);
        self
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.shutdown = token;
        self
    }

    pub async fn start(self: Arc<Self>) {
        info!(
            interval_secs = self.interval_secs,
            "Starting cache sweep job"
        );

        tokio::spawn(async move {
            let mut interval = tokio::time::interval(Duration::from_secs(self.interval_secs));
            loop {
                tokio::select! {
                    _ = self.shutdown.cancelled() => {
                        info!("CacheSweepJob: shutting down");
                        break;
                    }
                    _ = interval.tick() => {
                        let removed = self.purge.execute();
                        if removed > 0 {
                            info!(removed, "Expired cache entries swept");
                        } else {
                            debug!("Cache sweep found nothing to remove");
                        }
                    }
                }
            }
        });
    }
}
