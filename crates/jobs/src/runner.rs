use crate::CacheSweepJob;
use std::sync::Arc;
use tracing::info;

/// Central orchestrator for all background jobs.
///
/// Use the builder pattern to register jobs, then call `.start()` once.
///
/// # Example
///
/// ```rust,ignore
/// JobRunner::new()
///     .with_cache_sweep(CacheSweepJob::new(purge).with_interval(60))
///     .start()
///     .await;
/// ```
pub struct JobRunner {
    cache_sweep: Option<CacheSweepJob>,
}

impl JobRunner {
    pub fn new() -> Self {
        Self { cache_sweep: None }
    }

    pub fn with_cache_sweep(mut self, job: CacheSweepJob) -> Self {
        self.cache_sweep = Some(job);
        self
    }

    /// Start all registered background jobs.
    pub async fn start(self) {
        info!("Starting background job runner");

        if let Some(job) = self.cache_sweep {
            Arc::new(job).start().await;
        }

        info!("All background jobs started");
    }
}

impl Default for JobRunner {
    fn default() -> Self {
        Self::new()
    }
}
