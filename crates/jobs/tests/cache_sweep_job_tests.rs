use breach_checker_application::ports::CacheMaintenance;
use breach_checker_application::use_cases::PurgeExpiredCacheEntriesUseCase;
use breach_checker_jobs::{CacheSweepJob, JobRunner};
use std::sync::Arc;
use tokio::time::{sleep, Duration};
use tokio_util::sync::CancellationToken;

mod helpers;
use helpers::MockCacheMaintenance;

// ============================================================================
// Tests: PurgeExpiredCacheEntriesUseCase
// ============================================================================

#[test]
fn test_purge_reports_removed_entries() {
    let cache = Arc::new(MockCacheMaintenance::new(4, 10));
    let use_case = PurgeExpiredCacheEntriesUseCase::new(cache.clone());

    assert_eq!(use_case.execute(), 4);
    assert_eq!(use_case.execute(), 0);
    assert_eq!(cache.purge_calls(), 2);
}

// ============================================================================
// Tests: CacheSweepJob
// ============================================================================

#[tokio::test(start_paused = true)]
async fn test_job_sweeps_on_each_tick() {
    let cache = Arc::new(MockCacheMaintenance::new(3, 0));
    let purge = Arc::new(PurgeExpiredCacheEntriesUseCase::new(cache.clone()));
    let token = CancellationToken::new();

    Arc::new(
        CacheSweepJob::new(purge)
            .with_interval(1)
            .with_cancellation(token.clone()),
    )
    .start()
    .await;

    sleep(Duration::from_millis(2500)).await;
    assert!(cache.purge_calls() >= 2);
    assert_eq!(cache.entry_count(), 0);

    token.cancel();
}

#[tokio::test(start_paused = true)]
async fn test_job_stops_on_cancellation() {
    let cache = Arc::new(MockCacheMaintenance::new(0, 0));
    let purge = Arc::new(PurgeExpiredCacheEntriesUseCase::new(cache.clone()));
    let token = CancellationToken::new();

    Arc::new(
        CacheSweepJob::new(purge)
            .with_interval(1)
            .with_cancellation(token.clone()),
    )
    .start()
    .await;

    sleep(Duration::from_millis(100)).await;
    token.cancel();
    sleep(Duration::from_millis(10)).await;

    let calls_at_cancel = cache.purge_calls();
    sleep(Duration::from_secs(5)).await;
    assert_eq!(cache.purge_calls(), calls_at_cancel);
}

#[tokio::test(start_paused = true)]
async fn test_runner_starts_registered_job() {
    let cache = Arc::new(MockCacheMaintenance::new(1, 0));
    let purge = Arc::new(PurgeExpiredCacheEntriesUseCase::new(cache.clone()));
    let token = CancellationToken::new();

    JobRunner::new()
        .with_cache_sweep(
            CacheSweepJob::new(purge)
                .with_interval(30)
                .with_cancellation(token.clone()),
        )
        .start()
        .await;

    sleep(Duration::from_millis(10)).await;
    // interval fires immediately on the first tick
    assert_eq!(cache.purge_calls(), 1);

    token.cancel();
}

#[tokio::test]
async fn test_empty_runner_starts() {
    JobRunner::default().start().await;
}
