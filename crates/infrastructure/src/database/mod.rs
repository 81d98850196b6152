use breach_checker_domain::config::DatabaseConfig;
use sqlx::sqlite::{
    SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions, SqliteSynchronous,
};
use std::fmt::Display;
use std::future::Future;
use std::str::FromStr;
use std::time::Duration;
use tracing::{info, warn};

/// Startup connection policy for the record store.
///
/// Attempt `n` (1-based) that fails waits `n * backoff` before the next one.
/// This only governs establishing the pool; single lookups are never retried.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConnectRetryPolicy {
    pub max_attempts: u32,
    pub backoff: Duration,
}

impl ConnectRetryPolicy {
    pub fn from_config(cfg: &DatabaseConfig) -> Self {
        Self {
            max_attempts: cfg.connect_retries.max(1),
            backoff: Duration::from_secs(cfg.retry_backoff_secs),
        }
    }

    pub fn delay_after(&self, attempt: u32) -> Duration {
        self.backoff * attempt
    }
}

impl Default for ConnectRetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 5,
            backoff: Duration::from_secs(1),
        }
    }
}

/// Runs `connect` until it succeeds or the policy is exhausted, returning
/// the last error in the latter case.
pub async fn connect_with_retry<T, E, F, Fut>(
    policy: &ConnectRetryPolicy,
    mut connect: F,
) -> Result<T, E>
where
    E: Display,
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
{
    let mut attempt = 1;
    loop {
        match connect().await {
            Ok(value) => return Ok(value),
            Err(e) if attempt >= policy.max_attempts => return Err(e),
            Err(e) => {
                let delay = policy.delay_after(attempt);
                warn!(
                    attempt,
                    max_attempts = policy.max_attempts,
                    retry_in_ms = delay.as_millis() as u64,
                    error = %e,
                    "Failed to connect to record store"
                );
                tokio::time::sleep(delay).await;
                attempt += 1;
            }
        }
    }
}

pub async fn create_pool(cfg: &DatabaseConfig) -> Result<SqlitePool, sqlx::Error> {
    let policy = ConnectRetryPolicy::from_config(cfg);
    let pool = connect_with_retry(&policy, || connect_once(cfg)).await?;

    info!(
        max_connections = cfg.max_connections,
        min_connections = cfg.min_connections,
        "Record store pool ready"
    );

    Ok(pool)
}

async fn connect_once(cfg: &DatabaseConfig) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(&cfg.url)?
        .create_if_missing(true)
        // WAL mode: readers and writers don't block each other
        .journal_mode(SqliteJournalMode::Wal)
        .synchronous(SqliteSynchronous::Normal)
        // Avoid SQLITE_BUSY errors while an import is writing
        .busy_timeout(Duration::from_secs(5));

    let pool = SqlitePoolOptions::new()
        .max_connections(cfg.max_connections)
        .min_connections(cfg.min_connections)
        .acquire_timeout(Duration::from_secs(cfg.acquire_timeout_secs))
        .max_lifetime(Duration::from_secs(300))
        .connect_with(options)
        .await?;

    // Fail fast on an unusable database instead of on the first lookup
    sqlx::query("SELECT 1").execute(&pool).await?;

    Ok(pool)
}
