use async_trait::async_trait;
use breach_checker_application::ports::LookupCache;
use redis::aio::ConnectionManager;
use redis::{AsyncCommands, Client, RedisError};
use std::future::Future;
use std::time::Duration;
use tokio::sync::OnceCell;
use tokio::time::timeout;
use tracing::{debug, info, warn};

/// Shared cache on a Redis server.
///
/// The connection is opened on first use rather than at construction, so the
/// service starts even while Redis is down. Once established, the
/// connection manager reconnects on its own after failures. Every command is
/// bounded by `op_timeout`.
pub struct RedisLookupCache {
    client: Client,
    connection: OnceCell<ConnectionManager>,
    op_timeout: Duration,
}

impl RedisLookupCache {
    /// Parses the connection URL. No network traffic happens here.
    ///
    /// # Errors
    ///
    /// Returns an error if `url` is not a valid Redis URL.
    pub fn new(url: &str, op_timeout: Duration) -> Result<Self, RedisError> {
        Ok(Self {
            client: Client::open(url)?,
            connection: OnceCell::new(),
            op_timeout,
        })
    }

    async fn connection(&self) -> Result<ConnectionManager, RedisError> {
        let manager = self
            .connection
            .get_or_try_init(|| async {
                let manager = self.client.get_connection_manager().await?;
                info!("Connected to Redis cache");
                Ok::<_, RedisError>(manager)
            })
            .await?;
        Ok(manager.clone())
    }

    /// Runs `op` under the timeout, flattening both failure modes into a
    /// loggable message.
    async fn bounded<T, Fut>(&self, op: Fut) -> Result<T, String>
    where
        Fut: Future<Output = Result<T, RedisError>>,
    {
        match timeout(self.op_timeout, op).await {
            Ok(Ok(value)) => Ok(value),
            Ok(Err(e)) => Err(e.to_string()),
            Err(_) => Err(format!(
                "timed out after {}ms",
                self.op_timeout.as_millis()
            )),
        }
    }
}

#[async_trait]
impl LookupCache for RedisLookupCache {
    async fn get(&self, key: &str) -> Option<String> {
        let result = self
            .bounded(async {
                let mut conn = self.connection().await?;
                conn.get::<_, Option<String>>(key).await
            })
            .await;

        match result {
            Ok(value) => value,
            Err(e) => {
                warn!(key, error = %e, "Redis GET failed, treating as miss");
                None
            }
        }
    }

    async fn set(&self, key: &str, value: String, ttl: Duration) {
        // EX has whole-second resolution
        let seconds = ttl.as_secs().max(1);
        let result = self
            .bounded(async {
                let mut conn = self.connection().await?;
                conn.set_ex::<_, _, ()>(key, value, seconds).await
            })
            .await;

        match result {
            Ok(()) => debug!(key, ttl_secs = seconds, "Redis SET stored"),
            Err(e) => warn!(key, error = %e, "Redis SET failed, result not cached"),
        }
    }

    fn backend_name(&self) -> &'static str {
        "redis"
    }
}
