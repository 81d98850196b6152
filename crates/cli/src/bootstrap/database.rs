use breach_checker_domain::config::DatabaseConfig;
use breach_checker_infrastructure::database::create_pool;
use sqlx::SqlitePool;
use tracing::{error, info};

pub async fn init_database(cfg: &DatabaseConfig) -> anyhow::Result<SqlitePool> {
    info!(
        url = %cfg.url,
        connect_retries = cfg.connect_retries,
        "Initializing record store"
    );

    let pool = create_pool(cfg).await.map_err(|e| {
        error!(error = %e, "Failed to connect to record store");
        anyhow::anyhow!(e)
    })?;

    Ok(pool)
}
