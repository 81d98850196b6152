use async_trait::async_trait;
use breach_checker_application::ports::BreachRepository;
use breach_checker_domain::{CompromisedRecord, Identifier, StoreError};
use chrono::NaiveDateTime;
use sqlx::SqlitePool;
use tracing::{debug, error, instrument};

type BreachRow = (i64, String, Option<String>, Option<String>);

const SQLITE_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Read-only view over the `compromised_emails` table.
///
/// Rows are inserted out of band by an import process; the `email` column
/// carries a unique index and holds already-normalized addresses.
pub struct SqliteBreachRepository {
    pool: SqlitePool,
}

impl SqliteBreachRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn row_to_record(row: BreachRow, identifier: &Identifier) -> CompromisedRecord {
        let (id, _email, breach_date, breach_source) = row;

        CompromisedRecord {
            id: Some(id),
            identifier: identifier.clone(),
            breach_date: breach_date
                .and_then(|s| NaiveDateTime::parse_from_str(&s, SQLITE_TIMESTAMP_FORMAT).ok()),
            breach_source,
        }
    }
}

fn map_sqlx_error(e: sqlx::Error) -> StoreError {
    match e {
        sqlx::Error::PoolTimedOut
        | sqlx::Error::PoolClosed
        | sqlx::Error::Io(_)
        | sqlx::Error::Tls(_)
        | sqlx::Error::WorkerCrashed => StoreError::ConnectionFailure(e.to_string()),
        other => StoreError::QueryFailure(other.to_string()),
    }
}

#[async_trait]
impl BreachRepository for SqliteBreachRepository {
    #[instrument(skip(self, identifier), fields(identifier = %identifier))]
    async fn find(&self, identifier: &Identifier) -> Result<Option<CompromisedRecord>, StoreError> {
        let row = sqlx::query_as::<_, BreachRow>(
            "SELECT id, email, breach_date, breach_source
             FROM compromised_emails WHERE email = ?",
        )
        .bind(identifier.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to query compromised email");
            map_sqlx_error(e)
        })?;

        debug!(found = row.is_some(), "Record store queried");

        Ok(row.map(|r| Self::row_to_record(r, identifier)))
    }

    #[instrument(skip(self, identifier), fields(identifier = %identifier))]
    async fn exists(&self, identifier: &Identifier) -> Result<bool, StoreError> {
        let exists: (i64,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM compromised_emails WHERE email = ?)")
                .bind(identifier.as_str())
                .fetch_one(&self.pool)
                .await
                .map_err(|e| {
                    error!(error = %e, "Failed to check compromised email existence");
                    map_sqlx_error(e)
                })?;

        Ok(exists.0 > 0)
    }
}
