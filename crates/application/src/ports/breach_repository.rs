use async_trait::async_trait;
use breach_checker_domain::{CompromisedRecord, Identifier, StoreError};

/// Durable record of compromised addresses.
///
/// This is the single source of truth for lookups. Any error returned here
/// is fatal to the request that issued it.
#[async_trait]
pub trait BreachRepository: Send + Sync {
    /// Looks up the record for an exact identifier match.
    ///
    /// # Returns
    ///
    /// * `Ok(Some(CompromisedRecord))` - If the address is in the breach table
    /// * `Ok(None)` - If it is not
    /// * `Err(StoreError)` - If no authoritative answer could be produced
    ///
    /// # Errors
    ///
    /// * `StoreError::ConnectionFailure` - If no connection could be acquired
    /// * `StoreError::Timeout` - If the query did not complete in time
    /// * `StoreError::QueryFailure` - If the query itself failed
    async fn find(&self, identifier: &Identifier) -> Result<Option<CompromisedRecord>, StoreError>;

    /// Existence check over [`BreachRepository::find`].
    async fn exists(&self, identifier: &Identifier) -> Result<bool, StoreError> {
        Ok(self.find(identifier).await?.is_some())
    }
}
