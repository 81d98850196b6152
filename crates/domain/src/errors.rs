use thiserror::Error;

/// Caller-input faults raised while normalizing an identifier.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Email is required")]
    Empty,

    #[error("Invalid email format")]
    Malformed,
}

/// Backend faults raised by the record store.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Record store unavailable: {0}")]
    ConnectionFailure(String),

    #[error("Record store query timed out after {0}ms")]
    Timeout(u64),

    #[error("Record store query failed: {0}")]
    QueryFailure(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl DomainError {
    pub fn is_client_error(&self) -> bool {
        matches!(self, DomainError::Validation(_))
    }
}
