pub mod cache;
pub mod lookup;

// Re-export use cases
pub use cache::PurgeExpiredCacheEntriesUseCase;
pub use lookup::{CheckEmailUseCase, LookupPolicy};
