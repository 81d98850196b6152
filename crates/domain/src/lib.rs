//! Breach Checker Domain Layer
pub mod breach_record;
pub mod config;
pub mod errors;
pub mod identifier;
pub mod lookup;
pub mod validators;

pub use breach_record::CompromisedRecord;
pub use config::{CacheBackend, CliOverrides, Config, ConfigError};
pub use errors::{DomainError, StoreError, ValidationError};
pub use identifier::{normalize, Identifier};
pub use lookup::{cache_key, CachedLookup, LookupResult, CACHE_KEY_PREFIX};
