//! Breach Checker Infrastructure Layer
//!
//! Adapters for the application ports: the SQLite record store and the
//! lookup cache backends.
pub mod cache;
pub mod database;
pub mod repositories;

pub use cache::{DisabledLookupCache, InMemoryLookupCache, RedisLookupCache};
pub use database::{create_pool, ConnectRetryPolicy};
pub use repositories::SqliteBreachRepository;
