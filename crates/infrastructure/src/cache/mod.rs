//! Lookup cache adapters.
//!
//! All three implement [`LookupCache`](breach_checker_application::ports::LookupCache)
//! and never report failures to the caller: a backend problem reads as a
//! miss and writes as a no-op.

mod disabled;
mod memory;
mod redis;

pub use disabled::DisabledLookupCache;
pub use memory::InMemoryLookupCache;
pub use self::redis::RedisLookupCache;
