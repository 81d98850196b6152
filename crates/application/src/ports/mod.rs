mod breach_repository;
mod cache_maintenance;
mod lookup_cache;

pub use breach_repository::BreachRepository;
pub use cache_maintenance::CacheMaintenance;
pub use lookup_cache::LookupCache;
