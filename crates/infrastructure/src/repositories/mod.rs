pub mod breach_repository;

pub use breach_repository::SqliteBreachRepository;
