//! Configuration module for Breach Checker
//!
//! This module contains all configuration structures organized by concern:
//! - `root`: Main configuration and CLI overrides
//! - `server`: HTTP bind address, port and CORS
//! - `database`: Record store pool and connect retry policy
//! - `cache`: Cache backend, TTL and timeouts
//! - `logging`: Logging settings
//! - `errors`: Configuration errors

pub mod cache;
pub mod database;
pub mod errors;
pub mod logging;
pub mod root;
pub mod server;

pub use cache::{CacheBackend, CacheConfig};
pub use database::DatabaseConfig;
pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use root::{CliOverrides, Config};
pub use server::ServerConfig;
