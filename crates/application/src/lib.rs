//! Breach Checker Application Layer
//!
//! Ports consumed by the lookup pipeline and the use cases that drive them.
pub mod ports;
pub mod use_cases;
