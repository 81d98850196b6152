pub mod check;
pub mod health;

pub use check::{check_email_get, check_email_post};
pub use health::health_check;
