pub mod check;
pub mod error;

pub use check::{CheckEmailQuery, CheckEmailRequest, CheckEmailResponse};
pub use error::ErrorResponse;
