mod check_email;

pub use check_email::{CheckEmailUseCase, LookupPolicy};
