use breach_checker_application::use_cases::CheckEmailUseCase;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub check_email: Arc<CheckEmailUseCase>,
}

impl AppState {
    pub fn new(check_email: Arc<CheckEmailUseCase>) -> Self {
        Self { check_email }
    }
}
