use breach_checker_domain::LookupResult;
use serde::{Deserialize, Serialize};

/// Query string for `GET /api/check?email=...`
#[derive(Debug, Clone, Deserialize)]
pub struct CheckEmailQuery {
    #[serde(default)]
    pub email: String,
}

/// Body for `POST /api/check`
#[derive(Debug, Clone, Deserialize)]
pub struct CheckEmailRequest {
    #[serde(default)]
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckEmailResponse {
    pub email: String,
    pub compromised: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    pub served_from_cache: bool,
    pub message: String,
}

impl From<LookupResult> for CheckEmailResponse {
    fn from(result: LookupResult) -> Self {
        Self {
            message: result.message().to_string(),
            email: result.identifier.to_string(),
            compromised: result.compromised,
            source: result.source,
            served_from_cache: result.served_from_cache,
        }
    }
}
