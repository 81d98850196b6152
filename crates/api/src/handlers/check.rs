use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    http::StatusCode,
    response::Json,
};
use breach_checker_domain::DomainError;
use tracing::{debug, error};

use crate::{
    dto::{CheckEmailQuery, CheckEmailRequest, CheckEmailResponse, ErrorResponse},
    state::AppState,
};

type ApiResult<T> = Result<Json<T>, (StatusCode, Json<ErrorResponse>)>;

pub async fn check_email_get(
    State(state): State<AppState>,
    params: Result<Query<CheckEmailQuery>, QueryRejection>,
) -> ApiResult<CheckEmailResponse> {
    let Query(params) = params.map_err(|e| {
        debug!(error = %e, "Rejected check query string");
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new("Invalid query parameters")),
        )
    })?;
    check(&state, &params.email).await
}

pub async fn check_email_post(
    State(state): State<AppState>,
    payload: Result<Json<CheckEmailRequest>, JsonRejection>,
) -> ApiResult<CheckEmailResponse> {
    let Json(req) = payload.map_err(|e| {
        debug!(error = %e, "Rejected check request body");
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new("Invalid request payload")),
        )
    })?;
    check(&state, &req.email).await
}

async fn check(state: &AppState, raw: &str) -> ApiResult<CheckEmailResponse> {
    match state.check_email.execute(raw).await {
        Ok(result) => Ok(Json(CheckEmailResponse::from(result))),
        Err(e) => Err(map_domain_error(e)),
    }
}

fn map_domain_error(e: DomainError) -> (StatusCode, Json<ErrorResponse>) {
    match e {
        DomainError::Validation(v) => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new(v.to_string())),
        ),
        DomainError::Store(s) => {
            error!(error = %s, "Email check failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new("Error checking email")),
            )
        }
    }
}
