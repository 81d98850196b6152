use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use breach_checker_api::{create_api_routes, AppState};
use breach_checker_application::ports::{BreachRepository, LookupCache};
use breach_checker_application::use_cases::CheckEmailUseCase;
use breach_checker_domain::{CompromisedRecord, Identifier, StoreError};
use http_body_util::BodyExt;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tower::ServiceExt;

struct StaticStore {
    compromised: Vec<&'static str>,
    down: bool,
}

#[async_trait]
impl BreachRepository for StaticStore {
    async fn find(&self, identifier: &Identifier) -> Result<Option<CompromisedRecord>, StoreError> {
        if self.down {
            return Err(StoreError::ConnectionFailure("connection refused".into()));
        }
        Ok(self
            .compromised
            .iter()
            .find(|e| ***e == *identifier.as_str())
            .map(|_| CompromisedRecord {
                id: Some(1),
                identifier: identifier.clone(),
                breach_date: None,
                breach_source: Some("Sample Breach".into()),
            }))
    }
}

#[derive(Default)]
struct MapCache {
    entries: RwLock<HashMap<String, String>>,
}

#[async_trait]
impl LookupCache for MapCache {
    async fn get(&self, key: &str) -> Option<String> {
        self.entries.read().await.get(key).cloned()
    }

    async fn set(&self, key: &str, value: String, _ttl: Duration) {
        self.entries.write().await.insert(key.to_string(), value);
    }

    fn backend_name(&self) -> &'static str {
        "map"
    }
}

fn app_with_store(down: bool) -> Router {
    let store = Arc::new(StaticStore {
        compromised: vec!["breach@example.com", "test@example.com"],
        down,
    });
    let use_case = CheckEmailUseCase::new(store, Arc::new(MapCache::default()));
    create_api_routes(AppState::new(Arc::new(use_case)), &["*".to_string()])
}

fn app() -> Router {
    app_with_store(false)
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_json(body: &str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri("/api/check")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn test_get_compromised_email() {
    let (status, body) = send(app(), get("/api/check?email=Breach%40Example.com")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["email"], "breach@example.com");
    assert_eq!(body["compromised"], true);
    assert_eq!(body["source"], "Sample Breach");
    assert_eq!(body["served_from_cache"], false);
    assert!(body["message"]
        .as_str()
        .unwrap()
        .contains("changing your password"));
}

#[tokio::test]
async fn test_post_clean_email() {
    let (status, body) = send(app(), post_json(r#"{"email":"  safe@example.com "}"#)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["email"], "safe@example.com");
    assert_eq!(body["compromised"], false);
    assert!(body.get("source").is_none());
}

#[tokio::test]
async fn test_repeated_request_is_served_from_cache() {
    let app = app();

    let (_, first) = send(app.clone(), get("/api/check?email=test%40example.com")).await;
    let (_, second) = send(app, get("/api/check?email=test%40example.com")).await;

    assert_eq!(first["served_from_cache"], false);
    assert_eq!(second["served_from_cache"], true);
    assert_eq!(first["compromised"], second["compromised"]);
}

#[tokio::test]
async fn test_missing_email_is_bad_request() {
    let (status, body) = send(app(), get("/api/check")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Email is required");
}

#[tokio::test]
async fn test_malformed_email_is_bad_request() {
    let (status, body) = send(app(), get("/api/check?email=not-an-email")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid email format");
}

#[tokio::test]
async fn test_unparseable_query_is_json_bad_request() {
    let (status, body) = send(
        app(),
        get("/api/check?email=a%40example.com&email=b%40example.com"),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid query parameters");
}

#[tokio::test]
async fn test_quoted_and_utf8_addresses_are_accepted() {
    let (status, body) = send(app(), post_json(r#"{"email":"\"John Doe\"@example.com"}"#)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["email"], "\"john doe\"@example.com");

    let (status, body) = send(app(), get("/api/check?email=j%C3%B6hn%40exa_mple.com")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["email"], "jöhn@exa_mple.com");
}

#[tokio::test]
async fn test_invalid_json_body_is_bad_request() {
    let (status, body) = send(app(), post_json("{not json")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid request payload");
}

#[tokio::test]
async fn test_store_failure_is_server_error() {
    let (status, body) = send(
        app_with_store(true),
        get("/api/check?email=breach%40example.com"),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Error checking email");
}

#[tokio::test]
async fn test_health() {
    let (status, body) = send(app(), get("/health")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_cors_preflight() {
    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/api/check")
        .header(header::ORIGIN, "http://localhost:3000")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .body(Body::empty())
        .unwrap();

    let response = app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .unwrap(),
        "*"
    );
}
