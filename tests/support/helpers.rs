// tests/support/helpers.rs
use std::sync::Arc;

use axum::Router;
use axum::body::{self, Body};
use axum::http::{Request, StatusCode, header};
use serde_json::Value;
use tower::util::ServiceExt as _;

use super::mocks::InMemoryStore;
use stock_catalog::application::services::ApplicationServices;
use stock_catalog::domain::category::CategoryRepository;
use stock_catalog::presentation::http::{routes::build_router, state::HttpState};

pub fn build_services(store: &Arc<InMemoryStore>) -> ApplicationServices {
    ApplicationServices::new(store.category_repo(), store.brand_repo(), store.article_repo())
}

pub fn build_test_state(store: &Arc<InMemoryStore>) -> HttpState {
    HttpState {
        services: Arc::new(build_services(store)),
    }
}

pub fn test_origins() -> Vec<String> {
    vec!["http://localhost:3000".to_string()]
}

/// Router over a fresh in-memory store; the store is returned for seeding and
/// for inspecting insert calls.
pub fn make_test_router() -> (Router, Arc<InMemoryStore>) {
    let store = InMemoryStore::new();
    let router = build_router(build_test_state(&store), &test_origins());
    (router, store)
}

/// Router built around a custom category store, e.g. one that always fails.
pub fn make_router_with_category_repo(category_repo: Arc<dyn CategoryRepository>) -> Router {
    let store = InMemoryStore::new();
    let services =
        ApplicationServices::new(category_repo, store.brand_repo(), store.article_repo());
    let state = HttpState {
        services: Arc::new(services),
    };
    build_router(state, &test_origins())
}

pub async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.expect("router response");
    let status = response.status();
    let bytes = body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("response body");
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or_else(|_| {
            Value::String(String::from_utf8_lossy(&bytes).into_owned())
        })
    };
    (status, json)
}

pub async fn post_json(app: &Router, uri: &str, payload: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(payload.to_string()))
        .expect("request");
    send(app, request).await
}

pub async fn get_json(app: &Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .expect("request");
    send(app, request).await
}

/// Messages from an error body, in order.
pub fn messages(body: &Value) -> Vec<String> {
    body["messages"]
        .as_array()
        .map(|items| {
            items
                .iter()
                .filter_map(|m| m.as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
}

pub fn assert_error_body(body: &Value, expected_error: &str) {
    assert_eq!(body["error"], expected_error, "unexpected body: {body}");
    assert!(body["messages"].is_array(), "messages missing: {body}");
    let timestamp = body["timestamp"].as_str().expect("timestamp");
    assert!(
        chrono::DateTime::parse_from_rfc3339(timestamp).is_ok(),
        "timestamp is not RFC 3339: {timestamp}"
    );
}
