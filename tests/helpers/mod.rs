//! Shared test helpers for integration tests.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use serde_json::Value;
use tower::ServiceExt;

use trailhub_api::AppState;
use trailhub_core::config::AppConfig;
use trailhub_store::MemoryAuditStore;

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
}

/// A decoded test response
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body (`Value::Null` when empty)
    pub body: Value,
}

impl TestApp {
    /// Create a new test application backed by the in-memory store.
    pub fn new() -> Self {
        let config = AppConfig::load_file("tests/fixtures/test_config.toml")
            .expect("Failed to load test config");

        let store = Arc::new(MemoryAuditStore::new());
        let state = AppState::new(config, store);

        Self {
            router: trailhub_api::build_router(state),
        }
    }

    /// Issue a request against the router and decode the JSON response.
    pub async fn request(&self, method: &str, uri: &str, body: Option<Value>) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(json) => {
                builder = builder.header(header::CONTENT_TYPE, "application/json");
                builder
                    .body(Body::from(json.to_string()))
                    .expect("Failed to build request")
            }
            None => builder.body(Body::empty()).expect("Failed to build request"),
        };

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Request failed");

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read body");
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).expect("Response body is not JSON")
        };

        TestResponse { status, body }
    }

    /// Record an event via the API and return the stored event JSON.
    pub async fn record(
        &self,
        actor_email: &str,
        event_type: &str,
        resource: &str,
        payload: Option<Value>,
    ) -> Value {
        let response = self
            .request(
                "POST",
                "/api/admin/audit",
                Some(serde_json::json!({
                    "actor_id": "u1",
                    "actor_email": actor_email,
                    "type": event_type,
                    "resource": resource,
                    "payload": payload,
                })),
            )
            .await;
        assert_eq!(response.status, StatusCode::CREATED);
        response.body["data"].clone()
    }

    /// List events via the API with a raw query string.
    pub async fn list(&self, query: &str) -> Vec<Value> {
        let uri = if query.is_empty() {
            "/api/admin/audit".to_string()
        } else {
            format!("/api/admin/audit?{query}")
        };
        let response = self.request("GET", &uri, None).await;
        assert_eq!(response.status, StatusCode::OK);
        response.body["data"]
            .as_array()
            .expect("data is not an array")
            .clone()
    }
}

/// Sleep long enough for consecutive events to get distinct timestamps.
pub async fn tick() {
    tokio::time::sleep(std::time::Duration::from_millis(2)).await;
}
