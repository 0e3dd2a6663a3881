//! Shared helpers for driving the router in integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Request, Response, StatusCode},
};
use credits_interactions::create_router;
use credits_interactions::shared::structs::AppState;
use credits_interactions::shared::structs::config::{Configuration, Secrets};
use credits_interactions::shared::utility::verifier::InteractionVerifier;
use serde_json::Value;
use tower::ServiceExt;
use wiremock::MockServer;

pub const APPLICATION_ID: &str = "123456789";
pub const API_KEY: &str = "test-api-key";
pub const CREDITS_PATH: &str = "/api/credits";

/// Stands in for Discord's signature check.
pub struct StubVerifier {
    pub is_valid: bool,
}

impl InteractionVerifier for StubVerifier {
    fn verify(&self, _signature: &str, _timestamp: &str, _body: &[u8]) -> bool {
        self.is_valid
    }
}

pub fn config(credits_endpoint: &str) -> Configuration {
    Configuration {
        credits_endpoint: credits_endpoint.to_string(),
        request_timeout_secs: 5,
        secrets: Secrets {
            application_id: APPLICATION_ID.into(),
            public_key: String::new(),
            credits_api_key: API_KEY.into(),
        },
        ..Configuration::new()
    }
}

pub fn router_with(verifier: Arc<dyn InteractionVerifier>, credits_endpoint: &str) -> Router {
    let state = AppState::with_verifier(config(credits_endpoint), verifier)
        .expect("failed to build app state");
    create_router(state)
}

/// Router that trusts every request and sends credits calls to `server`.
pub fn trusting_router(server: &MockServer) -> Router {
    router_with(
        Arc::new(StubVerifier { is_valid: true }),
        &format!("{}{}", server.uri(), CREDITS_PATH),
    )
}

pub fn interaction_request(body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/")
        .header("content-type", "application/json")
        .header("x-signature-ed25519", "00")
        .header("x-signature-timestamp", "0")
        .body(Body::from(body.to_string()))
        .expect("failed to build request")
}

pub async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.expect("failed to make request")
}

pub async fn read_text(response: Response<Body>) -> (StatusCode, String) {
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("failed to read response body");
    let text = String::from_utf8(bytes.to_vec()).expect("response body should be UTF-8");
    (status, text)
}

pub async fn read_json(response: Response<Body>) -> (StatusCode, Value) {
    let (status, text) = read_text(response).await;
    let value = serde_json::from_str(&text).expect("response body should be valid JSON");
    (status, value)
}
