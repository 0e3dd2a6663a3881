//! Routing, verification and dispatch tests for the interactions endpoint.

mod common;

use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use credits_interactions::shared::MAX_INTERACTION_BODY_BYTES;
use serde_json::json;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path},
};

use common::{
    CREDITS_PATH, StubVerifier, interaction_request, read_json, read_text, router_with, send,
    trusting_router,
};

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
async fn root_greets_with_application_id() {
    let server = MockServer::start().await;
    let response = send(trusting_router(&server), get("/")).await;

    let (status, body) = read_text(response).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "👋 123456789");
}

#[tokio::test]
async fn unknown_routes_are_not_found() {
    let server = MockServer::start().await;
    let response = send(trusting_router(&server), get("/unknown")).await;

    let (status, body) = read_text(response).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, "Not Found.");
}

#[tokio::test]
async fn unsupported_methods_on_root_are_not_found() {
    let server = MockServer::start().await;
    let request = Request::builder()
        .method("DELETE")
        .uri("/")
        .body(Body::empty())
        .unwrap();

    let (status, body) = read_text(send(trusting_router(&server), request).await).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, "Not Found.");
}

#[tokio::test]
async fn ping_is_answered_with_pong() {
    let server = MockServer::start().await;
    let request = interaction_request(&json!({ "type": 1 }));

    let (status, body) = read_json(send(trusting_router(&server), request).await).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["type"], 1);
}

#[tokio::test]
async fn credits_command_replies_with_channel_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(CREDITS_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "message": "You received 10 credits!", "credits": 250 })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let request = interaction_request(&json!({
        "type": 2,
        "data": { "name": "credits" },
        "member": { "user": { "id": "80351110224678912" } }
    }));

    let (status, body) = read_json(send(trusting_router(&server), request).await).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["type"], 4);
    assert_eq!(
        body["data"]["embeds"][0]["description"],
        "You received 10 credits!"
    );
}

#[tokio::test]
async fn unknown_command_is_rejected() {
    let server = MockServer::start().await;
    let request = interaction_request(&json!({
        "type": 2,
        "data": { "name": "unknown" }
    }));

    let (status, body) = read_json(send(trusting_router(&server), request).await).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Unknown Type");
}

#[tokio::test]
async fn other_interaction_types_are_rejected() {
    let server = MockServer::start().await;
    for interaction_type in [3, 4, 5, 99] {
        let request = interaction_request(&json!({ "type": interaction_type }));

        let (status, body) = read_json(send(trusting_router(&server), request).await).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Unknown Type");
    }
}

#[tokio::test]
async fn component_and_modal_payloads_are_unknown_types() {
    let server = MockServer::start().await;
    let payloads = [
        json!({
            "type": 3,
            "data": { "custom_id": "claim_button", "component_type": 2 },
            "member": { "user": { "id": "1" } }
        }),
        json!({
            "type": 5,
            "data": { "custom_id": "feedback_modal", "components": [] },
            "member": { "user": { "id": "1" } }
        }),
    ];

    for payload in payloads {
        let request = interaction_request(&payload);

        let (status, body) = read_json(send(trusting_router(&server), request).await).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Unknown Type");
    }
}

#[tokio::test]
async fn oversized_bodies_are_rejected_before_verification() {
    let server = MockServer::start().await;
    let padding = "x".repeat(MAX_INTERACTION_BODY_BYTES + 1);
    let request = interaction_request(&json!({ "type": 1, "padding": padding }));

    let response = send(trusting_router(&server), request).await;
    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
}

#[tokio::test]
async fn invalid_signature_is_unauthorized() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let app = router_with(
        Arc::new(StubVerifier { is_valid: false }),
        &format!("{}{}", server.uri(), CREDITS_PATH),
    );
    let request = interaction_request(&json!({
        "type": 2,
        "data": { "name": "credits" },
        "member": { "user": { "id": "1" } }
    }));

    let response = send(app, request).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn signed_garbage_is_a_bad_request() {
    let server = MockServer::start().await;
    let request = Request::builder()
        .method("POST")
        .uri("/")
        .body(Body::from("not json"))
        .unwrap();

    let (status, body) = read_json(send(trusting_router(&server), request).await).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid interaction payload");
}

#[tokio::test]
async fn liveness_does_not_require_a_signature() {
    let server = MockServer::start().await;
    let app = router_with(
        Arc::new(StubVerifier { is_valid: false }),
        &format!("{}{}", server.uri(), CREDITS_PATH),
    );

    let (status, _) = read_text(send(app, get("/")).await).await;
    assert_eq!(status, StatusCode::OK);
}
