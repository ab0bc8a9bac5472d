// Web API tests — drive the router directly with tower's oneshot.
//
// No TCP listener and no AI producer: the AI route degrades to the rule
// engine when no key is configured, which is exactly what these exercise.

#![cfg(feature = "web")]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use tower::ServiceExt;

use kavach::engine::ScamEngine;
use kavach::web::{build_router, AppState};

fn test_app() -> Router {
    build_router(AppState {
        engine: Arc::new(ScamEngine::builtin()),
        producer: None,
    })
}

fn post_json(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn health_returns_ok() {
    let response = test_app()
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
}

#[tokio::test]
async fn scam_check_returns_assessment() {
    let response = test_app()
        .oneshot(post_json(
            "/api/scam-check",
            r#"{"message": "urgent instant loan, click here"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["verdict"], "HIGH RISK SCAM");
    assert_eq!(json["badgeClass"], "danger");
    assert!(json["totalScore"].as_u64().unwrap() >= 40);
    assert!(json["matches"].as_array().unwrap().len() >= 2);
}

#[tokio::test]
async fn empty_message_is_rejected() {
    let response = test_app()
        .oneshot(post_json("/api/scam-check", r#"{"message": "   "}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Message is required");
}

#[tokio::test]
async fn missing_message_field_is_rejected() {
    let response = test_app()
        .oneshot(post_json("/api/scam-check", r#"{}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn ai_check_without_producer_serves_engine_verdict() {
    let response = test_app()
        .oneshot(post_json(
            "/api/ai-check",
            r#"{"message": "Your account balance is Rs 4500 as of today."}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["verdict"], "POSSIBLY SAFE");
    assert_eq!(json["badgeClass"], "safe");
    // The AI shape has no match records — only the shared verdict fields.
    assert!(json.get("matches").is_none());
    assert!(json["safetyTips"].as_array().is_some());
}

#[tokio::test]
async fn patterns_exposes_the_registry() {
    let response = test_app()
        .oneshot(
            Request::builder()
                .uri("/api/patterns")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert!(!json["patterns"].as_array().unwrap().is_empty());
    assert!(!json["phrases"].as_array().unwrap().is_empty());
}
