use super::common::*;
use axum::extract::{Path, State};
use axum::http::{header, Request, StatusCode};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

use crate::recommendations::engine::RecommendationRequest;
use crate::recommendations::router::{component_handler, recommend_handler, RecommendationPayload};
use crate::recommendations::{recommendation_router, MessageType, SeverityLevel};

fn post_json(uri: &str, body: Value) -> Request<axum::body::Body> {
    Request::post(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(axum::body::Body::from(
            serde_json::to_vec(&body).expect("serialize body"),
        ))
        .expect("request builds")
}

#[test]
fn payload_parses_labels_and_treats_blank_as_unset() {
    let payload = RecommendationPayload {
        severity: Some("Major".to_string()),
        message_type: Some("  ".to_string()),
        filters: answers(&[(TRIGGER, "User action")]),
    };

    let request = RecommendationRequest::try_from(payload).expect("payload converts");
    assert_eq!(request.severity, Some(SeverityLevel::Major));
    assert_eq!(request.message_type, None);
    assert_eq!(request.filters.len(), 1);
}

#[tokio::test]
async fn recommend_route_returns_scored_components() {
    let router = recommendation_router(Arc::new(engine()));

    let response = router
        .oneshot(post_json(
            "/api/v1/recommendations",
            json!({
                "severity": "Minor",
                "message_type": "validation",
                "filters": {
                    TRIGGER: "User action",
                    ACTION: "Just informative",
                    PERSISTENCE: null,
                },
            }),
        ))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["state"], json!("recommended"));
    assert_eq!(payload["severity"], json!("minor"));
    assert_eq!(payload["matches"], json!([]));

    let alternatives = payload["alternatives"].as_array().expect("alternatives array");
    assert_eq!(alternatives.len(), 2);
    assert_eq!(alternatives[0]["name"], json!("Inline field error"));
    assert_eq!(alternatives[0]["score"], json!(50));
    assert_eq!(alternatives[0]["scopes"], json!(["inline"]));
    assert!(alternatives[0]["documentation"]
        .as_str()
        .unwrap_or_default()
        .starts_with("https://"));
    assert_eq!(
        alternatives[0]["reasons"].as_array().map(Vec::len),
        Some(1)
    );
}

#[tokio::test]
async fn recommend_handler_reports_awaiting_input() {
    let response = recommend_handler(
        State(Arc::new(engine())),
        axum::Json(RecommendationPayload::default()),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["state"], json!("awaiting_input"));
    assert_eq!(payload["severity"], Value::Null);
}

#[tokio::test]
async fn recommend_handler_rejects_unknown_severity() {
    let response = recommend_handler(
        State(Arc::new(engine())),
        axum::Json(RecommendationPayload {
            severity: Some("Urgent".to_string()),
            message_type: Some("Indicator".to_string()),
            ..RecommendationPayload::default()
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let payload = read_json_body(response).await;
    assert!(payload["error"]
        .as_str()
        .unwrap_or_default()
        .contains("Urgent"));
}

#[tokio::test]
async fn component_handler_falls_back_to_placeholder() {
    let axum::Json(view) = component_handler(
        State(Arc::new(engine())),
        Path("Notification center".to_string()),
    )
    .await;

    assert!(!view.documented);
    assert_eq!(view.entry.rationale, "Direct matrix match");
}

#[tokio::test]
async fn catalog_routes_list_reference_data() {
    let router = recommendation_router(Arc::new(engine()));

    let response = router
        .clone()
        .oneshot(
            Request::get("/api/v1/catalog/severities")
                .body(axum::body::Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("route executes");
    assert_eq!(response.status(), StatusCode::OK);
    let severities = read_json_body(response).await;
    let labels: Vec<&str> = severities
        .as_array()
        .expect("severity array")
        .iter()
        .filter_map(|entry| entry["label"].as_str())
        .collect();
    assert_eq!(labels, vec!["Critical", "Major", "Minor", "Informational"]);

    let response = router
        .clone()
        .oneshot(
            Request::get("/api/v1/catalog/filters")
                .body(axum::body::Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("route executes");
    let filters = read_json_body(response).await;
    assert_eq!(filters[0]["question"], json!(TRIGGER));
    assert_eq!(filters[0]["wildcard"], json!("Either"));

    let response = router
        .oneshot(
            Request::get("/api/v1/catalog/message-types")
                .body(axum::body::Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("route executes");
    let types = read_json_body(response).await;
    assert_eq!(
        types.as_array().map(Vec::len),
        Some(MessageType::ordered().len())
    );
}

#[tokio::test]
async fn component_route_returns_documented_entry() {
    let router = recommendation_router(Arc::new(engine()));

    let response = router
        .oneshot(
            Request::get("/api/v1/catalog/components/Toast")
                .body(axum::body::Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["name"], json!("Toast"));
    assert_eq!(payload["documented"], json!(true));
    assert!(payload["tags"]
        .as_array()
        .expect("tags array")
        .contains(&json!("transient")));
}
