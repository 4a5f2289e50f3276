//! Fallbacks, CORS and metrics on the assembled router

mod common;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use common::{app, assert_error, get, post, seeded_pool, send};
use serde_json::json;
use tower::ServiceExt;

#[tokio::test]
async fn wrong_verb_on_known_path_is_method_not_allowed() {
    let app = app(seeded_pool().await);
    let (status, body) = post(&app, "/questions/45", json!({"question": "Q?"})).await;
    assert_error(status, &body, StatusCode::METHOD_NOT_ALLOWED, "method not allowed");

    let (status, body) = send(&app, Method::DELETE, "/categories", None).await;
    assert_error(status, &body, StatusCode::METHOD_NOT_ALLOWED, "method not allowed");
}

#[tokio::test]
async fn unknown_path_is_not_found() {
    let app = app(seeded_pool().await);
    let (status, body) = get(&app, "/answers").await;
    assert_error(status, &body, StatusCode::NOT_FOUND, "resource not found");
}

#[tokio::test]
async fn responses_allow_any_origin() {
    let app = app(seeded_pool().await);
    let request = Request::builder()
        .uri("/categories")
        .header(header::ORIGIN, "http://localhost:3000")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "*"
    );
}

#[tokio::test]
async fn metrics_count_quiz_questions() {
    let app = app(seeded_pool().await);
    let (status, _) = post(
        &app,
        "/play",
        json!({"previous_questions": [], "quiz_category": {"id": 5}}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let request = Request::builder()
        .uri("/metrics")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let text = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(text.contains("quiz_questions_served_total{category=\"5\"}"));
    assert!(text.contains("questions_stored 19"));
}
