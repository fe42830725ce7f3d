//! Integration tests for the health endpoint.

mod common;

use std::sync::Arc;

use axum::http::StatusCode;
use treasure_core::scene::Scene;
use treasure_test_support::InMemoryFragmentSource;

#[tokio::test]
async fn test_health_returns_200_with_status_ok() {
    let app = common::build_test_app(&[]);

    let (status, json) = common::get_json(app, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "ok");
    assert!(json["version"].is_string());
    assert_eq!(json["fragments_available"], 7);
}

#[tokio::test]
async fn test_health_reports_degraded_when_fragments_missing() {
    let fragments = InMemoryFragmentSource::with_all_scenes().without(Scene::Guard);
    let app = common::build_test_app_with_fragments(&[], Arc::new(fragments));

    let (status, json) = common::get_json(app, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["fragments_available"], 6);
    assert_eq!(json["fragments_expected"], 7);
}

#[tokio::test]
async fn test_unknown_route_returns_404() {
    let app = common::build_test_app(&[]);

    let request = axum::http::Request::builder()
        .method("GET")
        .uri("/api/v1/nonexistent")
        .body(axum::body::Body::empty())
        .unwrap();

    let response = tower::ServiceExt::oneshot(app, request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
