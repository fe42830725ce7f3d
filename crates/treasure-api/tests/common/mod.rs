//! Shared test helpers for API integration tests.
#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;
use treasure_content::file_fragment_source::FileFragmentSource;
use treasure_core::clock::Clock;
use treasure_core::fragment::FragmentSource;
use treasure_core::rng::DeterministicRng;
use treasure_test_support::{FixedClock, RecordingDelay, SequenceRng};

use treasure_api::routes;
use treasure_api::state::{AppState, RngFactory};

/// Fixed timestamp used across all integration tests.
fn fixed_clock() -> Arc<dyn Clock + Send + Sync> {
    Arc::new(FixedClock::reference())
}

/// Fragments shipped with the workspace.
pub fn bundled_fragments() -> Arc<dyn FragmentSource> {
    Arc::new(FileFragmentSource::new(
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../fragments"),
    ))
}

/// Build the full app router with the bundled fragments, no real waiting, and
/// every hunt drawing from a copy of `draws`. Uses the same route structure as
/// `main.rs`.
pub fn build_test_app(draws: &[f64]) -> Router {
    build_test_app_with_fragments(draws, bundled_fragments())
}

/// Like [`build_test_app`] with a custom fragment source.
pub fn build_test_app_with_fragments(
    draws: &[f64],
    fragments: Arc<dyn FragmentSource>,
) -> Router {
    let draws = draws.to_vec();
    let rng_factory: RngFactory =
        Arc::new(move || -> Box<dyn DeterministicRng> { Box::new(SequenceRng::new(draws.clone())) });
    let app_state = AppState::new(
        fixed_clock(),
        Arc::new(RecordingDelay::new()),
        rng_factory,
        fragments,
    );

    Router::new()
        .merge(routes::health::router())
        .nest("/api/v1/hunts", routes::hunt::router())
        .nest("/api/v1/fragments", routes::fragments::router())
        .with_state(app_state)
}

/// Send a POST request with an empty body and return the response.
pub async fn post_empty(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

/// Send a GET request and return the response.
pub async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}
