//! Health check endpoint.

use axum::extract::State;
use axum::{Json, Router, routing::get};
use serde::Serialize;
use treasure_core::scene::Scene;

use crate::state::AppState;

/// Health check response.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Service status: `ok`, or `degraded` when some fragments are missing.
    pub status: &'static str,
    /// Service version.
    pub version: &'static str,
    /// Number of scenes whose fragment currently loads.
    pub fragments_available: usize,
    /// Total number of scenes.
    pub fragments_expected: usize,
}

/// GET /health
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let mut available = 0;
    for scene in Scene::ALL {
        if state.fragments.fetch(scene).await.is_ok() {
            available += 1;
        }
    }

    Json(HealthResponse {
        status: if available == Scene::ALL.len() {
            "ok"
        } else {
            "degraded"
        },
        version: env!("CARGO_PKG_VERSION"),
        fragments_available: available,
        fragments_expected: Scene::ALL.len(),
    })
}

/// Returns the health check router.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
