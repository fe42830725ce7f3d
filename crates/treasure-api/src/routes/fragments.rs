//! Routes for narrative fragments.

use axum::extract::{Path, State};
use axum::{Json, Router, routing::get};
use serde::Serialize;
use tracing::instrument;

use treasure_core::scene::Scene;
use treasure_narrative::application::fragments::preload_fragments;

use crate::error::ApiError;
use crate::state::AppState;

/// A scene and its narrative text.
#[derive(Debug, Serialize)]
pub struct FragmentResponse {
    /// The scene.
    pub scene: Scene,
    /// Its fragment text.
    pub text: String,
}

/// GET /
///
/// Every scene's fragment, with a fixed fallback for those that fail.
async fn list_fragments(State(state): State<AppState>) -> Json<Vec<FragmentResponse>> {
    let loaded = preload_fragments(state.fragments.as_ref()).await;
    Json(
        loaded
            .into_iter()
            .map(|(scene, text)| FragmentResponse { scene, text })
            .collect(),
    )
}

/// GET /{scene}
#[instrument(skip(state))]
async fn get_fragment(
    State(state): State<AppState>,
    Path(scene): Path<String>,
) -> Result<Json<FragmentResponse>, ApiError> {
    let scene: Scene = scene.parse()?;
    let text = state.fragments.fetch(scene).await?;
    Ok(Json(FragmentResponse { scene, text }))
}

/// Returns the router for fragments.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_fragments))
        .route("/{scene}", get(get_fragment))
}
