//! Routes for running hunts.

use axum::extract::State;
use axum::{Json, Router, routing::post};
use serde::Serialize;
use tracing::{Instrument, info, info_span};
use uuid::Uuid;

use treasure_core::presentation::PresentationState;
use treasure_map::stage::Stage;
use treasure_narrative::application::orchestrator::run_hunt;
use treasure_narrative::application::timeline::{TimelineEntry, TimelineSink};
use treasure_narrative::domain::outcome::HuntOutcome;

use crate::state::AppState;

/// How the hunt ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeKind {
    /// The treasure was found.
    Found,
    /// A stage rejected.
    Failed,
}

/// Response body for POST /.
#[derive(Debug, Serialize)]
pub struct HuntResponse {
    /// Identifier of this run, also attached to its log span.
    pub run_id: Uuid,
    /// How the hunt ended.
    pub outcome: OutcomeKind,
    /// Stage that rejected, if any.
    pub failed_stage: Option<Stage>,
    /// Rejection reason, if any.
    pub reason: Option<String>,
    /// Stages that succeeded, in order.
    pub completed_stages: Vec<Stage>,
    /// Final presentation state.
    pub presentation: PresentationState,
    /// Every presentation update of the run.
    pub timeline: Vec<TimelineEntry>,
}

/// POST /
///
/// Runs one hunt to completion or first failure. Both end in `200`; a failed
/// hunt is a normal result.
async fn start_hunt(State(state): State<AppState>) -> Json<HuntResponse> {
    let run_id = Uuid::new_v4();
    let span = info_span!("hunt", %run_id);

    let (outcome, presentation, timeline) = async {
        info!("starting hunt");
        let mut rng = (state.rng_factory)();
        let mut sink = TimelineSink::new(state.clock.as_ref());
        let outcome = run_hunt(
            state.delay.as_ref(),
            rng.as_mut(),
            state.fragments.as_ref(),
            &mut sink,
        )
        .await;
        let (presentation, timeline) = sink.into_parts();
        (outcome, presentation, timeline)
    }
    .instrument(span)
    .await;

    let completed_stages = outcome.completed().to_vec();
    let (kind, failed_stage, reason) = match outcome {
        HuntOutcome::Found { .. } => (OutcomeKind::Found, None, None),
        HuntOutcome::Failed { stage, error, .. } => (
            OutcomeKind::Failed,
            Some(stage),
            Some(error.reason().to_owned()),
        ),
    };

    Json(HuntResponse {
        run_id,
        outcome: kind,
        failed_stage,
        reason,
        completed_stages,
        presentation,
        timeline,
    })
}

/// Returns the router for hunts.
pub fn router() -> Router<AppState> {
    Router::new().route("/", post(start_hunt))
}
