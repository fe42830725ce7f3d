//! The hunt: a fixed chain of steps with a single failure path.
//!
//! Each stage runs only after the previous one succeeded. After a success
//! the stage's scene, its success string and its narrative fragment are
//! rendered. The first rejection abandons the remaining stages and renders
//! the `Guard` scene instead. No state survives between runs.

use tracing::{error, info, instrument};
use treasure_core::delay::Delay;
use treasure_core::error::StepError;
use treasure_core::fragment::FragmentSource;
use treasure_core::presentation::PresentationSink;
use treasure_core::rng::DeterministicRng;
use treasure_core::scene::Scene;
use treasure_map::messages::ANCIENT_PUZZLE;
use treasure_map::stage::Stage;
use treasure_map::steps;

use crate::application::fragments::show_fragment;
use crate::domain::outcome::{HuntOutcome, failure_log};

/// Collaborators a hunt renders through.
struct Presenter<'a> {
    fragments: &'a dyn FragmentSource,
    sink: &'a mut dyn PresentationSink,
    completed: Vec<Stage>,
}

impl Presenter<'_> {
    async fn success(&mut self, stage: Stage, text: &str) {
        info!(stage = stage.name(), text, "stage succeeded");
        let scene = stage.scene();
        self.sink.set_background(scene);
        self.sink.set_log(text);
        show_fragment(scene, self.fragments, &mut *self.sink).await;
        self.completed.push(stage);
    }

    async fn failure(&mut self, stage: Stage, err: &StepError) {
        error!(stage = stage.name(), reason = %err, "quest failed");
        self.sink.set_background(Scene::Guard);
        self.sink.set_log(&failure_log(err));
        show_fragment(Scene::Guard, self.fragments, &mut *self.sink).await;
    }
}

/// Runs every stage in order, stopping at the first rejection.
async fn follow_the_map(
    delay: &dyn Delay,
    rng: &mut dyn DeterministicRng,
    presenter: &mut Presenter<'_>,
) -> Result<String, (Stage, StepError)> {
    let clue = steps::get_initial_clue(delay).await;
    presenter.success(Stage::FetchClue, &clue).await;

    let location = steps::decode_ancient_script(Some(&clue), delay)
        .await
        .map_err(|e| (Stage::DecodeScript, e))?;
    presenter.success(Stage::DecodeScript, &location).await;

    let chest = steps::search_temple(&location, delay, rng)
        .await
        .map_err(|e| (Stage::SearchTemple, e))?;
    presenter.success(Stage::SearchTemple, &chest).await;

    let passage = steps::solve_ancient_puzzle(ANCIENT_PUZZLE, delay, rng)
        .await
        .map_err(|e| (Stage::SolvePuzzle, e))?;
    presenter.success(Stage::SolvePuzzle, &passage).await;

    let destination = steps::pass_secret_passage(&passage, delay, rng)
        .await
        .map_err(|e| (Stage::PassPassage, e))?;
    presenter.success(Stage::PassPassage, &destination).await;

    let treasure = steps::open_treasure_box(delay).await;
    presenter.success(Stage::OpenChest, &treasure).await;

    Ok(treasure)
}

/// Runs one complete hunt, rendering progress to `sink`.
///
/// A hunt always finishes: a rejected stage is reported through
/// [`HuntOutcome::Failed`] after the failure scene has been rendered.
#[instrument(skip_all)]
pub async fn run_hunt(
    delay: &dyn Delay,
    rng: &mut dyn DeterministicRng,
    fragments: &dyn FragmentSource,
    sink: &mut dyn PresentationSink,
) -> HuntOutcome {
    let mut presenter = Presenter {
        fragments,
        sink,
        completed: Vec::new(),
    };

    match follow_the_map(delay, rng, &mut presenter).await {
        Ok(treasure) => {
            info!("treasure found");
            HuntOutcome::Found {
                treasure,
                completed: presenter.completed,
            }
        }
        Err((stage, error)) => {
            presenter.failure(stage, &error).await;
            HuntOutcome::Failed {
                stage,
                error,
                completed: presenter.completed,
            }
        }
    }
}
