//! The hunt's asynchronous steps.
//!
//! Randomized steps wait first, then draw exactly one value in `[0, 1)` and
//! fail when the draw is below their threshold. A step resolves to exactly
//! one of success or failure.

use std::time::Duration;

use tracing::debug;
use treasure_core::delay::Delay;
use treasure_core::error::StepError;
use treasure_core::rng::DeterministicRng;

use crate::messages;

/// Latency of [`get_initial_clue`].
pub const FETCH_CLUE_DELAY: Duration = Duration::from_millis(1000);
/// Latency of [`decode_ancient_script`].
pub const DECODE_SCRIPT_DELAY: Duration = Duration::from_millis(1500);
/// Latency of [`search_temple`].
pub const SEARCH_TEMPLE_DELAY: Duration = Duration::from_millis(2000);
/// Latency of [`solve_ancient_puzzle`].
pub const SOLVE_PUZZLE_DELAY: Duration = Duration::from_millis(1500);
/// Latency of [`pass_secret_passage`].
pub const PASS_PASSAGE_DELAY: Duration = Duration::from_millis(2000);
/// Latency of [`open_treasure_box`].
pub const OPEN_BOX_DELAY: Duration = Duration::from_millis(1000);

/// Probability that [`search_temple`] fails.
pub const SEARCH_FAILURE_THRESHOLD: f64 = 0.5;
/// Probability that [`solve_ancient_puzzle`] fails.
pub const PUZZLE_FAILURE_THRESHOLD: f64 = 0.3;
/// Probability that [`pass_secret_passage`] fails.
pub const PASSAGE_FAILURE_THRESHOLD: f64 = 0.2;

fn roll(
    rng: &mut dyn DeterministicRng,
    threshold: f64,
    failure: &str,
    success: &str,
) -> Result<String, StepError> {
    let draw = rng.next_f64();
    debug!(draw, threshold, "rolled");
    if draw < threshold {
        Err(StepError::RandomFailure(failure.to_owned()))
    } else {
        Ok(success.to_owned())
    }
}

/// Fetches the initial clue. Never fails.
pub async fn get_initial_clue(delay: &dyn Delay) -> String {
    delay.sleep(FETCH_CLUE_DELAY).await;
    messages::INITIAL_CLUE.to_owned()
}

/// Decodes the clue into the treasure's location.
///
/// # Errors
///
/// Returns `StepError::InvalidInput` if `clue` is absent or empty.
pub async fn decode_ancient_script(
    clue: Option<&str>,
    delay: &dyn Delay,
) -> Result<String, StepError> {
    delay.sleep(DECODE_SCRIPT_DELAY).await;
    match clue {
        Some(clue) if !clue.is_empty() => Ok(messages::SCRIPT_DECODED.to_owned()),
        _ => Err(StepError::InvalidInput(
            messages::NO_CLUE_TO_DECODE.to_owned(),
        )),
    }
}

/// Searches the given location for the chest.
///
/// # Errors
///
/// Returns `StepError::RandomFailure` with probability
/// [`SEARCH_FAILURE_THRESHOLD`].
pub async fn search_temple(
    location: &str,
    delay: &dyn Delay,
    rng: &mut dyn DeterministicRng,
) -> Result<String, StepError> {
    debug!(location, "searching");
    delay.sleep(SEARCH_TEMPLE_DELAY).await;
    roll(
        rng,
        SEARCH_FAILURE_THRESHOLD,
        messages::TEMPLE_GUARD,
        messages::CHEST_FOUND,
    )
}

/// Attempts the mechanism puzzle.
///
/// # Errors
///
/// Returns `StepError::RandomFailure` with probability
/// [`PUZZLE_FAILURE_THRESHOLD`].
pub async fn solve_ancient_puzzle(
    puzzle: &str,
    delay: &dyn Delay,
    rng: &mut dyn DeterministicRng,
) -> Result<String, StepError> {
    debug!(puzzle, "solving");
    delay.sleep(SOLVE_PUZZLE_DELAY).await;
    roll(
        rng,
        PUZZLE_FAILURE_THRESHOLD,
        messages::PUZZLE_TOO_HARD,
        messages::PUZZLE_SOLVED,
    )
}

/// Crosses the secret passage.
///
/// # Errors
///
/// Returns `StepError::RandomFailure` with probability
/// [`PASSAGE_FAILURE_THRESHOLD`].
pub async fn pass_secret_passage(
    passage: &str,
    delay: &dyn Delay,
    rng: &mut dyn DeterministicRng,
) -> Result<String, StepError> {
    debug!(passage, "crossing");
    delay.sleep(PASS_PASSAGE_DELAY).await;
    roll(
        rng,
        PASSAGE_FAILURE_THRESHOLD,
        messages::PASSAGE_TRAP,
        messages::PASSAGE_CROSSED,
    )
}

/// Opens the treasure box. Never fails.
pub async fn open_treasure_box(delay: &dyn Delay) -> String {
    delay.sleep(OPEN_BOX_DELAY).await;
    messages::TREASURE_FOUND.to_owned()
}
