//! Catalogue of hunt stages.

use serde::Serialize;
use treasure_core::scene::Scene;

/// One step of the hunt, in the order the orchestrator runs them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    /// Fetch the initial clue.
    FetchClue,
    /// Decode the ancient script.
    DecodeScript,
    /// Search the temple.
    SearchTemple,
    /// Solve the ancient mechanism puzzle.
    SolvePuzzle,
    /// Pass the secret passage.
    PassPassage,
    /// Open the treasure chest.
    OpenChest,
}

impl Stage {
    /// All stages in run order.
    pub const ORDER: [Stage; 6] = [
        Stage::FetchClue,
        Stage::DecodeScript,
        Stage::SearchTemple,
        Stage::SolvePuzzle,
        Stage::PassPassage,
        Stage::OpenChest,
    ];

    /// Scene shown once this stage succeeds.
    #[must_use]
    pub fn scene(self) -> Scene {
        match self {
            Stage::FetchClue => Scene::Library,
            Stage::DecodeScript => Scene::AncientScript,
            Stage::SearchTemple => Scene::Temple,
            Stage::SolvePuzzle => Scene::AncientMechanism,
            Stage::PassPassage => Scene::SecretPassage,
            Stage::OpenChest => Scene::TreasureChest,
        }
    }

    /// Name used in logs.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Stage::FetchClue => "fetch_clue",
            Stage::DecodeScript => "decode_script",
            Stage::SearchTemple => "search_temple",
            Stage::SolvePuzzle => "solve_puzzle",
            Stage::PassPassage => "pass_passage",
            Stage::OpenChest => "open_chest",
        }
    }
}
