//! Fixed narrative strings produced by the steps.

/// Result of fetching the initial clue.
pub const INITIAL_CLUE: &str = "Found the first clue in the ancient library...";

/// Result of decoding the ancient script.
pub const SCRIPT_DECODED: &str = "Decoded! The treasure lies in an ancient temple...";
/// Decoding was attempted without a clue.
pub const NO_CLUE_TO_DECODE: &str = "No clue to decode!";

/// Result of searching the temple.
pub const CHEST_FOUND: &str = "Found a mysterious chest...";
/// The temple search ran into a guard.
pub const TEMPLE_GUARD: &str = "Oh no! Ran into the temple guard!";

/// Result of solving the mechanism puzzle.
pub const PUZZLE_SOLVED: &str = "Puzzle solved, a secret passage appears...";
/// The puzzle defeated the player.
pub const PUZZLE_TOO_HARD: &str = "The puzzle is too hard to solve!";

/// Result of crossing the secret passage.
pub const PASSAGE_CROSSED: &str =
    "Made it through the secret passage to where the treasure lies...";
/// A trap fired in the passage.
pub const PASSAGE_TRAP: &str = "A trap in the passage was triggered!";

/// Result of opening the treasure box.
pub const TREASURE_FOUND: &str = "Congratulations! You found the legendary treasure!";

/// Description handed to the puzzle step. Not derived from earlier steps.
pub const ANCIENT_PUZZLE: &str = "An ancient mechanism that must be solved before moving on";
