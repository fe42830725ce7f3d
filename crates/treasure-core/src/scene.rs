//! Scene identifiers shared by backgrounds and narrative fragments.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SceneParseError;

/// A presentation scene. The identifier names both the background image and
/// the narrative fragment shown for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Scene {
    /// The initial clue was found.
    Library,
    /// The clue was decoded.
    AncientScript,
    /// The temple was searched.
    Temple,
    /// The mechanism puzzle was solved.
    AncientMechanism,
    /// The secret passage was crossed.
    SecretPassage,
    /// The chest was opened.
    TreasureChest,
    /// Any failure.
    Guard,
}

impl Scene {
    /// Every scene, in the order the page lists its fragments.
    pub const ALL: [Scene; 7] = [
        Scene::Library,
        Scene::AncientScript,
        Scene::Temple,
        Scene::Guard,
        Scene::TreasureChest,
        Scene::AncientMechanism,
        Scene::SecretPassage,
    ];

    /// Returns the stable identifier used for image and fragment lookup.
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Scene::Library => "Library",
            Scene::AncientScript => "AncientScript",
            Scene::Temple => "Temple",
            Scene::AncientMechanism => "AncientMechanism",
            Scene::SecretPassage => "SecretPassage",
            Scene::TreasureChest => "TreasureChest",
            Scene::Guard => "Guard",
        }
    }
}

impl fmt::Display for Scene {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Scene {
    type Err = SceneParseError;

    /// Parses an identifier case-insensitively, so `guard` and `Guard` both
    /// resolve to [`Scene::Guard`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Scene::ALL
            .into_iter()
            .find(|scene| scene.id().eq_ignore_ascii_case(s))
            .ok_or_else(|| SceneParseError(s.to_owned()))
    }
}
