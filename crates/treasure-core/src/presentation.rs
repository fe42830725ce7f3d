//! Presentation sink and the state it maintains.

use serde::Serialize;

use crate::scene::Scene;

/// The surface the orchestrator renders to. Each call overwrites the
/// corresponding part of the display.
pub trait PresentationSink: Send {
    /// Switches the background image.
    fn set_background(&mut self, scene: Scene);

    /// Replaces the event log text.
    fn set_log(&mut self, text: &str);

    /// Shows the narrative fragment for `scene`.
    fn display_fragment(&mut self, scene: Scene, text: &str);
}

/// A narrative fragment currently on screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayedFragment {
    /// The scene the fragment belongs to.
    pub scene: Scene,
    /// The fragment text.
    pub text: String,
}

/// One call made against a [`PresentationSink`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PresentationUpdate {
    /// `set_background` was called.
    Background {
        /// The new background.
        scene: Scene,
    },
    /// `set_log` was called.
    Log {
        /// The new log text.
        text: String,
    },
    /// `display_fragment` was called.
    Fragment {
        /// The scene whose fragment is shown.
        scene: Scene,
        /// The fragment text.
        text: String,
    },
}

/// Current state of the presentation surface.
///
/// Every setter overwrites; nothing is merged or accumulated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PresentationState {
    /// Current background, if any has been set.
    pub background: Option<Scene>,
    /// Current log text.
    pub log: String,
    /// Fragment currently displayed.
    pub fragment: Option<DisplayedFragment>,
}

impl PresentationState {
    /// Applies a recorded update to this state.
    pub fn apply(&mut self, update: &PresentationUpdate) {
        match update {
            PresentationUpdate::Background { scene } => self.background = Some(*scene),
            PresentationUpdate::Log { text } => text.clone_into(&mut self.log),
            PresentationUpdate::Fragment { scene, text } => {
                self.fragment = Some(DisplayedFragment {
                    scene: *scene,
                    text: text.clone(),
                });
            }
        }
    }
}

impl PresentationSink for PresentationState {
    fn set_background(&mut self, scene: Scene) {
        self.background = Some(scene);
    }

    fn set_log(&mut self, text: &str) {
        text.clone_into(&mut self.log);
    }

    fn display_fragment(&mut self, scene: Scene, text: &str) {
        self.fragment = Some(DisplayedFragment {
            scene,
            text: text.to_owned(),
        });
    }
}
