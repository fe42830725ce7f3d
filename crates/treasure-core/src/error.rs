//! Domain error types.

use thiserror::Error;

use crate::scene::Scene;

/// Rejection produced by a step of the hunt.
///
/// The `Display` form is the bare human-readable reason; callers add their own
/// prefix when presenting it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StepError {
    /// The step was given input it cannot work with.
    #[error("{0}")]
    InvalidInput(String),

    /// The step's random draw fell below its failure threshold.
    #[error("{0}")]
    RandomFailure(String),
}

impl StepError {
    /// Returns the reason carried by either kind.
    #[must_use]
    pub fn reason(&self) -> &str {
        match self {
            StepError::InvalidInput(reason) | StepError::RandomFailure(reason) => reason,
        }
    }
}

/// Failure to load a narrative fragment.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FragmentError {
    /// No fragment exists for the scene.
    #[error("fragment not found: {0}")]
    NotFound(Scene),

    /// The fragment exists but could not be read.
    #[error("failed to load fragment {scene}: {message}")]
    Io {
        /// The scene whose fragment failed to load.
        scene: Scene,
        /// Underlying transport error.
        message: String,
    },
}

/// An identifier that names no known scene.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown scene: {0}")]
pub struct SceneParseError(pub String);
