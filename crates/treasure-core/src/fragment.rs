//! Narrative fragment source abstraction.

use async_trait::async_trait;

use crate::error::FragmentError;
use crate::scene::Scene;

/// Asynchronously resolves the narrative text for a scene.
#[async_trait]
pub trait FragmentSource: Send + Sync {
    /// Fetches the fragment for `scene`.
    async fn fetch(&self, scene: Scene) -> Result<String, FragmentError>;
}
