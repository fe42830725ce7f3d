//! Test fragment sources: in-memory and failing `FragmentSource` doubles.

use std::collections::HashMap;

use async_trait::async_trait;
use treasure_core::error::FragmentError;
use treasure_core::fragment::FragmentSource;
use treasure_core::scene::Scene;

/// A fragment source backed by a map. Scenes without an entry yield
/// `FragmentError::NotFound`.
#[derive(Debug, Default)]
pub struct InMemoryFragmentSource {
    fragments: HashMap<Scene, String>,
}

impl InMemoryFragmentSource {
    /// Creates an empty source.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a source with a fragment for every scene. The text of each is
    /// `"<SceneId> fragment"`.
    #[must_use]
    pub fn with_all_scenes() -> Self {
        Scene::ALL
            .into_iter()
            .fold(Self::new(), |source, scene| {
                source.with(scene, &format!("{scene} fragment"))
            })
    }

    /// Adds or replaces the fragment for `scene`.
    #[must_use]
    pub fn with(mut self, scene: Scene, text: &str) -> Self {
        self.fragments.insert(scene, text.to_owned());
        self
    }

    /// Removes the fragment for `scene`.
    #[must_use]
    pub fn without(mut self, scene: Scene) -> Self {
        self.fragments.remove(&scene);
        self
    }
}

#[async_trait]
impl FragmentSource for InMemoryFragmentSource {
    async fn fetch(&self, scene: Scene) -> Result<String, FragmentError> {
        self.fragments
            .get(&scene)
            .cloned()
            .ok_or(FragmentError::NotFound(scene))
    }
}

/// A fragment source that always fails with a transport error.
#[derive(Debug)]
pub struct FailingFragmentSource;

#[async_trait]
impl FragmentSource for FailingFragmentSource {
    async fn fetch(&self, scene: Scene) -> Result<String, FragmentError> {
        Err(FragmentError::Io {
            scene,
            message: "connection refused".into(),
        })
    }
}
