//! Filesystem implementation of the `FragmentSource` trait.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::debug;

use treasure_core::error::FragmentError;
use treasure_core::fragment::FragmentSource;
use treasure_core::scene::Scene;

/// File extension of fragment files.
pub const FRAGMENT_EXTENSION: &str = "txt";

/// Reads fragments from `<root>/<SceneId>.txt`.
#[derive(Debug, Clone)]
pub struct FileFragmentSource {
    root: PathBuf,
}

impl FileFragmentSource {
    /// Creates a source rooted at `root`.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Directory fragments are read from.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the fragment file for `scene`.
    #[must_use]
    pub fn path_for(&self, scene: Scene) -> PathBuf {
        self.root
            .join(scene.id())
            .with_extension(FRAGMENT_EXTENSION)
    }
}

#[async_trait]
impl FragmentSource for FileFragmentSource {
    async fn fetch(&self, scene: Scene) -> Result<String, FragmentError> {
        let path = self.path_for(scene);
        debug!(path = %path.display(), "reading fragment");
        tokio::fs::read_to_string(&path)
            .await
            .map_err(|e| match e.kind() {
                ErrorKind::NotFound => FragmentError::NotFound(scene),
                _ => FragmentError::Io {
                    scene,
                    message: e.to_string(),
                },
            })
    }
}
