//! Narrative fragment display and preloading.

use tracing::{debug, warn};
use treasure_core::fragment::FragmentSource;
use treasure_core::presentation::PresentationSink;
use treasure_core::scene::Scene;

/// Prefix of the log text written when a fragment cannot be loaded.
pub const CONTENT_UNAVAILABLE: &str = "Content unavailable";

/// Text used in place of a fragment that failed to preload.
pub const PRELOAD_FALLBACK: &str = "Unable to load content";

/// Loads the fragment for `scene` and shows it. On failure the log is
/// overwritten with a `CONTENT_UNAVAILABLE` message instead.
pub async fn show_fragment(
    scene: Scene,
    fragments: &dyn FragmentSource,
    sink: &mut dyn PresentationSink,
) {
    match fragments.fetch(scene).await {
        Ok(text) => sink.display_fragment(scene, &text),
        Err(e) => {
            warn!(%scene, error = %e, "fragment unavailable");
            sink.set_log(&format!("{CONTENT_UNAVAILABLE}: {e}"));
        }
    }
}

/// Loads every scene's fragment up front. Scenes that fail to load get
/// [`PRELOAD_FALLBACK`].
pub async fn preload_fragments(fragments: &dyn FragmentSource) -> Vec<(Scene, String)> {
    let mut loaded = Vec::with_capacity(Scene::ALL.len());
    for scene in Scene::ALL {
        let text = match fragments.fetch(scene).await {
            Ok(text) => {
                debug!(%scene, "fragment preloaded");
                text
            }
            Err(e) => {
                warn!(%scene, error = %e, "fragment preload failed");
                PRELOAD_FALLBACK.to_owned()
            }
        };
        loaded.push((scene, text));
    }
    loaded
}
