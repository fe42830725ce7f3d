//! File-backed narrative fragments.
//!
//! Each scene's fragment lives in `<root>/<SceneId>.txt`.

pub mod file_fragment_source;
