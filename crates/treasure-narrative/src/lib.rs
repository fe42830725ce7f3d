//! Treasure hunt: narrative orchestration.
//!
//! Runs the hunt's steps in order, renders every success and the single
//! failure path to a presentation sink, and loads the narrative fragments
//! that go with each scene.

pub mod application;
pub mod domain;
