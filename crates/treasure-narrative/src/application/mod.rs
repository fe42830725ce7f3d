//! Application services: the hunt itself, fragment display, timeline.

pub mod fragments;
pub mod orchestrator;
pub mod timeline;
