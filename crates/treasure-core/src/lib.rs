//! Treasure Core: shared abstractions.
//!
//! This crate defines the traits and types that the step library, the
//! orchestrator and the API all depend on. Collaborators with side effects
//! (time, randomness, fragment loading, rendering) sit behind traits so that
//! every run can be made deterministic.

pub mod clock;
pub mod delay;
pub mod error;
pub mod fragment;
pub mod presentation;
pub mod rng;
pub mod scene;
