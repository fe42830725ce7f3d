//! Treasure hunt: step library.
//!
//! Stateless asynchronous steps. Each one waits a fixed simulated latency on
//! an injected [`Delay`](treasure_core::delay::Delay) and then resolves to
//! either a success payload or a [`StepError`](treasure_core::error::StepError).

pub mod messages;
pub mod stage;
pub mod steps;
