//! Shared test doubles for the treasure hunt engine.

mod clock;
mod delay;
mod fragments;
mod rng;

pub use clock::FixedClock;
pub use delay::RecordingDelay;
pub use fragments::{FailingFragmentSource, InMemoryFragmentSource};
pub use rng::{FixedRng, SequenceRng};
