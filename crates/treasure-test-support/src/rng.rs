//! Test RNG: deterministic `DeterministicRng` implementations for tests.

use treasure_core::rng::DeterministicRng;

/// An RNG that returns the same value on every draw. `FixedRng(0.9)` makes
/// every randomized step succeed; `FixedRng(0.0)` makes every one fail.
#[derive(Debug, Clone, Copy)]
pub struct FixedRng(pub f64);

impl DeterministicRng for FixedRng {
    fn next_f64(&mut self) -> f64 {
        self.0
    }
}

/// An RNG that returns values from a predetermined sequence. Panics if the
/// sequence is exhausted, which also catches steps drawing more than once.
#[derive(Debug)]
pub struct SequenceRng {
    values: Vec<f64>,
    index: usize,
}

impl SequenceRng {
    /// Create a new `SequenceRng` with the given values.
    #[must_use]
    pub fn new(values: Vec<f64>) -> Self {
        Self { values, index: 0 }
    }

    /// Number of values drawn so far.
    #[must_use]
    pub fn draws(&self) -> usize {
        self.index
    }
}

impl DeterministicRng for SequenceRng {
    fn next_f64(&mut self) -> f64 {
        let val = self.values[self.index];
        self.index += 1;
        val
    }
}
