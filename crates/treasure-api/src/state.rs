//! Shared application state.

use std::sync::Arc;

use treasure_core::clock::Clock;
use treasure_core::delay::Delay;
use treasure_core::fragment::FragmentSource;
use treasure_core::rng::{DeterministicRng, SystemRng};

/// Builds a fresh RNG for each hunt, so concurrent hunts never share one.
pub type RngFactory = Arc<dyn Fn() -> Box<dyn DeterministicRng> + Send + Sync>;

/// Application state shared across all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// Timestamps timeline entries.
    pub clock: Arc<dyn Clock + Send + Sync>,
    /// Simulated step latency.
    pub delay: Arc<dyn Delay>,
    /// Per-hunt RNG factory.
    pub rng_factory: RngFactory,
    /// Where narrative fragments come from.
    pub fragments: Arc<dyn FragmentSource>,
}

impl AppState {
    /// Create new application state.
    #[must_use]
    pub fn new(
        clock: Arc<dyn Clock + Send + Sync>,
        delay: Arc<dyn Delay>,
        rng_factory: RngFactory,
        fragments: Arc<dyn FragmentSource>,
    ) -> Self {
        Self {
            clock,
            delay,
            rng_factory,
            fragments,
        }
    }

    /// RNG factory that seeds every hunt from OS entropy, or replays the same
    /// sequence for every hunt when `seed` is set.
    #[must_use]
    pub fn system_rng_factory(seed: Option<u64>) -> RngFactory {
        Arc::new(move || -> Box<dyn DeterministicRng> {
            match seed {
                Some(seed) => Box::new(SystemRng::seeded(seed)),
                None => Box::new(SystemRng::from_entropy()),
            }
        })
    }
}
