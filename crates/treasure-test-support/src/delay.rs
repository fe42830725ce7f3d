//! Test delay: records requested waits and returns immediately.

use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use treasure_core::delay::Delay;

/// A delay that never sleeps and remembers every duration it was asked for.
#[derive(Debug, Default)]
pub struct RecordingDelay {
    requested: Mutex<Vec<Duration>>,
}

impl RecordingDelay {
    /// Creates an empty recording delay.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of all requested durations, in call order.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn requested(&self) -> Vec<Duration> {
        self.requested.lock().unwrap().clone()
    }

    /// Sum of all requested durations.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn total(&self) -> Duration {
        self.requested.lock().unwrap().iter().sum()
    }
}

#[async_trait]
impl Delay for RecordingDelay {
    async fn sleep(&self, duration: Duration) {
        self.requested.lock().unwrap().push(duration);
    }
}
