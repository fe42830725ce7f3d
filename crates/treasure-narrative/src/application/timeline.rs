//! A presentation sink that keeps a timestamped history of every update.

use chrono::{DateTime, Utc};
use serde::Serialize;
use treasure_core::clock::Clock;
use treasure_core::presentation::{PresentationSink, PresentationState, PresentationUpdate};
use treasure_core::scene::Scene;

/// One timestamped update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimelineEntry {
    /// When the update was applied.
    pub at: DateTime<Utc>,
    /// The update itself.
    #[serde(flatten)]
    pub update: PresentationUpdate,
}

/// Tracks the current presentation state and the ordered list of updates
/// that produced it.
pub struct TimelineSink<'c> {
    clock: &'c dyn Clock,
    state: PresentationState,
    entries: Vec<TimelineEntry>,
}

impl<'c> TimelineSink<'c> {
    /// Creates an empty timeline stamped by `clock`.
    #[must_use]
    pub fn new(clock: &'c dyn Clock) -> Self {
        Self {
            clock,
            state: PresentationState::default(),
            entries: Vec::new(),
        }
    }

    /// Current presentation state.
    #[must_use]
    pub fn state(&self) -> &PresentationState {
        &self.state
    }

    /// Every update so far, oldest first.
    #[must_use]
    pub fn entries(&self) -> &[TimelineEntry] {
        &self.entries
    }

    /// Consumes the sink, returning final state and history.
    #[must_use]
    pub fn into_parts(self) -> (PresentationState, Vec<TimelineEntry>) {
        (self.state, self.entries)
    }

    fn record(&mut self, update: PresentationUpdate) {
        self.state.apply(&update);
        self.entries.push(TimelineEntry {
            at: self.clock.now(),
            update,
        });
    }
}

impl PresentationSink for TimelineSink<'_> {
    fn set_background(&mut self, scene: Scene) {
        self.record(PresentationUpdate::Background { scene });
    }

    fn set_log(&mut self, text: &str) {
        self.record(PresentationUpdate::Log {
            text: text.to_owned(),
        });
    }

    fn display_fragment(&mut self, scene: Scene, text: &str) {
        self.record(PresentationUpdate::Fragment {
            scene,
            text: text.to_owned(),
        });
    }
}
