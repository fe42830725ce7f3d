//! Result of a single hunt.

use treasure_core::error::StepError;
use treasure_map::stage::Stage;

/// Prefix of the log text shown when the hunt fails.
pub const FAILURE_PREFIX: &str = "Quest failed: ";

/// How a hunt ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HuntOutcome {
    /// Every stage succeeded.
    Found {
        /// The final success string.
        treasure: String,
        /// Stages completed, in order.
        completed: Vec<Stage>,
    },
    /// A stage rejected and the hunt stopped there.
    Failed {
        /// The stage that rejected.
        stage: Stage,
        /// Why it rejected.
        error: StepError,
        /// Stages completed before the failure, in order.
        completed: Vec<Stage>,
    },
}

impl HuntOutcome {
    /// Stages that succeeded, in order.
    #[must_use]
    pub fn completed(&self) -> &[Stage] {
        match self {
            HuntOutcome::Found { completed, .. } | HuntOutcome::Failed { completed, .. } => {
                completed
            }
        }
    }

    /// Returns `true` if the treasure was found.
    #[must_use]
    pub fn is_found(&self) -> bool {
        matches!(self, HuntOutcome::Found { .. })
    }
}

/// Formats the log line shown on failure.
#[must_use]
pub fn failure_log(error: &StepError) -> String {
    format!("{FAILURE_PREFIX}{error}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_log_prefixes_reason() {
        let err = StepError::RandomFailure("trap".into());
        assert_eq!(failure_log(&err), "Quest failed: trap");
    }

    #[test]
    fn test_completed_is_exposed_for_both_outcomes() {
        let found = HuntOutcome::Found {
            treasure: "gold".into(),
            completed: Stage::ORDER.to_vec(),
        };
        let failed = HuntOutcome::Failed {
            stage: Stage::SearchTemple,
            error: StepError::RandomFailure("guard".into()),
            completed: vec![Stage::FetchClue, Stage::DecodeScript],
        };

        assert!(found.is_found());
        assert_eq!(found.completed().len(), 6);
        assert!(!failed.is_found());
        assert_eq!(failed.completed(), &[Stage::FetchClue, Stage::DecodeScript]);
    }
}
