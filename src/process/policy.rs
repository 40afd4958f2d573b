//! Failure and sampling policies injected into a process.

use super::error::ProcessError;
use serde::{Deserialize, Serialize};

/// What a process does when an operation fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailPolicy {
    /// Log the error and panic
    Abort,

    /// Return the error to the caller
    #[default]
    Raise,
}

impl FailPolicy {
    /// Apply the policy to `error`.
    ///
    /// Under [`FailPolicy::Raise`] the error is handed back unchanged.
    ///
    /// # Panics
    ///
    /// Panics under [`FailPolicy::Abort`].
    pub fn escalate(self, error: ProcessError) -> ProcessError {
        match self {
            FailPolicy::Raise => error,
            FailPolicy::Abort => {
                tracing::error!(%error, "aborting process");
                panic!("process aborted: {error}");
            }
        }
    }
}

/// How [`State::step`](crate::core::State::step) treats a draw that the
/// accumulated probabilities fail to cover.
///
/// This only happens through floating-point rounding, on a state whose
/// distribution already passed validation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SamplingMode {
    /// Fail with [`ProcessError::SamplingFailure`]
    Strict,

    /// Select the last transition
    #[default]
    FallbackToLast,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raise_returns_error_unchanged() {
        let error = ProcessError::StateNotFound { id: 3 };
        assert_eq!(FailPolicy::Raise.escalate(error.clone()), error);
    }

    #[test]
    #[should_panic(expected = "process aborted")]
    fn abort_panics() {
        FailPolicy::Abort.escalate(ProcessError::StateNotFound { id: 3 });
    }

    #[test]
    fn policies_deserialize_from_snake_case() {
        let policy: FailPolicy = serde_json::from_str("\"abort\"").unwrap();
        let mode: SamplingMode = serde_json::from_str("\"fallback_to_last\"").unwrap();

        assert_eq!(policy, FailPolicy::Abort);
        assert_eq!(mode, SamplingMode::FallbackToLast);
    }
}
