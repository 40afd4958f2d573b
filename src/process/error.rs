//! Process error types.

use thiserror::Error;

/// Errors raised while looking up or stepping a process.
///
/// These are configuration or programming errors, never expected runtime
/// conditions. Nothing is retried internally.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProcessError {
    #[error("Transition index {index} out of range for state {state} ({len} transitions)")]
    TransitionOutOfRange { state: u32, index: usize, len: usize },

    #[error("State {id} not found")]
    StateNotFound { id: u32 },

    #[error("State index {index} out of range ({len} states)")]
    StateIndexOutOfRange { index: usize, len: usize },

    #[error("State {id} already exists")]
    DuplicateState { id: u32 },

    #[error("Transition probabilities of state {state} sum to {sum}, expected 1")]
    InvalidDistribution { state: u32, sum: f64 },

    #[error("Draw {draw} not covered by state {state} (cumulative probability {cumulative})")]
    SamplingFailure {
        state: u32,
        draw: f64,
        cumulative: f64,
    },
}
