//! Process execution.
//!
//! A [`Process`] owns a set of states, tracks the current state and the
//! accumulated cost, and advances one step at a time by sampling the
//! current state's distribution.
//!
//! Failure handling and random sampling are injected at construction:
//! - [`FailPolicy`] decides whether errors are returned or abort
//! - [`SamplingMode`] decides how rounding gaps in a distribution are treated
//! - any [`RandomSource`](crate::random::RandomSource) supplies the draws
//!
//! Nothing here is synchronized. A process shared between threads needs one
//! exclusive lock around every mutating call.

mod config;
mod error;
mod machine;
mod policy;

pub use config::{ConfigError, ProcessConfig, MAX_TOLERANCE};
pub use error::ProcessError;
pub use machine::{Process, RunSummary};
pub use policy::{FailPolicy, SamplingMode};
