//! Process configuration.

use super::policy::{FailPolicy, SamplingMode};
use crate::core::REAL_EPSILON;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Largest tolerance a process accepts, exclusive.
pub const MAX_TOLERANCE: f64 = 1e-6;

/// Errors that can occur when loading a [`ProcessConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse process config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Tolerance must be positive and below {max}, got {tolerance}", max = MAX_TOLERANCE)]
    InvalidTolerance { tolerance: f64 },
}

/// Settings injected into a process at construction.
///
/// Every field has a default, so a partial JSON document is enough.
///
/// # Example
///
/// ```rust
/// use costchain::process::{FailPolicy, ProcessConfig, SamplingMode};
///
/// let config = ProcessConfig::from_json(r#"{ "sampling": "strict", "seed": 7 }"#).unwrap();
///
/// assert_eq!(config.sampling, SamplingMode::Strict);
/// assert_eq!(config.fail_policy, FailPolicy::Raise);
/// assert_eq!(config.seed, Some(7));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProcessConfig {
    /// Allowed distance of a probability sum from one
    pub tolerance: f64,

    /// What to do when an operation fails
    pub fail_policy: FailPolicy,

    /// How uncovered draws are handled
    pub sampling: SamplingMode,

    /// Keep a record of every step taken
    pub record_history: bool,

    /// Seed for the default random source; entropy when absent
    pub seed: Option<u64>,
}

impl Default for ProcessConfig {
    fn default() -> Self {
        Self {
            tolerance: REAL_EPSILON,
            fail_policy: FailPolicy::default(),
            sampling: SamplingMode::default(),
            record_history: false,
            seed: None,
        }
    }
}

impl ProcessConfig {
    /// Parse and check a JSON config document.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.check()?;
        Ok(config)
    }

    /// Reject settings no process can run with.
    ///
    /// The tolerance must lie in `(0, MAX_TOLERANCE)`.
    pub fn check(&self) -> Result<(), ConfigError> {
        let tolerance = self.tolerance;
        if tolerance.is_nan() || tolerance <= 0.0 || tolerance >= MAX_TOLERANCE {
            return Err(ConfigError::InvalidTolerance { tolerance });
        }
        Ok(())
    }

    pub fn with_fail_policy(mut self, policy: FailPolicy) -> Self {
        self.fail_policy = policy;
        self
    }

    pub fn with_sampling(mut self, sampling: SamplingMode) -> Self {
        self.sampling = sampling;
        self
    }

    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    pub fn with_history(mut self, record: bool) -> Self {
        self.record_history = record;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
