//! Step history tracking.
//!
//! Records every transition a process takes, in order, so a run can be
//! inspected or replayed after the fact.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single step.
///
/// # Example
///
/// ```rust
/// use costchain::core::StepRecord;
/// use chrono::Utc;
///
/// let record = StepRecord {
///     from: 0,
///     to: 1,
///     transition_id: 0,
///     cost: 10.0,
///     draw: 0.5,
///     timestamp: Utc::now(),
/// };
/// assert_eq!(record.to, 1);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StepRecord {
    /// State id the step started from
    pub from: u32,
    /// State id the step moved to
    pub to: u32,
    /// Id of the transition taken
    pub transition_id: u32,
    /// Cost added by the step
    pub cost: f64,
    /// Uniform draw that selected the transition
    pub draw: f64,
    /// When the step was taken
    pub timestamp: DateTime<Utc>,
}

/// Ordered history of steps.
///
/// # Example
///
/// ```rust
/// use costchain::core::{StepHistory, StepRecord};
/// use chrono::Utc;
///
/// let mut history = StepHistory::new();
/// history.push(StepRecord {
///     from: 0,
///     to: 1,
///     transition_id: 0,
///     cost: 2.0,
///     draw: 0.1,
///     timestamp: Utc::now(),
/// });
/// history.push(StepRecord {
///     from: 1,
///     to: 2,
///     transition_id: 1,
///     cost: 3.0,
///     draw: 0.9,
///     timestamp: Utc::now(),
/// });
///
/// assert_eq!(history.path(), vec![0, 1, 2]);
/// assert_eq!(history.total_cost(), 5.0);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StepHistory {
    records: Vec<StepRecord>,
}

impl StepHistory {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    pub fn push(&mut self, record: StepRecord) {
        self.records.push(record);
    }

    pub fn records(&self) -> &[StepRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// State ids visited: the starting state, then the target of each step.
    pub fn path(&self) -> Vec<u32> {
        let mut path = Vec::with_capacity(self.records.len() + 1);
        if let Some(first) = self.records.first() {
            path.push(first.from);
        }
        path.extend(self.records.iter().map(|r| r.to));
        path
    }

    /// Sum of step costs.
    pub fn total_cost(&self) -> f64 {
        self.records.iter().map(|r| r.cost).sum()
    }

    /// Time between the first and last recorded step.
    ///
    /// Returns `None` when empty.
    pub fn duration(&self) -> Option<Duration> {
        let (first, last) = (self.records.first()?, self.records.last()?);
        last.timestamp
            .signed_duration_since(first.timestamp)
            .to_std()
            .ok()
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }
}
