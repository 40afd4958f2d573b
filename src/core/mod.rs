//! Core chain types.
//!
//! This module contains the building blocks of a process:
//! - Transitions as immutable weighted, costed edges
//! - States owning an ordered distribution over transitions
//! - Step history tracking
//!
//! States only select transitions; applying a selection (moving the current
//! state, accumulating cost) is the job of [`Process`](crate::process::Process).

mod history;
mod state;
mod transition;

pub use history::{StepHistory, StepRecord};
pub use state::{Selection, State, REAL_EPSILON};
pub use transition::Transition;
