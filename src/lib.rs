//! Costchain: a cost-weighted discrete-state Markov process engine
//!
//! A process holds a fixed set of states. Each state carries an ordered,
//! probability-weighted set of outgoing transitions, and each transition
//! carries a cost. Stepping samples the current state's distribution,
//! moves to the selected target and adds the transition's cost.
//!
//! # Core Concepts
//!
//! - **Transition**: Immutable weighted, costed edge to a target state id
//! - **State**: Ordered distribution over transitions, sampled by cumulative probability
//! - **Process**: Owner of all states, the current position and the accumulated cost
//! - **RandomSource**: Pluggable uniform generator, injected per process
//!
//! # Example
//!
//! ```rust
//! use costchain::builder::ProcessBuilder;
//! use costchain::random::FixedRandom;
//!
//! let mut process = ProcessBuilder::new()
//!     .states(2)
//!     .transition(0, 1, 0.6, 10.0)
//!     .transition(0, 0, 0.4, 1.0)
//!     .build_with_random(FixedRandom::new(0.5))
//!     .unwrap();
//!
//! assert!(!process.is_terminal().unwrap());
//!
//! process.step().unwrap();
//!
//! assert_eq!(process.current_state_id(), 1);
//! assert_eq!(process.total_cost(), 10.0);
//! assert!(process.is_terminal().unwrap());
//! ```

pub mod builder;
pub mod core;
pub mod process;
pub mod random;

// Re-export commonly used types
pub use builder::{BuildError, ProcessBuilder, TransitionDescriptor};
pub use crate::core::{State, Transition};
pub use process::{FailPolicy, Process, ProcessConfig, ProcessError, SamplingMode};
pub use random::{DefaultRandom, RandomSource};
