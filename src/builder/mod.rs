//! Building processes from transition descriptors.
//!
//! This is the boundary with whatever layer supplies a topology. A topology
//! arrives as a list of [`TransitionDescriptor`]s, either built in code,
//! parsed one at a time, read from a line-oriented definition, or declared
//! with the [`chain!`](crate::chain) macro. [`ProcessBuilder`] attaches each
//! descriptor to its origin state and checks every distribution before
//! handing back a process that is safe to step.

pub mod descriptor;
pub mod error;
pub mod macros;
pub mod process;

pub use descriptor::TransitionDescriptor;
pub use error::{BuildError, DescriptorError};
pub use process::{ProcessBuilder, STATE_COUNT_KEY, TRANSITION_KEY};
