//! Errors for descriptors and process builders.

use crate::process::{ConfigError, ProcessError};
use thiserror::Error;

/// Errors that can occur when parsing a transition descriptor.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum DescriptorError {
    #[error("Expected 4 fields (origin target probability cost), found {found}")]
    WrongArity { found: usize },

    #[error("Invalid {field} '{value}'")]
    InvalidField { field: &'static str, value: String },
}

/// Errors that can occur when building a process.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Invalid transition descriptor: {0}")]
    Descriptor(#[from] DescriptorError),

    #[error("Line {line}: {source}")]
    Line {
        line: usize,
        #[source]
        source: DescriptorError,
    },

    #[error("Unknown definition key '{key}' on line {line}")]
    UnknownKey { key: String, line: usize },

    #[error("Invalid state count '{value}' on line {line}")]
    InvalidStateCount { value: String, line: usize },

    #[error("Transition origin {origin} is not one of the {states} states")]
    UnknownOrigin { origin: u32, states: u32 },

    #[error("Invalid process config: {0}")]
    Config(#[from] ConfigError),

    #[error("{} state(s) have transition probabilities that do not sum to 1", .0.len())]
    InvalidDistributions(Vec<ProcessError>),
}
