//! Builder for constructing processes from transition descriptors.

use crate::builder::descriptor::TransitionDescriptor;
use crate::builder::error::BuildError;
use crate::process::{Process, ProcessConfig};
use crate::random::{DefaultRandom, RandomSource};
use std::collections::HashSet;
use stillwater::validation::Validation;

/// Definition key that sets the number of states.
pub const STATE_COUNT_KEY: &str = "N";

/// Definition key that introduces a transition descriptor.
pub const TRANSITION_KEY: &str = "A";

/// Builder for constructing processes with a fluent API.
///
/// `build` resolves each descriptor onto its origin state and then checks
/// every state that has transitions, reporting all invalid distributions
/// together. Targets are not checked against the existing states.
///
/// # Example
///
/// ```rust
/// use costchain::builder::ProcessBuilder;
/// use costchain::random::FixedRandom;
///
/// let mut process = ProcessBuilder::new()
///     .states(2)
///     .transition(0, 1, 0.6, 10.0)
///     .transition(0, 0, 0.4, 1.0)
///     .build_with_random(FixedRandom::new(0.7))
///     .unwrap();
///
/// process.step().unwrap();
/// assert_eq!(process.current_state_id(), 0);
/// assert_eq!(process.total_cost(), 1.0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ProcessBuilder {
    states: u32,
    config: ProcessConfig,
    descriptors: Vec<TransitionDescriptor>,
}

impl ProcessBuilder {
    /// Create a new builder with no states.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of states, with ids `0..n`.
    pub fn states(mut self, n: u32) -> Self {
        self.states = n;
        self
    }

    pub fn config(mut self, config: ProcessConfig) -> Self {
        self.config = config;
        self
    }

    pub fn descriptor(mut self, descriptor: TransitionDescriptor) -> Self {
        self.descriptors.push(descriptor);
        self
    }

    pub fn descriptors<I>(mut self, descriptors: I) -> Self
    where
        I: IntoIterator<Item = TransitionDescriptor>,
    {
        self.descriptors.extend(descriptors);
        self
    }

    pub fn transition(self, origin: u32, target: u32, probability: f64, cost: f64) -> Self {
        self.descriptor(TransitionDescriptor::new(origin, target, probability, cost))
    }

    /// Add a descriptor from its textual form.
    pub fn parse_descriptor(self, text: &str) -> Result<Self, BuildError> {
        let descriptor = text.parse::<TransitionDescriptor>()?;
        Ok(self.descriptor(descriptor))
    }

    /// Read a line-oriented definition.
    ///
    /// Each line is a key and a value separated by whitespace:
    /// `N <count>` sets the state count and `A <origin> <target> <p> <cost>`
    /// adds a transition. Blank lines and lines starting with `#` are
    /// ignored; lines without a value are skipped with a warning.
    ///
    /// # Example
    ///
    /// ```rust
    /// use costchain::builder::ProcessBuilder;
    ///
    /// let process = ProcessBuilder::from_definition(
    ///     "N 2\nA 0 1 0.6 10.0\nA 0 0 0.4 1.0\n",
    /// )
    /// .unwrap()
    /// .build()
    /// .unwrap();
    ///
    /// assert_eq!(process.num_states(), 2);
    /// assert_eq!(process.state(0).unwrap().num_transitions(), 2);
    /// ```
    pub fn from_definition(definition: &str) -> Result<Self, BuildError> {
        let mut builder = Self::new();

        for (index, raw) in definition.lines().enumerate() {
            let line = index + 1;
            let text = raw.trim();
            if text.is_empty() || text.starts_with('#') {
                continue;
            }

            let Some((key, value)) = text.split_once(char::is_whitespace) else {
                tracing::warn!(line, text, "skipping definition line without a value");
                continue;
            };
            let value = value.trim();

            match key {
                STATE_COUNT_KEY => {
                    let count = value
                        .parse::<u32>()
                        .map_err(|_| BuildError::InvalidStateCount {
                            value: value.to_string(),
                            line,
                        })?;
                    builder = builder.states(count);
                }
                TRANSITION_KEY => {
                    let descriptor = value
                        .parse::<TransitionDescriptor>()
                        .map_err(|source| BuildError::Line { line, source })?;
                    builder = builder.descriptor(descriptor);
                }
                other => {
                    return Err(BuildError::UnknownKey {
                        key: other.to_string(),
                        line,
                    })
                }
            }
        }

        tracing::debug!(
            states = builder.states,
            transitions = builder.descriptors.len(),
            "loaded process definition"
        );

        Ok(builder)
    }

    /// Build with the default random source, seeded from `config.seed`
    /// when present.
    pub fn build(self) -> Result<Process<DefaultRandom>, BuildError> {
        let random = match self.config.seed {
            Some(seed) => DefaultRandom::seeded(seed),
            None => DefaultRandom::from_entropy(),
        };
        self.build_with_random(random)
    }

    /// Build with the given random source.
    ///
    /// Fails when the config does not pass [`ProcessConfig::check`], a
    /// descriptor names an origin outside `0..states`, or any state with
    /// transitions has an invalid distribution.
    pub fn build_with_random<R: RandomSource>(self, random: R) -> Result<Process<R>, BuildError> {
        let mut process = Process::with_random(self.states, random, self.config)?;

        // Freshly built states sit at the position matching their id.
        for descriptor in &self.descriptors {
            let Some(origin) = process.states_mut().get_mut(descriptor.origin as usize) else {
                return Err(BuildError::UnknownOrigin {
                    origin: descriptor.origin,
                    states: self.states,
                });
            };
            origin.add_transition(descriptor.to_transition());
        }

        let ids: HashSet<u32> = process.states().iter().map(|s| s.id()).collect();
        for descriptor in &self.descriptors {
            if !ids.contains(&descriptor.target) {
                tracing::warn!(
                    origin = descriptor.origin,
                    target = descriptor.target,
                    "transition targets a state that does not exist"
                );
            }
        }

        match process.validate_all() {
            Validation::Success(_) => Ok(process),
            Validation::Failure(errors) => Err(BuildError::InvalidDistributions(
                errors.iter().cloned().collect(),
            )),
        }
    }
}
