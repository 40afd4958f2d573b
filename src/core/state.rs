//! States and cumulative-probability sampling.

use super::transition::Transition;
use crate::process::{ProcessError, SamplingMode};
use crate::random::RandomSource;

/// Default tolerance when checking that a distribution sums to one.
pub const REAL_EPSILON: f64 = 1e-12;

/// Transition chosen by [`State::step`], together with the draw that chose it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Selection<'a> {
    pub transition: &'a Transition,
    pub draw: f64,
}

/// A node of the chain holding an ordered distribution over outgoing
/// transitions.
///
/// Insertion order matters: sampling and [`State::transition_to`] both scan
/// transitions in the order they were added.
///
/// # Example
///
/// ```rust
/// use costchain::core::{State, Transition, REAL_EPSILON};
///
/// let mut state = State::new(0);
/// assert!(state.is_terminal());
/// assert!(!state.validate(REAL_EPSILON));
///
/// state.add_transition(Transition::new(0, 1, 0.6, 10.0));
/// state.add_transition(Transition::new(0, 0, 0.4, 1.0));
///
/// assert!(!state.is_terminal());
/// assert!(state.validate(REAL_EPSILON));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct State {
    id: u32,
    transitions: Vec<Transition>,
}

impl State {
    /// Create a state with no transitions.
    pub fn new(id: u32) -> Self {
        Self {
            id,
            transitions: Vec::new(),
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    /// Append a transition. Nothing is checked against the other
    /// transitions or against the states of the owning process.
    pub fn add_transition(&mut self, transition: Transition) {
        self.transitions.push(transition);
    }

    pub fn transitions(&self) -> &[Transition] {
        &self.transitions
    }

    pub fn num_transitions(&self) -> usize {
        self.transitions.len()
    }

    /// Transition at `index` in insertion order.
    pub fn transition(&self, index: usize) -> Result<&Transition, ProcessError> {
        self.transitions
            .get(index)
            .ok_or(ProcessError::TransitionOutOfRange {
                state: self.id,
                index,
                len: self.transitions.len(),
            })
    }

    /// First transition, in insertion order, that targets `target`.
    pub fn transition_to(&self, target: u32) -> Option<&Transition> {
        self.transitions.iter().find(|t| t.target() == target)
    }

    /// A state is terminal when no transition leaves it for another state.
    ///
    /// A state with no transitions at all is terminal.
    pub fn is_terminal(&self) -> bool {
        !self.transitions.iter().any(|t| t.target() != self.id)
    }

    pub fn probability_sum(&self) -> f64 {
        self.transitions.iter().map(Transition::probability).sum()
    }

    /// Whether the transition probabilities sum to one within `tolerance`.
    pub fn validate(&self, tolerance: f64) -> bool {
        (self.probability_sum() - 1.0).abs() < tolerance
    }

    /// Sample the next transition.
    ///
    /// Draws once from `random` in `[0, 1)` and returns the first transition
    /// whose running probability sum reaches the draw, so earlier transitions
    /// win ties. The state itself is never modified; the caller applies the
    /// selection.
    pub fn step<R>(
        &self,
        random: &mut R,
        sampling: SamplingMode,
        tolerance: f64,
    ) -> Result<Selection<'_>, ProcessError>
    where
        R: RandomSource + ?Sized,
    {
        if !self.validate(tolerance) {
            return Err(ProcessError::InvalidDistribution {
                state: self.id,
                sum: self.probability_sum(),
            });
        }

        let draw = random.real(0.0, 1.0);
        let mut cumulative = 0.0;

        for transition in &self.transitions {
            cumulative += transition.probability();
            if cumulative >= draw {
                return Ok(Selection { transition, draw });
            }
        }

        match (sampling, self.transitions.last()) {
            (SamplingMode::FallbackToLast, Some(transition)) => Ok(Selection { transition, draw }),
            _ => Err(ProcessError::SamplingFailure {
                state: self.id,
                draw,
                cumulative,
            }),
        }
    }
}
