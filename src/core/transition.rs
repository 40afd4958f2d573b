//! Weighted, costed edges between states.

use serde::{Deserialize, Serialize};

/// Immutable edge from one state to a target state id.
///
/// The target is a plain id, not a reference. Transitions may form cycles
/// over ids (including self-loops) without any ownership cycle, and a target
/// is never checked against the states that actually exist.
///
/// # Example
///
/// ```rust
/// use costchain::core::Transition;
///
/// let t = Transition::new(0, 1, 0.6, 10.0);
/// assert_eq!(t.target(), 1);
/// assert_eq!(t.probability(), 0.6);
/// assert_eq!(t.cost(), 10.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Transition {
    id: u32,
    target: u32,
    probability: f64,
    cost: f64,
}

impl Transition {
    /// Create a transition.
    ///
    /// `id` is supplied by whoever builds the topology; descriptor-based
    /// builders use the origin state id.
    pub fn new(id: u32, target: u32, probability: f64, cost: f64) -> Self {
        Self {
            id,
            target,
            probability,
            cost,
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    /// Id of the state this transition moves to.
    pub fn target(&self) -> u32 {
        self.target
    }

    pub fn probability(&self) -> f64 {
        self.probability
    }

    /// Cost added to the process total when this transition is taken.
    pub fn cost(&self) -> f64 {
        self.cost
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors_return_constructor_values() {
        let t = Transition::new(3, 4, 0.25, -2.5);

        assert_eq!(t.id(), 3);
        assert_eq!(t.target(), 4);
        assert_eq!(t.probability(), 0.25);
        assert_eq!(t.cost(), -2.5);
    }

    #[test]
    fn transition_serializes_correctly() {
        let t = Transition::new(0, 1, 0.6, 10.0);
        let json = serde_json::to_string(&t).unwrap();
        let deserialized: Transition = serde_json::from_str(&json).unwrap();
        assert_eq!(t, deserialized);
    }
}
