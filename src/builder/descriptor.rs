//! Transition descriptors: the four-field records a topology is built from.

use crate::builder::error::DescriptorError;
use crate::core::Transition;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One transition of a topology, as supplied by a loader.
///
/// The textual form is four whitespace-separated tokens:
/// `origin target probability cost`.
///
/// # Example
///
/// ```rust
/// use costchain::builder::TransitionDescriptor;
///
/// let descriptor: TransitionDescriptor = "0 1 0.6 10.0".parse().unwrap();
///
/// assert_eq!(descriptor.origin, 0);
/// assert_eq!(descriptor.target, 1);
/// assert_eq!(descriptor.probability, 0.6);
/// assert_eq!(descriptor.cost, 10.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TransitionDescriptor {
    pub origin: u32,
    pub target: u32,
    pub probability: f64,
    pub cost: f64,
}

impl TransitionDescriptor {
    pub fn new(origin: u32, target: u32, probability: f64, cost: f64) -> Self {
        Self {
            origin,
            target,
            probability,
            cost,
        }
    }

    /// The transition this descriptor adds to its origin state.
    ///
    /// The transition id is the origin state id.
    pub fn to_transition(&self) -> Transition {
        Transition::new(self.origin, self.target, self.probability, self.cost)
    }
}

fn parse_id(field: &'static str, token: &str) -> Result<u32, DescriptorError> {
    token.parse().map_err(|_| DescriptorError::InvalidField {
        field,
        value: token.to_string(),
    })
}

fn parse_real(field: &'static str, token: &str) -> Result<f64, DescriptorError> {
    match token.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(DescriptorError::InvalidField {
            field,
            value: token.to_string(),
        }),
    }
}

impl FromStr for TransitionDescriptor {
    type Err = DescriptorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tokens: Vec<&str> = s.split_whitespace().collect();
        let [origin, target, probability, cost] = tokens.as_slice() else {
            return Err(DescriptorError::WrongArity {
                found: tokens.len(),
            });
        };

        let probability_value = parse_real("probability", probability)?;
        if !(0.0..=1.0).contains(&probability_value) {
            return Err(DescriptorError::InvalidField {
                field: "probability",
                value: probability.to_string(),
            });
        }

        Ok(Self {
            origin: parse_id("origin", origin)?,
            target: parse_id("target", target)?,
            probability: probability_value,
            cost: parse_real("cost", cost)?,
        })
    }
}

impl fmt::Display for TransitionDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.origin, self.target, self.probability, self.cost
        )
    }
}
