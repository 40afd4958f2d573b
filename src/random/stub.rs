//! Deterministic sources for tests and replays.

use super::RandomSource;

/// Source that returns the same draw every time.
///
/// `real` returns the fixed value unchanged, even outside the requested
/// range, so tests can probe the exact boundaries of a distribution.
/// `int` rounds the value and clamps it into `[lower, upper]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedRandom {
    value: f64,
}

impl FixedRandom {
    pub fn new(value: f64) -> Self {
        Self { value }
    }

    pub fn value(&self) -> f64 {
        self.value
    }
}

impl RandomSource for FixedRandom {
    fn real(&mut self, _lower: f64, _upper: f64) -> f64 {
        self.value
    }

    fn int(&mut self, lower: i64, upper: i64) -> i64 {
        if upper < lower {
            return lower;
        }
        (self.value.round() as i64).clamp(lower, upper)
    }
}

/// Source that replays a fixed list of draws, wrapping around at the end.
///
/// An empty sequence yields the lower bound of every request.
#[derive(Debug, Clone, PartialEq)]
pub struct SequenceRandom {
    values: Vec<f64>,
    index: usize,
}

impl SequenceRandom {
    pub fn new(values: Vec<f64>) -> Self {
        Self { values, index: 0 }
    }

    fn next_value(&mut self) -> Option<f64> {
        if self.values.is_empty() {
            return None;
        }
        let value = self.values[self.index % self.values.len()];
        self.index += 1;
        Some(value)
    }
}

impl RandomSource for SequenceRandom {
    fn real(&mut self, lower: f64, _upper: f64) -> f64 {
        self.next_value().unwrap_or(lower)
    }

    fn int(&mut self, lower: i64, upper: i64) -> i64 {
        match self.next_value() {
            Some(value) if upper >= lower => (value.round() as i64).clamp(lower, upper),
            _ => lower,
        }
    }
}
