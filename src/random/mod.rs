//! Uniform random sources used to sample transitions.
//!
//! Every [`Process`](crate::process::Process) owns its own source, so two
//! processes never share an engine and tests can inject deterministic stubs
//! without touching global state.

mod stub;

pub use stub::{FixedRandom, SequenceRandom};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Pluggable uniform random generator.
///
/// Implementations are stateful and not synchronized. A source shared
/// between threads must be serialized by the caller; the usual approach is
/// one source per consumer.
pub trait RandomSource {
    /// Uniform real in `[lower, upper)`.
    fn real(&mut self, lower: f64, upper: f64) -> f64;

    /// Uniform integer in `[lower, upper]`, both ends inclusive.
    fn int(&mut self, lower: i64, upper: i64) -> i64;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn real(&mut self, lower: f64, upper: f64) -> f64 {
        (**self).real(lower, upper)
    }

    fn int(&mut self, lower: i64, upper: i64) -> i64 {
        (**self).int(lower, upper)
    }
}

impl<R: RandomSource + ?Sized> RandomSource for Box<R> {
    fn real(&mut self, lower: f64, upper: f64) -> f64 {
        (**self).real(lower, upper)
    }

    fn int(&mut self, lower: i64, upper: i64) -> i64 {
        (**self).int(lower, upper)
    }
}

/// Default source backed by [`StdRng`].
///
/// The engine is seeded once at construction. Each draw builds a fresh
/// bounded range over that same engine; it is never reseeded.
///
/// # Example
///
/// ```rust
/// use costchain::random::{DefaultRandom, RandomSource};
///
/// let mut a = DefaultRandom::seeded(7);
/// let mut b = DefaultRandom::seeded(7);
///
/// let x = a.real(0.0, 1.0);
/// assert!((0.0..1.0).contains(&x));
/// assert_eq!(x, b.real(0.0, 1.0));
/// ```
#[derive(Debug, Clone)]
pub struct DefaultRandom {
    engine: StdRng,
}

impl DefaultRandom {
    /// Seed from operating system entropy.
    pub fn from_entropy() -> Self {
        Self {
            engine: StdRng::from_entropy(),
        }
    }

    /// Seed deterministically, for reproducible runs.
    pub fn seeded(seed: u64) -> Self {
        Self {
            engine: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for DefaultRandom {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl RandomSource for DefaultRandom {
    /// Returns `lower` when the range is empty or its width is not a
    /// finite `f64` (NaN or infinite bounds, overflowing spans).
    fn real(&mut self, lower: f64, upper: f64) -> f64 {
        if upper.is_nan() || upper <= lower || !(upper - lower).is_finite() {
            return lower;
        }
        self.engine.gen_range(lower..upper)
    }

    fn int(&mut self, lower: i64, upper: i64) -> i64 {
        if upper < lower {
            return lower;
        }
        self.engine.gen_range(lower..=upper)
    }
}
