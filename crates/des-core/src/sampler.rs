//! Duration samplers.
//!
//! The engine treats a [`Sampler`] as an opaque source of durations.  Anything
//! that schedules from a sample passes it through [`clamp_duration`] first, so
//! zero, negative and NaN samples still move time strictly forward.

use rand_distr::{Distribution, Exp, Normal};

use crate::{DesError, DesResult, SimRng};

/// Smallest duration ever scheduled.  Non-positive samples are clamped to it.
pub const EPSILON: f64 = 1e-9;

/// Map a raw sample to a strictly positive duration.
#[inline]
pub fn clamp_duration(dt: f64) -> f64 {
    // `!(dt > 0.0)` also catches NaN.
    if !(dt > 0.0) { EPSILON } else { dt }
}

/// A source of (nominally non-negative) random durations.
pub trait Sampler {
    fn sample(&mut self) -> f64;
}

impl<S: Sampler + ?Sized> Sampler for Box<S> {
    fn sample(&mut self) -> f64 {
        (**self).sample()
    }
}

// ── Deterministic samplers ────────────────────────────────────────────────────

/// Always returns the same value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Fixed(pub f64);

impl Sampler for Fixed {
    fn sample(&mut self) -> f64 {
        self.0
    }
}

/// Returns the given values in order, wrapping around at the end.
#[derive(Clone, Debug)]
pub struct Cycle {
    values: Vec<f64>,
    next:   usize,
}

impl Cycle {
    /// # Panics
    /// Panics if `values` is empty.
    pub fn new(values: Vec<f64>) -> Self {
        assert!(!values.is_empty(), "Cycle sampler needs at least one value");
        Self { values, next: 0 }
    }
}

impl Sampler for Cycle {
    fn sample(&mut self) -> f64 {
        let v = self.values[self.next];
        self.next = (self.next + 1) % self.values.len();
        v
    }
}

// ── Random samplers ───────────────────────────────────────────────────────────

/// Negative-exponential durations with the given mean.
#[derive(Clone, Debug)]
pub struct Negexp {
    dist: Exp<f64>,
    rng:  SimRng,
}

impl Negexp {
    pub fn new(mean: f64, rng: SimRng) -> DesResult<Self> {
        if !(mean > 0.0) || !mean.is_finite() {
            return Err(DesError::InvalidDistribution {
                distribution: "negexp",
                reason:       format!("mean must be finite and > 0, got {mean}"),
            });
        }
        let dist = Exp::new(1.0 / mean).map_err(|e| DesError::InvalidDistribution {
            distribution: "negexp",
            reason:       e.to_string(),
        })?;
        Ok(Self { dist, rng })
    }
}

impl Sampler for Negexp {
    fn sample(&mut self) -> f64 {
        self.dist.sample(self.rng.inner())
    }
}

/// Normally distributed durations.  May return negative values for small
/// means; callers clamp.
#[derive(Clone, Debug)]
pub struct NormalSampler {
    dist: Normal<f64>,
    rng:  SimRng,
}

impl NormalSampler {
    pub fn new(mean: f64, std_dev: f64, rng: SimRng) -> DesResult<Self> {
        let dist = Normal::new(mean, std_dev).map_err(|e| DesError::InvalidDistribution {
            distribution: "normal",
            reason:       format!("mean={mean} std_dev={std_dev}: {e}"),
        })?;
        Ok(Self { dist, rng })
    }
}

impl Sampler for NormalSampler {
    fn sample(&mut self) -> f64 {
        self.dist.sample(self.rng.inner())
    }
}
