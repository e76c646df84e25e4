//! Simulation time model.
//!
//! # Design
//!
//! Time is a non-negative real number held in [`SimTime`].  Unlike a tick
//! counter, continuous time accumulates floating-point rounding from summed
//! samples, so two events "meant" to coincide may differ in the last bit.
//! The engine groups B-events by *exact* equality and never introduces an
//! epsilon tolerance; a rounding difference simply defers the later event to
//! its own A-phase.
//!
//! `SimTime` implements a total order via [`f64::total_cmp`] so it can key a
//! `BinaryHeap` directly.  Equality is consistent with that order.

use std::cmp::Ordering;
use std::fmt;

use crate::{DesError, DesResult};

// ── SimTime ───────────────────────────────────────────────────────────────────

/// An absolute point in simulation time.
#[derive(Copy, Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimTime(pub f64);

impl SimTime {
    pub const ZERO: SimTime = SimTime(0.0);

    /// The raw time value.
    #[inline]
    pub fn value(self) -> f64 {
        self.0
    }

    /// The time `delta` after `self`.
    #[inline]
    pub fn after(self, delta: f64) -> SimTime {
        SimTime(self.0 + delta)
    }

    /// Elapsed time from `earlier` to `self` (negative if `earlier` is later).
    #[inline]
    pub fn since(self, earlier: SimTime) -> f64 {
        self.0 - earlier.0
    }

    /// The smallest representable time strictly greater than `self`.
    /// Only meaningful for finite, non-negative times.
    #[inline]
    pub fn next_representable(self) -> SimTime {
        SimTime(f64::from_bits(self.0.to_bits() + 1))
    }

    /// `true` for finite, non-negative values.
    #[inline]
    pub fn is_valid(self) -> bool {
        self.0.is_finite() && self.0 >= 0.0
    }
}

impl PartialEq for SimTime {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for SimTime {}

impl PartialOrd for SimTime {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SimTime {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl From<f64> for SimTime {
    #[inline]
    fn from(t: f64) -> SimTime {
        SimTime(t)
    }
}

impl std::ops::Add<f64> for SimTime {
    type Output = SimTime;
    #[inline]
    fn add(self, rhs: f64) -> SimTime {
        SimTime(self.0 + rhs)
    }
}

impl std::ops::Sub for SimTime {
    type Output = f64;
    #[inline]
    fn sub(self, rhs: SimTime) -> f64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for SimTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ── Clock ─────────────────────────────────────────────────────────────────────

/// The simulation clock for one run.
///
/// Owned by the engine and read by everything else through the per-phase
/// context.  Monotonically non-decreasing within a run.
#[derive(Clone, Debug, Default)]
pub struct Clock {
    now: SimTime,
}

impl Clock {
    /// A clock at time zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current simulation time.
    #[inline]
    pub fn now(&self) -> SimTime {
        self.now
    }

    /// Move the clock forward to `t`.
    ///
    /// A request to move backwards is logged and ignored; the clock is left
    /// unchanged.  Returns `true` if the clock now reads `t`.
    pub fn advance_to(&mut self, t: SimTime) -> bool {
        if t >= self.now {
            self.now = t;
            true
        } else {
            log::warn!("t={} clock: attempted to move clock backwards to {}", self.now, t);
            false
        }
    }

    /// Reset to zero.  Only meaningful between independent runs.
    pub fn reset(&mut self) {
        self.now = SimTime::ZERO;
    }
}

impl fmt::Display for Clock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "t={}", self.now)
    }
}

// ── RunConfig ─────────────────────────────────────────────────────────────────

/// Run-level configuration shared by every model.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunConfig {
    /// The engine stops iterating once the clock reaches this time.
    pub horizon: SimTime,

    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,
}

impl RunConfig {
    pub fn new(horizon: f64, seed: u64) -> Self {
        Self { horizon: SimTime(horizon), seed }
    }

    /// Reject horizons that are non-finite or not strictly positive.
    pub fn validate(&self) -> DesResult<()> {
        if !self.horizon.0.is_finite() || self.horizon.0 <= 0.0 {
            return Err(DesError::Config(format!(
                "horizon must be finite and > 0, got {}",
                self.horizon
            )));
        }
        Ok(())
    }
}
