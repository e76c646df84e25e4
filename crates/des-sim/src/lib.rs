//! `des-sim` — the three-phase engine loop.
//!
//! # Three-phase loop
//!
//! ```text
//! initialize()
//! while events pending && now < horizon:
//!   Ⓐ Advance  — move the clock to the earliest pending event time.
//!   Ⓑ Bound    — remove and dispatch every event at exactly `now`,
//!                including events inserted at `now` during this phase.
//!   Ⓒ Conditional — let the model start service wherever a server is idle
//!                and a queue is non-empty.
//! results()
//! ```
//!
//! Equal-time events are grouped by exact equality of `SimTime`.  Two events
//! that should coincide but differ by floating-point rounding are handled in
//! separate iterations.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                  |
//! |------------|---------------------------------------------------------|
//! | `parallel` | [`run_replications`] uses Rayon's thread pool.          |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use des_core::RunConfig;
//! use des_sim::{EngineBuilder, NoopObserver};
//!
//! let mut engine = EngineBuilder::new(RunConfig::new(1_000.0, 42), model).build()?;
//! let stats = engine.run(&mut NoopObserver)?;
//! ```

pub mod builder;
pub mod engine;
pub mod error;
pub mod observer;
pub mod replication;

#[cfg(test)]
mod tests;

pub use builder::EngineBuilder;
pub use engine::{Engine, EngineState, RunStats};
pub use error::{SimError, SimResult};
pub use observer::{EngineObserver, NoopObserver};
pub use replication::run_replications;
