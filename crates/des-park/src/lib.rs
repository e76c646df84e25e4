//! `des-park` — an amusement park built on the three-phase engine.
//!
//! # Topology
//!
//! ```text
//! arrivals ─► ticket booth ─► rest area ─► attraction 1 ┐
//!                                 ▲    ├─► attraction 2 ├─► exit (p)
//!                                 │    └─► attraction 3 ┘
//!                                 └───────────────────────── (1 − p)
//! ```
//!
//! Visitors arrive with negative-exponential inter-arrival times, buy a ticket,
//! rest, then ride one attraction picked uniformly at random.  After each ride
//! they leave with probability `exit_probability`, otherwise they go back to
//! the rest area.  Every station is a single server with a FIFO queue and
//! normally distributed service times.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use des_park::{build_engine, ParkConfig};
//! use des_sim::NoopObserver;
//!
//! let mut engine = build_engine(&ParkConfig::default())?;
//! engine.run(&mut NoopObserver)?;
//! println!("{}", engine.model.summary().unwrap());
//! ```

pub mod config;
pub mod error;
pub mod event;
pub mod model;
pub mod summary;


pub use config::{ParkConfig, ServiceTime};
pub use error::{ParkError, ParkResult};
pub use event::{ParkEvent, ATTRACTIONS, REST_AREA, TICKET_BOOTH};
pub use model::{ParkModel, ParkSamplers};
pub use summary::ParkSummary;

use des_sim::{run_replications, Engine, EngineBuilder, NoopObserver};

/// Validate `config` and build a ready-to-run engine for it.
pub fn build_engine(config: &ParkConfig) -> ParkResult<Engine<ParkModel>> {
    let model = ParkModel::new(config)?;
    Ok(EngineBuilder::new(config.run_config(), model).build()?)
}

/// Run one independent park per seed and collect the summaries, in seed order.
///
/// Every other parameter comes from `config`.
pub fn replicate(config: &ParkConfig, seeds: &[u64]) -> ParkResult<Vec<ParkSummary>> {
    config.validate()?;
    let summaries = run_replications(seeds, |seed| {
        let config = ParkConfig { seed, ..config.clone() };
        let model = ParkModel::with_samplers(ParkSamplers::from_config(&config)?, &config);
        let mut engine = EngineBuilder::new(config.run_config(), model).build()?;
        engine.run(&mut NoopObserver)?;
        Ok(engine.model.summary().cloned().unwrap_or_default())
    })?;
    Ok(summaries)
}
