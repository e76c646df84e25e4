//! `des-core` — foundational types for the `des` three-phase simulation engine.
//!
//! This crate is a dependency of every other `des-*` crate.  It has no
//! `des-*` dependencies and only a handful of external ones (`rand`,
//! `rand_distr`, `thiserror`, `log`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `EntityId`, `StationId`, `EventId`                    |
//! | [`time`]        | `SimTime`, `Clock`, `RunConfig`                       |
//! | [`rng`]         | `SimRng` (seeded, per-stream)                         |
//! | [`sampler`]     | `Sampler` trait, `Fixed`, `Cycle`, `Negexp`, `NormalSampler` |
//! | [`error`]       | `DesError`, `DesResult`                               |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to time, id and config types. |

pub mod error;
pub mod ids;
pub mod rng;
pub mod sampler;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{DesError, DesResult};
pub use ids::{EntityId, EventId, StationId};
pub use rng::SimRng;
pub use sampler::{clamp_duration, Cycle, Fixed, Negexp, NormalSampler, Sampler, EPSILON};
pub use time::{Clock, RunConfig, SimTime};
