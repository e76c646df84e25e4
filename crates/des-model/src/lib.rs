//! `des-model` — the extension point between the generic engine and a
//! concrete station network.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                 |
//! |------------|----------------------------------------------------------|
//! | [`model`]  | `Model` trait                                            |
//! | [`noop`]   | `NoopModel` — schedules nothing, useful in engine tests  |
//! | [`error`]  | `ModelError`, `ModelResult<T>`                           |
//!
//! # Design notes
//!
//! The engine owns the clock and the event list; the model owns every
//! service point and entity.  Each hook receives a fresh
//! [`SimContext`](des_events::SimContext) carrying the current time and the
//! event list, so the model can schedule but never move the clock.

pub mod error;
pub mod model;
pub mod noop;


pub use error::{ModelError, ModelResult};
pub use model::Model;
pub use noop::{NoopEvent, NoopModel};
