//! `des-entity` — model-owned entity storage for the `des` engine.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                  |
//! |-------------|-----------------------------------------------------------|
//! | [`entity`]  | `Entity`, `Visit` (one station stay)                      |
//! | [`store`]   | `EntityStore` arena indexed by `EntityId`                 |
//! | [`stats`]   | `SystemTimeStats` running mean over completed entities    |
//! | [`error`]   | `EntityError`, `EntityResult<T>`                          |
//!
//! Events never hold a reference to an entity, only its `EntityId`.  The
//! model owns the arena and resolves handles when an event fires.

pub mod entity;
pub mod error;
pub mod stats;
pub mod store;


pub use entity::{Entity, Visit};
pub use error::{EntityError, EntityResult};
pub use stats::SystemTimeStats;
pub use store::EntityStore;
