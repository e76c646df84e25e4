//! `des-resource` — the resources that B- and C-events act on.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                  |
//! |---------------|-----------------------------------------------------------|
//! | [`service`]   | `ServicePoint<K>` (FIFO queue + single server), `StationStats` |
//! | [`arrival`]   | `ArrivalProcess<K>` (entity source)                       |
//! | [`error`]     | `ResourceError`, `ResourceResult<T>`                      |
//!
//! # Service discipline
//!
//! A service point never starts service on its own.  `end_service` frees the
//! server; the next `begin_service` happens only when the model's C-phase
//! polls the point and finds it idle with a non-empty queue.

pub mod arrival;
pub mod error;
pub mod service;


pub use arrival::ArrivalProcess;
pub use error::{ResourceError, ResourceResult};
pub use service::{ServicePoint, StationStats};
