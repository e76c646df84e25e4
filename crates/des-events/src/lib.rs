//! `des-events` — scheduled events and the pending-event list.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                   |
//! |--------------|------------------------------------------------------------|
//! | [`event`]    | `EventKind` trait, `Event<K>`                              |
//! | [`list`]     | `EventList<K>` (min-heap on `(time, EventId)`)             |
//! | [`context`]  | `SimContext<'a, K>` — clock reading + scheduling handle    |
//!
//! # Ordering policy
//!
//! Events leave the list in ascending time.  Events with *equal* time leave
//! in insertion order: every insert is stamped with a strictly increasing
//! [`EventId`](des_core::EventId) which breaks the tie.  Models may rely on
//! this FIFO policy.

pub mod context;
pub mod event;
pub mod list;


pub use context::SimContext;
pub use event::{Event, EventKind};
pub use list::EventList;
