//! Event records.

use std::fmt;

use des_core::{EntityId, EventId, SimTime};

/// A model-defined tag naming *what* happens when an event fires.
///
/// The engine never interprets a kind; it only stores, orders and hands it
/// back to the model.  Models typically use a small fieldless `enum`.
pub trait EventKind: Copy + Eq + fmt::Debug + fmt::Display + 'static {}

impl<T> EventKind for T where T: Copy + Eq + fmt::Debug + fmt::Display + 'static {}

/// A single scheduled (B-)event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Event<K: EventKind> {
    /// Assigned by [`EventList::insert`](crate::EventList::insert);
    /// `EventId::INVALID` until then.
    pub id: EventId,

    pub kind: K,

    /// The time at which this event fires.
    pub time: SimTime,

    /// The entity this event concerns, if any.
    pub subject: Option<EntityId>,
}

impl<K: EventKind> Event<K> {
    pub fn new(kind: K, time: SimTime, subject: Option<EntityId>) -> Self {
        Self { id: EventId::INVALID, kind, time, subject }
    }
}

impl<K: EventKind> fmt::Display for Event<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}", self.kind, self.time)?;
        if let Some(subject) = self.subject {
            write!(f, " for {subject}")?;
        }
        Ok(())
    }
}
