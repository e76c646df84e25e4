//! Per-phase view handed to model callbacks.

use des_core::{clamp_duration, EntityId, EventId, SimTime};

use crate::{Event, EventKind, EventList};

/// What a model callback may see and touch: the current time (read-only)
/// and the event list (insert-only by convention).
///
/// Built by the engine for each B-event dispatch and each C-phase, so it
/// never outlives a single phase.
pub struct SimContext<'a, K: EventKind> {
    /// Current simulation time.
    pub now: SimTime,

    /// Pending events.  Callbacks schedule follow-up events here.
    pub events: &'a mut EventList<K>,
}

impl<'a, K: EventKind> SimContext<'a, K> {
    #[inline]
    pub fn new(now: SimTime, events: &'a mut EventList<K>) -> Self {
        Self { now, events }
    }

    /// Schedule `kind` at absolute time `at`.
    pub fn schedule_at(&mut self, kind: K, at: SimTime, subject: Option<EntityId>) -> EventId {
        let event = Event::new(kind, at, subject);
        let id = self.events.insert(event);
        log::debug!("t={} events: scheduled {event} ({id})", self.now);
        id
    }

    /// Schedule `kind` after a sampled `delay`.  Non-positive delays are
    /// clamped to [`EPSILON`](des_core::EPSILON), so the event is always
    /// strictly later than `now`.  Returns the id and the scheduled time.
    pub fn schedule_in(&mut self, kind: K, delay: f64, subject: Option<EntityId>) -> (EventId, SimTime) {
        let mut at = self.now.after(clamp_duration(delay));
        if at <= self.now {
            // EPSILON vanished in rounding at a large clock value.
            at = self.now.next_representable();
        }
        (self.schedule_at(kind, at, subject), at)
    }
}
