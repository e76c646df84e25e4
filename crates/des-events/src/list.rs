//! `EventList` — the pending-event priority queue.
//!
//! `BinaryHeap` is a max-heap, so entries order themselves in reverse on
//! `(time, id)` to pop the earliest event first.  The id is a per-list
//! insertion counter, which makes equal-time extraction FIFO and keeps two
//! runs with the same inserts in the same order.
//!
//! The list has no clock of its own.  Per-insert tracing happens in
//! [`SimContext`](crate::SimContext), which knows `now`; the list's one
//! warning is stamped with the time of the last removed event, which is the
//! engine's current time during the B- and C-phases.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use des_core::{EventId, SimTime};

use crate::{Event, EventKind};

/// Heap entry.  Kept private so the ordering key cannot be tampered with.
#[derive(Debug, Clone)]
struct Entry<K: EventKind>(Event<K>);

impl<K: EventKind> PartialEq for Entry<K> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<K: EventKind> Eq for Entry<K> {}

impl<K: EventKind> PartialOrd for Entry<K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K: EventKind> Ord for Entry<K> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed so the heap pops the smallest (time, id) first.
        other
            .0
            .time
            .cmp(&self.0.time)
            .then_with(|| other.0.id.cmp(&self.0.id))
    }
}

/// Time-ordered queue of pending events.
#[derive(Debug, Clone)]
pub struct EventList<K: EventKind> {
    heap:         BinaryHeap<Entry<K>>,
    next_id:      u64,
    last_removed: Option<SimTime>,
}

impl<K: EventKind> EventList<K> {
    pub fn new() -> Self {
        Self { heap: BinaryHeap::new(), next_id: 0, last_removed: None }
    }

    /// Add `event`, stamping it with the next insertion id.  O(log n).
    pub fn insert(&mut self, mut event: Event<K>) -> EventId {
        let id = EventId(self.next_id);
        self.next_id += 1;
        event.id = id;

        if let Some(last) = self.last_removed {
            if event.time < last {
                log::warn!(
                    "t={last} events: {} inserted before the last removed event; extraction is no longer monotonic",
                    event
                );
            }
        }
        self.heap.push(Entry(event));
        id
    }

    /// Time of the earliest pending event, without removing it.
    pub fn peek_next_time(&self) -> Option<SimTime> {
        self.heap.peek().map(|e| e.0.time)
    }

    /// The earliest pending event, without removing it.
    pub fn peek(&self) -> Option<&Event<K>> {
        self.heap.peek().map(|e| &e.0)
    }

    /// Remove and return the earliest event (lowest id among equal times).
    pub fn remove_earliest(&mut self) -> Option<Event<K>> {
        let Entry(event) = self.heap.pop()?;
        self.last_removed = Some(event.time);
        Some(event)
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// The id the next insert will receive.
    pub fn next_event_id(&self) -> EventId {
        EventId(self.next_id)
    }

    /// Remove every pending event in extraction order.
    pub fn drain_ordered(&mut self) -> Vec<Event<K>> {
        let mut events = Vec::with_capacity(self.heap.len());
        while let Some(e) = self.remove_earliest() {
            events.push(e);
        }
        events
    }
}

impl<K: EventKind> Default for EventList<K> {
    fn default() -> Self {
        Self::new()
    }
}
