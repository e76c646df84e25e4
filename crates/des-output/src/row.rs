//! Plain data row types written by output backends.

use des_core::EventId;
use des_entity::{Entity, Visit};
use des_events::{Event, EventKind};
use des_resource::StationStats;

/// One dispatched B-event.
#[derive(Debug, Clone, PartialEq)]
pub struct EventRow {
    pub time:     f64,
    pub event_id: u64,
    pub kind:     String,
    /// `None` for events with no subject entity.
    pub subject:  Option<u32>,
}

impl<K: EventKind> From<&Event<K>> for EventRow {
    fn from(e: &Event<K>) -> Self {
        Self {
            time:     e.time.value(),
            event_id: if e.id == EventId::INVALID { u64::MAX } else { e.id.0 },
            kind:     e.kind.to_string(),
            subject:  e.subject.map(|s| s.0),
        }
    }
}

/// End-of-run counters for one service point.
#[derive(Debug, Clone, PartialEq)]
pub struct StationRow {
    pub station:     u16,
    pub name:        String,
    pub served:      u64,
    pub enqueued:    u64,
    pub busy_time:   f64,
    pub utilization: f64,
    pub queue_len:   usize,
}

impl From<&StationStats> for StationRow {
    fn from(s: &StationStats) -> Self {
        Self {
            station:     s.station.0,
            name:        s.name.clone(),
            served:      s.served,
            enqueued:    s.enqueued,
            busy_time:   s.busy_time,
            utilization: s.utilization,
            queue_len:   s.queue_len,
        }
    }
}

/// Lifetime summary for one entity.
#[derive(Debug, Clone, PartialEq)]
pub struct EntityRow {
    pub entity_id:    u32,
    pub arrival_time: f64,
    pub removal_time: Option<f64>,
    pub system_time:  Option<f64>,
    pub stops:        usize,
}

impl From<&Entity> for EntityRow {
    fn from(e: &Entity) -> Self {
        Self {
            entity_id:    e.id.0,
            arrival_time: e.arrival_time.value(),
            removal_time: e.removal_time.map(|t| t.value()),
            system_time:  e.system_time(),
            stops:        e.visits.len(),
        }
    }
}

/// One station stay from an entity's visit log.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisitRow {
    pub entity_id: u32,
    pub station:   u16,
    pub arrive_at: f64,
    pub depart_at: Option<f64>,
}

impl VisitRow {
    pub fn new(entity: &Entity, visit: &Visit) -> Self {
        Self {
            entity_id: entity.id.0,
            station:   visit.station.0,
            arrive_at: visit.arrive_at.value(),
            depart_at: visit.depart_at.map(|t| t.value()),
        }
    }
}
