//! The entity record: lifetime stamps plus an ordered visit log.

use des_core::{EntityId, SimTime, StationId};

/// One stay at a station, from joining its queue to leaving service.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Visit {
    pub station:   StationId,
    pub arrive_at: SimTime,
    /// `None` while the entity is still queued or in service here.
    pub depart_at: Option<SimTime>,
}

impl Visit {
    /// Time spent at the station, if the visit is closed.
    pub fn duration(&self) -> Option<f64> {
        self.depart_at.map(|d| d - self.arrive_at)
    }
}

/// A customer flowing through the station network.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Entity {
    pub id:           EntityId,
    pub arrival_time: SimTime,
    /// Set once, when the model decides the entity leaves the system.
    pub removal_time: Option<SimTime>,
    pub visits:       Vec<Visit>,
}

impl Entity {
    pub fn new(id: EntityId, arrival_time: SimTime) -> Self {
        Self { id, arrival_time, removal_time: None, visits: Vec::new() }
    }

    #[inline]
    pub fn is_removed(&self) -> bool {
        self.removal_time.is_some()
    }

    /// Total time in system; `None` until removed.
    pub fn system_time(&self) -> Option<f64> {
        self.removal_time.map(|r| r - self.arrival_time)
    }

    /// The most recent visit to `station` that has not been closed yet.
    pub(crate) fn open_visit_mut(&mut self, station: StationId) -> Option<&mut Visit> {
        self.visits
            .iter_mut()
            .rev()
            .find(|v| v.station == station && v.depart_at.is_none())
    }

    /// Sum of closed-visit durations at `station`.
    pub fn time_at(&self, station: StationId) -> f64 {
        self.visits
            .iter()
            .filter(|v| v.station == station)
            .filter_map(Visit::duration)
            .sum()
    }
}
