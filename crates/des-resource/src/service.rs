//! `ServicePoint` — FIFO queue in front of a single server.

use std::collections::VecDeque;

use des_core::{clamp_duration, EntityId, EventId, Sampler, SimTime, StationId};
use des_events::{EventKind, SimContext};

use crate::{ResourceError, ResourceResult};

/// Snapshot of one station's counters, for reporting.
#[derive(Clone, Debug, PartialEq)]
pub struct StationStats {
    pub station:     StationId,
    pub name:        String,
    /// Completed services (`end_service` calls).
    pub served:      u64,
    /// Entities ever added to the queue.
    pub enqueued:    u64,
    /// Sum of all sampled service durations started so far.
    pub busy_time:   f64,
    /// `busy_time / now`, or 0 at time zero.
    pub utilization: f64,
    pub queue_len:   usize,
}

/// A single-server resource with a FIFO waiting queue.
///
/// Invariant: `current.is_some()` exactly when the server is reserved, and
/// an entity is never both queued and in service here.
pub struct ServicePoint<K: EventKind> {
    id:             StationId,
    name:           String,
    sampler:        Box<dyn Sampler>,
    departure_kind: K,

    queue:   VecDeque<EntityId>,
    current: Option<EntityId>,

    served:    u64,
    enqueued:  u64,
    busy_time: f64,
}

impl<K: EventKind> ServicePoint<K> {
    /// `departure_kind` is scheduled each time a service starts.
    pub fn new(
        id:             StationId,
        name:           impl Into<String>,
        sampler:        Box<dyn Sampler>,
        departure_kind: K,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            sampler,
            departure_kind,
            queue: VecDeque::new(),
            current: None,
            served: 0,
            enqueued: 0,
            busy_time: 0.0,
        }
    }

    pub fn id(&self) -> StationId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn departure_kind(&self) -> K {
        self.departure_kind
    }

    /// Append `entity` to the back of the queue.
    pub fn add_queue(&mut self, entity: EntityId, now: SimTime) {
        self.queue.push_back(entity);
        self.enqueued += 1;
        log::info!("t={now} {}: {entity} joined queue (length {})", self.name, self.queue.len());
    }

    /// `true` if at least one entity is waiting.
    #[inline]
    pub fn is_on_queue(&self) -> bool {
        !self.queue.is_empty()
    }

    /// `true` while an entity is in service.
    #[inline]
    pub fn is_reserved(&self) -> bool {
        self.current.is_some()
    }

    /// `true` when the C-phase should call [`begin_service`](Self::begin_service).
    #[inline]
    pub fn can_begin_service(&self) -> bool {
        !self.is_reserved() && self.is_on_queue()
    }

    /// Start serving the head of the queue and schedule its departure.
    ///
    /// A no-op returning `None` if the server is busy or nobody is waiting,
    /// so a second call before `end_service` changes nothing.
    pub fn begin_service(&mut self, ctx: &mut SimContext<'_, K>) -> Option<EventId> {
        if self.is_reserved() {
            return None;
        }
        let entity = self.queue.pop_front()?;
        self.current = Some(entity);

        let duration = clamp_duration(self.sampler.sample());
        let (id, departs_at) = ctx.schedule_in(self.departure_kind, duration, Some(entity));
        self.busy_time += duration;

        log::info!(
            "t={} {}: service begins for {entity}, departure at {departs_at}",
            ctx.now, self.name
        );
        Some(id)
    }

    /// Finish the current service, freeing the server.  Does not start the
    /// next service.
    ///
    /// Calling this on an idle point is a model defect and returns
    /// [`ResourceError::NotReserved`].
    pub fn end_service(&mut self) -> ResourceResult<EntityId> {
        let entity = self.current.take().ok_or_else(|| ResourceError::NotReserved {
            station: self.id,
            name:    self.name.clone(),
        })?;
        self.served += 1;
        Ok(entity)
    }

    /// The entity in service, if any.
    pub fn current(&self) -> Option<EntityId> {
        self.current
    }

    pub fn queue_len(&self) -> usize {
        self.queue.len()
    }

    /// Waiting entities, head first.
    pub fn queued(&self) -> impl Iterator<Item = EntityId> + '_ {
        self.queue.iter().copied()
    }

    /// Fraction of `[0, now]` the server has been (or is scheduled to be)
    /// busy.  Zero at time zero.
    pub fn utilization(&self, now: SimTime) -> f64 {
        if now.value() > 0.0 { self.busy_time / now.value() } else { 0.0 }
    }

    /// Completed services.
    pub fn throughput(&self) -> u64 {
        self.served
    }

    pub fn enqueued(&self) -> u64 {
        self.enqueued
    }

    pub fn busy_time(&self) -> f64 {
        self.busy_time
    }

    pub fn stats(&self, now: SimTime) -> StationStats {
        StationStats {
            station:     self.id,
            name:        self.name.clone(),
            served:      self.served,
            enqueued:    self.enqueued,
            busy_time:   self.busy_time,
            utilization: self.utilization(now),
            queue_len:   self.queue.len(),
        }
    }
}
