//! Entity source: one arrival event per call.

use des_core::{EntityId, Sampler, SimTime};
use des_entity::EntityStore;
use des_events::{EventKind, SimContext};

/// Generates successive arrivals from an inter-arrival [`Sampler`].
pub struct ArrivalProcess<K: EventKind> {
    sampler: Box<dyn Sampler>,
    kind:    K,
    generated: u64,
}

impl<K: EventKind> ArrivalProcess<K> {
    /// `kind` is the event kind every generated arrival carries.
    pub fn new(sampler: Box<dyn Sampler>, kind: K) -> Self {
        Self { sampler, kind, generated: 0 }
    }

    /// Create a fresh entity and schedule its arrival one sampled
    /// inter-arrival time from now.
    ///
    /// The entity's `arrival_time` is stamped with `ctx.now`, the moment the
    /// arrival was generated.  Returns the new entity and its arrival time.
    pub fn generate_next(
        &mut self,
        ctx:      &mut SimContext<'_, K>,
        entities: &mut EntityStore,
    ) -> (EntityId, SimTime) {
        let dt = self.sampler.sample();
        let entity = entities.spawn(ctx.now);
        let (_, at) = ctx.schedule_in(self.kind, dt, Some(entity));
        self.generated += 1;
        log::info!("t={} arrivals: scheduled {} at {at} for {entity}", ctx.now, self.kind);
        (entity, at)
    }

    /// Number of arrivals generated so far.
    pub fn generated(&self) -> u64 {
        self.generated
    }

    pub fn kind(&self) -> K {
        self.kind
    }
}
