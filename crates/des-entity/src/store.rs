//! `EntityStore` — the arena every model keeps its entities in.
//!
//! Entities are never physically deleted during a run: removal only stamps
//! `removal_time`, so the full journey is still available for reporting
//! after the engine finishes.  `EntityId(i)` is always `entities[i]`.

use des_core::{EntityId, SimTime, StationId};

use crate::{Entity, EntityError, EntityResult, SystemTimeStats};

#[derive(Clone, Debug, Default)]
pub struct EntityStore {
    entities: Vec<Entity>,
    active:   usize,
    stats:    SystemTimeStats,
}

impl EntityStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new entity stamped with `now` as its arrival time.
    pub fn spawn(&mut self, now: SimTime) -> EntityId {
        let id = EntityId(self.entities.len() as u32);
        self.entities.push(Entity::new(id, now));
        self.active += 1;
        log::debug!("t={now} entity: new {id} created");
        id
    }

    pub fn get(&self, id: EntityId) -> EntityResult<&Entity> {
        self.entities.get(id.index()).ok_or(EntityError::NotFound(id))
    }

    pub fn get_mut(&mut self, id: EntityId) -> EntityResult<&mut Entity> {
        self.entities.get_mut(id.index()).ok_or(EntityError::NotFound(id))
    }

    /// Open a visit record at `station`.
    pub fn arrive_at(&mut self, id: EntityId, station: StationId, now: SimTime) -> EntityResult<()> {
        let entity = self.live_mut(id)?;
        entity.visits.push(crate::Visit { station, arrive_at: now, depart_at: None });
        log::debug!("t={now} entity: {id} arrived at {station}");
        Ok(())
    }

    /// Close the open visit record at `station`.
    pub fn depart_from(&mut self, id: EntityId, station: StationId, now: SimTime) -> EntityResult<()> {
        let entity = self.live_mut(id)?;
        let visit = entity
            .open_visit_mut(station)
            .ok_or(EntityError::NoOpenVisit { entity: id, station })?;
        visit.depart_at = Some(now);
        log::debug!("t={now} entity: {id} departed from {station}");
        Ok(())
    }

    /// Mark the entity as having left the system and fold its system time
    /// into the running statistics.  Returns the system time.
    pub fn remove(&mut self, id: EntityId, now: SimTime) -> EntityResult<f64> {
        let entity = self.live_mut(id)?;
        entity.removal_time = Some(now);
        let system_time = now - entity.arrival_time;
        self.active -= 1;
        self.stats.record(system_time);
        log::info!(
            "t={now} entity: {id} left after {system_time} ({} stops); mean system time {}",
            self.entities[id.index()].visits.len(),
            self.stats.mean().unwrap_or(0.0),
        );
        Ok(system_time)
    }

    /// Number of entities ever created.
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Entities created but not yet removed.
    pub fn active_count(&self) -> usize {
        self.active
    }

    pub fn stats(&self) -> &SystemTimeStats {
        &self.stats
    }

    pub fn iter(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter()
    }

    /// Entities that have left the system, in id order.
    pub fn completed(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter().filter(|e| e.is_removed())
    }

    fn live_mut(&mut self, id: EntityId) -> EntityResult<&mut Entity> {
        let entity = self.get_mut(id)?;
        if entity.is_removed() {
            return Err(EntityError::AlreadyRemoved(id));
        }
        Ok(entity)
    }
}
