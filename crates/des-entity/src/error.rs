use des_core::{EntityId, StationId};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EntityError {
    #[error("entity {0} not found")]
    NotFound(EntityId),

    #[error("entity {0} has already left the system")]
    AlreadyRemoved(EntityId),

    #[error("entity {entity} has no open visit at {station}")]
    NoOpenVisit {
        entity:  EntityId,
        station: StationId,
    },
}

pub type EntityResult<T> = Result<T, EntityError>;
