use des_core::{DesError, SimTime};
use des_entity::EntityError;
use des_resource::ResourceError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("event {kind} at {time} carries no subject entity")]
    MissingSubject {
        kind: String,
        time: SimTime,
    },

    #[error("resource error: {0}")]
    Resource(#[from] ResourceError),

    #[error("entity error: {0}")]
    Entity(#[from] EntityError),

    #[error("model configuration error: {0}")]
    Config(#[from] DesError),
}

pub type ModelResult<T> = Result<T, ModelError>;
