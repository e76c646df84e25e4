use des_core::DesError;
use des_sim::SimError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParkError {
    #[error("invalid park configuration: {0}")]
    InvalidConfig(String),

    #[error("I/O error reading park configuration: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed park configuration: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Des(#[from] DesError),

    #[error("simulation error: {0}")]
    Sim(#[from] SimError),
}

pub type ParkResult<T> = Result<T, ParkError>;
