use des_core::StationId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ResourceError {
    #[error("end_service called on idle service point {name} ({station})")]
    NotReserved {
        station: StationId,
        name:    String,
    },
}

pub type ResourceResult<T> = Result<T, ResourceError>;
