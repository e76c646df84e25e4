use des_core::{DesError, SimTime};
use des_model::ModelError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(#[from] DesError),

    #[error("pending event at {event_time} is earlier than the clock ({now})")]
    EventTimeMismatch {
        event_time: SimTime,
        now:        SimTime,
    },

    #[error("model error: {0}")]
    Model(#[from] ModelError),

    #[error("engine has already finished")]
    AlreadyFinished,

    #[error("engine run was aborted by an earlier error")]
    Aborted,
}

pub type SimResult<T> = Result<T, SimError>;
