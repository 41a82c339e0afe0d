use lift_core::LiftError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TrafficError {
    #[error("arrival schedule parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Core(#[from] LiftError),
}

pub type TrafficResult<T> = Result<T, TrafficError>;
