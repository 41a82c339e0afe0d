use lift_core::CarId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FleetError {
    #[error("car {0} is already in transit")]
    AlreadyInTransit(CarId),

    #[error("car {0} has no committed destination to depart toward")]
    NoDestination(CarId),
}

pub type FleetResult<T> = Result<T, FleetError>;
