use el_core::{CoreError, Floor, SimTime};
use el_people::PersonError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ArrivalError {
    #[error("arrival schedule goes back in time: entry {index} at {at} follows {previous}")]
    OutOfOrder {
        index:    usize,
        at:       SimTime,
        previous: SimTime,
    },

    #[error("arrival schedule entry {index} targets {floor}; riders only travel up from ground")]
    GroundDestination { index: usize, floor: Floor },

    #[error("arrival schedule entry {index} has invalid time {at}")]
    InvalidTime { index: usize, at: SimTime },

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Person(#[from] PersonError),
}

pub type ArrivalResult<T> = Result<T, ArrivalError>;
