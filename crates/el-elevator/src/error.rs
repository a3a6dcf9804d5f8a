use el_core::{CoreError, Floor};
use el_people::PersonError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ElevatorError {
    #[error("no travel time from {from} to {to}")]
    MissingTravelTime { from: Floor, to: Floor },

    #[error("travel table error: {0}")]
    Table(String),

    #[error("elevator must be idle at ground to load, but is at {0}")]
    NotAtGround(Floor),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Person(#[from] PersonError),
}

pub type ElevatorResult<T> = Result<T, ElevatorError>;
