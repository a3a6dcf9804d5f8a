use el_arrivals::ArrivalError;
use el_core::Floor;
use el_people::{PersonError, PersonId};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BalkingError {
    #[error("no balking probability for {person} headed to {floor}")]
    InvalidDestination { person: PersonId, floor: Floor },

    #[error("balking configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Person(#[from] PersonError),

    #[error(transparent)]
    Arrival(#[from] ArrivalError),
}

pub type BalkingResult<T> = Result<T, BalkingError>;
