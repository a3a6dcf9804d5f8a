use el_arrivals::ArrivalError;
use el_balking::BalkingError;
use el_core::CoreError;
use el_elevator::ElevatorError;
use el_people::PersonError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("person error: {0}")]
    Person(#[from] PersonError),

    #[error("arrival error: {0}")]
    Arrival(#[from] ArrivalError),

    #[error("balking error: {0}")]
    Balking(#[from] BalkingError),

    #[error("elevator error: {0}")]
    Elevator(#[from] ElevatorError),
}

pub type SimResult<T> = Result<T, SimError>;
