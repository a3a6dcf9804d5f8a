use thiserror::Error;

use crate::{PersonId, PersonStatus};

#[derive(Debug, Error)]
pub enum PersonError {
    #[error("{0} is not on the roster")]
    NotFound(PersonId),

    #[error("{id} cannot move from {from} to {to}")]
    InvalidTransition {
        id:   PersonId,
        from: PersonStatus,
        to:   PersonStatus,
    },

    #[error("{0} is still waiting and has not left the queue")]
    StillWaiting(PersonId),
}

pub type PersonResult<T> = Result<T, PersonError>;
