//! One rider's journey.
//!
//! A person's progress is a forward-only state machine:
//!
//! ```text
//! Waiting ──board──► OnElevator ──alight──► TookElevator
//!    │
//!    └──take_stairs──► TookStairs
//! ```
//!
//! Each timestamp lives inside the state that recorded it, so a load time
//! exists exactly when the person boarded and can never be overwritten.

use std::fmt;

use el_core::{Floor, SimTime};

use crate::{PersonError, PersonId, PersonResult};

// ── PersonStatus ──────────────────────────────────────────────────────────────

/// The tag of a [`PersonState`], for filtering and reporting.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PersonStatus {
    Waiting,
    OnElevator,
    TookStairs,
    TookElevator,
}

impl PersonStatus {
    /// `true` once the person can no longer change state.
    #[inline]
    pub fn is_terminal(self) -> bool {
        matches!(self, PersonStatus::TookStairs | PersonStatus::TookElevator)
    }

    /// Label used in CSV output.
    pub fn as_str(self) -> &'static str {
        match self {
            PersonStatus::Waiting      => "waiting",
            PersonStatus::OnElevator   => "on_elevator",
            PersonStatus::TookStairs   => "took_stairs",
            PersonStatus::TookElevator => "took_elevator",
        }
    }
}

impl fmt::Display for PersonStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── PersonState ───────────────────────────────────────────────────────────────

/// Where a person is in their journey, with the time of every transition made.
#[derive(Copy, Clone, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PersonState {
    #[default]
    Waiting,
    OnElevator {
        loaded_at: SimTime,
    },
    TookElevator {
        loaded_at:   SimTime,
        unloaded_at: SimTime,
    },
    TookStairs {
        left_at: SimTime,
    },
}

impl PersonState {
    pub fn status(&self) -> PersonStatus {
        match self {
            PersonState::Waiting             => PersonStatus::Waiting,
            PersonState::OnElevator { .. }   => PersonStatus::OnElevator,
            PersonState::TookElevator { .. } => PersonStatus::TookElevator,
            PersonState::TookStairs { .. }   => PersonStatus::TookStairs,
        }
    }
}

// ── Person ────────────────────────────────────────────────────────────────────

/// A single rider, created at arrival and mutated in place until terminal.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Person {
    id:           PersonId,
    destination:  Floor,
    arrival_time: SimTime,
    state:        PersonState,
}

impl Person {
    pub fn new(id: PersonId, destination: Floor, arrival_time: SimTime) -> Self {
        Self { id, destination, arrival_time, state: PersonState::Waiting }
    }

    #[inline]
    pub fn id(&self) -> PersonId {
        self.id
    }

    #[inline]
    pub fn destination(&self) -> Floor {
        self.destination
    }

    #[inline]
    pub fn arrival_time(&self) -> SimTime {
        self.arrival_time
    }

    #[inline]
    pub fn state(&self) -> &PersonState {
        &self.state
    }

    #[inline]
    pub fn status(&self) -> PersonStatus {
        self.state.status()
    }

    pub fn elevator_load_time(&self) -> Option<SimTime> {
        match self.state {
            PersonState::OnElevator { loaded_at }
            | PersonState::TookElevator { loaded_at, .. } => Some(loaded_at),
            PersonState::Waiting | PersonState::TookStairs { .. } => None,
        }
    }

    pub fn elevator_unload_time(&self) -> Option<SimTime> {
        match self.state {
            PersonState::TookElevator { unloaded_at, .. } => Some(unloaded_at),
            _ => None,
        }
    }

    pub fn take_stairs_time(&self) -> Option<SimTime> {
        match self.state {
            PersonState::TookStairs { left_at } => Some(left_at),
            _ => None,
        }
    }

    /// When this person stopped waiting: their load time if they boarded,
    /// otherwise the time they took the stairs.
    ///
    /// Errors for someone still waiting; analysis code must filter first.
    pub fn left_queue_time(&self) -> PersonResult<SimTime> {
        match self.state {
            PersonState::Waiting => Err(PersonError::StillWaiting(self.id)),
            PersonState::OnElevator { loaded_at }
            | PersonState::TookElevator { loaded_at, .. } => Ok(loaded_at),
            PersonState::TookStairs { left_at } => Ok(left_at),
        }
    }

    /// Minutes between arrival and boarding, for riders only.
    pub fn elevator_wait(&self) -> Option<f64> {
        self.elevator_load_time().map(|t| t - self.arrival_time)
    }

    // ── Transitions ───────────────────────────────────────────────────────

    /// `Waiting → OnElevator`.
    pub fn board(&mut self, at: SimTime) -> PersonResult<()> {
        match self.state {
            PersonState::Waiting => {
                self.state = PersonState::OnElevator { loaded_at: at };
                Ok(())
            }
            _ => Err(self.refuse(PersonStatus::OnElevator)),
        }
    }

    /// `OnElevator → TookElevator`.
    pub fn alight(&mut self, at: SimTime) -> PersonResult<()> {
        match self.state {
            PersonState::OnElevator { loaded_at } => {
                self.state = PersonState::TookElevator { loaded_at, unloaded_at: at };
                Ok(())
            }
            _ => Err(self.refuse(PersonStatus::TookElevator)),
        }
    }

    /// `Waiting → TookStairs`.
    pub fn take_stairs(&mut self, at: SimTime) -> PersonResult<()> {
        match self.state {
            PersonState::Waiting => {
                self.state = PersonState::TookStairs { left_at: at };
                Ok(())
            }
            _ => Err(self.refuse(PersonStatus::TookStairs)),
        }
    }

    fn refuse(&self, to: PersonStatus) -> PersonError {
        PersonError::InvalidTransition { id: self.id, from: self.status(), to }
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Person(id={}, destination={}, arrival={}, status={})",
            self.id.0, self.destination, self.arrival_time, self.status()
        )
    }
}
