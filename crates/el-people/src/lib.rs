//! `el-people` — the riders of the simulation.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                   |
//! |--------------|------------------------------------------------------------|
//! | [`ids`]      | `PersonId`, `IdAllocator`                                  |
//! | [`person`]   | `Person`, `PersonState` (typed journey), `PersonStatus`    |
//! | [`roster`]   | `Roster` — every person of one run, in generation order    |
//! | [`error`]    | `PersonError`, `PersonResult<T>`                           |
//!
//! # Ownership
//!
//! A `Roster` owns every `Person` for the lifetime of a run.  Queues and the
//! elevator hold `PersonId`s and mutate people through the roster, so the
//! roster is the single place a person's journey is recorded.

pub mod error;
pub mod ids;
pub mod person;
pub mod roster;

#[cfg(test)]
mod tests;

pub use error::{PersonError, PersonResult};
pub use ids::{IdAllocator, PersonId};
pub use person::{Person, PersonState, PersonStatus};
pub use roster::Roster;
