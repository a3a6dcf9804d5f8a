//! `el-elevator` — the single elevator serving the building.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                       |
//! |--------------|----------------------------------------------------------------|
//! | [`travel`]   | `TravelTimeTable` — minutes between each ordered floor pair    |
//! | [`elevator`] | `Elevator`, `ElevatorStatus` — the duty-cycle state machine    |
//! | [`error`]    | `ElevatorError`, `ElevatorResult<T>`                           |
//!
//! # Duty cycle
//!
//! ```text
//! Waiting ──load()──► Loading ──travel()──► Travelling ──(back at ground)──► Waiting
//!                                             │
//!                                             └─ for each stop, ascending:
//!                                                  travel_to(stop); unload()
//! ```
//!
//! The elevator never schedules itself.  The simulation driver calls `load`
//! then `travel`, feeding each the time the previous step returned.

pub mod elevator;
pub mod error;
pub mod travel;

#[cfg(test)]
mod tests;

pub use elevator::{Elevator, ElevatorStatus};
pub use error::{ElevatorError, ElevatorResult};
pub use travel::TravelTimeTable;
