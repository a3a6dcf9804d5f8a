//! `el-core` — foundational types for the `elevator_rush` simulator.
//!
//! This crate is a dependency of every other `el-*` crate.  It has no `el-*`
//! dependencies and minimal external ones (only `rand` and `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module        | Contents                                                 |
//! |---------------|----------------------------------------------------------|
//! | [`time`]      | `SimTime` (minutes since 8:00 AM), `SimClock`            |
//! | [`floor`]     | `Floor` enum (`Ground`, `F2`, `F3`, `F4`)                |
//! | [`rng`]       | `SimRng` — the single seeded random source of a run      |
//! | [`config`]    | `SimConfig`, `ElevatorConfig`, `BalkingStrategy`         |
//! | [`error`]     | `CoreError`, `CoreResult`                                |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod floor;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{BalkingStrategy, ElevatorConfig, SimConfig};
pub use error::{CoreError, CoreResult};
pub use floor::Floor;
pub use rng::SimRng;
pub use time::{SimClock, SimTime};
