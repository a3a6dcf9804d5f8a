//! `el-arrivals` — who shows up at the ground floor, and when.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                 |
//! |----------------|----------------------------------------------------------|
//! | [`queue`]      | `ArrivalQueue` — FIFO of waiting `PersonId`s             |
//! | [`generator`]  | `ArrivalGenerator` (exponential gaps), `from_schedule`   |
//! | [`error`]      | `ArrivalError`, `ArrivalResult<T>`                       |
//!
//! # Arrival model (summary)
//!
//! ```text
//! t = 0
//! loop:
//!   t += Exp(1 / mean_interarrival)
//!   if t >= horizon: stop            (the overshoot is discarded)
//!   spawn Person { destination: uniform(F2, F3, F4), arrival_time: t }
//! ```
//!
//! Every arrival is materialised up front, so the queue starts out holding the
//! whole morning in arrival order and only ever shrinks.

pub mod error;
pub mod generator;
pub mod queue;


pub use error::{ArrivalError, ArrivalResult};
pub use generator::{ArrivalGenerator, from_schedule};
pub use queue::ArrivalQueue;
