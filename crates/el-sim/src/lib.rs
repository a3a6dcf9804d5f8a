//! `el-sim` — the duty-cycle driver for the morning-rush simulation.
//!
//! # Main loop
//!
//! ```text
//! while the arrival queue is non-empty:
//!   front = queue.front()
//!   if front.arrival_time > now:
//!     now = front.arrival_time            (idle jump: no balking, no load)
//!     continue
//!   ① Balk    — the policy may send people beyond the guaranteed boarders
//!                up the stairs
//!   ② Load    — doors open for load_minutes; now = load end
//!   ③ Travel  — ascending stops, unload at each, return to ground;
//!                now = back at ground
//! ```
//!
//! Every arrival is materialised before the loop starts, and people only leave
//! the queue by boarding or balking, so the loop always terminates.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                   |
//! |----------------|------------------------------------------------------------|
//! | [`sim`]        | `Simulation` and its loop                                  |
//! | [`builder`]    | `SimBuilder` — validation and optional overrides           |
//! | [`observer`]   | `SimObserver`, `NoopObserver`, `CycleSummary`              |
//! | [`evaluation`] | `Evaluation` — queue length, waits, walkers per floor      |
//! | [`batch`]      | `run_batch`, `capacity_sweep`, `RunSummary`, `Stats`       |
//! | [`error`]      | `SimError`, `SimResult<T>`                                 |
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                   |
//! |------------|----------------------------------------------------------|
//! | `parallel` | Runs the seeds of a batch on Rayon's thread pool.        |
//! | `serde`    | Derives `Serialize` on batch results and config types.   |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use el_core::SimConfig;
//! use el_sim::{Evaluation, NoopObserver, SimBuilder};
//!
//! let mut sim = SimBuilder::new(SimConfig::default().with_seed(7)).build()?;
//! sim.run(&mut NoopObserver)?;
//! let eval = Evaluation::of(&sim);
//! println!("average wait {:?}", eval.average_elevator_wait_time());
//! ```

pub mod batch;
pub mod builder;
pub mod error;
pub mod evaluation;
pub mod observer;
pub mod sim;


pub use batch::{CapacityPoint, QUEUE_PROBES, RunSummary, Stats, capacity_sweep, rate_range, run_batch};
pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use evaluation::Evaluation;
pub use observer::{CycleSummary, NoopObserver, SimObserver};
pub use sim::Simulation;
