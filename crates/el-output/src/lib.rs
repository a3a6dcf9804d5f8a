//! `el-output` — simulation output writers for elevator_rush.
//!
//! | Backend | Files created                  |
//! |---------|--------------------------------|
//! | CSV     | `people.csv`, `cycles.csv`     |
//!
//! Backends implement [`OutputWriter`] and are driven by
//! [`SimOutputObserver`], which implements `el_sim::SimObserver`: one
//! `cycles.csv` row per duty cycle as it finishes, and the whole roster to
//! `people.csv` when the run ends.
//!
//! # Usage
//!
//! ```rust,ignore
//! use el_output::{CsvWriter, SimOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = SimOutputObserver::new(writer, &sim.config);
//! sim.run(&mut obs)?;
//! if let Some(e) = obs.take_error() {
//!     return Err(e.into());
//! }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::SimOutputObserver;
pub use row::{CycleRow, PersonRow};
pub use writer::OutputWriter;
