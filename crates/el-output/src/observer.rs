//! `SimOutputObserver<W>` — bridges `SimObserver` to an `OutputWriter`.

use el_core::{SimClock, SimConfig, SimTime};
use el_people::Roster;
use el_sim::{CycleSummary, SimObserver};

use crate::row::{CycleRow, PersonRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that writes duty cycles and the final roster to any
/// [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After `sim.run()` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:     W,
    /// Used only to render times of day.
    clock:      SimClock,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    /// Create an observer backed by `writer`, using `config` for time-of-day
    /// conversion.
    pub fn new(writer: W, config: &SimConfig) -> Self {
        Self {
            writer,
            clock:      SimClock::new(config.day_start_minutes),
            last_error: None,
        }
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the sim).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_cycle_end(&mut self, cycle: &CycleSummary) {
        let row = CycleRow::new(cycle, self.clock.format(cycle.start));
        let result = self.writer.write_cycle(&row);
        self.store_err(result);
    }

    fn on_sim_end(&mut self, _final_time: SimTime, roster: &Roster) {
        let rows: Vec<PersonRow> = roster.iter().map(PersonRow::from).collect();
        if !rows.is_empty() {
            let result = self.writer.write_people(&rows);
            self.store_err(result);
        }
        let result = self.writer.finish();
        self.store_err(result);
    }
}
