//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `people.csv`
//! - `cycles.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::{CycleRow, OutputResult, PersonRow};
use crate::writer::OutputWriter;

/// Writes simulation output to two CSV files.
pub struct CsvWriter {
    people:   Writer<File>,
    cycles:   Writer<File>,
    finished: bool,
}

impl CsvWriter {
    /// Create `dir` if needed, open the two CSV files in it, and write the
    /// header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        std::fs::create_dir_all(dir)?;

        let mut people = Writer::from_path(dir.join("people.csv"))?;
        people.write_record(["id", "destination", "status", "arrival", "load", "unload", "stairs"])?;

        let mut cycles = Writer::from_path(dir.join("cycles.csv"))?;
        cycles.write_record([
            "index", "start", "start_clock", "load_end", "finish", "boarded", "balked", "stops",
        ])?;

        Ok(Self {
            people,
            cycles,
            finished: false,
        })
    }
}

/// Blank for a transition that never happened.
fn opt(t: Option<f64>) -> String {
    t.map(|v| v.to_string()).unwrap_or_default()
}

impl OutputWriter for CsvWriter {
    fn write_people(&mut self, rows: &[PersonRow]) -> OutputResult<()> {
        for row in rows {
            self.people.write_record(&[
                row.id.to_string(),
                row.destination.to_string(),
                row.status.to_string(),
                row.arrival.to_string(),
                opt(row.load),
                opt(row.unload),
                opt(row.stairs),
            ])?;
        }
        Ok(())
    }

    fn write_cycle(&mut self, row: &CycleRow) -> OutputResult<()> {
        self.cycles.write_record(&[
            row.index.to_string(),
            row.start.to_string(),
            row.start_clock.clone(),
            row.load_end.to_string(),
            row.finish.to_string(),
            row.boarded.to_string(),
            row.balked.to_string(),
            row.stops.clone(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.people.flush()?;
        self.cycles.flush()?;
        Ok(())
    }
}
