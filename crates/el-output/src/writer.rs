//! The `OutputWriter` trait implemented by backend writers.

use crate::{CycleRow, OutputResult, PersonRow};

/// A sink for roster and cycle rows.
///
/// Errors are returned to the caller; [`SimOutputObserver`][crate::SimOutputObserver]
/// stores the first one for [`take_error`][crate::SimOutputObserver::take_error]
/// because observer hooks cannot fail.
pub trait OutputWriter {
    /// Write a batch of people.
    fn write_people(&mut self, rows: &[PersonRow]) -> OutputResult<()>;

    /// Write one duty-cycle row.
    fn write_cycle(&mut self, row: &CycleRow) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
