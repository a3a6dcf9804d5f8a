//! Simulation observer trait for progress reporting and data collection.

use el_core::{Floor, SimConfig, SimTime};
use el_people::{PersonId, Roster};

/// What happened during one duty cycle.
#[derive(Clone, Debug, PartialEq)]
pub struct CycleSummary {
    /// 0-based cycle number within the run.
    pub index:    usize,
    /// When the balking decision and loading began.
    pub start:    SimTime,
    /// When the doors closed.
    pub load_end: SimTime,
    /// When the elevator was back at ground.
    pub finish:   SimTime,
    pub boarded:  usize,
    pub balked:   usize,
    /// Floors visited, in the order visited.
    pub stops:    Vec<Floor>,
}

/// Callbacks invoked by [`Simulation::run`][crate::Simulation::run] at key
/// points in the main loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example: cycle printer
///
/// ```rust,ignore
/// struct CyclePrinter;
///
/// impl SimObserver for CyclePrinter {
///     fn on_cycle_end(&mut self, cycle: &CycleSummary) {
///         println!("cycle {}: {} aboard, back at {}", cycle.index, cycle.boarded, cycle.finish);
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called once before the first iteration.  `queued` is the number of
    /// people in the arrival queue.
    fn on_sim_start(&mut self, _config: &SimConfig, _queued: usize) {}

    /// Called when the elevator sits idle at ground until the next arrival.
    fn on_idle(&mut self, _from: SimTime, _to: SimTime) {}

    /// Called when the balking policy sends at least one person up the stairs.
    fn on_balk(&mut self, _now: SimTime, _balkers: &[PersonId]) {}

    /// Called after the elevator returns to ground at the end of each cycle.
    fn on_cycle_end(&mut self, _cycle: &CycleSummary) {}

    /// Called once after the queue drains, with the finished roster.
    fn on_sim_end(&mut self, _final_time: SimTime, _roster: &Roster) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want progress callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
