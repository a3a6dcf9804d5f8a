//! Post-hoc statistics over one finished run.
//!
//! Everything here reads the roster only; nothing mutates the simulation.
//! Queries that need a person to have left the queue (`queue_length_at`)
//! error if someone is still waiting, so call them after `run` returns.

use el_core::{Floor, SimTime};
use el_people::{PersonStatus, Roster};

use crate::{SimResult, Simulation};

/// Read-only view of a finished roster.
#[derive(Clone, Copy, Debug)]
pub struct Evaluation<'a> {
    roster: &'a Roster,
}

impl<'a> Evaluation<'a> {
    pub fn new(roster: &'a Roster) -> Self {
        Self { roster }
    }

    pub fn of(sim: &'a Simulation) -> Self {
        Self::new(sim.roster())
    }

    /// People in line at `t`: arrived no later than `t` and left the queue no
    /// earlier than `t`.
    pub fn queue_length_at(&self, t: SimTime) -> SimResult<usize> {
        let mut count = 0;
        for p in self.roster {
            if p.arrival_time() <= t && p.left_queue_time()? >= t {
                count += 1;
            }
        }
        Ok(count)
    }

    /// The latest boarding time of anyone who rode.  `None` if nobody did.
    pub fn last_elevator_load_time(&self) -> Option<SimTime> {
        self.roster
            .with_status(PersonStatus::TookElevator)
            .filter_map(|p| p.elevator_load_time())
            .reduce(SimTime::max)
    }

    /// Mean minutes riders spent in line before boarding.  `None` if nobody
    /// rode.
    pub fn average_elevator_wait_time(&self) -> Option<f64> {
        let waits: Vec<f64> = self
            .roster
            .with_status(PersonStatus::TookElevator)
            .filter_map(|p| p.elevator_wait())
            .collect();
        if waits.is_empty() {
            None
        } else {
            Some(waits.iter().sum::<f64>() / waits.len() as f64)
        }
    }

    /// How many people headed for `floor` took the stairs.
    pub fn count_walkers_to_floor(&self, floor: Floor) -> usize {
        self.roster
            .with_status(PersonStatus::TookStairs)
            .filter(|p| p.destination() == floor)
            .count()
    }

    /// Share of the people headed for `floor` who took the stairs.  `None` if
    /// nobody was headed there.
    pub fn fraction_walkers_to_floor(&self, floor: Floor) -> Option<f64> {
        let headed = self.roster.iter().filter(|p| p.destination() == floor).count();
        if headed == 0 {
            return None;
        }
        Some(self.count_walkers_to_floor(floor) as f64 / headed as f64)
    }

    /// Wait of the last person generated, if they rode the elevator.
    ///
    /// Under no balking this is the service-capacity measure: how long the
    /// final arrival of the morning stood in line.
    pub fn last_arrival_wait_time(&self) -> Option<f64> {
        self.roster.people().last().and_then(|p| p.elevator_wait())
    }
}
