//! Plain data row types written by output backends.

use el_core::Floor;
use el_people::Person;
use el_sim::CycleSummary;

/// One person's journey.  Times are minutes since the start of the rush;
/// `None` means the transition never happened.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PersonRow {
    pub id:          u32,
    /// Floor number, 1-based (ground is 1).
    pub destination: u8,
    pub status:      &'static str,
    pub arrival:     f64,
    pub load:        Option<f64>,
    pub unload:      Option<f64>,
    pub stairs:      Option<f64>,
}

impl From<&Person> for PersonRow {
    fn from(p: &Person) -> Self {
        PersonRow {
            id:          p.id().0,
            destination: p.destination().number(),
            status:      p.status().as_str(),
            arrival:     p.arrival_time().minutes(),
            load:        p.elevator_load_time().map(|t| t.minutes()),
            unload:      p.elevator_unload_time().map(|t| t.minutes()),
            stairs:      p.take_stairs_time().map(|t| t.minutes()),
        }
    }
}

/// One duty cycle of the elevator.
#[derive(Debug, Clone, PartialEq)]
pub struct CycleRow {
    pub index:       u64,
    pub start:       f64,
    /// `HH:MM:SS` of `start`.
    pub start_clock: String,
    pub load_end:    f64,
    pub finish:      f64,
    pub boarded:     u64,
    pub balked:      u64,
    /// Floor numbers visited, `;`-separated, e.g. `2;4`.
    pub stops:       String,
}

impl CycleRow {
    pub fn new(cycle: &CycleSummary, start_clock: String) -> Self {
        CycleRow {
            index:    cycle.index as u64,
            start:    cycle.start.minutes(),
            start_clock,
            load_end: cycle.load_end.minutes(),
            finish:   cycle.finish.minutes(),
            boarded:  cycle.boarded as u64,
            balked:   cycle.balked as u64,
            stops:    join_floors(&cycle.stops),
        }
    }
}

fn join_floors(floors: &[Floor]) -> String {
    floors
        .iter()
        .map(|f| f.number().to_string())
        .collect::<Vec<_>>()
        .join(";")
}
