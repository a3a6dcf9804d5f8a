//! The elevator state machine.

use std::collections::{BTreeSet, VecDeque};

use el_arrivals::ArrivalQueue;
use el_core::{ElevatorConfig, Floor, SimTime};
use el_people::{PersonId, Roster};
use tracing::debug;

use crate::{ElevatorError, ElevatorResult, TravelTimeTable};

/// Where the elevator is in its duty cycle.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
pub enum ElevatorStatus {
    /// Idle at ground with nobody aboard.
    #[default]
    Waiting,
    /// Doors open at ground, people boarding.
    Loading,
    /// Doors closed, delivering riders and returning to ground.
    Travelling,
}

/// One elevator with fixed capacity and door timings.
///
/// # Invariants
///
/// - `occupants.len() <= config.capacity` at all times.
/// - `stops` is the strictly ascending set of the occupants' destinations,
///   rebuilt at the end of every `load` and empty once `travel` returns.
/// - Between cycles the elevator is `Waiting` at `Ground` with no occupants.
#[derive(Clone, Debug)]
pub struct Elevator {
    config:    ElevatorConfig,
    travel:    TravelTimeTable,
    floor:     Floor,
    status:    ElevatorStatus,
    /// Riders in boarding order.
    occupants: Vec<PersonId>,
    /// Floors still to visit this cycle, ascending.
    stops:     VecDeque<Floor>,
}

impl Elevator {
    /// An idle elevator at ground.
    ///
    /// Fails if `config` is invalid or `travel` cannot serve an ascending
    /// tour from ground.
    pub fn new(config: ElevatorConfig, travel: TravelTimeTable) -> ElevatorResult<Self> {
        config.validate()?;
        travel.validate_tours()?;
        Ok(Self {
            config,
            travel,
            floor:     Floor::Ground,
            status:    ElevatorStatus::Waiting,
            occupants: Vec::new(),
            stops:     VecDeque::new(),
        })
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn floor(&self) -> Floor {
        self.floor
    }

    pub fn status(&self) -> ElevatorStatus {
        self.status
    }

    pub fn occupants(&self) -> &[PersonId] {
        &self.occupants
    }

    pub fn pending_stops(&self) -> impl Iterator<Item = Floor> + '_ {
        self.stops.iter().copied()
    }

    pub fn capacity(&self) -> usize {
        self.config.capacity
    }

    pub fn remaining_capacity(&self) -> usize {
        self.config.capacity - self.occupants.len()
    }

    pub fn config(&self) -> &ElevatorConfig {
        &self.config
    }

    pub fn travel_times(&self) -> &TravelTimeTable {
        &self.travel
    }

    // ── Duty cycle ────────────────────────────────────────────────────────

    /// Board people from the front of `queue` for one loading window.
    ///
    /// The doors stay open from `start` until `start + load_minutes`.  Anyone
    /// at the front of the queue who has arrived by the time the doors close
    /// boards, until the car is full.  Someone already waiting is charged
    /// `start` as their load time; someone who walks up mid-window is charged
    /// their own arrival time.
    ///
    /// Always returns `start + load_minutes`, however many boarded.
    pub fn load(
        &mut self,
        queue:  &mut ArrivalQueue,
        roster: &mut Roster,
        start:  SimTime,
    ) -> ElevatorResult<SimTime> {
        if self.floor != Floor::Ground {
            return Err(ElevatorError::NotAtGround(self.floor));
        }
        self.status = ElevatorStatus::Loading;
        let doors_close = start + self.config.load_minutes;

        while let Some(id) = queue.front() {
            let arrival = roster.get(id)?.arrival_time();
            if arrival > doors_close {
                // Arrived after the doors closed; so has everyone behind them.
                break;
            }
            if self.remaining_capacity() == 0 {
                break;
            }
            queue.pop_front();
            let loaded_at = arrival.max(start);
            roster.get_mut(id)?.board(loaded_at)?;
            self.occupants.push(id);
            debug!(person = id.0, %loaded_at, "boarded");
        }
        debug_assert!(self.occupants.len() <= self.config.capacity);

        let mut floors = BTreeSet::new();
        for &id in &self.occupants {
            floors.insert(roster.get(id)?.destination());
        }
        self.stops = floors.into_iter().collect();

        debug!(
            %start,
            %doors_close,
            aboard = self.occupants.len(),
            stops = ?self.stops,
            "finished loading"
        );
        Ok(doors_close)
    }

    /// Deliver everyone aboard and return to ground.
    ///
    /// Visits the pending stops in ascending order, unloading at each, then
    /// travels back down.  Returns the time the elevator is idle at ground.
    ///
    /// Ascending order is only the shortest tour because every trip starts at
    /// ground and every destination is above it.
    pub fn travel(&mut self, roster: &mut Roster, start: SimTime) -> ElevatorResult<SimTime> {
        self.status = ElevatorStatus::Travelling;
        let mut t = start;
        while let Some(stop) = self.stops.pop_front() {
            t = self.travel_to(stop, t)?;
            debug!(floor = %stop, at = %t, "arrived at stop");
            t = self.unload(roster, t)?;
        }
        debug_assert!(self.occupants.is_empty(), "riders left aboard after final stop");

        t = self.travel_to(Floor::Ground, t)?;
        self.status = ElevatorStatus::Waiting;
        debug!(%start, back_at = %t, "returned to ground");
        Ok(t)
    }

    /// Let off every occupant bound for the current floor.
    ///
    /// Riders who stay aboard keep their boarding order.  Always returns
    /// `start + unload_minutes`.
    pub fn unload(&mut self, roster: &mut Roster, start: SimTime) -> ElevatorResult<SimTime> {
        // Walk backwards so removing index i never shifts an unvisited entry.
        for index in (0..self.occupants.len()).rev() {
            let id = self.occupants[index];
            if roster.get(id)?.destination() == self.floor {
                roster.get_mut(id)?.alight(start)?;
                self.occupants.remove(index);
                debug!(person = id.0, floor = %self.floor, at = %start, "unloaded");
            }
        }
        Ok(start + self.config.unload_minutes)
    }

    /// Move to `destination`, returning the arrival time.
    pub fn travel_to(&mut self, destination: Floor, start: SimTime) -> ElevatorResult<SimTime> {
        let minutes = self.travel.lookup(self.floor, destination)?;
        self.floor = destination;
        Ok(start + minutes)
    }
}
