//! The `Simulation` struct and its main loop.

use el_arrivals::ArrivalQueue;
use el_balking::BalkingPolicy;
use el_core::{Floor, SimClock, SimConfig, SimRng, SimTime};
use el_elevator::Elevator;
use el_people::{Person, PersonStatus, Roster};
use tracing::{debug, info};

use crate::{CycleSummary, NoopObserver, SimBuilder, SimObserver, SimResult};

/// One morning of one elevator.
///
/// Holds the clock, the seeded random source, the elevator, the arrival queue,
/// and the roster of everyone generated.  The roster is fixed at construction
/// and never reordered; people are only ever mutated in place.
///
/// Create via [`SimBuilder`]; run with [`Simulation::run`].
pub struct Simulation {
    /// The configuration this run was built from.
    pub config: SimConfig,

    clock:    SimClock,
    rng:      SimRng,
    elevator: Elevator,
    queue:    ArrivalQueue,
    roster:   Roster,
    policy:   Box<dyn BalkingPolicy>,
    cycles:   usize,
}

impl Simulation {
    pub(crate) fn from_parts(
        config:   SimConfig,
        rng:      SimRng,
        elevator: Elevator,
        queue:    ArrivalQueue,
        roster:   Roster,
        policy:   Box<dyn BalkingPolicy>,
    ) -> Self {
        Self {
            clock: SimClock::new(config.day_start_minutes),
            config,
            rng,
            elevator,
            queue,
            roster,
            policy,
            cycles: 0,
        }
    }

    /// Build from `config` and run to completion without callbacks.
    pub fn simulate(config: SimConfig) -> SimResult<Simulation> {
        let mut sim = SimBuilder::new(config).build()?;
        sim.run(&mut NoopObserver)?;
        Ok(sim)
    }

    // ── Public API ────────────────────────────────────────────────────────

    /// Run duty cycles until the arrival queue is empty.
    ///
    /// Calls observer hooks at every idle jump, balking outcome, and cycle
    /// end.  Use [`NoopObserver`] if you don't need callbacks.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        info!(
            seed = self.config.seed,
            queued = self.queue.len(),
            balking = %self.config.balking,
            "simulation start"
        );
        observer.on_sim_start(&self.config, self.queue.len());

        while let Some(front) = self.queue.front() {
            let now = self.clock.now();
            let arrival = self.roster.get(front)?.arrival_time();
            if arrival > now {
                debug!(from = %now, to = %arrival, "elevator idle until next arrival");
                self.clock.advance_to(arrival)?;
                observer.on_idle(now, arrival);
                continue;
            }
            let cycle = self.run_cycle(observer)?;
            observer.on_cycle_end(&cycle);
        }

        let [waiting, on_elevator, stairs, elevator] = self.roster.status_counts();
        debug_assert_eq!(waiting + on_elevator, 0, "people left unserved after the queue drained");
        info!(
            seed = self.config.seed,
            finished_at = %self.clock.now(),
            cycles = self.cycles,
            took_elevator = elevator,
            took_stairs = stairs,
            "simulation end"
        );
        observer.on_sim_end(self.clock.now(), &self.roster);
        Ok(())
    }

    /// One duty cycle starting at the current time: balk, load, travel.
    fn run_cycle<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<CycleSummary> {
        let start = self.clock.now();

        let balkers = self.policy.apply(&mut self.queue, &mut self.roster, start, &mut self.rng)?;
        if !balkers.is_empty() {
            observer.on_balk(start, &balkers);
        }

        let load_end = self.elevator.load(&mut self.queue, &mut self.roster, start)?;
        self.clock.advance_to(load_end)?;
        let boarded = self.elevator.occupants().len();
        let stops: Vec<Floor> = self.elevator.pending_stops().collect();

        let finish = self.elevator.travel(&mut self.roster, load_end)?;
        self.clock.advance_to(finish)?;

        let cycle = CycleSummary {
            index: self.cycles,
            start,
            load_end,
            finish,
            boarded,
            balked: balkers.len(),
            stops,
        };
        self.cycles += 1;
        debug!(
            cycle = cycle.index,
            %start,
            %finish,
            boarded,
            balked = cycle.balked,
            wall_clock = %self.clock.wall_clock(),
            "duty cycle complete"
        );
        Ok(cycle)
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    /// Everyone generated, in generation order.
    pub fn all_people(&self) -> &[Person] {
        self.roster.people()
    }

    /// People who rode the elevator to their floor.
    pub fn elevator_people(&self) -> impl Iterator<Item = &Person> + '_ {
        self.roster.with_status(PersonStatus::TookElevator)
    }

    /// People who gave up and took the stairs.
    pub fn stair_people(&self) -> impl Iterator<Item = &Person> + '_ {
        self.roster.with_status(PersonStatus::TookStairs)
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn now(&self) -> SimTime {
        self.clock.now()
    }

    pub fn clock(&self) -> &SimClock {
        &self.clock
    }

    pub fn elevator(&self) -> &Elevator {
        &self.elevator
    }

    /// People still queued (empty once `run` returns).
    pub fn queue(&self) -> &ArrivalQueue {
        &self.queue
    }

    /// Duty cycles completed so far.
    pub fn cycles_run(&self) -> usize {
        self.cycles
    }
}
