//! Fluent builder for constructing a [`Simulation`].

use el_arrivals::{ArrivalGenerator, from_schedule};
use el_balking::{BalkingPolicy, BalkingTable, policy_for};
use el_core::{BalkingStrategy, Floor, SimConfig, SimRng, SimTime};
use el_elevator::{Elevator, TravelTimeTable};
use el_people::Roster;

use crate::{SimError, SimResult, Simulation};

/// Fluent builder for [`Simulation`].
///
/// # Required inputs
///
/// - [`SimConfig`]: seed, arrival rate, horizon, balking strategy, elevator
///
/// # Optional inputs (have defaults)
///
/// | Method               | Default                                          |
/// |----------------------|--------------------------------------------------|
/// | `.arrivals(v)`       | Drawn from the seeded exponential generator      |
/// | `.travel_times(t)`   | `TravelTimeTable::standard()`                    |
/// | `.balking_table(t)`  | `BalkingTable::standard()`                       |
/// | `.policy(p)`         | `policy_for(config.balking, ...)`                |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(config)
///     .arrivals(vec![(SimTime(5.0), Floor::F3)])
///     .build()?;
/// sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder {
    config:        SimConfig,
    arrivals:      Option<Vec<(SimTime, Floor)>>,
    travel_times:  Option<TravelTimeTable>,
    balking_table: Option<BalkingTable>,
    policy:        Option<Box<dyn BalkingPolicy>>,
}

impl SimBuilder {
    pub fn new(config: SimConfig) -> Self {
        Self {
            config,
            arrivals:      None,
            travel_times:  None,
            balking_table: None,
            policy:        None,
        }
    }

    /// Use a fixed arrival schedule instead of drawing one.
    ///
    /// Times must be non-decreasing and destinations must be upper floors.
    /// The seeded random source is then used only for balking draws.
    pub fn arrivals(mut self, schedule: Vec<(SimTime, Floor)>) -> Self {
        self.arrivals = Some(schedule);
        self
    }

    pub fn travel_times(mut self, table: TravelTimeTable) -> Self {
        self.travel_times = Some(table);
        self
    }

    /// Probabilities used by the default balking policy.  Ignored when
    /// `.policy(..)` is also given.
    pub fn balking_table(mut self, table: BalkingTable) -> Self {
        self.balking_table = Some(table);
        self
    }

    /// Replace the policy named by `config.balking` with a custom one.
    pub fn policy(mut self, policy: Box<dyn BalkingPolicy>) -> Self {
        self.policy = Some(policy);
        self
    }

    /// Validate inputs, materialise the arrival queue, and return a
    /// ready-to-run [`Simulation`].
    ///
    /// Nothing is returned unless every input is valid.
    pub fn build(self) -> SimResult<Simulation> {
        self.config.validate()?;

        let elevator = Elevator::new(
            self.config.elevator.clone(),
            self.travel_times.unwrap_or_default(),
        )?;

        let policy = match self.policy {
            Some(p) => p,
            None => {
                let table = self.balking_table.unwrap_or_default();
                let missing = Floor::UPPER.into_iter().find(|&f| table.get(f).is_none());
                if let (BalkingStrategy::DefaultBalking, Some(floor)) = (self.config.balking, missing) {
                    return Err(SimError::Config(format!(
                        "balking table has no probability for {floor}"
                    )));
                }
                policy_for(self.config.balking, self.config.guaranteed_boarders, table)
            }
        };

        // ── Arrivals ──────────────────────────────────────────────────────
        //
        // Generation draws from the same seeded source the balking policy
        // uses afterwards, so one seed pins down the whole run.
        let mut rng = SimRng::new(self.config.seed);
        let mut roster = Roster::new();
        let queue = match self.arrivals {
            Some(schedule) => from_schedule(&schedule, &mut roster)?,
            None => ArrivalGenerator::from_config(&self.config)?.generate(&mut rng, &mut roster),
        };

        Ok(Simulation::from_parts(self.config, rng, elevator, queue, roster, policy))
    }
}
