//! Arrival generation.

use el_core::{CoreError, Floor, SimConfig, SimRng, SimTime};
use el_people::Roster;
use rand_distr::{Distribution, Exp};
use tracing::debug;

use crate::{ArrivalError, ArrivalQueue, ArrivalResult};

/// Draws a morning of arrivals from a Poisson process.
///
/// Inter-arrival gaps are exponential with mean `mean_interarrival_minutes`;
/// destinations are uniform over the upper floors.  Both are drawn from the
/// run's [`SimRng`], gap first, then destination, per person.
#[derive(Debug, Clone)]
pub struct ArrivalGenerator {
    gap:     Exp<f64>,
    horizon: SimTime,
}

impl ArrivalGenerator {
    pub fn new(mean_interarrival_minutes: f64, horizon_minutes: f64) -> ArrivalResult<Self> {
        if !(mean_interarrival_minutes.is_finite() && mean_interarrival_minutes > 0.0) {
            return Err(CoreError::Config(format!(
                "mean inter-arrival time must be positive, got {mean_interarrival_minutes}"
            ))
            .into());
        }
        if !(horizon_minutes.is_finite() && horizon_minutes > 0.0) {
            return Err(CoreError::Config(format!(
                "arrival horizon must be positive, got {horizon_minutes}"
            ))
            .into());
        }
        let gap = Exp::new(1.0 / mean_interarrival_minutes)
            .map_err(|e| CoreError::Config(format!("exponential gap: {e}")))?;
        Ok(Self { gap, horizon: SimTime(horizon_minutes) })
    }

    pub fn from_config(config: &SimConfig) -> ArrivalResult<Self> {
        Self::new(config.mean_interarrival_minutes, config.horizon_minutes)
    }

    pub fn horizon(&self) -> SimTime {
        self.horizon
    }

    /// Spawn every arrival before the horizon into `roster` and return them
    /// queued in arrival order.
    pub fn generate(&self, rng: &mut SimRng, roster: &mut Roster) -> ArrivalQueue {
        let mut queue = ArrivalQueue::new();
        let mut t = SimTime::ZERO;
        loop {
            t += self.gap.sample(rng.inner());
            if t >= self.horizon {
                break;
            }
            let destination = *rng.choose(&Floor::UPPER).unwrap_or(&Floor::F2);
            queue.push_back(roster.spawn(destination, t));
        }
        debug!(arrivals = queue.len(), horizon = %self.horizon, "generated arrival queue");
        queue
    }
}

/// Queue a fixed arrival schedule instead of drawing one.
///
/// Entries must be non-decreasing in time and target upper floors only.
pub fn from_schedule(
    schedule: &[(SimTime, Floor)],
    roster:   &mut Roster,
) -> ArrivalResult<ArrivalQueue> {
    let mut previous = SimTime::ZERO;
    for (index, &(at, floor)) in schedule.iter().enumerate() {
        if !at.is_finite() || at < SimTime::ZERO {
            return Err(ArrivalError::InvalidTime { index, at });
        }
        if at < previous {
            return Err(ArrivalError::OutOfOrder { index, at, previous });
        }
        if floor.is_ground() {
            return Err(ArrivalError::GroundDestination { index, floor });
        }
        previous = at;
    }

    let mut queue = ArrivalQueue::new();
    for &(at, floor) in schedule {
        queue.push_back(roster.spawn(floor, at));
    }
    Ok(queue)
}
