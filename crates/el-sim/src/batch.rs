//! Many independent runs: seed batches and the arrival-rate sweep.
//!
//! Each seed gets its own `Simulation`, random source, and roster; runs share
//! nothing, so with the `parallel` feature they go straight onto Rayon's pool.
//! Results always come back in input order.

use el_core::{BalkingStrategy, Floor, SimConfig, SimTime};
use tracing::info;

use crate::{Evaluation, SimError, SimResult, Simulation};

/// Times (minutes since the start of the rush) at which `RunSummary` samples
/// the queue length: 8:15, 8:30, 8:45 and 9:00.
pub const QUEUE_PROBES: [f64; 4] = [15.0, 30.0, 45.0, 60.0];

// ── RunSummary ────────────────────────────────────────────────────────────────

/// The numbers kept from one finished run.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RunSummary {
    pub seed:              u64,
    pub people:            usize,
    pub took_elevator:     usize,
    pub took_stairs:       usize,
    pub cycles:            usize,
    /// Minutes until the elevator was last back at ground.
    pub finished_at:       f64,
    pub average_wait:      Option<f64>,
    pub last_load_time:    Option<f64>,
    pub last_arrival_wait: Option<f64>,
    /// Queue length at each of [`QUEUE_PROBES`].
    pub queue_lengths:     [usize; 4],
    /// Walkers per upper floor, ordered F2, F3, F4.
    pub walkers:           [usize; 3],
}

impl RunSummary {
    pub fn from_sim(sim: &Simulation) -> SimResult<RunSummary> {
        let eval = Evaluation::of(sim);
        let [_, _, took_stairs, took_elevator] = sim.roster().status_counts();

        let mut queue_lengths = [0; 4];
        for (slot, &t) in queue_lengths.iter_mut().zip(&QUEUE_PROBES) {
            *slot = eval.queue_length_at(SimTime(t))?;
        }

        Ok(RunSummary {
            seed: sim.config.seed,
            people: sim.roster().len(),
            took_elevator,
            took_stairs,
            cycles: sim.cycles_run(),
            finished_at: sim.now().minutes(),
            average_wait: eval.average_elevator_wait_time(),
            last_load_time: eval.last_elevator_load_time().map(SimTime::minutes),
            last_arrival_wait: eval.last_arrival_wait_time(),
            queue_lengths,
            walkers: Floor::UPPER.map(|f| eval.count_walkers_to_floor(f)),
        })
    }
}

/// Run `template` once per seed and summarise each run.
///
/// Only the seed varies between runs.  The output is in `seeds` order
/// whether or not the `parallel` feature is on.
pub fn run_batch(template: &SimConfig, seeds: &[u64]) -> SimResult<Vec<RunSummary>> {
    template.validate()?;
    let run_one = |seed: u64| -> SimResult<RunSummary> {
        let sim = Simulation::simulate(template.with_seed(seed))?;
        RunSummary::from_sim(&sim)
    };

    #[cfg(not(feature = "parallel"))]
    {
        seeds.iter().map(|&seed| run_one(seed)).collect()
    }

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;

        seeds.par_iter().map(|&seed| run_one(seed)).collect()
    }
}

// ── Stats ─────────────────────────────────────────────────────────────────────

/// Count, mean, and range of a sample.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Stats {
    pub count: usize,
    pub mean:  f64,
    pub min:   f64,
    pub max:   f64,
}

impl Stats {
    /// `None` for an empty sample.
    pub fn from_values<I: IntoIterator<Item = f64>>(values: I) -> Option<Stats> {
        let mut count = 0;
        let mut sum = 0.0;
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for v in values {
            count += 1;
            sum += v;
            min = min.min(v);
            max = max.max(v);
        }
        if count == 0 {
            return None;
        }
        Some(Stats { count, mean: sum / count as f64, min, max })
    }
}

// ── Capacity sweep ────────────────────────────────────────────────────────────

/// One arrival rate of a [`capacity_sweep`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CapacityPoint {
    /// People per minute.
    pub rate_per_minute:   f64,
    pub runs:              usize,
    /// Wait of the last arrival, over runs where anyone arrived at all.
    pub last_arrival_wait: Option<Stats>,
}

/// How long the morning's final arrival waits as the arrival rate grows.
///
/// For each rate (people per minute) run `sims_per_level` seeds, starting at
/// `template.seed`, with nobody balking, and collect the last arrival's wait.
/// Past the elevator's service capacity the queue grows all morning and this
/// wait climbs steeply.
pub fn capacity_sweep(
    template:         &SimConfig,
    rates_per_minute: &[f64],
    sims_per_level:   usize,
) -> SimResult<Vec<CapacityPoint>> {
    if sims_per_level == 0 {
        return Err(SimError::Config("capacity sweep needs at least one run per rate".into()));
    }
    let seeds = (0..sims_per_level as u64)
        .map(|i| template.seed.checked_add(i))
        .collect::<Option<Vec<u64>>>()
        .ok_or_else(|| {
            SimError::Config(format!(
                "{sims_per_level} runs starting at seed {} overflow u64",
                template.seed
            ))
        })?;

    let mut points = Vec::with_capacity(rates_per_minute.len());
    for &rate in rates_per_minute {
        if !(rate.is_finite() && rate > 0.0) {
            return Err(SimError::Config(format!(
                "arrival rate must be positive and finite, got {rate}"
            )));
        }
        let config = SimConfig {
            mean_interarrival_minutes: 1.0 / rate,
            balking: BalkingStrategy::NoBalking,
            ..template.clone()
        };
        let runs = run_batch(&config, &seeds)?;
        let last_arrival_wait = Stats::from_values(runs.iter().filter_map(|r| r.last_arrival_wait));
        info!(
            rate,
            mean_last_wait = last_arrival_wait.map(|s| s.mean),
            "capacity sweep level done"
        );
        points.push(CapacityPoint { rate_per_minute: rate, runs: runs.len(), last_arrival_wait });
    }
    Ok(points)
}

/// Rates from `from` to `to` inclusive in steps of `step`.
///
/// The count is fixed up front so floating-point drift can't add or drop the
/// final level.
pub fn rate_range(from: f64, to: f64, step: f64) -> SimResult<Vec<f64>> {
    if !(from.is_finite() && to.is_finite() && step.is_finite() && step > 0.0 && to >= from) {
        return Err(SimError::Config(format!(
            "invalid rate range {from}..={to} step {step}"
        )));
    }
    let levels = ((to - from) / step + 1e-9).floor() as usize + 1;
    Ok((0..levels).map(|i| from + step * i as f64).collect())
}
