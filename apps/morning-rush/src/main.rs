//! morning-rush — command-line driver for the elevator_rush simulation.
//!
//! ```bash
//! # One morning with the default scenario, CSVs into ./output
//! morning-rush run --seed 7 --output output
//!
//! # 10 000 seeds, nobody balks
//! morning-rush batch --runs 10000 --balking none
//!
//! # Where does the elevator stop keeping up?
//! morning-rush capacity --from 0.2 --to 3.5 --step 0.05 --per-level 10
//! ```

mod cli;

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use el_core::{Floor, SimConfig, SimTime};
use el_output::{CsvWriter, OutputWriter, SimOutputObserver};
use el_sim::{
    Evaluation, NoopObserver, QUEUE_PROBES, RunSummary, SimBuilder, Simulation, Stats,
    capacity_sweep, rate_range, run_batch,
};

use cli::{Args, Command, batch_seeds};

fn main() -> Result<()> {
    let args = Args::parse();

    let default_filter = if args.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .init();

    let config = args.sim_config()?;
    info!(?config, "configuration");

    match &args.command {
        Command::Run { output } => run_one(&config, output.as_deref()),
        Command::Batch { runs, json } => run_many(&config, *runs, *json),
        Command::Capacity { from, to, step, per_level, json } => {
            sweep(&config, *from, *to, *step, *per_level, *json)
        }
    }
}

// ── run ───────────────────────────────────────────────────────────────────────

fn run_one(config: &SimConfig, output: Option<&Path>) -> Result<()> {
    let mut sim = SimBuilder::new(config.clone()).build()?;

    match output {
        Some(dir) => {
            let writer = CsvWriter::new(dir)
                .with_context(|| format!("creating output in {}", dir.display()))?;
            run_to_output(&mut sim, writer, config)
                .with_context(|| format!("writing output to {}", dir.display()))?;
        }
        None => sim.run(&mut NoopObserver)?,
    }

    let eval = Evaluation::of(&sim);
    let [_, _, stairs, elevator] = sim.roster().status_counts();

    println!("=== morning-rush — seed {} ({}) ===", config.seed, config.balking);
    println!(
        "Arrivals: {}  |  Elevator: {}  |  Stairs: {}  |  Cycles: {}",
        sim.roster().len(),
        elevator,
        stairs,
        sim.cycles_run()
    );
    println!("Last trip back at ground: {}", sim.clock());
    if let Some(wait) = eval.average_elevator_wait_time() {
        println!("Average wait for the elevator: {wait:.2} min");
    }
    if let Some(t) = eval.last_elevator_load_time() {
        println!("Last boarding: {t}");
    }
    println!();

    println!("{:<8} {:>8}", "Time", "Queue");
    for &t in &QUEUE_PROBES {
        println!("{:<8} {:>8}", format!("+{t:.0}m"), eval.queue_length_at(SimTime(t))?);
    }
    println!();

    println!("{:<8} {:>8} {:>10}", "Floor", "Walkers", "Fraction");
    for floor in Floor::UPPER {
        let fraction = eval
            .fraction_walkers_to_floor(floor)
            .map(|f| format!("{f:.3}"))
            .unwrap_or_else(|| "-".into());
        println!("{:<8} {:>8} {:>10}", floor.as_str(), eval.count_walkers_to_floor(floor), fraction);
    }

    if let Some(dir) = output {
        println!();
        println!("Wrote people.csv and cycles.csv to {}", dir.display());
    }
    Ok(())
}

/// Run `sim` while streaming rows to `writer`; the first write error fails the
/// run.
fn run_to_output<W: OutputWriter>(sim: &mut Simulation, writer: W, config: &SimConfig) -> Result<()> {
    let mut obs = SimOutputObserver::new(writer, config);
    sim.run(&mut obs)?;
    match obs.take_error() {
        Some(e) => Err(e.into()),
        None => Ok(()),
    }
}

// ── batch ─────────────────────────────────────────────────────────────────────

fn run_many(config: &SimConfig, runs: u64, json: bool) -> Result<()> {
    let seeds = batch_seeds(config.seed, runs)?;
    let t0 = Instant::now();
    let summaries = run_batch(config, &seeds)?;
    info!(runs, elapsed_secs = t0.elapsed().as_secs_f64(), "batch complete");

    if json {
        println!("{}", serde_json::to_string_pretty(&summaries)?);
        return Ok(());
    }

    println!("=== morning-rush batch — {} seeds from {} ({}) ===", runs, config.seed, config.balking);
    println!("{:<24} {:>8} {:>8} {:>8} {:>8}", "Measure", "Mean", "Min", "Max", "Runs");
    print_stats("people", &summaries, |r| Some(r.people as f64));
    print_stats("took stairs", &summaries, |r| Some(r.took_stairs as f64));
    print_stats("average wait (min)", &summaries, |r| r.average_wait);
    print_stats("last boarding (min)", &summaries, |r| r.last_load_time);
    print_stats("finished at (min)", &summaries, |r| Some(r.finished_at));
    for (i, &t) in QUEUE_PROBES.iter().enumerate() {
        print_stats(&format!("queue at +{t:.0}m"), &summaries, |r| Some(r.queue_lengths[i] as f64));
    }
    for (i, floor) in Floor::UPPER.into_iter().enumerate() {
        print_stats(&format!("walkers to {floor}"), &summaries, |r| Some(r.walkers[i] as f64));
    }
    Ok(())
}

fn print_stats(label: &str, runs: &[RunSummary], pick: impl Fn(&RunSummary) -> Option<f64>) {
    match Stats::from_values(runs.iter().filter_map(pick)) {
        Some(s) => println!(
            "{:<24} {:>8.2} {:>8.2} {:>8.2} {:>8}",
            label, s.mean, s.min, s.max, s.count
        ),
        None => println!("{label:<24} {:>8}", "-"),
    }
}

// ── capacity ──────────────────────────────────────────────────────────────────

fn sweep(
    config:    &SimConfig,
    from:      f64,
    to:        f64,
    step:      f64,
    per_level: usize,
    json:      bool,
) -> Result<()> {
    let rates = rate_range(from, to, step)?;
    let points = capacity_sweep(config, &rates, per_level)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&points)?);
        return Ok(());
    }

    println!("=== morning-rush capacity — {} rates, {} runs each, no balking ===", rates.len(), per_level);
    println!("{:>10} {:>16} {:>10}", "people/min", "last wait (min)", "max");
    for p in &points {
        match p.last_arrival_wait {
            Some(s) => println!("{:>10.2} {:>16.2} {:>10.2}", p.rate_per_minute, s.mean, s.max),
            None => println!("{:>10.2} {:>16}", p.rate_per_minute, "-"),
        }
    }
    Ok(())
}
