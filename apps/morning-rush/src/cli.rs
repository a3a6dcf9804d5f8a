//! Command-line arguments and how they fold into a `SimConfig`.

use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand, ValueEnum};
use el_core::{BalkingStrategy, SimConfig};

/// One elevator, four floors, 8:00 to 9:00 AM.
///
/// Deterministic: the same seed and configuration always produce the same
/// morning.
#[derive(Parser, Debug)]
#[command(name = "morning-rush")]
#[command(version, about, long_about = None)]
pub struct Args {
    /// JSON file with a full or partial `SimConfig`.  Flags override it.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Base random seed.
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Mean minutes between arrivals.
    #[arg(long, global = true)]
    pub mean_interarrival: Option<f64>,

    #[arg(long, global = true, value_enum)]
    pub balking: Option<BalkingArg>,

    /// Elevator capacity.
    #[arg(long, global = true)]
    pub capacity: Option<usize>,

    /// How many people at the front of the line never balk.
    #[arg(long, global = true)]
    pub guaranteed_boarders: Option<usize>,

    /// Log every state transition (same as RUST_LOG=debug).
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Simulate one morning and print what happened.
    Run {
        /// Write people.csv and cycles.csv into this directory.
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Simulate many seeds and print aggregate statistics.
    Batch {
        /// Number of seeds, counting up from --seed.
        #[arg(long, default_value = "1000")]
        runs: u64,

        /// Print one JSON object per run instead of the summary table.
        #[arg(long)]
        json: bool,
    },
    /// Sweep the arrival rate and report how long the last arrival waits.
    Capacity {
        /// Lowest arrival rate, people per minute.
        #[arg(long, default_value = "0.2")]
        from: f64,

        /// Highest arrival rate, people per minute (inclusive).
        #[arg(long, default_value = "3.5")]
        to: f64,

        #[arg(long, default_value = "0.05")]
        step: f64,

        /// Simulations per rate.
        #[arg(long, default_value = "10")]
        per_level: usize,

        #[arg(long)]
        json: bool,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum BalkingArg {
    /// Nobody leaves the line.
    None,
    /// Closer floors are more tempting to walk to.
    Default,
}

impl From<BalkingArg> for BalkingStrategy {
    fn from(arg: BalkingArg) -> Self {
        match arg {
            BalkingArg::None    => BalkingStrategy::NoBalking,
            BalkingArg::Default => BalkingStrategy::DefaultBalking,
        }
    }
}

impl Args {
    /// Defaults, then the `--config` file, then individual flags.
    pub fn sim_config(&self) -> Result<SimConfig> {
        let mut config = match &self.config {
            Some(path) => {
                let text = std::fs::read_to_string(path)
                    .with_context(|| format!("reading config {}", path.display()))?;
                serde_json::from_str::<SimConfig>(&text)
                    .with_context(|| format!("parsing config {}", path.display()))?
            }
            None => SimConfig::default(),
        };

        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        if let Some(mean) = self.mean_interarrival {
            config.mean_interarrival_minutes = mean;
        }
        if let Some(balking) = self.balking {
            config.balking = balking.into();
        }
        if let Some(capacity) = self.capacity {
            config.elevator.capacity = capacity;
        }
        if let Some(n) = self.guaranteed_boarders {
            config.guaranteed_boarders = n;
        }

        config.validate().context("invalid configuration")?;
        Ok(config)
    }
}

/// `runs` consecutive seeds starting at `base`.
pub fn batch_seeds(base: u64, runs: u64) -> Result<Vec<u64>> {
    (0..runs)
        .map(|i| base.checked_add(i))
        .collect::<Option<Vec<u64>>>()
        .ok_or_else(|| anyhow!("{runs} runs starting at seed {base} overflow u64"))
}
