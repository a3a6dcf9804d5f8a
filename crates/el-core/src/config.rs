//! Run configuration.
//!
//! Defaults reproduce the studied scenario: one 12-person elevator, half a
//! minute to load and to unload, on average six arrivals a minute between
//! 8:00 and 9:00 AM, and the default balking behaviour.

use crate::{CoreError, CoreResult};

// ── BalkingStrategy ───────────────────────────────────────────────────────────

/// Which balking policy the simulation applies before each load.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BalkingStrategy {
    /// Nobody ever leaves the queue.
    NoBalking,
    /// People beyond the guaranteed boarders may take the stairs, with a
    /// per-destination probability.
    #[default]
    DefaultBalking,
}

impl BalkingStrategy {
    pub fn as_str(self) -> &'static str {
        match self {
            BalkingStrategy::NoBalking      => "no-balking",
            BalkingStrategy::DefaultBalking => "default-balking",
        }
    }
}

impl std::fmt::Display for BalkingStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── ElevatorConfig ────────────────────────────────────────────────────────────

/// Fixed elevator parameters.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ElevatorConfig {
    /// Maximum simultaneous occupants.
    pub capacity: usize,
    /// How long the doors stay open at ground for each load, in minutes.
    pub load_minutes: f64,
    /// Time spent at each stop letting riders off, in minutes.
    pub unload_minutes: f64,
}

impl Default for ElevatorConfig {
    fn default() -> Self {
        Self {
            capacity:       12,
            load_minutes:   0.5,
            unload_minutes: 0.5,
        }
    }
}

impl ElevatorConfig {
    pub fn validate(&self) -> CoreResult<()> {
        if self.capacity == 0 {
            return Err(CoreError::Config("elevator capacity must be at least 1".into()));
        }
        check_duration("load_minutes", self.load_minutes)?;
        check_duration("unload_minutes", self.unload_minutes)?;
        Ok(())
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Top-level simulation configuration.
///
/// Typically built with struct-update syntax over `SimConfig::default()`, or
/// loaded from JSON by the CLI (with the `serde` feature).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimConfig {
    /// Master RNG seed.  The same seed always produces an identical roster.
    pub seed: u64,

    /// Mean minutes between consecutive arrivals (exponentially distributed).
    pub mean_interarrival_minutes: f64,

    /// Arrivals are generated on `[0, horizon_minutes)`.
    pub horizon_minutes: f64,

    pub balking: BalkingStrategy,

    /// How many of the earliest waiting people are always offered a place
    /// before anyone else may balk.  Independent of `elevator.capacity`.
    pub guaranteed_boarders: usize,

    pub elevator: ElevatorConfig,

    /// Minutes after midnight of `SimTime::ZERO`, for display only.
    pub day_start_minutes: f64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed:                      0,
            mean_interarrival_minutes: 1.0 / 6.0,
            horizon_minutes:           60.0,
            balking:                   BalkingStrategy::DefaultBalking,
            guaranteed_boarders:       12,
            elevator:                  ElevatorConfig::default(),
            day_start_minutes:         480.0,
        }
    }
}

impl SimConfig {
    /// Same configuration, different seed.
    pub fn with_seed(&self, seed: u64) -> SimConfig {
        SimConfig { seed, ..self.clone() }
    }

    /// Arrivals per minute implied by `mean_interarrival_minutes`.
    pub fn arrivals_per_minute(&self) -> f64 {
        1.0 / self.mean_interarrival_minutes
    }

    pub fn validate(&self) -> CoreResult<()> {
        if !(self.mean_interarrival_minutes.is_finite() && self.mean_interarrival_minutes > 0.0) {
            return Err(CoreError::Config(format!(
                "mean_interarrival_minutes must be positive and finite, got {}",
                self.mean_interarrival_minutes
            )));
        }
        if !(self.horizon_minutes.is_finite() && self.horizon_minutes > 0.0) {
            return Err(CoreError::Config(format!(
                "horizon_minutes must be positive and finite, got {}",
                self.horizon_minutes
            )));
        }
        if !self.day_start_minutes.is_finite() {
            return Err(CoreError::Config("day_start_minutes must be finite".into()));
        }
        self.elevator.validate()
    }
}

fn check_duration(what: &str, minutes: f64) -> CoreResult<()> {
    if minutes.is_finite() && minutes >= 0.0 {
        Ok(())
    } else {
        Err(CoreError::Config(format!("{what} must be a non-negative number of minutes, got {minutes}")))
    }
}
