//! Simulation time model.
//!
//! # Design
//!
//! Time is a floating-point count of **minutes** since the start of the
//! morning rush.  `SimTime(0.0)` is 8:00 AM; the arrival horizon ends at
//! `SimTime(60.0)` (9:00 AM), though the elevator keeps cycling past it until
//! the queue drains.
//!
//! There is no wall-clock dependency anywhere: the clock only moves when the
//! driver tells it to, and it only moves forwards.

use std::fmt;

use crate::{CoreError, CoreResult};

// ── SimTime ───────────────────────────────────────────────────────────────────

/// An absolute simulated instant, in minutes since the start of the rush.
#[derive(Copy, Clone, PartialEq, PartialOrd, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimTime(pub f64);

impl SimTime {
    pub const ZERO: SimTime = SimTime(0.0);

    #[inline]
    pub fn minutes(self) -> f64 {
        self.0
    }

    /// Minutes elapsed from `earlier` to `self` (negative if `earlier` is later).
    #[inline]
    pub fn since(self, earlier: SimTime) -> f64 {
        self.0 - earlier.0
    }

    /// The later of two instants.
    #[inline]
    pub fn max(self, other: SimTime) -> SimTime {
        if other.0 > self.0 { other } else { self }
    }

    /// `false` for NaN and infinities.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.0.is_finite()
    }
}

impl std::ops::Add<f64> for SimTime {
    type Output = SimTime;
    #[inline]
    fn add(self, minutes: f64) -> SimTime {
        SimTime(self.0 + minutes)
    }
}

impl std::ops::AddAssign<f64> for SimTime {
    #[inline]
    fn add_assign(&mut self, minutes: f64) {
        self.0 += minutes;
    }
}

impl std::ops::Sub for SimTime {
    type Output = f64;
    #[inline]
    fn sub(self, rhs: SimTime) -> f64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for SimTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "t={:.3}", self.0)
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// The simulation's current time plus the mapping to time of day.
///
/// `SimClock` is cheap to copy and holds no heap data.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimClock {
    /// Minutes after midnight corresponding to `SimTime::ZERO` (480 = 8:00 AM).
    pub day_start_minutes: f64,
    now: SimTime,
}

impl SimClock {
    pub fn new(day_start_minutes: f64) -> Self {
        Self { day_start_minutes, now: SimTime::ZERO }
    }

    #[inline]
    pub fn now(&self) -> SimTime {
        self.now
    }

    /// Move the clock to `t`.
    ///
    /// Jumping to the current instant is a no-op; jumping backwards is an
    /// error because every caller derives `t` from a later event.
    pub fn advance_to(&mut self, t: SimTime) -> CoreResult<()> {
        if !t.is_finite() || t < self.now {
            return Err(CoreError::ClockRewind { now: self.now, requested: t });
        }
        self.now = t;
        Ok(())
    }

    /// Break an instant into (hour, minute, second) of the day.
    pub fn time_of_day(&self, t: SimTime) -> (u32, u32, u32) {
        let total_secs = ((self.day_start_minutes + t.0) * 60.0).round().max(0.0) as u64;
        let hours = ((total_secs / 3_600) % 24) as u32;
        let minutes = ((total_secs % 3_600) / 60) as u32;
        let seconds = (total_secs % 60) as u32;
        (hours, minutes, seconds)
    }

    /// `HH:MM:SS` for any instant.
    pub fn format(&self, t: SimTime) -> String {
        let (h, m, s) = self.time_of_day(t);
        format!("{h:02}:{m:02}:{s:02}")
    }

    /// `HH:MM:SS` for the current instant.
    pub fn wall_clock(&self) -> String {
        self.format(self.now)
    }
}

impl Default for SimClock {
    fn default() -> Self {
        SimClock::new(480.0)
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.now, self.wall_clock())
    }
}
