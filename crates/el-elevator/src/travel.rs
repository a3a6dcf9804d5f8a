//! Floor-to-floor travel times.
//!
//! # Units
//!
//! All values are minutes.  Entries are directional: going up and coming down
//! between the same pair of floors may take different times.  A floor to
//! itself always takes zero and is never stored.

use el_core::Floor;

use crate::{ElevatorError, ElevatorResult};

/// Minutes to move between each ordered pair of floors.
#[derive(Clone, Debug, PartialEq)]
pub struct TravelTimeTable {
    minutes: [[Option<f64>; Floor::COUNT]; Floor::COUNT],
}

impl TravelTimeTable {
    /// The building's measured travel times.
    ///
    /// | from \ to | Ground | F2   | F3   | F4   |
    /// |-----------|--------|------|------|------|
    /// | Ground    | 0      | 1.00 | 1.50 | 1.75 |
    /// | F2        | 1.00   | 0    | 0.50 | 0.75 |
    /// | F3        | 1.50   | 0.50 | 0    | 0.50 |
    /// | F4        | 1.75   | 0.50 | 0.25 | 0    |
    pub fn standard() -> Self {
        use Floor::*;
        let entries = [
            (Ground, F2, 1.00), (Ground, F3, 1.50), (Ground, F4, 1.75),
            (F2, Ground, 1.00), (F2, F3, 0.50),     (F2, F4, 0.75),
            (F3, Ground, 1.50), (F3, F2, 0.50),     (F3, F4, 0.50),
            (F4, Ground, 1.75), (F4, F2, 0.50),     (F4, F3, 0.25),
        ];
        let mut minutes = [[None; Floor::COUNT]; Floor::COUNT];
        for (from, to, m) in entries {
            minutes[from.index()][to.index()] = Some(m);
        }
        Self { minutes }
    }

    /// Build a table from `(from, to, minutes)` entries.
    ///
    /// Durations must be non-negative and finite.  Self-pairs are implicit;
    /// listing one with a non-zero duration is rejected.
    pub fn new(entries: &[(Floor, Floor, f64)]) -> ElevatorResult<Self> {
        let mut minutes = [[None; Floor::COUNT]; Floor::COUNT];
        for &(from, to, m) in entries {
            if !(m.is_finite() && m >= 0.0) {
                return Err(ElevatorError::Table(format!(
                    "travel time {from} -> {to} must be non-negative, got {m}"
                )));
            }
            if from == to {
                if m != 0.0 {
                    return Err(ElevatorError::Table(format!(
                        "travel time {from} -> {from} must be zero, got {m}"
                    )));
                }
                continue;
            }
            minutes[from.index()][to.index()] = Some(m);
        }
        Ok(Self { minutes })
    }

    /// Minutes from `from` to `to`.
    pub fn lookup(&self, from: Floor, to: Floor) -> ElevatorResult<f64> {
        if from == to {
            return Ok(0.0);
        }
        self.minutes[from.index()][to.index()]
            .ok_or(ElevatorError::MissingTravelTime { from, to })
    }

    /// Check every hop an ascending tour can take: ground to each upper floor,
    /// each upper floor to every higher one, and each upper floor back down
    /// to ground.
    pub fn validate_tours(&self) -> ElevatorResult<()> {
        for (i, &from) in Floor::UPPER.iter().enumerate() {
            self.lookup(Floor::Ground, from)?;
            self.lookup(from, Floor::Ground)?;
            for &to in &Floor::UPPER[i + 1..] {
                self.lookup(from, to)?;
            }
        }
        Ok(())
    }
}

impl Default for TravelTimeTable {
    fn default() -> Self {
        Self::standard()
    }
}
