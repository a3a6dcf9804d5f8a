//! Per-destination balking probabilities.

use el_core::Floor;

use crate::{BalkingError, BalkingResult};

/// Probability that a waiting person headed to a floor takes the stairs when
/// offered the chance.
///
/// Floors without an entry (always including `Ground`) are invalid
/// destinations for balking; looking them up is an error, never a default.
#[derive(Clone, Debug, PartialEq)]
pub struct BalkingTable {
    by_floor: [Option<f64>; Floor::COUNT],
}

impl BalkingTable {
    /// The studied behaviour: the closer the floor, the more people walk.
    ///
    /// | Destination | P(balk) |
    /// |-------------|---------|
    /// | F2          | 0.50    |
    /// | F3          | 0.33    |
    /// | F4          | 0.10    |
    pub fn standard() -> Self {
        Self {
            by_floor: [None, Some(0.5), Some(0.33), Some(0.10)],
        }
    }

    /// Build a table from `(floor, probability)` pairs.
    ///
    /// Probabilities must lie in `[0, 1]`; `Ground` cannot be listed.
    pub fn new(entries: &[(Floor, f64)]) -> BalkingResult<Self> {
        let mut by_floor = [None; Floor::COUNT];
        for &(floor, p) in entries {
            if floor.is_ground() {
                return Err(BalkingError::Config("ground is not a balking destination".into()));
            }
            if !(0.0..=1.0).contains(&p) {
                return Err(BalkingError::Config(format!(
                    "balking probability for {floor} must be in [0, 1], got {p}"
                )));
            }
            by_floor[floor.index()] = Some(p);
        }
        Ok(Self { by_floor })
    }

    /// Same probability for every upper floor.
    pub fn uniform(p: f64) -> BalkingResult<Self> {
        Self::new(&Floor::UPPER.map(|f| (f, p)))
    }

    pub fn get(&self, floor: Floor) -> Option<f64> {
        self.by_floor[floor.index()]
    }
}

impl Default for BalkingTable {
    fn default() -> Self {
        Self::standard()
    }
}
