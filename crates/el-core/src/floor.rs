//! The four floors of the building.
//!
//! Everyone arrives at `Ground`; only the three upper floors are valid rider
//! destinations.  Floors are a closed set so every per-floor lookup table can
//! be a fixed-size array indexed by [`Floor::index`].

/// A floor of the building, numbered as the building numbers them (1-based).
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Floor {
    Ground,
    F2,
    F3,
    F4,
}

impl Floor {
    /// Number of floors in the building.
    pub const COUNT: usize = 4;

    /// All floors, ground first.
    pub const ALL: [Floor; Floor::COUNT] = [Floor::Ground, Floor::F2, Floor::F3, Floor::F4];

    /// The floors a rider can be headed to, in ascending order.
    pub const UPPER: [Floor; 3] = [Floor::F2, Floor::F3, Floor::F4];

    /// Zero-based position, for indexing per-floor arrays.
    #[inline(always)]
    pub fn index(self) -> usize {
        self as usize
    }

    /// The building's floor number (`Ground` = 1).
    #[inline]
    pub fn number(self) -> u8 {
        self as u8 + 1
    }

    #[inline]
    pub fn is_ground(self) -> bool {
        matches!(self, Floor::Ground)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Floor::Ground => "ground",
            Floor::F2     => "f2",
            Floor::F3     => "f3",
            Floor::F4     => "f4",
        }
    }
}

impl std::fmt::Display for Floor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
