//! Person identity.
//!
//! Ids are dense per run: the `n`th person generated gets `PersonId(n)`, which
//! is also their index in the `Roster`.  The allocator is owned by the roster
//! of one simulation, so independent runs never share a counter.

use std::fmt;

/// Index of a person in their run's `Roster`.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PersonId(pub u32);

impl PersonId {
    /// Cast to `usize` for direct use as a `Vec` index.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PersonId({})", self.0)
    }
}

impl From<PersonId> for usize {
    #[inline(always)]
    fn from(id: PersonId) -> usize {
        id.0 as usize
    }
}

impl TryFrom<usize> for PersonId {
    type Error = std::num::TryFromIntError;
    fn try_from(n: usize) -> Result<PersonId, Self::Error> {
        u32::try_from(n).map(PersonId)
    }
}

/// Hands out monotonically increasing `PersonId`s starting at 0.
#[derive(Debug, Default, Clone)]
pub struct IdAllocator {
    next: u32,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn allocate(&mut self) -> PersonId {
        let id = PersonId(self.next);
        self.next += 1;
        id
    }
}
