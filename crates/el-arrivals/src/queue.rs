//! `ArrivalQueue` — the line of people waiting at the ground floor.
//!
//! The queue holds ids in arrival order (non-decreasing `arrival_time`), which
//! includes people whose arrival is still in the future: the driver peeks at
//! the front to decide whether to idle until the next arrival.
//!
//! People leave from the front when they board, and from anywhere when they
//! balk.  Balkers are removed in one pass with `remove_all`, which keeps the
//! relative order of everyone left behind.

use std::collections::{HashSet, VecDeque};

use el_core::SimTime;
use el_people::{PersonId, PersonResult, Roster};

#[derive(Debug, Default, Clone)]
pub struct ArrivalQueue {
    inner: VecDeque<PersonId>,
}

impl ArrivalQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a person to the back of the line.
    pub fn push_back(&mut self, id: PersonId) {
        self.inner.push_back(id);
    }

    /// The person at the front, if any.
    pub fn front(&self) -> Option<PersonId> {
        self.inner.front().copied()
    }

    /// Remove and return the person at the front.
    pub fn pop_front(&mut self) -> Option<PersonId> {
        self.inner.pop_front()
    }

    /// Remove every listed person wherever they stand.
    ///
    /// Returns the number removed.  Ids not in the queue are ignored.
    pub fn remove_all(&mut self, ids: &[PersonId]) -> usize {
        if ids.is_empty() {
            return 0;
        }
        let leaving: HashSet<PersonId> = ids.iter().copied().collect();
        let before = self.inner.len();
        self.inner.retain(|id| !leaving.contains(id));
        before - self.inner.len()
    }

    /// People already present at `now`, front first.
    ///
    /// Because the queue is ordered by arrival time this is always a prefix.
    pub fn present_at(&self, now: SimTime, roster: &Roster) -> PersonResult<Vec<PersonId>> {
        let mut present = Vec::new();
        for &id in &self.inner {
            if roster.get(id)?.arrival_time() > now {
                break;
            }
            present.push(id);
        }
        Ok(present)
    }

    pub fn iter(&self) -> impl Iterator<Item = PersonId> + '_ {
        self.inner.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}
