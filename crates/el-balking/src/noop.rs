//! A policy under which nobody balks.

use el_arrivals::ArrivalQueue;
use el_core::{SimRng, SimTime};
use el_people::{PersonId, Roster};

use crate::{BalkingPolicy, BalkingResult};

/// A [`BalkingPolicy`] that leaves the queue untouched and draws nothing.
pub struct NoBalking;

impl BalkingPolicy for NoBalking {
    fn apply(
        &self,
        _queue:  &mut ArrivalQueue,
        _roster: &mut Roster,
        _now:    SimTime,
        _rng:    &mut SimRng,
    ) -> BalkingResult<Vec<PersonId>> {
        Ok(vec![])
    }
}
