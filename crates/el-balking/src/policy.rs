//! The `BalkingPolicy` trait — the extension point for queue impatience.

use el_arrivals::ArrivalQueue;
use el_core::{BalkingStrategy, SimRng, SimTime};
use el_people::{PersonId, Roster};

use crate::{BalkingResult, BalkingTable, DefaultBalking, NoBalking};

/// Pluggable balking behaviour.
///
/// Called once per elevator loading decision, before loading.  An
/// implementation marks each balker `TookStairs` at `now`, removes them from
/// `queue` without disturbing anyone else's position, and returns their ids
/// in queue order.
///
/// All randomness must come from `rng` so runs stay reproducible.
pub trait BalkingPolicy: Send + Sync {
    fn apply(
        &self,
        queue:  &mut ArrivalQueue,
        roster: &mut Roster,
        now:    SimTime,
        rng:    &mut SimRng,
    ) -> BalkingResult<Vec<PersonId>>;
}

/// The policy a [`BalkingStrategy`] names.
pub fn policy_for(
    strategy:            BalkingStrategy,
    guaranteed_boarders: usize,
    table:               BalkingTable,
) -> Box<dyn BalkingPolicy> {
    match strategy {
        BalkingStrategy::NoBalking      => Box::new(NoBalking),
        BalkingStrategy::DefaultBalking => Box::new(DefaultBalking::new(table, guaranteed_boarders)),
    }
}
