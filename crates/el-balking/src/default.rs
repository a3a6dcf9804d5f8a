//! The default balking policy.

use el_arrivals::ArrivalQueue;
use el_core::{SimRng, SimTime};
use el_people::{PersonId, Roster};
use tracing::debug;

use crate::{BalkingError, BalkingPolicy, BalkingResult, BalkingTable};

/// Everyone present beyond the first `guaranteed_boarders` rolls once against
/// their destination's probability in [`BalkingTable`].
///
/// The first `guaranteed_boarders` people present (in arrival order) are
/// never offered the stairs and draw nothing from the RNG.  The rest draw one
/// uniform value each, in queue order, and balk when it falls below their
/// floor's probability.
#[derive(Clone, Debug)]
pub struct DefaultBalking {
    table:               BalkingTable,
    guaranteed_boarders: usize,
}

impl DefaultBalking {
    pub fn new(table: BalkingTable, guaranteed_boarders: usize) -> Self {
        Self { table, guaranteed_boarders }
    }

    pub fn table(&self) -> &BalkingTable {
        &self.table
    }

    pub fn guaranteed_boarders(&self) -> usize {
        self.guaranteed_boarders
    }
}

impl BalkingPolicy for DefaultBalking {
    fn apply(
        &self,
        queue:  &mut ArrivalQueue,
        roster: &mut Roster,
        now:    SimTime,
        rng:    &mut SimRng,
    ) -> BalkingResult<Vec<PersonId>> {
        let present = queue.present_at(now, roster)?;
        let remainder = present.get(self.guaranteed_boarders..).unwrap_or(&[]);
        debug!(
            %now,
            present = present.len(),
            offered = remainder.len(),
            "balking decision point"
        );

        let mut balkers = Vec::new();
        for &id in remainder {
            let person = roster.get(id)?;
            let p = self.table.get(person.destination()).ok_or(
                BalkingError::InvalidDestination { person: id, floor: person.destination() },
            )?;
            let draw: f64 = rng.random();
            if draw < p {
                balkers.push(id);
            }
        }

        for &id in &balkers {
            roster.get_mut(id)?.take_stairs(now)?;
        }
        queue.remove_all(&balkers);

        if !balkers.is_empty() {
            debug!(%now, balked = balkers.len(), "people took the stairs");
        }
        Ok(balkers)
    }
}
