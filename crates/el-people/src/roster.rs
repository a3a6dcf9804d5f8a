//! `Roster` — every person generated during one run.
//!
//! The roster is append-only and never reordered: index `i` always holds
//! `PersonId(i)`, in generation order, which is also arrival order.

use el_core::{Floor, SimTime};

use crate::{IdAllocator, Person, PersonError, PersonId, PersonResult, PersonStatus};

#[derive(Debug, Default, Clone)]
pub struct Roster {
    people: Vec<Person>,
    ids:    IdAllocator,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new waiting person and return their id.
    pub fn spawn(&mut self, destination: Floor, arrival_time: SimTime) -> PersonId {
        let id = self.ids.allocate();
        debug_assert_eq!(id.index(), self.people.len());
        self.people.push(Person::new(id, destination, arrival_time));
        id
    }

    pub fn get(&self, id: PersonId) -> PersonResult<&Person> {
        self.people.get(id.index()).ok_or(PersonError::NotFound(id))
    }

    pub fn get_mut(&mut self, id: PersonId) -> PersonResult<&mut Person> {
        self.people.get_mut(id.index()).ok_or(PersonError::NotFound(id))
    }

    /// All people in generation order.
    pub fn people(&self) -> &[Person] {
        &self.people
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Person> {
        self.people.iter()
    }

    /// People currently in `status`, in generation order.
    pub fn with_status(&self, status: PersonStatus) -> impl Iterator<Item = &Person> + '_ {
        self.people.iter().filter(move |p| p.status() == status)
    }

    /// Number of people in each status, indexed as
    /// `[Waiting, OnElevator, TookStairs, TookElevator]`.
    pub fn status_counts(&self) -> [usize; 4] {
        let mut counts = [0; 4];
        for p in &self.people {
            let slot = match p.status() {
                PersonStatus::Waiting      => 0,
                PersonStatus::OnElevator   => 1,
                PersonStatus::TookStairs   => 2,
                PersonStatus::TookElevator => 3,
            };
            counts[slot] += 1;
        }
        counts
    }

    pub fn len(&self) -> usize {
        self.people.len()
    }

    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }
}

impl<'a> IntoIterator for &'a Roster {
    type Item = &'a Person;
    type IntoIter = std::slice::Iter<'a, Person>;
    fn into_iter(self) -> Self::IntoIter {
        self.people.iter()
    }
}
