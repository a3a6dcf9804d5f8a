//! Unit tests for el-people.

use el_core::{Floor, SimTime};

use crate::{Person, PersonError, PersonId, PersonStatus, Roster};

fn waiting(id: u32) -> Person {
    Person::new(PersonId(id), Floor::F3, SimTime(5.0))
}

#[cfg(test)]
mod ids {
    use crate::{IdAllocator, PersonId};

    #[test]
    fn allocator_is_monotonic_from_zero() {
        let mut ids = IdAllocator::new();
        assert_eq!(ids.allocate(), PersonId(0));
        assert_eq!(ids.allocate(), PersonId(1));
    }

    #[test]
    fn allocators_are_independent() {
        let mut a = IdAllocator::new();
        let mut b = IdAllocator::new();
        a.allocate();
        a.allocate();
        assert_eq!(b.allocate(), PersonId(0));
    }

    #[test]
    fn index_roundtrip() {
        let id = PersonId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(PersonId::try_from(42usize).unwrap(), id);
        assert_eq!(id.to_string(), "PersonId(42)");
    }
}

#[cfg(test)]
mod transitions {
    use super::*;

    #[test]
    fn new_person_is_waiting_with_no_timestamps() {
        let p = waiting(0);
        assert_eq!(p.status(), PersonStatus::Waiting);
        assert!(p.elevator_load_time().is_none());
        assert!(p.elevator_unload_time().is_none());
        assert!(p.take_stairs_time().is_none());
    }

    #[test]
    fn elevator_journey_records_both_times() {
        let mut p = waiting(0);
        p.board(SimTime(5.0)).unwrap();
        assert_eq!(p.status(), PersonStatus::OnElevator);
        p.alight(SimTime(7.0)).unwrap();
        assert_eq!(p.status(), PersonStatus::TookElevator);
        assert_eq!(p.elevator_load_time(), Some(SimTime(5.0)));
        assert_eq!(p.elevator_unload_time(), Some(SimTime(7.0)));
        assert_eq!(p.left_queue_time().unwrap(), SimTime(5.0));
        assert_eq!(p.elevator_wait(), Some(0.0));
    }

    #[test]
    fn stairs_journey() {
        let mut p = waiting(3);
        p.take_stairs(SimTime(9.0)).unwrap();
        assert_eq!(p.status(), PersonStatus::TookStairs);
        assert_eq!(p.take_stairs_time(), Some(SimTime(9.0)));
        assert_eq!(p.left_queue_time().unwrap(), SimTime(9.0));
        assert!(p.elevator_wait().is_none());
    }

    #[test]
    fn load_at_time_zero_still_counts_as_left_queue() {
        let mut p = Person::new(PersonId(0), Floor::F2, SimTime::ZERO);
        p.board(SimTime::ZERO).unwrap();
        assert_eq!(p.left_queue_time().unwrap(), SimTime::ZERO);
    }

    #[test]
    fn no_back_transitions() {
        let mut p = waiting(1);
        p.take_stairs(SimTime(6.0)).unwrap();
        assert!(matches!(
            p.board(SimTime(7.0)),
            Err(PersonError::InvalidTransition {
                from: PersonStatus::TookStairs,
                to:   PersonStatus::OnElevator,
                ..
            })
        ));

        let mut q = waiting(2);
        assert!(q.alight(SimTime(6.0)).is_err());
        q.board(SimTime(6.0)).unwrap();
        assert!(q.board(SimTime(6.5)).is_err());
        assert!(q.take_stairs(SimTime(6.5)).is_err());
        // The failed transitions left the original load time in place.
        assert_eq!(q.elevator_load_time(), Some(SimTime(6.0)));
    }

    #[test]
    fn left_queue_time_fails_while_waiting() {
        let p = waiting(4);
        assert!(matches!(p.left_queue_time(), Err(PersonError::StillWaiting(PersonId(4)))));
    }

    #[test]
    fn terminal_statuses() {
        assert!(!PersonStatus::Waiting.is_terminal());
        assert!(!PersonStatus::OnElevator.is_terminal());
        assert!(PersonStatus::TookStairs.is_terminal());
        assert!(PersonStatus::TookElevator.is_terminal());
    }
}

#[cfg(test)]
mod roster {
    use super::*;

    #[test]
    fn spawn_assigns_dense_ids() {
        let mut roster = Roster::new();
        let a = roster.spawn(Floor::F2, SimTime(0.1));
        let b = roster.spawn(Floor::F4, SimTime(0.2));
        assert_eq!((a, b), (PersonId(0), PersonId(1)));
        assert_eq!(roster.get(b).unwrap().destination(), Floor::F4);
        assert_eq!(roster.len(), 2);
    }

    #[test]
    fn unknown_id_is_an_error() {
        let roster = Roster::new();
        assert!(matches!(roster.get(PersonId(0)), Err(PersonError::NotFound(PersonId(0)))));
    }

    #[test]
    fn status_filter_preserves_order() {
        let mut roster = Roster::new();
        for i in 0..5 {
            roster.spawn(Floor::F2, SimTime(i as f64));
        }
        roster.get_mut(PersonId(1)).unwrap().take_stairs(SimTime(2.0)).unwrap();
        roster.get_mut(PersonId(3)).unwrap().take_stairs(SimTime(4.0)).unwrap();

        let walkers: Vec<PersonId> =
            roster.with_status(PersonStatus::TookStairs).map(|p| p.id()).collect();
        assert_eq!(walkers, vec![PersonId(1), PersonId(3)]);
        assert_eq!(roster.status_counts(), [3, 0, 2, 0]);
    }
}
