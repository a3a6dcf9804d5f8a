//! Unit tests for el-elevator.

use el_arrivals::{ArrivalQueue, from_schedule};
use el_core::{ElevatorConfig, Floor, SimTime};
use el_people::{PersonId, PersonStatus, Roster};

use crate::{Elevator, ElevatorError, ElevatorStatus, TravelTimeTable};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn elevator(capacity: usize) -> Elevator {
    let config = ElevatorConfig { capacity, ..ElevatorConfig::default() };
    Elevator::new(config, TravelTimeTable::standard()).unwrap()
}

fn queue_of(schedule: &[(f64, Floor)]) -> (Roster, ArrivalQueue) {
    let schedule: Vec<(SimTime, Floor)> = schedule.iter().map(|&(t, f)| (SimTime(t), f)).collect();
    let mut roster = Roster::new();
    let queue = from_schedule(&schedule, &mut roster).unwrap();
    (roster, queue)
}

// ── TravelTimeTable ───────────────────────────────────────────────────────────

#[cfg(test)]
mod travel_table {
    use super::*;

    #[test]
    fn standard_values() {
        let t = TravelTimeTable::standard();
        assert_eq!(t.lookup(Floor::Ground, Floor::F4).unwrap(), 1.75);
        assert_eq!(t.lookup(Floor::F4, Floor::F3).unwrap(), 0.25);
        assert_eq!(t.lookup(Floor::F3, Floor::F4).unwrap(), 0.50);
        for f in Floor::ALL {
            assert_eq!(t.lookup(f, f).unwrap(), 0.0);
        }
        t.validate_tours().unwrap();
    }

    #[test]
    fn missing_pair_is_an_error() {
        let t = TravelTimeTable::new(&[(Floor::Ground, Floor::F2, 1.0)]).unwrap();
        assert!(matches!(
            t.lookup(Floor::F2, Floor::Ground),
            Err(ElevatorError::MissingTravelTime { from: Floor::F2, to: Floor::Ground })
        ));
    }

    #[test]
    fn incomplete_table_rejected_at_construction() {
        let t = TravelTimeTable::new(&[(Floor::Ground, Floor::F2, 1.0), (Floor::F2, Floor::Ground, 1.0)])
            .unwrap();
        let err = Elevator::new(ElevatorConfig::default(), t).unwrap_err();
        assert!(matches!(err, ElevatorError::MissingTravelTime { .. }));
    }

    #[test]
    fn rejects_negative_and_nonzero_self() {
        assert!(TravelTimeTable::new(&[(Floor::Ground, Floor::F2, -1.0)]).is_err());
        assert!(TravelTimeTable::new(&[(Floor::F2, Floor::F2, 0.5)]).is_err());
        assert!(TravelTimeTable::new(&[(Floor::F2, Floor::F2, 0.0)]).is_ok());
    }
}

// ── load ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod load {
    use super::*;

    #[test]
    fn single_waiting_person() {
        let mut e = elevator(12);
        let (mut roster, mut queue) = queue_of(&[(5.0, Floor::F3)]);

        let end = e.load(&mut queue, &mut roster, SimTime(5.0)).unwrap();
        assert_eq!(end, SimTime(5.5));
        assert_eq!(e.status(), ElevatorStatus::Loading);
        assert_eq!(e.occupants(), &[PersonId(0)]);
        assert!(queue.is_empty());

        let p = roster.get(PersonId(0)).unwrap();
        assert_eq!(p.status(), PersonStatus::OnElevator);
        assert_eq!(p.elevator_load_time(), Some(SimTime(5.0)));
    }

    #[test]
    fn trickle_in_charged_own_arrival_time() {
        let mut e = elevator(12);
        let (mut roster, mut queue) = queue_of(&[(0.0, Floor::F2), (0.3, Floor::F4)]);
        e.load(&mut queue, &mut roster, SimTime(0.0)).unwrap();
        assert_eq!(roster.get(PersonId(0)).unwrap().elevator_load_time(), Some(SimTime(0.0)));
        assert_eq!(roster.get(PersonId(1)).unwrap().elevator_load_time(), Some(SimTime(0.3)));
    }

    #[test]
    fn late_arrival_stays_at_front() {
        let mut e = elevator(12);
        let (mut roster, mut queue) = queue_of(&[(0.0, Floor::F2), (0.7, Floor::F2), (0.8, Floor::F3)]);
        let end = e.load(&mut queue, &mut roster, SimTime(0.0)).unwrap();
        assert_eq!(end, SimTime(0.5));
        assert_eq!(e.occupants().len(), 1);
        assert_eq!(queue.front(), Some(PersonId(1)));
        assert_eq!(roster.get(PersonId(1)).unwrap().status(), PersonStatus::Waiting);
    }

    #[test]
    fn arrival_exactly_at_door_close_boards() {
        let mut e = elevator(12);
        let (mut roster, mut queue) = queue_of(&[(0.0, Floor::F2), (0.5, Floor::F2)]);
        e.load(&mut queue, &mut roster, SimTime(0.0)).unwrap();
        assert_eq!(e.occupants().len(), 2);
    }

    #[test]
    fn never_exceeds_capacity() {
        let mut e = elevator(12);
        let crowd = vec![(0.0, Floor::F2); 20];
        let (mut roster, mut queue) = queue_of(&crowd);
        let end = e.load(&mut queue, &mut roster, SimTime(0.0)).unwrap();
        assert_eq!(end, SimTime(0.5), "full car still takes the whole window");
        assert_eq!(e.occupants().len(), 12);
        assert_eq!(e.remaining_capacity(), 0);
        assert_eq!(queue.len(), 8);
        assert_eq!(queue.front(), Some(PersonId(12)));
    }

    #[test]
    fn empty_queue_still_takes_window() {
        let mut e = elevator(12);
        let mut roster = Roster::new();
        let mut queue = ArrivalQueue::new();
        assert_eq!(e.load(&mut queue, &mut roster, SimTime(3.0)).unwrap(), SimTime(3.5));
        assert_eq!(e.pending_stops().count(), 0);
    }

    #[test]
    fn stops_ascending_and_deduplicated() {
        let mut e = elevator(12);
        let (mut roster, mut queue) =
            queue_of(&[(0.0, Floor::F4), (0.0, Floor::F2), (0.0, Floor::F4), (0.1, Floor::F3)]);
        e.load(&mut queue, &mut roster, SimTime(0.0)).unwrap();
        let stops: Vec<Floor> = e.pending_stops().collect();
        assert_eq!(stops, vec![Floor::F2, Floor::F3, Floor::F4]);
    }
}

// ── unload ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod unload {
    use super::*;

    #[test]
    fn removes_only_matching_and_preserves_order() {
        let mut e = elevator(12);
        let (mut roster, mut queue) = queue_of(&[
            (0.0, Floor::F2),
            (0.0, Floor::F3),
            (0.0, Floor::F2),
            (0.0, Floor::F4),
            (0.0, Floor::F2),
            (0.0, Floor::F3),
        ]);
        e.load(&mut queue, &mut roster, SimTime(0.0)).unwrap();
        e.travel_to(Floor::F2, SimTime(0.5)).unwrap();

        let end = e.unload(&mut roster, SimTime(1.5)).unwrap();
        assert_eq!(end, SimTime(2.0));
        assert_eq!(e.occupants(), &[PersonId(1), PersonId(3), PersonId(5)]);
        for id in [0, 2, 4] {
            let p = roster.get(PersonId(id)).unwrap();
            assert_eq!(p.status(), PersonStatus::TookElevator);
            assert_eq!(p.elevator_unload_time(), Some(SimTime(1.5)));
        }
        for id in [1, 3, 5] {
            assert_eq!(roster.get(PersonId(id)).unwrap().status(), PersonStatus::OnElevator);
        }
    }

    #[test]
    fn nobody_for_this_floor() {
        let mut e = elevator(12);
        let (mut roster, mut queue) = queue_of(&[(0.0, Floor::F4)]);
        e.load(&mut queue, &mut roster, SimTime(0.0)).unwrap();
        e.travel_to(Floor::F2, SimTime(0.5)).unwrap();
        assert_eq!(e.unload(&mut roster, SimTime(1.5)).unwrap(), SimTime(2.0));
        assert_eq!(e.occupants().len(), 1);
    }
}

// ── travel ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod travel {
    use super::*;

    #[test]
    fn single_rider_round_trip() {
        let mut e = elevator(12);
        let (mut roster, mut queue) = queue_of(&[(5.0, Floor::F3)]);
        let loaded = e.load(&mut queue, &mut roster, SimTime(5.0)).unwrap();

        // 5.5 + 1.5 up = 7.0 unload, + 0.5 = 7.5, + 1.5 down = 9.0
        let back = e.travel(&mut roster, loaded).unwrap();
        assert_eq!(back, SimTime(9.0));
        assert_eq!(e.floor(), Floor::Ground);
        assert_eq!(e.status(), ElevatorStatus::Waiting);
        assert!(e.occupants().is_empty());

        let p = roster.get(PersonId(0)).unwrap();
        assert_eq!(p.status(), PersonStatus::TookElevator);
        assert_eq!(p.elevator_unload_time(), Some(SimTime(7.0)));
    }

    #[test]
    fn multi_stop_tour() {
        let mut e = elevator(12);
        let (mut roster, mut queue) = queue_of(&[(0.0, Floor::F4), (0.0, Floor::F2)]);
        let loaded = e.load(&mut queue, &mut roster, SimTime(0.0)).unwrap();

        // 0.5 → F2 at 1.5, unload → 2.0 → F4 at 2.75, unload → 3.25 → ground at 5.0
        let back = e.travel(&mut roster, loaded).unwrap();
        assert_eq!(back, SimTime(5.0));
        assert_eq!(roster.get(PersonId(1)).unwrap().elevator_unload_time(), Some(SimTime(1.5)));
        assert_eq!(roster.get(PersonId(0)).unwrap().elevator_unload_time(), Some(SimTime(2.75)));
        assert_eq!(e.pending_stops().count(), 0);
    }

    #[test]
    fn empty_car_returns_immediately() {
        let mut e = elevator(12);
        let mut roster = Roster::new();
        assert_eq!(e.travel(&mut roster, SimTime(4.0)).unwrap(), SimTime(4.0));
        assert_eq!(e.status(), ElevatorStatus::Waiting);
    }

    #[test]
    fn load_refused_away_from_ground() {
        let mut e = elevator(12);
        e.travel_to(Floor::F3, SimTime(0.0)).unwrap();
        let mut roster = Roster::new();
        let mut queue = ArrivalQueue::new();
        assert!(matches!(
            e.load(&mut queue, &mut roster, SimTime(1.0)),
            Err(ElevatorError::NotAtGround(Floor::F3))
        ));
    }
}
