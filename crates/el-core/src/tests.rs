//! Unit tests for el-core primitives.

#[cfg(test)]
mod time {
    use crate::{CoreError, SimClock, SimTime};

    #[test]
    fn sim_time_arithmetic() {
        let t = SimTime(5.0);
        assert_eq!(t + 0.5, SimTime(5.5));
        assert_eq!(SimTime(7.0) - SimTime(5.5), 1.5);
        assert_eq!(SimTime(7.0).since(SimTime(5.0)), 2.0);
        assert_eq!(SimTime(2.0).max(SimTime(3.0)), SimTime(3.0));
        assert_eq!(SimTime(4.0).max(SimTime(3.0)), SimTime(4.0));
    }

    #[test]
    fn clock_advances_forward_only() {
        let mut clock = SimClock::default();
        clock.advance_to(SimTime(1.5)).unwrap();
        clock.advance_to(SimTime(1.5)).unwrap();
        assert_eq!(clock.now(), SimTime(1.5));

        let err = clock.advance_to(SimTime(1.0)).unwrap_err();
        assert!(matches!(err, CoreError::ClockRewind { .. }));
        assert_eq!(clock.now(), SimTime(1.5));
    }

    #[test]
    fn clock_rejects_nan() {
        let mut clock = SimClock::default();
        assert!(clock.advance_to(SimTime(f64::NAN)).is_err());
    }

    #[test]
    fn wall_clock_starts_at_eight() {
        let mut clock = SimClock::default();
        assert_eq!(clock.wall_clock(), "08:00:00");
        clock.advance_to(SimTime(75.5)).unwrap();
        assert_eq!(clock.wall_clock(), "09:15:30");
    }

    #[test]
    fn format_any_instant_without_moving() {
        let clock = SimClock::new(480.0);
        assert_eq!(clock.format(SimTime(5.0)), "08:05:00");
        assert_eq!(clock.format(SimTime(62.25)), "09:02:15");
        assert_eq!(clock.now(), SimTime::ZERO);
    }
}

#[cfg(test)]
mod floor {
    use crate::Floor;

    #[test]
    fn numbering() {
        assert_eq!(Floor::Ground.number(), 1);
        assert_eq!(Floor::F4.number(), 4);
        assert_eq!(Floor::F3.index(), 2);
    }

    #[test]
    fn upper_floors_ascend_and_exclude_ground() {
        assert!(Floor::UPPER.windows(2).all(|w| w[0] < w[1]));
        assert!(Floor::UPPER.iter().all(|f| !f.is_ground()));
    }

    #[test]
    fn display() {
        assert_eq!(Floor::F3.to_string(), "f3");
    }
}

#[cfg(test)]
mod config {
    use crate::{CoreError, ElevatorConfig, SimConfig};

    #[test]
    fn defaults_match_scenario() {
        let cfg = SimConfig::default();
        assert_eq!(cfg.horizon_minutes, 60.0);
        assert_eq!(cfg.guaranteed_boarders, 12);
        assert_eq!(cfg.elevator.capacity, 12);
        assert!((cfg.arrivals_per_minute() - 6.0).abs() < 1e-9);
        cfg.validate().unwrap();
    }

    #[test]
    fn with_seed_changes_only_seed() {
        let cfg = SimConfig::default();
        let other = cfg.with_seed(99);
        assert_eq!(other.seed, 99);
        assert_eq!(SimConfig { seed: 0, ..other }, cfg);
    }

    #[test]
    fn rejects_bad_rate() {
        for bad in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let cfg = SimConfig { mean_interarrival_minutes: bad, ..SimConfig::default() };
            assert!(matches!(cfg.validate(), Err(CoreError::Config(_))), "accepted {bad}");
        }
    }

    #[test]
    fn rejects_zero_capacity_and_negative_durations() {
        let zero = ElevatorConfig { capacity: 0, ..ElevatorConfig::default() };
        assert!(zero.validate().is_err());
        let negative = ElevatorConfig { unload_minutes: -0.1, ..ElevatorConfig::default() };
        assert!(negative.validate().is_err());
    }
}

#[cfg(test)]
mod rng {
    use crate::{Floor, SimRng};

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = SimRng::new(12345);
        let mut r2 = SimRng::new(12345);
        for _ in 0..100 {
            let a: f64 = r1.random();
            let b: f64 = r2.random();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn different_seeds_differ() {
        let a: u64 = SimRng::new(1).random();
        let b: u64 = SimRng::new(2).random();
        assert_ne!(a, b);
    }

    #[test]
    fn unit_draws_in_bounds() {
        let mut rng = SimRng::new(0);
        for _ in 0..1000 {
            let v: f64 = rng.random();
            assert!((0.0..1.0).contains(&v));
        }
    }

    #[test]
    fn choose_covers_all_upper_floors() {
        let mut rng = SimRng::new(7);
        let mut seen = [false; Floor::COUNT];
        for _ in 0..300 {
            seen[rng.choose(&Floor::UPPER).unwrap().index()] = true;
        }
        assert_eq!(seen, [false, true, true, true]);
        assert!(rng.choose::<Floor>(&[]).is_none());
    }
}
