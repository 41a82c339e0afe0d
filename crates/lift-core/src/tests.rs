//! Unit tests for lift-core primitives.

#[cfg(test)]
mod ids {
    use crate::{CarId, Floor, PersonId};

    #[test]
    fn index_roundtrip() {
        let id = CarId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(CarId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn ordering() {
        assert!(CarId(0) < CarId(1));
        assert!(Floor(10) > Floor(9));
    }

    #[test]
    fn invalid_sentinels_are_max() {
        assert_eq!(CarId::INVALID.0, u32::MAX);
        assert_eq!(PersonId::INVALID.0, u32::MAX);
        assert_eq!(Floor::INVALID.0, u16::MAX);
    }

    #[test]
    fn floor_distance_is_symmetric() {
        assert_eq!(Floor(3).distance(Floor(8)), 5);
        assert_eq!(Floor(8).distance(Floor(3)), 5);
        assert_eq!(Floor(5).distance(Floor(5)), 0);
    }

    #[test]
    fn display() {
        assert_eq!(CarId(7).to_string(), "CarId(7)");
        assert_eq!(Floor(3).to_string(), "Floor(3)");
    }
}

#[cfg(test)]
mod direction {
    use crate::{Direction, Floor};

    #[test]
    fn reversed_flips() {
        assert_eq!(Direction::Up.reversed(), Direction::Down);
        assert_eq!(Direction::Down.reversed(), Direction::Up);
    }

    #[test]
    fn of_travel() {
        assert_eq!(Direction::of_travel(Floor(2), Floor(7)), Direction::Up);
        assert_eq!(Direction::of_travel(Floor(7), Floor(2)), Direction::Down);
        // Zero-length hops count as Down.
        assert_eq!(Direction::of_travel(Floor(4), Floor(4)), Direction::Down);
    }

    #[test]
    fn display() {
        assert_eq!(Direction::Up.to_string(), "up");
        assert_eq!(Direction::Down.to_string(), "down");
    }
}

#[cfg(test)]
mod building {
    use crate::{Building, Floor};

    #[test]
    fn contains_bounds() {
        let b = Building::new(10);
        assert!(b.contains(Floor(0)));
        assert!(b.contains(Floor(9)));
        assert!(!b.contains(Floor(10)));
    }

    #[test]
    fn mid_floor_rounds_down() {
        assert_eq!(Building::new(10).mid_floor(), Floor(5));
        assert_eq!(Building::new(9).mid_floor(), Floor(4));
        assert_eq!(Building::new(1).mid_floor(), Floor(0));
    }

    #[test]
    fn top_floor() {
        assert_eq!(Building::new(10).top_floor(), Floor(9));
        assert_eq!(Building::new(1).top_floor(), Floor(0));
    }
}

#[cfg(test)]
mod time {
    use crate::{LiftError, SimClock, SimConfig, Tick};

    fn valid_config() -> SimConfig {
        SimConfig {
            num_floors:            10,
            car_count:             2,
            total_ticks:           100,
            seed:                  42,
            ticks_per_floor:       1,
            arrival_probability:   0.1,
            output_interval_ticks: 10,
        }
    }

    #[test]
    fn tick_arithmetic() {
        let t = Tick(10);
        assert_eq!(t + 5, Tick(15));
        assert_eq!(t.offset(3), Tick(13));
        assert_eq!(Tick(15) - Tick(10), 5u64);
        assert_eq!(Tick(15).since(Tick(10)), 5u64);
    }

    #[test]
    fn clock_advances() {
        let mut clock = SimClock::new();
        assert_eq!(clock.current_tick, Tick::ZERO);
        clock.advance();
        clock.advance();
        assert_eq!(clock.current_tick, Tick(2));
    }

    #[test]
    fn sim_config_end_tick() {
        assert_eq!(valid_config().end_tick(), Tick(100));
    }

    #[test]
    fn valid_config_passes() {
        assert!(valid_config().validate().is_ok());
    }

    #[test]
    fn zero_floors_rejected() {
        let cfg = SimConfig { num_floors: 0, ..valid_config() };
        assert!(matches!(cfg.validate(), Err(LiftError::Config(_))));
    }

    #[test]
    fn zero_cars_rejected() {
        let cfg = SimConfig { car_count: 0, ..valid_config() };
        assert!(matches!(cfg.validate(), Err(LiftError::Config(_))));
    }

    #[test]
    fn bad_probability_rejected() {
        let cfg = SimConfig { arrival_probability: 1.5, ..valid_config() };
        assert!(matches!(cfg.validate(), Err(LiftError::Config(_))));
    }
}

#[cfg(test)]
mod rng {
    use crate::SimRng;

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = SimRng::new(12345);
        let mut r2 = SimRng::new(12345);
        for _ in 0..100 {
            let a: f32 = r1.random();
            let b: f32 = r2.random();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn gen_range_in_bounds() {
        let mut rng = SimRng::new(0);
        for _ in 0..1000 {
            let v = rng.gen_range(0u16..10);
            assert!(v < 10);
        }
    }

    #[test]
    fn gen_bool_extremes() {
        let mut rng = SimRng::new(0);
        assert!(!rng.gen_bool(0.0));
        assert!(rng.gen_bool(1.0));
    }
}
