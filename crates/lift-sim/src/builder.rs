//! Fluent builder for constructing a [`LiftSim`].

use lift_core::{Floor, SimClock, SimConfig, SimRng};
use lift_fleet::{Fleet, PersonStore};
use lift_traffic::{ArrivalSchedule, RandomTraffic, RequestQueue};

use crate::{LiftSim, SimError, SimResult};

/// Fluent builder for [`LiftSim`].
///
/// # Required input
///
/// - [`SimConfig`] — floors, cars, total ticks, seed, …
///
/// # Optional inputs (have defaults)
///
/// | Method             | Default                      |
/// |--------------------|------------------------------|
/// | `.schedule(s)`     | No scripted arrivals         |
/// | `.initial_floor(f)`| Ground floor (`Floor(0)`)    |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(config)
///     .schedule(load_arrivals_csv(path, &config.building())?)
///     .build()?;
/// sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder {
    config:        SimConfig,
    schedule:      Option<ArrivalSchedule>,
    initial_floor: Option<Floor>,
}

impl SimBuilder {
    /// Create a builder with the required configuration.
    pub fn new(config: SimConfig) -> Self {
        Self {
            config,
            schedule:      None,
            initial_floor: None,
        }
    }

    /// Supply scripted passenger arrivals.
    ///
    /// If not called, all traffic comes from the random generator (which is
    /// itself silent when `config.arrival_probability` is 0.0).
    pub fn schedule(mut self, schedule: ArrivalSchedule) -> Self {
        self.schedule = Some(schedule);
        self
    }

    /// Park all cars at `floor` initially instead of the ground floor.
    pub fn initial_floor(mut self, floor: Floor) -> Self {
        self.initial_floor = Some(floor);
        self
    }

    /// Validate inputs and return a ready-to-run [`LiftSim`].
    pub fn build(self) -> SimResult<LiftSim> {
        self.config.validate()?;
        let building = self.config.building();

        let initial_floor = self.initial_floor.unwrap_or(Floor(0));
        if !building.contains(initial_floor) {
            return Err(SimError::Config(format!(
                "initial floor {initial_floor} outside building with {} floors",
                building.num_floors()
            )));
        }

        Ok(LiftSim {
            clock:    SimClock::new(),
            building,
            fleet:    Fleet::new(self.config.car_count, initial_floor),
            people:   PersonStore::new(),
            requests: RequestQueue::new(),
            schedule: self.schedule.unwrap_or_else(ArrivalSchedule::empty),
            traffic:  RandomTraffic::new(self.config.arrival_probability),
            rng:      SimRng::new(self.config.seed),
            config:   self.config,
        })
    }
}
