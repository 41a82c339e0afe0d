//! The `Car` record — one elevator vehicle, independently scheduled.

use lift_core::{CarId, Direction, Floor, PersonId, Tick};

use crate::{CarMotion, FleetError, PersonStore};

/// One elevator car.
///
/// A car is a plain record: the dispatch engine reads a snapshot of these
/// fields and writes back exactly two of them (`destination`, `direction`)
/// when it commits a decision.  All other mutation happens in the host's
/// tick loop (movement, boarding, drop-off).
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Car {
    /// Stable identity; equals the car's index in the fleet.
    pub id: CarId,

    /// Direction of the current sweep.  Retained while stationary — there is
    /// no idle direction state.
    pub direction: Direction,

    /// The committed next stop.  `None` before the first dispatch; after
    /// arrival it keeps its value (and keeps blocking rival pickups at that
    /// floor) until the next commit overwrites it.
    pub destination: Option<Floor>,

    /// People currently inside, in boarding order.
    pub passengers: Vec<PersonId>,

    /// Movement state (teleport-at-arrival).
    pub motion: CarMotion,
}

impl Car {
    /// A fresh car parked at `floor`, sweeping up, with no committed stop.
    pub fn new(id: CarId, floor: Floor) -> Self {
        Self {
            id,
            direction:   Direction::Up,
            destination: None,
            passengers:  Vec::new(),
            motion:      CarMotion::stationary(floor, Tick::ZERO),
        }
    }

    /// The floor the car is waiting at, or `None` while in transit.
    #[inline]
    pub fn current_floor(&self) -> Option<Floor> {
        if self.motion.in_transit {
            None
        } else {
            Some(self.motion.departure_floor)
        }
    }

    /// `true` if the car is stationary with no pending destination — either
    /// never dispatched, or already arrived at its committed stop.  Such a
    /// car must be given a decision this tick.
    #[inline]
    pub fn needs_decision(&self) -> bool {
        match self.current_floor() {
            None        => false,
            Some(floor) => self.destination.is_none_or(|d| d == floor),
        }
    }

    /// `true` if the cabin is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.passengers.is_empty()
    }

    /// Destination floors of everyone on board, in boarding order.
    pub fn passenger_destinations(&self, people: &PersonStore) -> Vec<Floor> {
        self.passengers
            .iter()
            .map(|&p| people.person(p).destination)
            .collect()
    }

    /// Record a dispatch decision: the committed next stop and the sweep
    /// direction it was chosen under.  Does not start movement — that is the
    /// host's job via [`depart`][Self::depart].
    #[inline]
    pub fn commit(&mut self, floor: Floor, direction: Direction) {
        self.destination = Some(floor);
        self.direction   = direction;
    }

    /// Start travelling toward the committed destination.
    ///
    /// Returns the arrival tick.  Errs if the car is already in transit or
    /// has no committed destination — both are host sequencing bugs.
    pub fn depart(&mut self, now: Tick, ticks_per_floor: u64) -> Result<Tick, FleetError> {
        if self.motion.in_transit {
            return Err(FleetError::AlreadyInTransit(self.id));
        }
        let Some(dest) = self.destination else {
            return Err(FleetError::NoDestination(self.id));
        };
        Ok(self.motion.begin_travel(dest, now, ticks_per_floor))
    }

    /// Complete an in-flight journey; the car is now waiting at the returned
    /// floor.
    pub fn arrive(&mut self, now: Tick) -> Floor {
        self.motion.arrive(now)
    }
}
