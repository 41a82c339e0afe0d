//! Per-car movement state.
//!
//! A car is either **stationary** (waiting at a floor, `in_transit = false`)
//! or **in transit** (travelling between two floors, `in_transit = true`).
//!
//! Movement uses a **teleport-at-arrival** model: the car logically stays at
//! `departure_floor` until `arrival_tick`, then instantly appears at
//! `destination_floor`.  The [`progress`][CarMotion::progress] fraction lets
//! rendering tools interpolate a smooth shaft position between ticks.

use lift_core::{Floor, Tick};

/// The movement state for a single car.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CarMotion {
    /// `true` while the car is travelling to `destination_floor`.
    pub in_transit: bool,

    /// The floor the car departed from (or is currently at if `!in_transit`).
    pub departure_floor: Floor,

    /// The floor the car is heading to.  Equals `departure_floor` when
    /// `!in_transit`.
    pub destination_floor: Floor,

    /// Tick at which the journey began.  Equals `arrival_tick` when
    /// `!in_transit`.
    pub departure_tick: Tick,

    /// Tick at which the car will arrive at `destination_floor`.  Equals
    /// `departure_tick` when `!in_transit`.
    pub arrival_tick: Tick,
}

impl CarMotion {
    /// Construct a stationary state at `floor` at time `tick`.
    #[inline]
    pub fn stationary(floor: Floor, tick: Tick) -> Self {
        Self {
            in_transit:        false,
            departure_floor:   floor,
            destination_floor: floor,
            departure_tick:    tick,
            arrival_tick:      tick,
        }
    }

    /// Start a journey from the current floor to `to`, arriving after
    /// `distance × ticks_per_floor` ticks.
    ///
    /// A zero-distance journey gets `arrival_tick == now`: the car spends the
    /// rest of this tick "travelling" and is picked up by the next tick's
    /// arrival scan, so serving a call at the car's own floor still goes
    /// through the ordinary arrival path.
    pub fn begin_travel(&mut self, to: Floor, now: Tick, ticks_per_floor: u64) -> Tick {
        debug_assert!(!self.in_transit, "begin_travel on a car already in transit");
        let travel_ticks = self.departure_floor.distance(to) as u64 * ticks_per_floor;
        self.in_transit        = true;
        self.destination_floor = to;
        self.departure_tick    = now;
        self.arrival_tick      = now + travel_ticks;
        self.arrival_tick
    }

    /// Complete the journey: the car is now stationary at its destination.
    ///
    /// Returns the floor arrived at.
    pub fn arrive(&mut self, now: Tick) -> Floor {
        debug_assert!(self.in_transit, "arrive on a stationary car");
        self.in_transit      = false;
        self.departure_floor = self.destination_floor;
        self.departure_tick  = now;
        self.arrival_tick    = now;
        self.destination_floor
    }

    /// Fraction of the journey completed at `now`, in `[0.0, 1.0]`.
    ///
    /// Returns `1.0` for stationary cars or when `now >= arrival_tick`.
    pub fn progress(&self, now: Tick) -> f32 {
        if !self.in_transit || self.arrival_tick <= self.departure_tick {
            return 1.0;
        }
        let elapsed = now.0.saturating_sub(self.departure_tick.0) as f32;
        let total   = (self.arrival_tick.0 - self.departure_tick.0) as f32;
        (elapsed / total).min(1.0)
    }
}
