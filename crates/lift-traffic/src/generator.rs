//! Random background traffic.
//!
//! Complements (or replaces) a scripted [`ArrivalSchedule`][crate::ArrivalSchedule]:
//! each tick, at most one passenger appears with the configured probability,
//! at a uniformly random origin, bound for a uniformly random *other* floor.
//! All draws come from the run's seeded `SimRng`, so the generated traffic is
//! reproducible.

use lift_core::{Building, Floor, SimRng};

use crate::Arrival;

/// Samples at most one random passenger arrival per tick.
#[derive(Debug, Clone, Copy)]
pub struct RandomTraffic {
    probability: f64,
}

impl RandomTraffic {
    /// `probability` is the per-tick chance of an arrival, in `[0.0, 1.0]`.
    pub fn new(probability: f64) -> Self {
        Self { probability }
    }

    /// Draw this tick's arrival, if any.
    ///
    /// Always `None` for a single-floor building — there is nowhere to ride.
    /// The destination is drawn as an offset in `1..num_floors` added modulo
    /// `num_floors`, which is uniform over all floors except the origin and
    /// needs no rejection loop.
    pub fn sample(&self, building: &Building, rng: &mut SimRng) -> Option<Arrival> {
        let n = building.num_floors();
        if n < 2 || !rng.gen_bool(self.probability) {
            return None;
        }
        let origin = rng.gen_range(0..n);
        let offset = rng.gen_range(1..n);
        let destination = ((origin as u32 + offset as u32) % n as u32) as u16;
        Some(Arrival {
            origin:      Floor(origin),
            destination: Floor(destination),
        })
    }
}
