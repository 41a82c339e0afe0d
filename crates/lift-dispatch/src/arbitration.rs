//! Work partitioning between cars: which candidate floors one car may take.
//!
//! There is no explicit conflict-resolution protocol.  Cars are decided one
//! at a time in fleet order, each decision commits before the next begins,
//! and a `ClaimSet` is gathered fresh per decision — so a call contested
//! within a tick simply goes to whichever car was evaluated first, and every
//! later car sees the field already taken.

use lift_core::{CarId, Floor};
use lift_fleet::Fleet;

/// The committed destinations of every car except the one being evaluated.
#[derive(Debug, Clone, Default)]
pub struct ClaimSet {
    claims: Vec<Floor>,
}

impl ClaimSet {
    /// Collect every *other* car's committed destination.
    ///
    /// Cars evaluated earlier this tick already carry their new commitments;
    /// cars not yet evaluated still show their prior-tick stop.  Both count —
    /// a parked car keeps claiming the floor it last served until it is
    /// re-dispatched.
    pub fn gather(fleet: &Fleet, evaluated: CarId) -> Self {
        let claims = fleet
            .cars()
            .iter()
            .filter(|c| c.id != evaluated)
            .filter_map(|c| c.destination)
            .collect();
        Self { claims }
    }

    /// Build directly from a list of destinations (test harnesses).
    pub fn from_destinations(claims: Vec<Floor>) -> Self {
        Self { claims }
    }

    /// `true` if some other car is already committed to `floor`.
    #[inline]
    pub fn is_claimed(&self, floor: Floor) -> bool {
        self.claims.contains(&floor)
    }

    /// May the evaluating car take `floor`?
    ///
    /// Yes unless another car claimed it — with one override: a floor in
    /// `own_drop_offs` (a destination of someone already on board) is always
    /// allowed.  Duplicate drop-off service is acceptable; duplicate pickup
    /// service is not, since pickups come only from the shared hall-call
    /// queue.
    #[inline]
    pub fn allows(&self, floor: Floor, own_drop_offs: &[Floor]) -> bool {
        !self.is_claimed(floor) || own_drop_offs.contains(&floor)
    }
}
