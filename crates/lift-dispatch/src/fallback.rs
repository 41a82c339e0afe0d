//! Bootstrap and fallback policies for cars the sweep could not place.
//!
//! These paths fire only when the sweep found no allowed candidate — in
//! practice an empty-cabin car facing a queue that is empty or fully claimed.

use lift_core::{Direction, Floor};
use lift_traffic::RequestQueue;

use crate::ClaimSet;

/// Empty-cabin bootstrap: the oldest pending call no other car is already
/// heading to, scanning the **raw** queue in arrival order (not the merged,
/// partitioned candidate set — queue age, not proximity, decides here).
pub fn bootstrap_floor(requests: &RequestQueue, claims: &ClaimSet) -> Option<Floor> {
    requests.floors().iter().copied().find(|&f| !claims.is_claimed(f))
}

/// Direction seed for a bootstrap assignment: `Up` when `target` lies above
/// the car's previously committed stop, `Down` otherwise — including for a
/// car that has never been dispatched.  Best-effort only; no correctness
/// property depends on this value.
pub fn seed_direction(previous_destination: Option<Floor>, target: Floor) -> Direction {
    match previous_destination {
        Some(prev) => Direction::of_travel(prev, target),
        None       => Direction::Down,
    }
}
