//! SCAN-style sweep selection over the directional partitions.
//!
//! The car keeps travelling in its current direction until no allowed work
//! remains that way, then reverses — reversals are the expensive operation
//! in a real shaft, so the sweep performs at most one per decision.

use lift_core::{Direction, Floor};

use crate::{ClaimSet, Partition};

/// Walk the partitions in sweep order and pick the first allowed floor.
///
/// Scans the partition matching `direction` nearest-first; if that is
/// exhausted (empty or fully claimed), reverses and scans the other half.
/// Returns the chosen floor, if any, together with the direction the car
/// ends up sweeping in — the reversal sticks even when the opposite half
/// also comes up empty.
pub fn sweep(
    partition: &Partition,
    direction: Direction,
    claims: &ClaimSet,
    own_drop_offs: &[Floor],
) -> (Option<Floor>, Direction) {
    let (ahead, behind) = match direction {
        Direction::Up   => (&partition.upper, &partition.lower),
        Direction::Down => (&partition.lower, &partition.upper),
    };

    if let Some(floor) = first_allowed(ahead, claims, own_drop_offs) {
        return (Some(floor), direction);
    }

    let reversed = direction.reversed();
    (first_allowed(behind, claims, own_drop_offs), reversed)
}

fn first_allowed(ordered: &[Floor], claims: &ClaimSet, own_drop_offs: &[Floor]) -> Option<Floor> {
    ordered.iter().copied().find(|&f| claims.allows(f, own_drop_offs))
}
