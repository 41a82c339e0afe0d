//! Request aggregation: merge hall calls with on-board destinations.

use lift_core::Floor;
use lift_traffic::RequestQueue;

/// Deduplicated candidate floors for one car: every pending hall call plus
/// every destination of the car's own passengers.
///
/// Order is first occurrence — queue order, then boarding order — which keeps
/// downstream selection deterministic for a fixed snapshot.  Linear `contains`
/// is fine here: the list is bounded by the floor count, not the person count.
pub fn candidate_floors(requests: &RequestQueue, drop_offs: &[Floor]) -> Vec<Floor> {
    let mut merged: Vec<Floor> = Vec::with_capacity(requests.len() + drop_offs.len());
    for &floor in requests.floors().iter().chain(drop_offs) {
        if !merged.contains(&floor) {
            merged.push(floor);
        }
    }
    merged
}
