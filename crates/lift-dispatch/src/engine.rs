//! The decision engine: one car, one snapshot, one committed floor.

use lift_core::{Building, CarId, Direction, Floor};
use lift_fleet::{Fleet, PersonStore};
use lift_traffic::RequestQueue;

use crate::{ClaimSet, bootstrap_floor, candidate_floors, seed_direction, split_at, sweep};

// ── DispatchContext ───────────────────────────────────────────────────────────

/// Read-only snapshot of everything one decision may consult.
///
/// Built fresh per decision, at the moment the car is evaluated — so it
/// reflects commitments made by cars evaluated earlier in the same tick,
/// but not those still to come.
pub struct DispatchContext<'a> {
    /// The floor the evaluated car is resting at.
    pub current_floor: Floor,

    /// The car's retained sweep direction.
    pub direction: Direction,

    /// The car's previously committed stop, if it has ever been dispatched.
    pub previous_destination: Option<Floor>,

    /// Destinations of the passengers on board, in boarding order.
    pub drop_offs: Vec<Floor>,

    /// Every other car's committed destination.
    pub claims: ClaimSet,

    /// Pending hall calls, in arrival order.
    pub requests: &'a RequestQueue,

    /// Building geometry, for the parking fallback.
    pub building: Building,
}

impl<'a> DispatchContext<'a> {
    /// Snapshot the world as seen by `car` right now.
    ///
    /// # Panics
    ///
    /// Panics if `car` is in transit.  A decision is only defined for a car
    /// resting at a floor; asking mid-flight is a host sequencing bug, not a
    /// condition to recover from.
    pub fn snapshot(
        fleet:    &Fleet,
        car:      CarId,
        people:   &PersonStore,
        requests: &'a RequestQueue,
        building: Building,
    ) -> Self {
        let evaluated = fleet.car(car);
        let Some(current_floor) = evaluated.current_floor() else {
            panic!("dispatch requested for {car} while in transit");
        };
        Self {
            current_floor,
            direction:            evaluated.direction,
            previous_destination: evaluated.destination,
            drop_offs:            evaluated.passenger_destinations(people),
            claims:               ClaimSet::gather(fleet, car),
            requests,
            building,
        }
    }
}

// ── Decision ──────────────────────────────────────────────────────────────────

/// The outcome of one decision: where to go and which way the car is now
/// sweeping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decision {
    pub floor:     Floor,
    pub direction: Direction,
}

/// Choose the next stop for the snapshotted car.
///
/// Total: every call yields a concrete floor inside the building, never "no
/// destination".  Pure: the same snapshot always produces the same decision.
pub fn select(ctx: &DispatchContext<'_>) -> Decision {
    // ── Sweep the merged, partitioned candidates ──────────────────────────
    let candidates = candidate_floors(ctx.requests, &ctx.drop_offs);
    let partition  = split_at(&candidates, ctx.current_floor);
    let (chosen, direction) = sweep(&partition, ctx.direction, &ctx.claims, &ctx.drop_offs);
    if let Some(floor) = chosen {
        return Decision { floor, direction };
    }

    // ── Empty cabin: claim the oldest unhandled call outright ─────────────
    if ctx.drop_offs.is_empty() {
        if let Some(floor) = bootstrap_floor(ctx.requests, &ctx.claims) {
            let direction = seed_direction(ctx.previous_destination, floor);
            return Decision { floor, direction };
        }
    }

    // ── Nothing anywhere: park mid-building ───────────────────────────────
    //
    // `direction` here is the post-sweep value — the reversal from an
    // exhausted sweep sticks even when no floor was found.
    Decision { floor: ctx.building.mid_floor(), direction }
}

// ── Entry point ───────────────────────────────────────────────────────────────

/// Decide and commit the next stop for `car`.
///
/// Snapshots the fleet as it stands (commitments by earlier-evaluated cars
/// included), selects a floor, writes it and the resulting sweep direction
/// back to the car, and returns the floor.  Writing those two fields is the
/// engine's single externally observable side effect; starting the actual
/// movement — and later removing served calls — stays with the host.
pub fn decide(
    fleet:    &mut Fleet,
    car:      CarId,
    people:   &PersonStore,
    requests: &RequestQueue,
    building: Building,
) -> Floor {
    let ctx = DispatchContext::snapshot(fleet, car, people, requests, building);
    let decision = select(&ctx);
    fleet.car_mut(car).commit(decision.floor, decision.direction);
    decision.floor
}
