//! `lift-dispatch` — the dispatch decision engine.
//!
//! Given a snapshot of pending hall calls, the state of every car, and the
//! building, decide — for one car at a time — which floor that car should
//! travel to next.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                     |
//! |-----------------|--------------------------------------------------------------|
//! | [`candidates`]  | Aggregation: hall calls ∪ on-board destinations, deduped     |
//! | [`partition`]   | `Partition` — candidates split above/below the car           |
//! | [`arbitration`] | `ClaimSet` — which floors other cars already own             |
//! | [`sweep`]       | SCAN sweep: first allowed floor ahead, reverse on exhaustion |
//! | [`fallback`]    | Empty-cabin bootstrap and the mid-building parking default   |
//! | [`engine`]      | `DispatchContext`, `select`, and the committing [`decide`]   |
//!
//! # Decision pipeline
//!
//! ```text
//! decide(fleet, car, people, requests, building):
//!   ① snapshot   — current floor, direction, drop-offs, other cars' claims
//!   ② aggregate  — candidates = requests ∪ passenger destinations
//!   ③ partition  — upper (ascending) / lower (descending) around the car;
//!                  the car's own floor appears in both
//!   ④ sweep      — first allowed floor in the current direction, else
//!                  reverse and scan the other half
//!   ⑤ bootstrap  — empty cabin: oldest unclaimed raw hall call
//!   ⑥ park       — mid-building floor; decide() is total
//!   ⑦ commit     — write destination (+ direction) back to the car
//! ```
//!
//! # Arbitration model
//!
//! The host evaluates cars in fixed fleet order within a tick, and each
//! `decide` call commits before the next begins.  A `ClaimSet` gathered at
//! step ① therefore already contains this tick's earlier commitments:
//! contested calls go to the first-evaluated car and everyone later sees the
//! claim.  No locking, no conflict protocol — the engine is the only writer
//! of `destination`/`direction` and is never called re-entrantly.

pub mod arbitration;
pub mod candidates;
pub mod engine;
pub mod fallback;
pub mod partition;
pub mod sweep;


pub use arbitration::ClaimSet;
pub use candidates::candidate_floors;
pub use engine::{Decision, DispatchContext, decide, select};
pub use fallback::{bootstrap_floor, seed_direction};
pub use partition::{Partition, split_at};
pub use sweep::sweep;
