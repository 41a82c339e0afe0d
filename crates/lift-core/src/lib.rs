//! `lift-core` — foundational types for the `rust_lift` elevator simulation
//! framework.
//!
//! This crate is a dependency of every other `lift-*` crate.  It intentionally
//! has no `lift-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module        | Contents                                        |
//! |---------------|-------------------------------------------------|
//! | [`ids`]       | `CarId`, `PersonId`, `Floor`                    |
//! | [`direction`] | `Direction` enum                                |
//! | [`time`]      | `Tick`, `SimClock`, `SimConfig`                 |
//! | [`building`]  | `Building` geometry                             |
//! | [`rng`]       | `SimRng` (seeded, deterministic)                |
//! | [`error`]     | `LiftError`, `LiftResult`                       |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                |
//! |---------|-------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.   |

pub mod building;
pub mod direction;
pub mod error;
pub mod ids;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use building::Building;
pub use direction::Direction;
pub use error::{LiftError, LiftResult};
pub use ids::{CarId, Floor, PersonId};
pub use rng::SimRng;
pub use time::{SimClock, SimConfig, Tick};
