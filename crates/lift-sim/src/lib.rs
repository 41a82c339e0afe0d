//! `lift-sim` — tick loop orchestrator for the rust_lift framework.
//!
//! # Four-phase tick loop
//!
//! ```text
//! for tick in 0..config.total_ticks:
//!   ① Traffic   — scripted + random passengers appear; each pushes a
//!                 hall call for their origin floor.
//!   ② Arrivals  — cars whose arrival_tick has come park at their floor.
//!   ③ Serve     — arrived cars drop off riders destined here, board
//!                 everyone waiting here, and the floor's hall calls are
//!                 removed from the queue.
//!   ④ Dispatch  — every car resting with no pending destination gets a
//!                 decision (lift-dispatch), in fleet order; each commit
//!                 is visible to the cars evaluated after it.  The car
//!                 departs immediately.
//! ```
//!
//! Everything is single-threaded and driven by one seeded RNG: a fixed
//! config, seed, and arrival schedule reproduce a run exactly.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use lift_core::SimConfig;
//! use lift_sim::{NoopObserver, SimBuilder};
//!
//! let mut sim = SimBuilder::new(config).build()?;
//! sim.run(&mut NoopObserver)?;
//! println!("delivered: {}", sim.people.delivered_count());
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod sim;

#[cfg(test)]
mod tests;

pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use sim::{LiftSim, TickStats};
