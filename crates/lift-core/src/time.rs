//! Simulation time model.
//!
//! # Design
//!
//! Time is a monotonically increasing `Tick` counter — one tick per
//! simulation iteration.  Car travel times are expressed in whole ticks
//! (`ticks_per_floor` in [`SimConfig`]), so all arrival arithmetic is exact
//! and comparisons are O(1).  There is no wall-clock mapping: the host that
//! embeds the simulation decides what a tick means in real time.

use std::fmt;

use crate::{Building, LiftError, LiftResult};

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute simulation tick counter.
///
/// Stored as `u64` to avoid overflow: at one tick per millisecond a u64
/// lasts ~585 million years, far longer than any conceivable run.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// Return the tick `n` steps after `self`.
    #[inline]
    pub fn offset(self, n: u64) -> Tick {
        Tick(self.0 + n)
    }

    /// Ticks elapsed from `earlier` to `self`.
    ///
    /// # Panics
    /// Panics in debug mode if `earlier > self`.
    #[inline]
    pub fn since(self, earlier: Tick) -> u64 {
        self.0 - earlier.0
    }
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl std::ops::Sub for Tick {
    type Output = u64;
    #[inline]
    fn sub(self, rhs: Tick) -> u64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// The simulation's tick counter, advanced once per iteration.
///
/// `SimClock` is cheap to copy and intentionally holds no heap data.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimClock {
    /// The current tick — advanced by `SimClock::advance()` each iteration.
    pub current_tick: Tick,
}

impl SimClock {
    /// Create a clock at tick 0.
    pub fn new() -> Self {
        Self { current_tick: Tick::ZERO }
    }

    /// Advance the clock by one tick.
    #[inline]
    pub fn advance(&mut self) {
        self.current_tick = Tick(self.current_tick.0 + 1);
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.current_tick)
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Top-level simulation configuration.
///
/// Typically loaded from a TOML/JSON file by the application crate and passed
/// to the simulation builder.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// Number of floors in the building.  Must be ≥ 1.
    pub num_floors: u16,

    /// Number of cars in the fleet.  Must be ≥ 1.  Fleet iteration order is
    /// creation order and never changes during a run.
    pub car_count: u32,

    /// Total ticks to simulate.
    pub total_ticks: u64,

    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,

    /// Ticks a car needs to travel one floor.  Must be ≥ 1.
    pub ticks_per_floor: u64,

    /// Probability per tick of one random passenger arriving, in `[0.0, 1.0]`.
    /// Set to 0.0 to drive the run from a scripted arrival schedule alone.
    pub arrival_probability: f64,

    /// Write output every N ticks.  1 = every tick; 0 disables snapshots.
    pub output_interval_ticks: u64,
}

impl SimConfig {
    /// The tick at which the simulation ends (exclusive upper bound).
    #[inline]
    pub fn end_tick(&self) -> Tick {
        Tick(self.total_ticks)
    }

    /// The building geometry this run simulates.
    #[inline]
    pub fn building(&self) -> Building {
        Building::new(self.num_floors)
    }

    /// Check that the configuration describes a runnable simulation.
    pub fn validate(&self) -> LiftResult<()> {
        if self.num_floors == 0 {
            return Err(LiftError::Config("num_floors must be >= 1".into()));
        }
        if self.car_count == 0 {
            return Err(LiftError::Config("car_count must be >= 1".into()));
        }
        if self.ticks_per_floor == 0 {
            return Err(LiftError::Config("ticks_per_floor must be >= 1".into()));
        }
        if !(0.0..=1.0).contains(&self.arrival_probability) {
            return Err(LiftError::Config(format!(
                "arrival_probability {} outside [0, 1]",
                self.arrival_probability
            )));
        }
        Ok(())
    }
}
