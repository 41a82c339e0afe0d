//! Simulation observer trait for progress reporting and data collection.

use lift_core::Tick;
use lift_fleet::{Fleet, PersonStore};

use crate::TickStats;

/// Callbacks invoked by [`LiftSim::run`][crate::LiftSim::run] at key points
/// in the tick loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter { interval: u64 }
///
/// impl SimObserver for ProgressPrinter {
///     fn on_tick_end(&mut self, tick: Tick, stats: TickStats) {
///         if tick.0 % self.interval == 0 {
///             println!("tick {tick}: {} pending calls", stats.pending_requests);
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each tick, before any processing.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called at the end of each tick with that tick's activity counters.
    fn on_tick_end(&mut self, _tick: Tick, _stats: TickStats) {}

    /// Called at snapshot intervals (every `config.output_interval_ticks`
    /// ticks).
    ///
    /// Provides read-only access to the fleet and person store so output
    /// writers can record state without the sim knowing any output format.
    fn on_snapshot(&mut self, _tick: Tick, _fleet: &Fleet, _people: &PersonStore) {}

    /// Called once after the final tick completes, with the end-of-run state
    /// for summary statistics.
    fn on_sim_end(&mut self, _final_tick: Tick, _fleet: &Fleet, _people: &PersonStore) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want progress callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
