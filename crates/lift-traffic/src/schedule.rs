//! Scripted passenger arrivals: `Arrival` and `ArrivalSchedule`.
//!
//! A schedule maps ticks to the passengers who appear at that tick.  It is
//! built once (from CSV or by hand in tests) and read non-destructively each
//! tick, so the same schedule value can drive any number of runs.

use std::collections::BTreeMap;

use lift_core::{Floor, Tick};

// ── Arrival ───────────────────────────────────────────────────────────────────

/// One scripted passenger: where they appear and where they want to go.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Arrival {
    pub origin:      Floor,
    pub destination: Floor,
}

// ── ArrivalSchedule ───────────────────────────────────────────────────────────

/// Tick-indexed scripted arrivals.
///
/// Arrivals at the same tick keep their insertion order — with CSV input
/// that is file order, which makes runs reproducible row-for-row.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArrivalSchedule {
    by_tick: BTreeMap<Tick, Vec<Arrival>>,
    /// Cached total arrival count for O(1) `len()`.
    total: usize,
}

impl ArrivalSchedule {
    /// A schedule with no scripted arrivals.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Script `arrival` to appear at `tick`.
    pub fn push(&mut self, tick: Tick, arrival: Arrival) {
        self.by_tick.entry(tick).or_default().push(arrival);
        self.total += 1;
    }

    /// Everyone scripted to appear at exactly `tick` (empty for most ticks).
    pub fn arrivals_at(&self, tick: Tick) -> &[Arrival] {
        self.by_tick.get(&tick).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Total number of scripted arrivals across all ticks.
    pub fn len(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// The last tick with a scripted arrival, or `None` if empty.
    pub fn last_tick(&self) -> Option<Tick> {
        self.by_tick.keys().next_back().copied()
    }
}
