//! `RequestQueue` — outstanding hall calls in arrival order.
//!
//! One entry per waiting person, pushed when they appear at a floor.
//! Duplicate floors are expected (two people waiting at floor 7 → two
//! entries) and order is preserved: the dispatch bootstrap path scans this
//! queue front-to-back, so arrival order is service order for idle cars.
//!
//! # Ownership of removal
//!
//! The dispatch engine only *reads* this queue.  Entries are removed by the
//! host tick loop when a car arrives at a floor and serves the waiting
//! people there — never by the engine.  The engine must therefore tolerate
//! entries that some car is already on its way to.

use lift_core::Floor;

/// Ordered pending floor calls not yet served.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RequestQueue {
    floors: Vec<Floor>,
}

impl RequestQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a call at `floor` (one per waiting person).
    pub fn push(&mut self, floor: Floor) {
        self.floors.push(floor);
    }

    /// All pending calls in arrival order.
    #[inline]
    pub fn floors(&self) -> &[Floor] {
        &self.floors
    }

    /// Remove every entry for `floor`; returns how many were removed.
    ///
    /// Called by the host once a car has arrived at `floor` and boarded the
    /// people waiting there.
    pub fn remove_floor(&mut self, floor: Floor) -> usize {
        let before = self.floors.len();
        self.floors.retain(|&f| f != floor);
        before - self.floors.len()
    }

    pub fn len(&self) -> usize {
        self.floors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.floors.is_empty()
    }
}
