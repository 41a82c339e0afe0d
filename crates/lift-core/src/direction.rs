//! Travel direction shared across all fleet- and dispatch-related crates.
//!
//! There is deliberately no "idle" variant: a stationary car retains the
//! direction of its last sweep, and the dispatch engine relies on that
//! retained value to continue the sweep where it left off.

use crate::Floor;

/// The direction a car is sweeping in.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    /// Sweeping toward higher floor numbers (default initial direction).
    #[default]
    Up,
    /// Sweeping toward lower floor numbers.
    Down,
}

impl Direction {
    /// The opposite direction.
    #[inline]
    pub fn reversed(self) -> Direction {
        match self {
            Direction::Up   => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }

    /// Direction of travel from `from` to `to`.
    ///
    /// `to == from` counts as `Down` — a zero-length hop never raises the car.
    #[inline]
    pub fn of_travel(from: Floor, to: Floor) -> Direction {
        if to > from { Direction::Up } else { Direction::Down }
    }

    /// Human-readable label, useful for CSV column values.
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Up   => "up",
            Direction::Down => "down",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
