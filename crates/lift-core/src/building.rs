//! Building geometry.
//!
//! The dispatch engine needs exactly one geometric fact about the world: how
//! many floors exist.  Floor heights, shaft positions, and pixel coordinates
//! are rendering concerns and live entirely outside this workspace.

use crate::Floor;

/// The building a fleet of cars serves.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Building {
    num_floors: u16,
}

impl Building {
    /// A building with `num_floors` floors numbered `0..num_floors`.
    ///
    /// # Panics
    /// Panics in debug mode if `num_floors == 0`.
    pub fn new(num_floors: u16) -> Self {
        debug_assert!(num_floors >= 1, "a building has at least one floor");
        Self { num_floors }
    }

    #[inline]
    pub fn num_floors(&self) -> u16 {
        self.num_floors
    }

    /// `true` if `floor` exists in this building.
    #[inline]
    pub fn contains(&self, floor: Floor) -> bool {
        floor.0 < self.num_floors
    }

    /// The highest floor.
    #[inline]
    pub fn top_floor(&self) -> Floor {
        Floor(self.num_floors - 1)
    }

    /// The middle floor (`num_floors / 2`, integer division) — where a car
    /// with nothing to do is parked.
    #[inline]
    pub fn mid_floor(&self) -> Floor {
        Floor(self.num_floors / 2)
    }
}
