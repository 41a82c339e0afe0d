//! Directional partitioning of candidate floors around the car's position.

use lift_core::Floor;

/// Candidate floors split by direction of travel, each half ordered
/// nearest-first from the reference floor outward.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partition {
    /// Candidates at or above the reference floor, ascending.
    pub upper: Vec<Floor>,
    /// Candidates at or below the reference floor, descending.
    pub lower: Vec<Floor>,
}

/// Split `candidates` around `at`.
///
/// A candidate equal to `at` lands in **both** halves: a call at the car's
/// own floor is reachable under either direction with zero travel, and must
/// not be dropped by either filter.
pub fn split_at(candidates: &[Floor], at: Floor) -> Partition {
    let mut upper: Vec<Floor> = candidates.iter().copied().filter(|&f| f >= at).collect();
    let mut lower: Vec<Floor> = candidates.iter().copied().filter(|&f| f <= at).collect();
    upper.sort_unstable();
    lower.sort_unstable_by(|a, b| b.cmp(a));
    Partition { upper, lower }
}
