//! CSV arrival-schedule loader.
//!
//! # CSV format
//!
//! One row per scripted passenger:
//!
//! ```csv
//! tick,origin,destination
//! 0,0,7
//! 0,3,0
//! 12,5,2
//! ```
//!
//! Rows may appear in any tick order; rows sharing a tick keep file order.
//! Both floors must exist in the building and must differ — a passenger
//! whose destination is their origin would never ride.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use lift_core::{Building, Floor, LiftError, Tick};

use crate::{Arrival, ArrivalSchedule, TrafficError};

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct ArrivalRecord {
    tick:        u64,
    origin:      u16,
    destination: u16,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load an [`ArrivalSchedule`] from a CSV file, validated against `building`.
pub fn load_arrivals_csv(path: &Path, building: &Building) -> Result<ArrivalSchedule, TrafficError> {
    let file = std::fs::File::open(path).map_err(TrafficError::Io)?;
    load_arrivals_reader(file, building)
}

/// Like [`load_arrivals_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or embedded schedules.
pub fn load_arrivals_reader<R: Read>(
    reader: R,
    building: &Building,
) -> Result<ArrivalSchedule, TrafficError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut schedule = ArrivalSchedule::empty();

    for result in csv_reader.deserialize::<ArrivalRecord>() {
        let row = result.map_err(|e| TrafficError::Parse(e.to_string()))?;

        let origin      = check_floor(row.origin, building)?;
        let destination = check_floor(row.destination, building)?;
        if origin == destination {
            return Err(TrafficError::Parse(format!(
                "arrival at tick {}: origin and destination are both {origin}",
                row.tick
            )));
        }

        schedule.push(Tick(row.tick), Arrival { origin, destination });
    }

    Ok(schedule)
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn check_floor(raw: u16, building: &Building) -> Result<Floor, TrafficError> {
    let floor = Floor(raw);
    if !building.contains(floor) {
        return Err(TrafficError::Core(LiftError::FloorOutOfRange(
            floor,
            building.num_floors(),
        )));
    }
    Ok(floor)
}
