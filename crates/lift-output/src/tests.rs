//! Tests for the CSV backend and the output observer.

use std::fs;

use lift_core::{Floor, SimConfig, Tick};
use lift_sim::SimBuilder;
use lift_traffic::{Arrival, ArrivalSchedule};
use tempfile::TempDir;

use crate::{
    CarSnapshotRow, CsvWriter, OutputWriter, ServiceSummaryRow, SimOutputObserver, TickSummaryRow,
};

// ── CsvWriter ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod csv_writer {
    use super::*;

    #[test]
    fn writes_headers_on_creation() {
        let dir = TempDir::new().unwrap();
        let mut writer = CsvWriter::new(dir.path()).unwrap();
        writer.finish().unwrap();

        let snapshots = fs::read_to_string(dir.path().join("car_snapshots.csv")).unwrap();
        assert!(snapshots.starts_with("car_id,tick,floor,in_transit,destination,direction,passengers"));

        let summaries = fs::read_to_string(dir.path().join("tick_summaries.csv")).unwrap();
        assert!(summaries.starts_with("tick,spawned,boarded,delivered,decisions,pending_requests"));

        let service = fs::read_to_string(dir.path().join("service_summary.csv")).unwrap();
        assert!(service.starts_with("total_people,delivered,mean_wait_outside_ticks,mean_wait_inside_ticks"));
    }

    #[test]
    fn snapshot_rows_roundtrip() {
        let dir = TempDir::new().unwrap();
        let mut writer = CsvWriter::new(dir.path()).unwrap();
        writer
            .write_snapshots(&[
                CarSnapshotRow {
                    car_id:      0,
                    tick:        3,
                    floor:       5,
                    in_transit:  false,
                    destination: 5,
                    direction:   "up",
                    passengers:  2,
                },
                CarSnapshotRow {
                    car_id:      1,
                    tick:        3,
                    floor:       0,
                    in_transit:  true,
                    destination: 7,
                    direction:   "down",
                    passengers:  0,
                },
            ])
            .unwrap();
        writer.finish().unwrap();

        let content = fs::read_to_string(dir.path().join("car_snapshots.csv")).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 3); // header + 2 rows
        assert_eq!(lines[1], "0,3,5,0,5,up,2");
        assert_eq!(lines[2], "1,3,0,1,7,down,0");
    }

    #[test]
    fn summary_rows_roundtrip() {
        let dir = TempDir::new().unwrap();
        let mut writer = CsvWriter::new(dir.path()).unwrap();
        writer
            .write_tick_summary(&TickSummaryRow {
                tick:             9,
                spawned:          1,
                boarded:          2,
                delivered:        3,
                decisions:        4,
                pending_requests: 5,
            })
            .unwrap();
        writer
            .write_service_summary(&ServiceSummaryRow {
                total_people:            10,
                delivered:               8,
                mean_wait_outside_ticks: 2.5,
                mean_wait_inside_ticks:  4.0,
            })
            .unwrap();
        writer.finish().unwrap();

        let summaries = fs::read_to_string(dir.path().join("tick_summaries.csv")).unwrap();
        assert_eq!(summaries.lines().nth(1).unwrap(), "9,1,2,3,4,5");

        let service = fs::read_to_string(dir.path().join("service_summary.csv")).unwrap();
        assert_eq!(service.lines().nth(1).unwrap(), "10,8,2.5,4");
    }

    #[test]
    fn finish_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let mut writer = CsvWriter::new(dir.path()).unwrap();
        writer.finish().unwrap();
        writer.finish().unwrap();
    }
}

// ── SimOutputObserver over a real run ─────────────────────────────────────────

#[cfg(test)]
mod observer {
    use super::*;

    fn config() -> SimConfig {
        SimConfig {
            num_floors:            10,
            car_count:             1,
            total_ticks:           10,
            seed:                  42,
            ticks_per_floor:       1,
            arrival_probability:   0.0,
            output_interval_ticks: 5,
        }
    }

    #[test]
    fn full_run_writes_all_three_files() {
        // One passenger: appears at tick 0 on floor 3 bound for 7, boards at
        // tick 3, delivered at tick 7 → mean waits 3 (outside) and 4 (inside).
        let mut schedule = ArrivalSchedule::empty();
        schedule.push(Tick(0), Arrival { origin: Floor(3), destination: Floor(7) });

        let dir = TempDir::new().unwrap();
        let writer = CsvWriter::new(dir.path()).unwrap();
        let mut obs = SimOutputObserver::new(writer);

        let mut sim = SimBuilder::new(config()).schedule(schedule).build().unwrap();
        sim.run(&mut obs).unwrap();
        assert!(obs.take_error().is_none());

        // One summary row per tick.
        let summaries = fs::read_to_string(dir.path().join("tick_summaries.csv")).unwrap();
        assert_eq!(summaries.lines().count(), 11); // header + 10 ticks

        // Snapshots at ticks 0 and 5, one car each.
        let snapshots = fs::read_to_string(dir.path().join("car_snapshots.csv")).unwrap();
        assert_eq!(snapshots.lines().count(), 3); // header + 2 rows

        let service = fs::read_to_string(dir.path().join("service_summary.csv")).unwrap();
        assert_eq!(service.lines().nth(1).unwrap(), "1,1,3,4");
    }
}
