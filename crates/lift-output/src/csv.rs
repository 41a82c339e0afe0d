//! CSV output backend.
//!
//! Creates three files in the configured output directory:
//! - `car_snapshots.csv`
//! - `tick_summaries.csv`
//! - `service_summary.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{CarSnapshotRow, OutputResult, ServiceSummaryRow, TickSummaryRow};

/// Writes simulation output to three CSV files.
pub struct CsvWriter {
    snapshots: Writer<File>,
    summaries: Writer<File>,
    service:   Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Open (or create) the three CSV files in `dir` and write header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut snapshots = Writer::from_path(dir.join("car_snapshots.csv"))?;
        snapshots.write_record([
            "car_id", "tick", "floor", "in_transit", "destination", "direction", "passengers",
        ])?;

        let mut summaries = Writer::from_path(dir.join("tick_summaries.csv"))?;
        summaries.write_record([
            "tick", "spawned", "boarded", "delivered", "decisions", "pending_requests",
        ])?;

        let mut service = Writer::from_path(dir.join("service_summary.csv"))?;
        service.write_record([
            "total_people", "delivered", "mean_wait_outside_ticks", "mean_wait_inside_ticks",
        ])?;

        Ok(Self {
            snapshots,
            summaries,
            service,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_snapshots(&mut self, rows: &[CarSnapshotRow]) -> OutputResult<()> {
        for row in rows {
            self.snapshots.write_record(&[
                row.car_id.to_string(),
                row.tick.to_string(),
                row.floor.to_string(),
                (row.in_transit as u8).to_string(),
                row.destination.to_string(),
                row.direction.to_string(),
                row.passengers.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()> {
        self.summaries.write_record(&[
            row.tick.to_string(),
            row.spawned.to_string(),
            row.boarded.to_string(),
            row.delivered.to_string(),
            row.decisions.to_string(),
            row.pending_requests.to_string(),
        ])?;
        Ok(())
    }

    fn write_service_summary(&mut self, row: &ServiceSummaryRow) -> OutputResult<()> {
        self.service.write_record(&[
            row.total_people.to_string(),
            row.delivered.to_string(),
            row.mean_wait_outside_ticks.to_string(),
            row.mean_wait_inside_ticks.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.snapshots.flush()?;
        self.summaries.flush()?;
        self.service.flush()?;
        Ok(())
    }
}
