//! `lift-output` — simulation output writers for the rust_lift framework.
//!
//! The CSV backend creates three files:
//!
//! | File                  | Contents                                     |
//! |-----------------------|----------------------------------------------|
//! | `car_snapshots.csv`   | Per-car state at each snapshot interval      |
//! | `tick_summaries.csv`  | Per-tick activity counters                   |
//! | `service_summary.csv` | One end-of-run service quality row           |
//!
//! Backends implement [`OutputWriter`] and are driven by
//! [`SimOutputObserver`], which implements `lift_sim::SimObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use lift_output::{CsvWriter, SimOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = SimOutputObserver::new(writer);
//! sim.run(&mut obs)?;
//! obs.take_error().map(|e| eprintln!("output error: {e}"));
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(test)]
mod tests;

pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::SimOutputObserver;
pub use row::{CarSnapshotRow, ServiceSummaryRow, TickSummaryRow};
pub use writer::OutputWriter;
