//! `SimOutputObserver<W>` — bridges `SimObserver` to an `OutputWriter`.

use lift_core::{Floor, Tick};
use lift_fleet::{Fleet, PersonStore};
use lift_sim::{SimObserver, TickStats};

use crate::row::{CarSnapshotRow, ServiceSummaryRow, TickSummaryRow};
use crate::writer::OutputWriter;
use crate::OutputError;

/// A [`SimObserver`] that writes car snapshots, tick summaries, and the
/// end-of-run service summary to any [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because `SimObserver`
/// methods have no return value.  After `sim.run()` returns, check for
/// errors with [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    /// Create an observer backed by `writer`.
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            last_error: None,
        }
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the sim).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: crate::OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_tick_end(&mut self, tick: Tick, stats: TickStats) {
        let row = TickSummaryRow {
            tick:             tick.0,
            spawned:          stats.spawned as u64,
            boarded:          stats.boarded as u64,
            delivered:        stats.delivered as u64,
            decisions:        stats.decisions as u64,
            pending_requests: stats.pending_requests as u64,
        };
        let result = self.writer.write_tick_summary(&row);
        self.store_err(result);
    }

    fn on_snapshot(&mut self, tick: Tick, fleet: &Fleet, _people: &PersonStore) {
        let rows: Vec<CarSnapshotRow> = fleet
            .cars()
            .iter()
            .map(|car| CarSnapshotRow {
                car_id:      car.id.0,
                tick:        tick.0,
                floor:       car.motion.departure_floor.0,
                in_transit:  car.motion.in_transit,
                destination: car.destination.unwrap_or(Floor::INVALID).0,
                direction:   car.direction.as_str(),
                passengers:  car.passengers.len() as u32,
            })
            .collect();

        if !rows.is_empty() {
            let result = self.writer.write_snapshots(&rows);
            self.store_err(result);
        }
    }

    fn on_sim_end(&mut self, _final_tick: Tick, _fleet: &Fleet, people: &PersonStore) {
        let row = service_summary(people);
        let result = self.writer.write_service_summary(&row);
        self.store_err(result);
        let result = self.writer.finish();
        self.store_err(result);
    }
}

/// Compute the end-of-run service summary.
///
/// Mean waits cover delivered passengers only; a run with no deliveries
/// reports zero means rather than NaN.
fn service_summary(people: &PersonStore) -> ServiceSummaryRow {
    let mut delivered = 0u64;
    let mut wait_outside = 0u64;
    let mut wait_inside = 0u64;

    for (_, person) in people.iter() {
        if let Some(at) = person.delivered {
            delivered += 1;
            wait_outside += person.wait_outside(at);
            wait_inside += person.wait_inside(at);
        }
    }

    let mean = |total: u64| {
        if delivered == 0 {
            0.0
        } else {
            total as f64 / delivered as f64
        }
    };

    ServiceSummaryRow {
        total_people:            people.len() as u64,
        delivered,
        mean_wait_outside_ticks: mean(wait_outside),
        mean_wait_inside_ticks:  mean(wait_inside),
    }
}
