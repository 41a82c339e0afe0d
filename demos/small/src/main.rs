//! small — smallest example for the rust_lift elevator simulation framework.
//!
//! Simulates 3 cars serving a 12-floor office building through a scripted
//! morning rush (embedded CSV) plus light random background traffic.  Scale
//! comment: bump the constants and feed a real arrival schedule to model a
//! full tower.

use std::io::Cursor;
use std::path::Path;
use std::time::Instant;

use anyhow::Result;

use lift_core::{Floor, SimConfig, Tick};
use lift_output::{CsvWriter, SimOutputObserver};
use lift_sim::{SimBuilder, SimObserver, TickStats};
use lift_traffic::load_arrivals_reader;

// ── Constants ─────────────────────────────────────────────────────────────────

const NUM_FLOORS:            u16 = 12;
const CAR_COUNT:             u32 = 3;
const SEED:                  u64 = 42;
const TICKS_PER_FLOOR:       u64 = 2;
const TOTAL_TICKS:           u64 = 400;
const ARRIVAL_PROBABILITY:   f64 = 0.05;
const OUTPUT_INTERVAL_TICKS: u64 = 10;

// ── Arrival schedule CSV ──────────────────────────────────────────────────────

// A compressed morning rush: a burst of lobby departures in the first ticks,
// then scattered inter-floor traffic.
const SCHEDULE_CSV: &str = "\
tick,origin,destination\n\
0,0,7\n\
0,0,4\n\
2,0,11\n\
4,0,9\n\
6,3,0\n\
10,0,5\n\
15,8,2\n\
20,0,10\n\
30,6,1\n\
45,2,9\n\
60,11,0\n\
80,5,1\n\
";

// ── Progress printer ──────────────────────────────────────────────────────────

struct ProgressPrinter {
    interval:        u64,
    total_spawned:   usize,
    total_delivered: usize,
}

impl SimObserver for ProgressPrinter {
    fn on_tick_end(&mut self, tick: Tick, stats: TickStats) {
        self.total_spawned += stats.spawned;
        self.total_delivered += stats.delivered;
        if tick.0 % self.interval == 0 {
            println!(
                "{tick:>6}  spawned {:>3}  delivered {:>3}  pending calls {:>2}",
                self.total_spawned, self.total_delivered, stats.pending_requests
            );
        }
    }
}

/// Fans one set of sim callbacks out to the progress printer and the CSV
/// output observer.
struct TeeObserver<A: SimObserver, B: SimObserver> {
    first:  A,
    second: B,
}

impl<A: SimObserver, B: SimObserver> SimObserver for TeeObserver<A, B> {
    fn on_tick_start(&mut self, tick: Tick) {
        self.first.on_tick_start(tick);
        self.second.on_tick_start(tick);
    }

    fn on_tick_end(&mut self, tick: Tick, stats: TickStats) {
        self.first.on_tick_end(tick, stats);
        self.second.on_tick_end(tick, stats);
    }

    fn on_snapshot(
        &mut self,
        tick:   Tick,
        fleet:  &lift_fleet::Fleet,
        people: &lift_fleet::PersonStore,
    ) {
        self.first.on_snapshot(tick, fleet, people);
        self.second.on_snapshot(tick, fleet, people);
    }

    fn on_sim_end(
        &mut self,
        final_tick: Tick,
        fleet:      &lift_fleet::Fleet,
        people:     &lift_fleet::PersonStore,
    ) {
        self.first.on_sim_end(final_tick, fleet, people);
        self.second.on_sim_end(final_tick, fleet, people);
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    println!("=== small — rust_lift elevator simulation ===");
    println!("Floors: {NUM_FLOORS}  |  Cars: {CAR_COUNT}  |  Ticks: {TOTAL_TICKS}  |  Seed: {SEED}");
    println!();

    // 1. Sim config.
    let config = SimConfig {
        num_floors:            NUM_FLOORS,
        car_count:             CAR_COUNT,
        total_ticks:           TOTAL_TICKS,
        seed:                  SEED,
        ticks_per_floor:       TICKS_PER_FLOOR,
        arrival_probability:   ARRIVAL_PROBABILITY,
        output_interval_ticks: OUTPUT_INTERVAL_TICKS,
    };

    // 2. Load the embedded arrival schedule.
    let schedule = load_arrivals_reader(Cursor::new(SCHEDULE_CSV), &config.building())?;
    println!("Loaded {} scripted arrivals", schedule.len());

    // 3. Build the sim: all cars start in the lobby.
    let mut sim = SimBuilder::new(config)
        .schedule(schedule)
        .initial_floor(Floor(0))
        .build()?;

    // 4. Set up output.
    std::fs::create_dir_all("output/small")?;
    let writer = CsvWriter::new(Path::new("output/small"))?;
    let output_obs = SimOutputObserver::new(writer);
    let mut obs = TeeObserver {
        first: ProgressPrinter {
            interval:        50,
            total_spawned:   0,
            total_delivered: 0,
        },
        second: output_obs,
    };

    // 5. Run.
    let t0 = Instant::now();
    sim.run(&mut obs)?;
    let elapsed = t0.elapsed();

    if let Some(e) = obs.second.take_error() {
        eprintln!("output error: {e}");
    }

    // 6. Summary.
    println!();
    println!("Simulation complete in {:.3} s", elapsed.as_secs_f64());
    println!(
        "  passengers: {} total, {} delivered",
        sim.people.len(),
        sim.people.delivered_count()
    );
    println!("  pending calls at end: {}", sim.requests.len());
    println!();

    // 7. Final fleet table.
    println!("{:<8} {:<8} {:<8} {:<12} {:<10}", "Car", "Floor", "Transit", "Destination", "Direction");
    println!("{}", "-".repeat(48));
    for car in sim.fleet.cars() {
        println!(
            "{:<8} {:<8} {:<8} {:<12} {:<10}",
            car.id.0,
            car.motion.departure_floor.0,
            if car.motion.in_transit { "yes" } else { "no" },
            car.destination.map_or("-".to_string(), |f| f.0.to_string()),
            car.direction.as_str(),
        );
    }

    Ok(())
}
