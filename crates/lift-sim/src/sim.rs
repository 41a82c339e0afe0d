//! The `LiftSim` struct and its tick loop.

use lift_core::{Building, CarId, Floor, PersonId, SimClock, SimConfig, SimRng, Tick};
use lift_dispatch::decide;
use lift_fleet::{Fleet, PersonStore};
use lift_traffic::{Arrival, ArrivalSchedule, RandomTraffic, RequestQueue};

use crate::{SimObserver, SimResult};

// ── TickStats ─────────────────────────────────────────────────────────────────

/// What happened during one tick, reported to observers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickStats {
    /// Passengers that appeared this tick (scripted + random).
    pub spawned: usize,
    /// Cars that completed a journey this tick.
    pub arrivals: usize,
    /// Passengers that stepped into a car this tick.
    pub boarded: usize,
    /// Passengers that reached their destination this tick.
    pub delivered: usize,
    /// Dispatch decisions committed this tick.
    pub decisions: usize,
    /// Hall calls still pending at the end of the tick.
    pub pending_requests: usize,
}

// ── LiftSim ───────────────────────────────────────────────────────────────────

/// The main simulation runner.
///
/// `LiftSim` owns all world state and drives the four-phase tick loop:
///
/// 1. **Traffic**: scripted and random passengers appear; each pushes a hall
///    call for their origin floor.
/// 2. **Arrivals**: cars whose `arrival_tick` has come are parked at their
///    destination floor.
/// 3. **Serve**: each arrived car drops off the passengers destined for its
///    floor, boards everyone still waiting there, and the hall calls for
///    that floor are removed — the one place calls ever leave the queue.
/// 4. **Dispatch**: every car resting with no pending destination gets a
///    decision, in fleet order.  Each decision commits before the next car
///    is evaluated, so later cars see earlier claims, and the car departs
///    immediately toward its committed stop.
///
/// The loop is strictly single-threaded; for a fixed config, seed, and
/// schedule every run is identical.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct LiftSim {
    /// Global configuration (floors, cars, total ticks, seed, …).
    pub config: SimConfig,

    /// Simulation clock — the current tick.
    pub clock: SimClock,

    /// Building geometry, shared with the dispatch engine.
    pub building: Building,

    /// The fleet, in fixed iteration order.
    pub fleet: Fleet,

    /// Everyone who has entered the building so far.
    pub people: PersonStore,

    /// Outstanding hall calls.
    pub requests: RequestQueue,

    /// Scripted passenger arrivals.
    pub schedule: ArrivalSchedule,

    /// Random background traffic.
    pub traffic: RandomTraffic,

    /// The run's seeded RNG (random traffic draws).
    pub rng: SimRng,
}

impl LiftSim {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run the simulation from the current tick to `config.end_tick()`.
    ///
    /// Calls observer hooks at every tick boundary.  Use
    /// [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        loop {
            let now = self.clock.current_tick;
            if now >= self.config.end_tick() {
                break;
            }

            observer.on_tick_start(now);
            let stats = self.process_tick(now)?;
            observer.on_tick_end(now, stats);
            if self.config.output_interval_ticks > 0
                && now.0.is_multiple_of(self.config.output_interval_ticks)
            {
                observer.on_snapshot(now, &self.fleet, &self.people);
            }

            self.clock.advance();
        }
        observer.on_sim_end(self.clock.current_tick, &self.fleet, &self.people);
        Ok(())
    }

    /// Run exactly `n` ticks from the current position (ignores `end_tick`).
    ///
    /// Useful for tests and incremental stepping.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        for _ in 0..n {
            let now = self.clock.current_tick;
            observer.on_tick_start(now);
            let stats = self.process_tick(now)?;
            observer.on_tick_end(now, stats);
            if self.config.output_interval_ticks > 0
                && now.0.is_multiple_of(self.config.output_interval_ticks)
            {
                observer.on_snapshot(now, &self.fleet, &self.people);
            }
            self.clock.advance();
        }
        Ok(())
    }

    // ── Core tick processing ──────────────────────────────────────────────

    fn process_tick(&mut self, now: Tick) -> SimResult<TickStats> {
        let mut stats = TickStats::default();

        // ── Phase 1: traffic ──────────────────────────────────────────────
        //
        // Scripted arrivals first (file order within the tick), then at most
        // one random arrival.  Each pushes one hall call.
        let scripted: Vec<Arrival> = self.schedule.arrivals_at(now).to_vec();
        for arrival in scripted {
            self.admit(arrival, now);
            stats.spawned += 1;
        }
        if let Some(arrival) = self.traffic.sample(&self.building, &mut self.rng) {
            self.admit(arrival, now);
            stats.spawned += 1;
        }

        // ── Phase 2 + 3: arrivals, then service ───────────────────────────
        //
        // Collect arriving cars first (immutable scan), then park and serve
        // each in fleet order.
        let arriving: Vec<CarId> = self
            .fleet
            .cars()
            .iter()
            .filter(|c| c.motion.in_transit && c.motion.arrival_tick <= now)
            .map(|c| c.id)
            .collect();

        for car in arriving {
            let floor = self.fleet.car_mut(car).arrive(now);
            stats.arrivals += 1;
            stats.delivered += self.drop_off(car, floor, now);
            stats.boarded += self.board(car, floor, now);
            self.requests.remove_floor(floor);
        }

        // ── Phase 4: dispatch, in fleet order ─────────────────────────────
        //
        // decide() commits the chosen floor before the next car is
        // evaluated — that ordering is the whole arbitration mechanism.
        // The car departs immediately; a zero-distance hop arrives on the
        // next tick's Phase 2.
        for i in 0..self.fleet.len() as u32 {
            let car = CarId(i);
            if !self.fleet.car(car).needs_decision() {
                continue;
            }
            decide(&mut self.fleet, car, &self.people, &self.requests, self.building);
            self.fleet.car_mut(car).depart(now, self.config.ticks_per_floor)?;
            stats.decisions += 1;
        }

        stats.pending_requests = self.requests.len();
        Ok(stats)
    }

    // ── Service helpers ───────────────────────────────────────────────────

    /// A passenger enters the building and presses the call button.
    fn admit(&mut self, arrival: Arrival, now: Tick) {
        self.people.spawn(arrival.origin, arrival.destination, now);
        self.requests.push(arrival.origin);
    }

    /// Let out everyone destined for `floor`; returns how many left.
    fn drop_off(&mut self, car: CarId, floor: Floor, now: Tick) -> usize {
        let leaving: Vec<PersonId> = self
            .fleet
            .car(car)
            .passengers
            .iter()
            .copied()
            .filter(|&p| self.people.person(p).destination == floor)
            .collect();
        for &p in &leaving {
            self.people.person_mut(p).delivered = Some(now);
        }
        self.fleet
            .car_mut(car)
            .passengers
            .retain(|p| !leaving.contains(p));
        leaving.len()
    }

    /// Board everyone still waiting at `floor`; returns how many got in.
    fn board(&mut self, car: CarId, floor: Floor, now: Tick) -> usize {
        let joining = self.people.waiting_at(floor);
        for &p in &joining {
            self.people.person_mut(p).boarded = Some(now);
            self.fleet.car_mut(car).passengers.push(p);
        }
        joining.len()
    }
}
