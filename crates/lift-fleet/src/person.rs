//! Passenger records and the append-only `PersonStore`.
//!
//! People are created by the traffic layer and never removed: a delivered
//! person keeps its record so end-of-run service statistics (wait outside,
//! wait inside) can be computed without a separate ledger.  `PersonId` is the
//! index into the store and stays valid for the whole run.

use lift_core::{Floor, PersonId, Tick};

// ── Person ────────────────────────────────────────────────────────────────────

/// One passenger's journey through the system.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Person {
    /// Floor the person called the elevator from.
    pub origin: Floor,

    /// Floor the person wants to reach.
    pub destination: Floor,

    /// Tick the person appeared and pressed the call button.
    pub spawned: Tick,

    /// Tick the person stepped into a car, once boarded.
    pub boarded: Option<Tick>,

    /// Tick the person stepped out at their destination, once delivered.
    pub delivered: Option<Tick>,
}

impl Person {
    /// Still standing at the origin floor.
    #[inline]
    pub fn is_waiting(&self) -> bool {
        self.boarded.is_none()
    }

    /// Inside a car, not yet at the destination.
    #[inline]
    pub fn is_riding(&self) -> bool {
        self.boarded.is_some() && self.delivered.is_none()
    }

    #[inline]
    pub fn is_delivered(&self) -> bool {
        self.delivered.is_some()
    }

    /// Ticks spent waiting outside a car, up to `now` if still waiting.
    pub fn wait_outside(&self, now: Tick) -> u64 {
        self.boarded.unwrap_or(now).since(self.spawned)
    }

    /// Ticks spent riding inside a car, up to `now` if still riding.
    /// Zero while the person is still waiting outside.
    pub fn wait_inside(&self, now: Tick) -> u64 {
        match self.boarded {
            None          => 0,
            Some(boarded) => self.delivered.unwrap_or(now).since(boarded),
        }
    }
}

// ── PersonStore ───────────────────────────────────────────────────────────────

/// Append-only store of every person that has entered the simulation.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PersonStore {
    people: Vec<Person>,
}

impl PersonStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a freshly arrived person; returns their permanent ID.
    pub fn spawn(&mut self, origin: Floor, destination: Floor, now: Tick) -> PersonId {
        let id = PersonId(self.people.len() as u32);
        self.people.push(Person {
            origin,
            destination,
            spawned:   now,
            boarded:   None,
            delivered: None,
        });
        id
    }

    pub fn len(&self) -> usize {
        self.people.len()
    }

    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }

    /// One person by ID.
    ///
    /// # Panics
    /// Panics if `id` was not returned by [`spawn`][Self::spawn].
    #[inline]
    pub fn person(&self, id: PersonId) -> &Person {
        &self.people[id.index()]
    }

    /// Mutable reference to one person.
    ///
    /// # Panics
    /// Panics if `id` was not returned by [`spawn`][Self::spawn].
    #[inline]
    pub fn person_mut(&mut self, id: PersonId) -> &mut Person {
        &mut self.people[id.index()]
    }

    /// All people with their IDs, in spawn order.
    pub fn iter(&self) -> impl Iterator<Item = (PersonId, &Person)> {
        self.people
            .iter()
            .enumerate()
            .map(|(i, p)| (PersonId(i as u32), p))
    }

    /// IDs of everyone still waiting at `floor`, in spawn order.
    pub fn waiting_at(&self, floor: Floor) -> Vec<PersonId> {
        self.iter()
            .filter(|(_, p)| p.is_waiting() && p.origin == floor)
            .map(|(id, _)| id)
            .collect()
    }

    /// How many people have reached their destination so far.
    pub fn delivered_count(&self) -> usize {
        self.people.iter().filter(|p| p.is_delivered()).count()
    }
}
