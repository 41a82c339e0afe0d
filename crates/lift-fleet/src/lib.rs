//! `lift-fleet` — car records, movement state, and the passenger store.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                    |
//! |------------|-------------------------------------------------------------|
//! | [`car`]    | `Car` — one elevator as a plain record                      |
//! | [`motion`] | `CarMotion` — teleport-at-arrival movement state            |
//! | [`fleet`]  | `Fleet` — ordered, owned collection of cars                 |
//! | [`person`] | `Person`, `PersonStore` — passengers and wait accounting    |
//! | [`error`]  | `FleetError`, `FleetResult<T>`                              |
//!
//! # Who writes what
//!
//! The dispatch engine writes exactly two car fields per decision
//! (`destination`, `direction`) via [`Car::commit`].  Everything else —
//! departure, arrival, boarding, drop-off, wait counters — is mutated only
//! by the host tick loop in `lift-sim`.  There is one writer per field and
//! no concurrent mutation anywhere.

pub mod car;
pub mod error;
pub mod fleet;
pub mod motion;
pub mod person;


pub use car::Car;
pub use error::{FleetError, FleetResult};
pub use fleet::Fleet;
pub use motion::CarMotion;
pub use person::{Person, PersonStore};
