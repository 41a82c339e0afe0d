//! `lift-traffic` — hall calls and passenger arrivals.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                 |
//! |---------------|----------------------------------------------------------|
//! | [`queue`]     | `RequestQueue` — outstanding hall calls, arrival order   |
//! | [`schedule`]  | `Arrival`, `ArrivalSchedule` — scripted passengers       |
//! | [`loader`]    | CSV schedule loader                                      |
//! | [`generator`] | `RandomTraffic` — seeded random arrivals                 |
//! | [`error`]     | `TrafficError`, `TrafficResult<T>`                       |

pub mod error;
pub mod generator;
pub mod loader;
pub mod queue;
pub mod schedule;


pub use error::{TrafficError, TrafficResult};
pub use generator::RandomTraffic;
pub use loader::{load_arrivals_csv, load_arrivals_reader};
pub use queue::RequestQueue;
pub use schedule::{Arrival, ArrivalSchedule};
