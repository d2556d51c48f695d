//! Expedition data module: Launch Library wire records, the assignment
//! flattener/aggregator, and a thin HTTP client.
//!
//! The flattener and aggregator are pure, read-only transformations over
//! caller-supplied data; only [`client::ExpeditionClient`] performs network
//! I/O.

pub mod assignments;
pub mod client;
pub mod error;
pub mod records;

pub use assignments::{astronaut_assignments, crew_count_by_station};
pub use client::ExpeditionClient;
pub use error::ExpeditionError;
pub use records::{
    Agency, Astronaut, AstronautAssignment, CrewMember, Expedition, ExpeditionPage, Nationality,
    Role, SpaceStation,
};
