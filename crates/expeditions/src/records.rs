//! Wire records for the Launch Library 2 expeditions endpoint.
//!
//! Every nested field the flattener dereferences is an `Option`, so an
//! absent field in upstream JSON becomes a structured `MissingField` error
//! at flatten time instead of a deserialization failure. Fields we never
//! read still deserialize but are kept only where they aid debugging.

use serde::{Deserialize, Serialize};

/// One page of the paginated expeditions listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpeditionPage {
    #[serde(default)]
    pub count: u64,
    #[serde(default)]
    pub results: Vec<Expedition>,
}

/// An expedition aboard a space station, with its crew assignments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expedition {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub start: Option<String>,
    #[serde(default)]
    pub end: Option<String>,
    #[serde(default)]
    pub spacestation: Option<SpaceStation>,
    #[serde(default)]
    pub crew: Vec<CrewMember>,
}

/// Space station basics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpaceStation {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub orbit: Option<String>,
}

/// Crew assignment: a role plus the astronaut filling it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrewMember {
    #[serde(default)]
    pub role: Option<Role>,
    #[serde(default)]
    pub astronaut: Option<Astronaut>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    #[serde(default)]
    pub role: Option<String>,
}

/// Astronaut essentials.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Astronaut {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub agency: Option<Agency>,
    #[serde(default)]
    pub nationality: Vec<Nationality>,
    #[serde(default)]
    pub time_in_space: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Agency {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub abbrev: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Nationality {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub nationality_name: Option<String>,
}

/// Flattened view: one record per (expedition, crew member) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AstronautAssignment {
    pub astronaut_name: String,
    pub role: String,
    pub agency: String,
    pub station_name: String,
}
