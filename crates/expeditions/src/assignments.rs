//! Flattening and aggregation over nested expedition data.
//!
//! Both functions are read-only over their input, hold no shared state, and
//! are deterministic: output order follows input order for the flattened
//! list, and the count map merges duplicate station names by summing.

use std::collections::HashMap;

use crate::error::ExpeditionError;
use crate::records::{AstronautAssignment, Expedition};

/// One flat record per (expedition, crew member) pair, in input order.
///
/// Fails with `MissingField` if any dereferenced nested field (station name,
/// role, astronaut, agency abbreviation) is absent.
pub fn astronaut_assignments(
    expeditions: &[Expedition],
) -> Result<Vec<AstronautAssignment>, ExpeditionError> {
    let mut assignments = Vec::new();
    for (i, expedition) in expeditions.iter().enumerate() {
        let station_name = station_name(expedition, i)?;
        for (j, member) in expedition.crew.iter().enumerate() {
            let at = |tail: &str| format!("results[{i}].crew[{j}].{tail}");

            let role = member
                .role
                .as_ref()
                .and_then(|r| r.role.as_deref())
                .ok_or_else(|| ExpeditionError::missing_field(at("role.role")))?;
            let astronaut = member
                .astronaut
                .as_ref()
                .ok_or_else(|| ExpeditionError::missing_field(at("astronaut")))?;
            let astronaut_name = astronaut
                .name
                .as_deref()
                .ok_or_else(|| ExpeditionError::missing_field(at("astronaut.name")))?;
            let agency = astronaut
                .agency
                .as_ref()
                .and_then(|a| a.abbrev.as_deref())
                .ok_or_else(|| ExpeditionError::missing_field(at("astronaut.agency.abbrev")))?;

            assignments.push(AstronautAssignment {
                astronaut_name: astronaut_name.to_string(),
                role: role.to_string(),
                agency: agency.to_string(),
                station_name: station_name.clone(),
            });
        }
    }
    Ok(assignments)
}

/// Crew headcount per station name.
///
/// Stations appearing in several expeditions under the same name are merged
/// by summing their counts. Zero-crew stations are kept with a count of 0.
/// Iteration order of the result is unspecified.
pub fn crew_count_by_station(
    expeditions: &[Expedition],
) -> Result<HashMap<String, u64>, ExpeditionError> {
    let mut counts: HashMap<String, u64> = HashMap::new();
    for (i, expedition) in expeditions.iter().enumerate() {
        let station_name = station_name(expedition, i)?;
        *counts.entry(station_name).or_insert(0) += expedition.crew.len() as u64;
    }
    Ok(counts)
}

fn station_name(expedition: &Expedition, index: usize) -> Result<String, ExpeditionError> {
    expedition
        .spacestation
        .as_ref()
        .and_then(|station| station.name.clone())
        .ok_or_else(|| {
            ExpeditionError::missing_field(format!("results[{index}].spacestation.name"))
        })
}
