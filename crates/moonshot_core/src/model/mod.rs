//! Domain model for the mission catalog.
//!
//! # Responsibility
//! - Define the typed records decoded from the bundled datasets.
//! - Provide display-oriented derived attributes (names, image keys, dates).
//!
//! # Invariants
//! - Records are immutable once loaded; nothing in core mutates them.
//! - Astronauts are referenced from missions by string identifier only.

pub mod astronaut;
pub mod mission;

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Record-level validation failures for decoded dataset records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Astronaut record has an empty `id`.
    EmptyAstronautId,
    /// Astronaut record has an empty display name.
    EmptyAstronautName(String),
    /// Crew entry at `position` has an empty astronaut key.
    EmptyCrewReference {
        mission_id: mission::MissionId,
        position: usize,
    },
    /// Crew entry has an empty role label.
    EmptyCrewRole {
        mission_id: mission::MissionId,
        astronaut_id: String,
    },
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyAstronautId => write!(f, "astronaut id cannot be empty"),
            Self::EmptyAstronautName(id) => write!(f, "astronaut `{id}` has an empty name"),
            Self::EmptyCrewReference {
                mission_id,
                position,
            } => write!(
                f,
                "mission {mission_id} crew entry #{position} has an empty astronaut key"
            ),
            Self::EmptyCrewRole {
                mission_id,
                astronaut_id,
            } => write!(
                f,
                "mission {mission_id} crew entry `{astronaut_id}` has an empty role"
            ),
        }
    }
}

impl Error for ValidationError {}
