//! Mission/astronaut join.
//!
//! # Responsibility
//! - Resolve a mission's crew references into astronaut records.
//!
//! # Invariants
//! - Output length and order equal the mission's crew roster.
//! - A missing astronaut is a `DataIntegrityFault`; entries are never
//!   skipped or replaced with placeholders.
//! - Resolution is pure: same inputs, same output, no mutation.

use crate::model::astronaut::Astronaut;
use crate::model::mission::{Mission, MissionId};
use crate::repo::catalog::AstronautDirectory;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// A crew reference points at an astronaut the dataset does not contain.
///
/// Signals a corrupt or mismatched dataset, not a request-level failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataIntegrityFault {
    pub mission_id: MissionId,
    pub astronaut_id: String,
}

impl Display for DataIntegrityFault {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "mission {} references missing astronaut `{}`",
            self.mission_id, self.astronaut_id
        )
    }
}

impl Error for DataIntegrityFault {}

/// One crew role paired with its astronaut record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CrewMember<'a> {
    pub role: &'a str,
    pub astronaut: &'a Astronaut,
}

/// Resolves `mission.crew` against `astronauts`, preserving roster order.
///
/// # Errors
/// - Returns `DataIntegrityFault` for the first crew entry whose astronaut key
///   is absent.
pub fn resolve_crew<'a, D>(
    mission: &'a Mission,
    astronauts: &'a D,
) -> Result<Vec<CrewMember<'a>>, DataIntegrityFault>
where
    D: AstronautDirectory + ?Sized,
{
    mission
        .crew
        .iter()
        .map(|member| match astronauts.astronaut(&member.name) {
            Some(astronaut) => Ok(CrewMember {
                role: member.role.as_str(),
                astronaut,
            }),
            None => Err(DataIntegrityFault {
                mission_id: mission.id,
                astronaut_id: member.name.clone(),
            }),
        })
        .collect()
}

impl Mission {
    /// Resolves this mission's crew. See [`resolve_crew`].
    pub fn resolve_crew<'a, D>(
        &'a self,
        astronauts: &'a D,
    ) -> Result<Vec<CrewMember<'a>>, DataIntegrityFault>
    where
        D: AstronautDirectory + ?Sized,
    {
        resolve_crew(self, astronauts)
    }
}
