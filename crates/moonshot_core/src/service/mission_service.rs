//! Mission use-case service.
//!
//! # Responsibility
//! - Provide list/detail entry points for presentation callers.
//! - Validate every crew reference eagerly at startup.
//!
//! # Invariants
//! - Service APIs never mutate the catalog.
//! - `mission_detail` never returns a partially resolved crew.

use crate::model::astronaut::Astronaut;
use crate::model::mission::{Mission, MissionId};
use crate::repo::catalog::MissionCatalog;
use crate::service::crew::{resolve_crew, CrewMember, DataIntegrityFault};
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Service error for mission/astronaut lookups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// No mission with the requested id.
    MissionNotFound(MissionId),
    /// No astronaut with the requested id.
    AstronautNotFound(String),
    /// Dataset is internally inconsistent.
    Integrity(DataIntegrityFault),
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissionNotFound(id) => write!(f, "mission not found: {id}"),
            Self::AstronautNotFound(id) => write!(f, "astronaut not found: `{id}`"),
            Self::Integrity(fault) => write!(f, "data integrity fault: {fault}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Integrity(fault) => Some(fault),
            _ => None,
        }
    }
}

impl From<DataIntegrityFault> for ServiceError {
    fn from(value: DataIntegrityFault) -> Self {
        Self::Integrity(value)
    }
}

/// Mission plus its resolved crew, ready for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissionDetail<'a> {
    pub mission: &'a Mission,
    /// Crew in roster order.
    pub crew: Vec<CrewMember<'a>>,
}

/// Use-case facade over a loaded catalog.
pub struct MissionService<'a, C: MissionCatalog + ?Sized> {
    catalog: &'a C,
}

impl<'a, C: MissionCatalog + ?Sized> MissionService<'a, C> {
    pub fn new(catalog: &'a C) -> Self {
        Self { catalog }
    }

    /// Lists missions in catalog order.
    pub fn list_missions(&self) -> &'a [Mission] {
        self.catalog.missions()
    }

    pub fn get_mission(&self, id: MissionId) -> Option<&'a Mission> {
        self.catalog.mission(id)
    }

    /// Builds the detail view model for one mission.
    ///
    /// # Errors
    /// - `MissionNotFound` when `id` is unknown.
    /// - `Integrity` when a crew member cannot be resolved.
    pub fn mission_detail(&self, id: MissionId) -> Result<MissionDetail<'a>, ServiceError> {
        let mission = self
            .catalog
            .mission(id)
            .ok_or(ServiceError::MissionNotFound(id))?;
        let crew = resolve_crew(mission, self.catalog)?;
        Ok(MissionDetail { mission, crew })
    }

    pub fn get_astronaut(&self, id: &str) -> Result<&'a Astronaut, ServiceError> {
        self.catalog
            .astronaut(id)
            .ok_or_else(|| ServiceError::AstronautNotFound(id.to_string()))
    }

    /// Resolves every mission's crew, stopping at the first fault.
    ///
    /// Returns the number of crew entries resolved across all missions.
    /// Faults are returned, not logged; the caller owns reporting.
    pub fn validate_integrity(&self) -> Result<usize, DataIntegrityFault> {
        let missions = self.catalog.missions();
        let mut resolved = 0usize;
        for mission in missions {
            resolved += resolve_crew(mission, self.catalog)?.len();
        }
        info!(
            "event=integrity_check module=service status=ok missions={} crew_entries={}",
            missions.len(),
            resolved
        );
        Ok(resolved)
    }
}

#[cfg(test)]
mod tests {
    use super::{MissionService, ServiceError};
    use crate::dataset::Dataset;

    fn dataset() -> Dataset {
        Dataset::from_json_strs(
            r#"{"grissom": {"id": "grissom", "name": "Virgil I. \"Gus\" Grissom", "description": "Mercury and Gemini veteran."}}"#,
            r#"[{"id": 1, "launchDate": null, "crew": [{"name": "grissom", "role": "Command Pilot"}], "description": "Cabin fire."}]"#,
        )
        .unwrap()
    }

    #[test]
    fn unknown_ids_are_reported() {
        let dataset = dataset();
        let service = MissionService::new(&dataset);

        assert_eq!(
            service.mission_detail(99).unwrap_err(),
            ServiceError::MissionNotFound(99)
        );
        assert_eq!(
            service.get_astronaut("white").unwrap_err(),
            ServiceError::AstronautNotFound("white".to_string())
        );
    }

    #[test]
    fn detail_carries_resolved_crew() {
        let dataset = dataset();
        let service = MissionService::new(&dataset);

        let detail = service.mission_detail(1).unwrap();
        assert_eq!(detail.mission.display_name(), "Apollo 1");
        assert_eq!(detail.crew.len(), 1);
        assert_eq!(detail.crew[0].role, "Command Pilot");
        assert_eq!(detail.crew[0].astronaut.id, "grissom");
    }
}
