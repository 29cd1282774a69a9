//! Read-only lookup contracts over loaded records.
//!
//! # Responsibility
//! - Give the join and service layers a storage-agnostic view of the data.
//!
//! # Invariants
//! - Lookups never mutate; returned references borrow from the implementor.

use crate::dataset::Dataset;
use crate::model::astronaut::Astronaut;
use crate::model::mission::{Mission, MissionId};
use std::collections::{BTreeMap, HashMap};

/// Astronaut lookup by identifier.
pub trait AstronautDirectory {
    fn astronaut(&self, id: &str) -> Option<&Astronaut>;
}

/// Ordered mission listing plus astronaut lookup.
pub trait MissionCatalog: AstronautDirectory {
    /// Missions in catalog order.
    fn missions(&self) -> &[Mission];
    fn mission(&self, id: MissionId) -> Option<&Mission>;
}

impl AstronautDirectory for HashMap<String, Astronaut> {
    fn astronaut(&self, id: &str) -> Option<&Astronaut> {
        self.get(id)
    }
}

impl AstronautDirectory for BTreeMap<String, Astronaut> {
    fn astronaut(&self, id: &str) -> Option<&Astronaut> {
        self.get(id)
    }
}

impl AstronautDirectory for Dataset {
    fn astronaut(&self, id: &str) -> Option<&Astronaut> {
        Dataset::astronaut(self, id)
    }
}

impl MissionCatalog for Dataset {
    fn missions(&self) -> &[Mission] {
        Dataset::missions(self)
    }

    fn mission(&self, id: MissionId) -> Option<&Mission> {
        Dataset::mission(self, id)
    }
}

#[cfg(test)]
mod tests {
    use super::AstronautDirectory;
    use crate::model::astronaut::Astronaut;
    use crate::model::mission::{CrewRole, Mission};
    use crate::service::crew::resolve_crew;
    use std::collections::BTreeMap;

    #[test]
    fn ordered_map_works_as_directory() {
        let mut astronauts = BTreeMap::new();
        astronauts.insert(
            "anders".to_string(),
            Astronaut::new("anders", "William A. Anders", "Earthrise."),
        );
        let mut mission = Mission::new(8, "Lunar orbit.");
        mission.crew = vec![CrewRole::new("anders", "Lunar Module Pilot")];

        assert!(astronauts.astronaut("borman").is_none());
        let crew = resolve_crew(&mission, &astronauts).unwrap();
        assert_eq!(crew[0].astronaut.name, "William A. Anders");
    }
}
