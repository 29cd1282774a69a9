//! Bundled dataset decoding and the immutable in-memory catalog.
//!
//! # Responsibility
//! - Decode the astronaut and mission JSON documents into typed records.
//! - Reject internally inconsistent documents before any caller reads them.
//!
//! # Invariants
//! - A `Dataset` is never mutated after construction.
//! - Astronaut map keys equal the record `id` they point to.
//! - Mission ids are unique; mission order follows the source document.
//!
//! Cross-document crew references are checked by
//! `MissionService::validate_integrity`, not here.

use crate::model::astronaut::Astronaut;
use crate::model::mission::{Mission, MissionId};
use crate::model::ValidationError;
use std::collections::HashMap;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

mod load;

pub use load::{load_dataset, DatasetPaths, ASTRONAUTS_FILE_NAME, MISSIONS_FILE_NAME};

pub type DatasetResult<T> = Result<T, DatasetError>;

/// Which of the two bundled documents an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatasetDocument {
    Astronauts,
    Missions,
}

impl Display for DatasetDocument {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Astronauts => write!(f, "astronauts"),
            Self::Missions => write!(f, "missions"),
        }
    }
}

#[derive(Debug)]
pub enum DatasetError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Json {
        document: DatasetDocument,
        source: serde_json::Error,
    },
    Validation(ValidationError),
    InvalidData(String),
}

impl Display for DatasetError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read `{}`: {source}", path.display())
            }
            Self::Json { document, source } => {
                write!(f, "failed to decode {document} document: {source}")
            }
            Self::Validation(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid dataset: {message}"),
        }
    }
}

impl Error for DatasetError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Json { source, .. } => Some(source),
            Self::Validation(err) => Some(err),
            Self::InvalidData(_) => None,
        }
    }
}

impl From<ValidationError> for DatasetError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Loaded astronaut map plus ordered mission list.
#[derive(Debug, Clone)]
pub struct Dataset {
    astronauts: HashMap<String, Astronaut>,
    missions: Vec<Mission>,
    mission_index: HashMap<MissionId, usize>,
}

impl Dataset {
    /// Builds a dataset from already-decoded records.
    ///
    /// # Errors
    /// - Returns `InvalidData` when a map key differs from its record id.
    /// - Returns `InvalidData` when two missions share an id.
    /// - Returns `Validation` when a record fails its own `validate()`.
    pub fn new(
        astronauts: HashMap<String, Astronaut>,
        missions: Vec<Mission>,
    ) -> DatasetResult<Self> {
        // Sorted so the first reported problem does not depend on hash order.
        let mut keys: Vec<&String> = astronauts.keys().collect();
        keys.sort();
        for key in keys {
            let astronaut = &astronauts[key];
            astronaut.validate()?;
            if key != &astronaut.id {
                return Err(DatasetError::InvalidData(format!(
                    "astronaut key `{key}` does not match record id `{}`",
                    astronaut.id
                )));
            }
        }

        let mut mission_index = HashMap::with_capacity(missions.len());
        for (position, mission) in missions.iter().enumerate() {
            mission.validate()?;
            if mission_index.insert(mission.id, position).is_some() {
                return Err(DatasetError::InvalidData(format!(
                    "duplicate mission id {}",
                    mission.id
                )));
            }
        }

        Ok(Self {
            astronauts,
            missions,
            mission_index,
        })
    }

    /// Decodes both documents from JSON text.
    pub fn from_json_strs(astronauts_json: &str, missions_json: &str) -> DatasetResult<Self> {
        let astronauts: HashMap<String, Astronaut> = serde_json::from_str(astronauts_json)
            .map_err(|source| DatasetError::Json {
                document: DatasetDocument::Astronauts,
                source,
            })?;
        let missions: Vec<Mission> =
            serde_json::from_str(missions_json).map_err(|source| DatasetError::Json {
                document: DatasetDocument::Missions,
                source,
            })?;
        Self::new(astronauts, missions)
    }

    /// Missions in source document order.
    pub fn missions(&self) -> &[Mission] {
        &self.missions
    }

    pub fn astronaut(&self, id: &str) -> Option<&Astronaut> {
        self.astronauts.get(id)
    }

    pub fn mission(&self, id: MissionId) -> Option<&Mission> {
        self.mission_index
            .get(&id)
            .and_then(|position| self.missions.get(*position))
    }

    pub fn astronaut_count(&self) -> usize {
        self.astronauts.len()
    }

    pub fn mission_count(&self) -> usize {
        self.missions.len()
    }
}
