//! Astronaut domain model.

use super::ValidationError;
use serde::{Deserialize, Serialize};

/// Stable string key used by the astronaut document and crew references.
pub type AstronautId = String;

/// Biography record for one astronaut.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Astronaut {
    /// Lowercase key, e.g. `armstrong`. Doubles as the portrait image key.
    pub id: AstronautId,
    /// Full display name.
    pub name: String,
    /// Biography text.
    pub description: String,
}

impl Astronaut {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
        }
    }

    /// Returns the bundled portrait key for this astronaut.
    pub fn image_key(&self) -> &str {
        self.id.as_str()
    }

    /// Rejects records with a blank id or name.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.id.trim().is_empty() {
            return Err(ValidationError::EmptyAstronautId);
        }
        if self.name.trim().is_empty() {
            return Err(ValidationError::EmptyAstronautName(self.id.clone()));
        }
        Ok(())
    }
}
