//! Core domain logic for the Moonshot mission catalog.
//! This crate owns dataset loading, crew resolution and text rendering.

pub mod dataset;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod view;

pub use dataset::{
    load_dataset, Dataset, DatasetDocument, DatasetError, DatasetPaths, DatasetResult,
};
pub use logging::{default_log_level, init_logging, logging_status, LogTarget};
pub use model::astronaut::{Astronaut, AstronautId};
pub use model::mission::{parse_launch_date, CrewRole, Mission, MissionId, LAUNCH_DATE_UNAVAILABLE};
pub use model::ValidationError;
pub use repo::catalog::{AstronautDirectory, MissionCatalog};
pub use service::crew::{resolve_crew, CrewMember, DataIntegrityFault};
pub use service::mission_service::{MissionDetail, MissionService, ServiceError};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
