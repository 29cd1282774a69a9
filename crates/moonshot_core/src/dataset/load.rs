//! File-backed dataset loading.
//!
//! # Responsibility
//! - Read both bundled documents from disk and decode them once.
//! - Emit `dataset_load` events with duration and status.
//!
//! # Invariants
//! - Returned datasets passed every load-time check in `Dataset::new`.

use super::{Dataset, DatasetError, DatasetResult};
use log::{error, info};
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Conventional file name of the astronaut document.
pub const ASTRONAUTS_FILE_NAME: &str = "astronauts.json";
/// Conventional file name of the mission document.
pub const MISSIONS_FILE_NAME: &str = "missions.json";

/// Locations of the two dataset documents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetPaths {
    pub astronauts: PathBuf,
    pub missions: PathBuf,
}

impl DatasetPaths {
    pub fn new(astronauts: impl Into<PathBuf>, missions: impl Into<PathBuf>) -> Self {
        Self {
            astronauts: astronauts.into(),
            missions: missions.into(),
        }
    }

    /// Resolves the conventional file names inside `dir`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self::new(
            dir.join(ASTRONAUTS_FILE_NAME),
            dir.join(MISSIONS_FILE_NAME),
        )
    }
}

/// Reads and decodes both documents.
///
/// # Side effects
/// - Reads two files.
/// - Emits `dataset_load` logging events with duration and status.
pub fn load_dataset(paths: &DatasetPaths) -> DatasetResult<Dataset> {
    let started_at = Instant::now();
    info!("event=dataset_load module=dataset status=start");

    match read_and_decode(paths) {
        Ok(dataset) => {
            info!(
                "event=dataset_load module=dataset status=ok duration_ms={} astronauts={} missions={}",
                started_at.elapsed().as_millis(),
                dataset.astronaut_count(),
                dataset.mission_count()
            );
            Ok(dataset)
        }
        Err(err) => {
            error!(
                "event=dataset_load module=dataset status=error duration_ms={} error_code={} error={}",
                started_at.elapsed().as_millis(),
                error_code(&err),
                err
            );
            Err(err)
        }
    }
}

fn read_and_decode(paths: &DatasetPaths) -> DatasetResult<Dataset> {
    let astronauts_json = read_document(&paths.astronauts)?;
    let missions_json = read_document(&paths.missions)?;
    Dataset::from_json_strs(&astronauts_json, &missions_json)
}

fn read_document(path: &Path) -> DatasetResult<String> {
    std::fs::read_to_string(path).map_err(|source| DatasetError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn error_code(err: &DatasetError) -> &'static str {
    match err {
        DatasetError::Io { .. } => "dataset_read_failed",
        DatasetError::Json { .. } => "dataset_decode_failed",
        DatasetError::Validation(_) => "dataset_record_invalid",
        DatasetError::InvalidData(_) => "dataset_inconsistent",
    }
}

#[cfg(test)]
mod tests {
    use super::DatasetPaths;
    use std::path::Path;

    #[test]
    fn in_dir_uses_conventional_file_names() {
        let paths = DatasetPaths::in_dir("/srv/moonshot");
        assert_eq!(paths.astronauts, Path::new("/srv/moonshot/astronauts.json"));
        assert_eq!(paths.missions, Path::new("/srv/moonshot/missions.json"));
    }
}
