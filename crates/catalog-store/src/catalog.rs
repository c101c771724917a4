use crate::error::StoreError;
use core_types::{Course, Enrollment, User};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// A whole catalog as a serializable document.
///
/// This is the interchange format between the seeding utility, catalog files
/// on disk, and `CatalogStore::from_data`. Entity order in the vectors is
/// creation order and is preserved by the store.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogData {
    pub users: Vec<User>,
    pub courses: Vec<Course>,
    pub enrollments: Vec<Enrollment>,
}

/// Reads a `CatalogData` document from a JSON file.
pub fn load_catalog(path: &Path) -> Result<CatalogData, StoreError> {
    let raw = fs::read_to_string(path)?;
    let data: CatalogData = serde_json::from_str(&raw)?;
    tracing::info!(
        path = %path.display(),
        users = data.users.len(),
        courses = data.courses.len(),
        enrollments = data.enrollments.len(),
        "Loaded catalog file"
    );
    Ok(data)
}

/// Writes a `CatalogData` document to a JSON file (pretty-printed).
pub fn save_catalog(path: &Path, data: &CatalogData) -> Result<(), StoreError> {
    let raw = serde_json::to_string_pretty(data)?;
    fs::write(path, raw)?;
    tracing::info!(path = %path.display(), "Wrote catalog file");
    Ok(())
}
