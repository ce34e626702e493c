//! JSON-file favorites store.
//!
//! Favorites live in a single JSON document under the platform data
//! directory, e.g. `~/.local/share/mealfinder/favorites.json` on Linux.
//! Every save rewrites the whole document.

use crate::model::{MealSummary, PersistenceError};
use crate::store::FavoritesStore;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::warn;

/// Format version written into the document. Bumped on incompatible
/// layout changes; unknown versions load as empty rather than guessing.
const FORMAT_VERSION: u32 = 1;

/// On-disk document shape.
#[derive(Debug, Serialize, Deserialize)]
struct FavoritesDocument {
    version: u32,
    saved_at: DateTime<Utc>,
    meals: Vec<MealSummary>,
}

/// Favorites store backed by a JSON file.
#[derive(Debug, Clone)]
pub struct JsonFavoritesFile {
    path: PathBuf,
}

impl JsonFavoritesFile {
    /// Store backed by the given file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl FavoritesStore for JsonFavoritesFile {
    fn load(&self) -> Vec<MealSummary> {
        // Missing file is the normal first-run case.
        if !self.path.exists() {
            return Vec::new();
        }

        let contents = match std::fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) => {
                warn!(path = ?self.path, error = %e, "could not read favorites, starting empty");
                return Vec::new();
            }
        };

        let document: FavoritesDocument = match serde_json::from_str(&contents) {
            Ok(document) => document,
            Err(e) => {
                warn!(path = ?self.path, error = %e, "corrupt favorites file, starting empty");
                return Vec::new();
            }
        };

        if document.version != FORMAT_VERSION {
            warn!(
                path = ?self.path,
                found = document.version,
                expected = FORMAT_VERSION,
                "unknown favorites format version, starting empty"
            );
            return Vec::new();
        }

        document.meals
    }

    fn save(&self, meals: &[MealSummary]) -> Result<(), PersistenceError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| {
                PersistenceError::DirectoryCreation {
                    path: parent.to_path_buf(),
                    source,
                }
            })?;
        }

        let document = FavoritesDocument {
            version: FORMAT_VERSION,
            saved_at: Utc::now(),
            meals: meals.to_vec(),
        };
        let encoded = serde_json::to_string_pretty(&document)?;
        std::fs::write(&self.path, encoded).map_err(|source| PersistenceError::Write {
            path: self.path.clone(),
            source,
        })
    }
}

/// Default favorites file location under the platform data directory.
///
/// Falls back to the current directory when no data directory can be
/// determined.
pub fn default_favorites_path() -> PathBuf {
    if let Some(data_dir) = dirs::data_dir() {
        data_dir.join("mealfinder").join("favorites.json")
    } else {
        PathBuf::from("favorites.json")
    }
}
