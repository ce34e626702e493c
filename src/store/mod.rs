//! Favorites persistence.
//!
//! The store keeps the full meal summaries, not just ids, so a favorites
//! view can render without re-fetching anything. Loading is infallible by
//! contract: a missing or unreadable or undecodable persisted value is an
//! empty favorites list, never an error.

use crate::model::{MealSummary, PersistenceError};

pub mod json_file;

pub use json_file::{default_favorites_path, JsonFavoritesFile};

/// Persistence substrate for the favorites list.
pub trait FavoritesStore {
    /// Load the persisted favorites, in saved order.
    ///
    /// Never fails; any problem with the persisted value degrades to an
    /// empty list.
    fn load(&self) -> Vec<MealSummary>;

    /// Persist the full favorites list, replacing the previous value.
    fn save(&self, meals: &[MealSummary]) -> Result<(), PersistenceError>;
}
