//! Meal value types.
//!
//! Both types are immutable once constructed and freely cloneable. A
//! [`MealDetail`] is only ever produced by a successful detail lookup and is
//! discarded when the detail view closes; it never flows back into search
//! results.

use crate::model::MealId;
use serde::{Deserialize, Serialize};

/// Compact meal record as returned by the filter endpoints.
///
/// This is the unit of search results and of the persisted favorites list.
/// Equality compares all fields; identity is the `id` alone (see
/// [`MealId`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealSummary {
    /// Identity of the meal.
    pub id: MealId,
    /// Display name, e.g. "Teriyaki Chicken Casserole".
    pub name: String,
    /// URL of the thumbnail image.
    pub thumbnail_url: String,
}

/// Full meal record as returned by the detail lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealDetail {
    /// Identity of the meal.
    pub id: MealId,
    /// Display name.
    pub name: String,
    /// URL of the thumbnail image.
    pub thumbnail_url: String,
    /// Free-text cooking instructions.
    pub instructions: String,
    /// Optional link to a recipe video.
    pub video_url: Option<String>,
}

impl MealDetail {
    /// The summary this detail subsumes.
    ///
    /// Used when a favorite is toggled from a detail view, so that the
    /// favorites list always holds summaries no matter where the toggle
    /// originated.
    pub fn to_summary(&self) -> MealSummary {
        MealSummary {
            id: self.id.clone(),
            name: self.name.clone(),
            thumbnail_url: self.thumbnail_url.clone(),
        }
    }
}
