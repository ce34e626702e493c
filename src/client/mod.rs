//! Remote recipe lookup client.
//!
//! [`RecipeApi`] is the seam between the engine and the remote service.
//! The aggregator and session machine are generic over it, so tests swap in
//! scripted implementations and the binary wires in [`MealDbClient`].

use crate::model::{LookupError, MealDetail, MealId, MealSummary};
use async_trait::async_trait;

pub mod mealdb;

pub use mealdb::MealDbClient;

/// Capabilities of the remote recipe lookup service.
///
/// The option listings degrade to empty on failure and never raise; the
/// filter and detail lookups surface transport and decode failures so the
/// caller can fail fast.
#[async_trait]
pub trait RecipeApi: Send + Sync {
    /// Category names for populating the category filter. Empty on failure.
    async fn list_categories(&self) -> Vec<String>;

    /// Cuisine (area) names for populating the area filter. Empty on failure.
    async fn list_areas(&self) -> Vec<String>;

    /// Meals containing the given ingredient. Empty list on no match.
    async fn filter_by_ingredient(
        &self,
        ingredient: &str,
    ) -> Result<Vec<MealSummary>, LookupError>;

    /// Meals in the given category. Empty list on no match.
    async fn filter_by_category(&self, category: &str) -> Result<Vec<MealSummary>, LookupError>;

    /// Meals of the given cuisine. Empty list on no match.
    async fn filter_by_area(&self, area: &str) -> Result<Vec<MealSummary>, LookupError>;

    /// Full detail for one meal. `None` when the id is unknown.
    async fn meal_detail(&self, id: &MealId) -> Result<Option<MealDetail>, LookupError>;
}
