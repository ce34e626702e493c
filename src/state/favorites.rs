//! Favorites manager.
//!
//! Sole owner of the in-memory favorites set and the only writer to the
//! favorites store. Membership is keyed by meal id; insertion order is
//! preserved for display.

use crate::model::{MealId, MealSummary, PersistenceError};
use crate::store::FavoritesStore;
use std::collections::HashSet;
use tracing::warn;

/// In-memory favorites set synchronized to a [`FavoritesStore`].
///
/// Mutation happens only through [`FavoritesManager::toggle`], which
/// persists after every change. When a save fails, the in-memory set stays
/// authoritative for the session; the stale persisted copy is repaired by
/// the next successful save.
#[derive(Debug)]
pub struct FavoritesManager<S> {
    store: S,
    meals: Vec<MealSummary>,
    ids: HashSet<MealId>,
}

impl<S: FavoritesStore> FavoritesManager<S> {
    /// Populate the set from the store.
    ///
    /// Loading cannot fail; persisted duplicates (which only a corrupted
    /// writer could produce) are dropped, first occurrence wins.
    pub fn load(store: S) -> Self {
        let mut ids = HashSet::new();
        let mut meals = Vec::new();
        for meal in store.load() {
            if ids.insert(meal.id.clone()) {
                meals.push(meal);
            } else {
                warn!(id = %meal.id, "dropping duplicate persisted favorite");
            }
        }
        Self { store, meals, ids }
    }

    /// Whether the meal with this id is currently a favorite.
    pub fn is_favorite(&self, id: &MealId) -> bool {
        self.ids.contains(id)
    }

    /// Toggle membership for the given meal and persist the result.
    ///
    /// Returns whether the meal is a favorite after the toggle. On a
    /// persistence failure the in-memory change is kept and the error is
    /// returned; callers decide how loudly to report it.
    pub fn toggle(&mut self, meal: MealSummary) -> Result<bool, PersistenceError> {
        let now_favorite = if self.ids.remove(&meal.id) {
            let id = meal.id;
            self.meals.retain(|existing| existing.id != id);
            false
        } else {
            self.ids.insert(meal.id.clone());
            self.meals.push(meal);
            true
        };
        self.store.save(&self.meals)?;
        Ok(now_favorite)
    }

    /// The favorites, in insertion order.
    pub fn meals(&self) -> &[MealSummary] {
        &self.meals
    }

    /// Number of favorites.
    pub fn len(&self) -> usize {
        self.meals.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.meals.is_empty()
    }
}
