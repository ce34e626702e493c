//! Shared test support: fixture builders and a scripted lookup client.

#![allow(dead_code)] // each test binary uses a different subset

use async_trait::async_trait;
use mealfinder::client::RecipeApi;
use mealfinder::model::{LookupError, MealDetail, MealId, MealSummary};
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::Notify;

/// Meal summary fixture.
pub fn meal(id: &str, name: &str) -> MealSummary {
    MealSummary {
        id: MealId::new(id).expect("valid id"),
        name: name.to_string(),
        thumbnail_url: format!("https://example.test/{id}.jpg"),
    }
}

/// Meal id fixture.
pub fn meal_id(id: &str) -> MealId {
    MealId::new(id).expect("valid id")
}

/// Scripted implementation of the lookup client.
///
/// Responses are canned per argument. An ingredient can be gated so its
/// lookup does not return until the gate is released, which is how the
/// overlapping-search tests control completion order.
#[derive(Default)]
pub struct ScriptedApi {
    ingredients: HashMap<String, Vec<MealSummary>>,
    categories: HashMap<String, Vec<MealSummary>>,
    areas: HashMap<String, Vec<MealSummary>>,
    details: HashMap<MealId, MealDetail>,
    failing_ingredients: HashSet<String>,
    gates: HashMap<String, Arc<Notify>>,
    calls: AtomicUsize,
}

impl ScriptedApi {
    pub fn ingredient(mut self, name: &str, meals: Vec<MealSummary>) -> Self {
        self.ingredients.insert(name.to_string(), meals);
        self
    }

    pub fn category(mut self, name: &str, meals: Vec<MealSummary>) -> Self {
        self.categories.insert(name.to_string(), meals);
        self
    }

    pub fn area(mut self, name: &str, meals: Vec<MealSummary>) -> Self {
        self.areas.insert(name.to_string(), meals);
        self
    }

    pub fn detail(mut self, detail: MealDetail) -> Self {
        self.details.insert(detail.id.clone(), detail);
        self
    }

    pub fn failing_ingredient(mut self, name: &str) -> Self {
        self.failing_ingredients.insert(name.to_string());
        self
    }

    /// Gate an ingredient lookup; it will not return until the returned
    /// handle's `notify_one` is called.
    pub fn gated_ingredient(&mut self, name: &str) -> Arc<Notify> {
        let gate = Arc::new(Notify::new());
        self.gates.insert(name.to_string(), gate.clone());
        gate
    }

    /// Total lookups made, listings excluded.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RecipeApi for ScriptedApi {
    async fn list_categories(&self) -> Vec<String> {
        self.categories.keys().cloned().collect()
    }

    async fn list_areas(&self) -> Vec<String> {
        self.areas.keys().cloned().collect()
    }

    async fn filter_by_ingredient(
        &self,
        ingredient: &str,
    ) -> Result<Vec<MealSummary>, LookupError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(gate) = self.gates.get(ingredient) {
            gate.notified().await;
        }
        if self.failing_ingredients.contains(ingredient) {
            return Err(LookupError::Status {
                status: 500,
                endpoint: "filter.php".to_string(),
            });
        }
        Ok(self.ingredients.get(ingredient).cloned().unwrap_or_default())
    }

    async fn filter_by_category(&self, category: &str) -> Result<Vec<MealSummary>, LookupError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.categories.get(category).cloned().unwrap_or_default())
    }

    async fn filter_by_area(&self, area: &str) -> Result<Vec<MealSummary>, LookupError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.areas.get(area).cloned().unwrap_or_default())
    }

    async fn meal_detail(&self, id: &MealId) -> Result<Option<MealDetail>, LookupError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.details.get(id).cloned())
    }
}
