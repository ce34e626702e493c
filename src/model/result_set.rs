//! Deduplicated search results.
//!
//! The aggregator may issue several remote lookups for one search, and the
//! same meal can appear in more than one of them. `ResultSet` is the type
//! that makes the deduplication guarantee explicit instead of leaving it as
//! an incidental property of result merging.

use crate::model::{MealId, MealSummary};
use std::collections::HashSet;

/// Ordered sequence of meal summaries with no duplicate ids.
///
/// Order is first-occurrence order across the concatenated inputs, never
/// sorted. When the same id occurs more than once, the first occurrence
/// wins, even if later occurrences differ in other fields.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ResultSet {
    meals: Vec<MealSummary>,
}

impl ResultSet {
    /// Build a result set from concatenated lookup results.
    ///
    /// Single pass; each id is kept the first time it is seen and every
    /// later occurrence is discarded.
    pub fn from_summaries(summaries: impl IntoIterator<Item = MealSummary>) -> Self {
        let mut seen: HashSet<MealId> = HashSet::new();
        let mut meals = Vec::new();
        for summary in summaries {
            if seen.insert(summary.id.clone()) {
                meals.push(summary);
            }
        }
        Self { meals }
    }

    /// Number of distinct meals.
    pub fn len(&self) -> usize {
        self.meals.len()
    }

    /// Whether the set holds no meals.
    pub fn is_empty(&self) -> bool {
        self.meals.is_empty()
    }

    /// Iterate the meals in first-occurrence order.
    pub fn iter(&self) -> std::slice::Iter<'_, MealSummary> {
        self.meals.iter()
    }

    /// The meals as a slice, in first-occurrence order.
    pub fn as_slice(&self) -> &[MealSummary] {
        &self.meals
    }
}

impl IntoIterator for ResultSet {
    type Item = MealSummary;
    type IntoIter = std::vec::IntoIter<MealSummary>;

    fn into_iter(self) -> Self::IntoIter {
        self.meals.into_iter()
    }
}

impl<'a> IntoIterator for &'a ResultSet {
    type Item = &'a MealSummary;
    type IntoIter = std::slice::Iter<'a, MealSummary>;

    fn into_iter(self) -> Self::IntoIter {
        self.meals.iter()
    }
}
