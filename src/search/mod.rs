//! Search aggregation.
//!
//! Turns one [`FilterCriterion`] into one or more remote lookups and merges
//! the results into a deduplicated [`ResultSet`].

use crate::client::RecipeApi;
use crate::model::{FilterCriterion, ResultSet, SearchError};
use futures::future;
use tracing::debug;

/// Merges remote lookups for one filter criterion into a [`ResultSet`].
///
/// Generic over the lookup client so the merge logic is testable without a
/// network.
#[derive(Debug)]
pub struct Aggregator<C> {
    client: C,
}

impl<C: RecipeApi> Aggregator<C> {
    /// Wrap a lookup client.
    pub fn new(client: C) -> Self {
        Self { client }
    }

    /// Borrow the underlying client, e.g. for detail lookups.
    pub fn client(&self) -> &C {
        &self.client
    }

    /// Run one search invocation.
    ///
    /// The ingredient path dispatches its sub-lookups concurrently but
    /// concatenates their results in input-list order, whatever order they
    /// complete in. An ingredient with no matches contributes nothing. Any
    /// hard lookup failure aborts the whole invocation; partial results are
    /// never returned.
    ///
    /// # Errors
    ///
    /// - [`SearchError::NoFilterSpecified`] for the `None` criterion,
    ///   detected before any remote call.
    /// - [`SearchError::NoResults`] when the deduplicated aggregate is
    ///   empty.
    /// - [`SearchError::Transport`] when any sub-lookup fails hard.
    pub async fn search(&self, criterion: &FilterCriterion) -> Result<ResultSet, SearchError> {
        let summaries = match criterion {
            FilterCriterion::None => return Err(SearchError::NoFilterSpecified),
            FilterCriterion::Ingredients(ingredients) => {
                let lookups = ingredients
                    .iter()
                    .map(|ingredient| self.client.filter_by_ingredient(ingredient));
                // try_join_all keeps input order and short-circuits on the
                // first hard failure.
                let per_ingredient = future::try_join_all(lookups).await?;
                per_ingredient.into_iter().flatten().collect()
            }
            FilterCriterion::Category(category) => self.client.filter_by_category(category).await?,
            // Upstream listings should already be duplicate-free, but the
            // dedup pass below is applied to every path regardless.
            FilterCriterion::Area(area) => self.client.filter_by_area(area).await?,
        };

        let results = ResultSet::from_summaries(summaries);
        debug!(criterion = ?criterion, count = results.len(), "search aggregated");
        if results.is_empty() {
            return Err(SearchError::NoResults);
        }
        Ok(results)
    }
}
