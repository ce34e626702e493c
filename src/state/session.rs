//! Search session state machine.
//!
//! One [`Session`] owns the search lifecycle state and the active detail
//! subject. Transitions are synchronous methods; the async work happens
//! between `submit` and `complete`, which is where overlapping searches
//! can race. The race policy is a sequence token: every `submit` issues a
//! fresh token and `complete` discards any outcome whose token is not the
//! latest issued.

use crate::client::RecipeApi;
use crate::model::{DetailError, FilterCriterion, MealDetail, MealId, ResultSet, SearchError};
use crate::search::Aggregator;
use tracing::debug;

/// Search lifecycle state. Exactly one variant holds at any time.
///
/// `Idle -> Loading -> {Error | Success} -> Loading -> ...`, with no
/// terminal state. Entering `Loading` clears the previous outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    /// No search has been submitted yet.
    Idle,
    /// A search is in flight.
    Loading,
    /// The last search failed; holds the user-facing message.
    Error(String),
    /// The last search succeeded.
    Success(ResultSet),
}

/// Token tying an in-flight search to the `submit` that started it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitToken {
    seq: u64,
}

/// Owner of the search state and the detail popup subject.
///
/// The two are independent axes: closing the popup never changes the
/// search state, and a new search never closes an open popup.
#[derive(Debug, Default)]
pub struct Session {
    state: SessionState,
    detail: Option<MealDetail>,
    latest_seq: u64,
}

impl Default for SessionState {
    fn default() -> Self {
        SessionState::Idle
    }
}

impl Session {
    /// New session in `Idle` with no detail subject.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current search state.
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// The active detail popup subject, if one is open.
    pub fn detail(&self) -> Option<&MealDetail> {
        self.detail.as_ref()
    }

    /// Begin a search: transition to `Loading` and issue a fresh token.
    ///
    /// Synchronous, so the loading state is observable before any lookup
    /// is dispatched. Supersedes any still-pending submission; the older
    /// one's eventual outcome will be discarded by [`Session::complete`].
    pub fn submit(&mut self) -> SubmitToken {
        self.latest_seq += 1;
        self.state = SessionState::Loading;
        SubmitToken {
            seq: self.latest_seq,
        }
    }

    /// Apply a search outcome, unless it is stale.
    ///
    /// Returns `true` when the outcome was applied. An outcome whose token
    /// is not the latest issued belongs to a superseded submission and is
    /// dropped without touching state.
    pub fn complete(
        &mut self,
        token: SubmitToken,
        outcome: Result<ResultSet, SearchError>,
    ) -> bool {
        if token.seq != self.latest_seq {
            debug!(
                stale = token.seq,
                latest = self.latest_seq,
                "discarding superseded search outcome"
            );
            return false;
        }
        self.state = match outcome {
            Ok(results) => SessionState::Success(results),
            Err(error) => SessionState::Error(error.user_message().to_string()),
        };
        true
    }

    /// Submit, run the aggregator, and complete, in one call.
    ///
    /// This is the ordinary sequential path. Callers that overlap searches
    /// use `submit`/`complete` directly and let the token policy sort out
    /// staleness.
    pub async fn run_search<C: RecipeApi>(
        &mut self,
        aggregator: &Aggregator<C>,
        criterion: &FilterCriterion,
    ) -> &SessionState {
        let token = self.submit();
        let outcome = aggregator.search(criterion).await;
        self.complete(token, outcome);
        self.state()
    }

    /// Fetch a meal detail and make it the active popup subject.
    ///
    /// Failure is a transient notice for the caller to display; the search
    /// state and any already-open popup are left untouched.
    pub async fn select_detail<C: RecipeApi>(
        &mut self,
        client: &C,
        id: &MealId,
    ) -> Result<(), DetailError> {
        match client.meal_detail(id).await {
            Ok(Some(detail)) => {
                self.detail = Some(detail);
                Ok(())
            }
            Ok(None) => Err(DetailError::NotFound(id.clone())),
            Err(error) => Err(DetailError::Lookup(error)),
        }
    }

    /// Close the detail popup, discarding its subject.
    pub fn close_detail(&mut self) {
        self.detail = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{LookupError, MealSummary};
    use async_trait::async_trait;

    fn meal(id: &str, name: &str) -> MealSummary {
        MealSummary {
            id: MealId::new(id).expect("valid id"),
            name: name.to_string(),
            thumbnail_url: format!("https://example.test/{id}.jpg"),
        }
    }

    fn results(ids: &[&str]) -> ResultSet {
        ResultSet::from_summaries(ids.iter().map(|id| meal(id, "M")))
    }

    /// Detail lookups scripted per test: `Ok(detail)`, not found, or failure.
    enum DetailScript {
        Found(MealDetail),
        NotFound,
        Failure,
    }

    struct DetailApi {
        script: DetailScript,
    }

    #[async_trait]
    impl RecipeApi for DetailApi {
        async fn list_categories(&self) -> Vec<String> {
            Vec::new()
        }

        async fn list_areas(&self) -> Vec<String> {
            Vec::new()
        }

        async fn filter_by_ingredient(
            &self,
            _ingredient: &str,
        ) -> Result<Vec<MealSummary>, LookupError> {
            Ok(Vec::new())
        }

        async fn filter_by_category(
            &self,
            _category: &str,
        ) -> Result<Vec<MealSummary>, LookupError> {
            Ok(Vec::new())
        }

        async fn filter_by_area(&self, _area: &str) -> Result<Vec<MealSummary>, LookupError> {
            Ok(Vec::new())
        }

        async fn meal_detail(&self, id: &MealId) -> Result<Option<MealDetail>, LookupError> {
            match &self.script {
                DetailScript::Found(detail) => Ok(Some(detail.clone())),
                DetailScript::NotFound => Ok(None),
                DetailScript::Failure => Err(LookupError::Status {
                    status: 500,
                    endpoint: "lookup.php".to_string(),
                }),
            }
        }
    }

    fn detail(id: &str) -> MealDetail {
        MealDetail {
            id: MealId::new(id).expect("valid id"),
            name: "Teriyaki Chicken Casserole".to_string(),
            thumbnail_url: "https://example.test/thumb.jpg".to_string(),
            instructions: "Preheat oven to 350F.".to_string(),
            video_url: None,
        }
    }

    #[test]
    fn new_session_is_idle_with_no_detail() {
        let session = Session::new();
        assert_eq!(*session.state(), SessionState::Idle);
        assert!(session.detail().is_none());
    }

    #[test]
    fn submit_enters_loading_synchronously() {
        let mut session = Session::new();
        session.submit();
        assert_eq!(*session.state(), SessionState::Loading);
    }

    #[test]
    fn submit_clears_previous_outcome() {
        let mut session = Session::new();
        let token = session.submit();
        session.complete(token, Err(SearchError::NoResults));
        assert!(matches!(session.state(), SessionState::Error(_)));

        session.submit();
        assert_eq!(*session.state(), SessionState::Loading);
    }

    #[test]
    fn success_outcome_transitions_to_success() {
        let mut session = Session::new();
        let token = session.submit();
        let applied = session.complete(token, Ok(results(&["1", "2"])));
        assert!(applied);
        assert_eq!(*session.state(), SessionState::Success(results(&["1", "2"])));
    }

    #[test]
    fn error_outcomes_map_to_distinct_messages() {
        let mut session = Session::new();

        let token = session.submit();
        session.complete(token, Err(SearchError::NoFilterSpecified));
        let SessionState::Error(no_filter) = session.state().clone() else {
            panic!("expected error state");
        };

        let token = session.submit();
        session.complete(token, Err(SearchError::NoResults));
        let SessionState::Error(no_results) = session.state().clone() else {
            panic!("expected error state");
        };

        let token = session.submit();
        session.complete(
            token,
            Err(SearchError::Transport(LookupError::Status {
                status: 500,
                endpoint: "filter.php".to_string(),
            })),
        );
        let SessionState::Error(transport) = session.state().clone() else {
            panic!("expected error state");
        };

        assert_ne!(no_filter, no_results);
        assert_ne!(no_results, transport);
        assert_ne!(no_filter, transport);
    }

    #[test]
    fn stale_completion_is_discarded() {
        let mut session = Session::new();
        let token_a = session.submit();
        let token_b = session.submit();

        assert!(session.complete(token_b, Ok(results(&["b"]))));
        assert!(
            !session.complete(token_a, Ok(results(&["a"]))),
            "a superseded submission must not overwrite state"
        );
        assert_eq!(*session.state(), SessionState::Success(results(&["b"])));
    }

    #[test]
    fn stale_error_does_not_overwrite_newer_success() {
        let mut session = Session::new();
        let token_a = session.submit();
        let token_b = session.submit();

        session.complete(token_b, Ok(results(&["b"])));
        session.complete(
            token_a,
            Err(SearchError::Transport(LookupError::Status {
                status: 500,
                endpoint: "filter.php".to_string(),
            })),
        );
        assert_eq!(*session.state(), SessionState::Success(results(&["b"])));
    }

    #[test]
    fn stale_completion_while_newer_still_loading_keeps_loading() {
        let mut session = Session::new();
        let token_a = session.submit();
        let _token_b = session.submit();

        assert!(!session.complete(token_a, Ok(results(&["a"]))));
        assert_eq!(
            *session.state(),
            SessionState::Loading,
            "the superseding search is still pending"
        );
    }

    #[tokio::test]
    async fn select_detail_stores_the_popup_subject() {
        let api = DetailApi {
            script: DetailScript::Found(detail("52772")),
        };
        let mut session = Session::new();

        session
            .select_detail(&api, &MealId::new("52772").expect("valid id"))
            .await
            .expect("detail fetch");

        assert_eq!(session.detail().map(|d| d.id.as_str()), Some("52772"));
    }

    #[tokio::test]
    async fn detail_failure_leaves_search_state_untouched() {
        let api = DetailApi {
            script: DetailScript::Failure,
        };
        let mut session = Session::new();
        let token = session.submit();
        session.complete(token, Ok(results(&["1"])));

        let outcome = session
            .select_detail(&api, &MealId::new("52772").expect("valid id"))
            .await;

        assert!(matches!(outcome, Err(DetailError::Lookup(_))));
        assert_eq!(*session.state(), SessionState::Success(results(&["1"])));
        assert!(session.detail().is_none());
    }

    #[tokio::test]
    async fn unknown_id_reports_not_found_without_state_change() {
        let api = DetailApi {
            script: DetailScript::NotFound,
        };
        let mut session = Session::new();

        let outcome = session
            .select_detail(&api, &MealId::new("99999").expect("valid id"))
            .await;

        assert!(matches!(outcome, Err(DetailError::NotFound(_))));
        assert_eq!(*session.state(), SessionState::Idle);
    }

    #[test]
    fn close_detail_clears_the_subject() {
        let mut session = Session::new();
        session.detail = Some(detail("52772"));

        session.close_detail();

        assert!(session.detail().is_none());
    }

    #[test]
    fn new_search_keeps_open_popup() {
        let mut session = Session::new();
        session.detail = Some(detail("52772"));

        session.submit();

        assert!(
            session.detail().is_some(),
            "detail selection and search state are independent axes"
        );
    }

    #[test]
    fn close_detail_does_not_touch_search_state() {
        let mut session = Session::new();
        let token = session.submit();
        session.complete(token, Ok(results(&["1"])));
        session.detail = Some(detail("52772"));

        session.close_detail();

        assert_eq!(*session.state(), SessionState::Success(results(&["1"])));
    }
}
