//! Request state for data-fetching views.
//!
//! [`FetchState`] is the `idle -> loading -> (success | failed)` machine each
//! view renders from. [`RequestScope`] decides which in-flight response is
//! still allowed to write into it: every request takes a [`Ticket`], and only
//! the newest ticket of a scope that has not been closed is current.

use crate::app_lib::errors::ApiError;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

#[derive(Clone, Debug, Default)]
pub enum FetchStatus {
    #[default]
    Idle,
    Loading,
    Success,
    Failed(ApiError),
}

/// Last known data plus the status of the most recent request.
#[derive(Clone, Debug)]
pub struct FetchState<T> {
    data: Option<T>,
    status: FetchStatus,
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FetchState<T> {
    pub fn new() -> Self {
        Self {
            data: None,
            status: FetchStatus::Idle,
        }
    }

    /// Enters `Loading` and clears any previous error. Data is kept so the
    /// view can keep rendering it while the refetch runs.
    pub fn start(&mut self) {
        self.status = FetchStatus::Loading;
    }

    pub fn succeed(&mut self, data: Option<T>) {
        self.data = data;
        self.status = FetchStatus::Success;
    }

    /// Records the failure; prior data is left untouched.
    pub fn fail(&mut self, error: ApiError) {
        self.status = FetchStatus::Failed(error);
    }

    /// Back to idle with no data, used when there is nothing to fetch.
    pub fn reset(&mut self) {
        self.data = None;
        self.status = FetchStatus::Idle;
    }

    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    pub fn status(&self) -> &FetchStatus {
        &self.status
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.status, FetchStatus::Loading)
    }

    pub fn error(&self) -> Option<&ApiError> {
        match &self.status {
            FetchStatus::Failed(error) => Some(error),
            _ => None,
        }
    }

    /// Starts an unkeyed load: takes a ticket from `scope` and enters `Loading`.
    pub fn begin(&mut self, scope: &RequestScope) -> Ticket {
        self.start();
        scope.begin()
    }

    /// Starts a load keyed by `id`, returning the ticket and the trimmed id to
    /// request. A missing or blank id still supersedes in-flight requests but
    /// leaves the state idle with no data, and `None` tells the caller not to
    /// send anything.
    pub fn begin_for(
        &mut self,
        scope: &RequestScope,
        id: Option<&str>,
    ) -> Option<(Ticket, String)> {
        let ticket = scope.begin();
        match id.map(str::trim).filter(|id| !id.is_empty()) {
            Some(id) => {
                self.start();
                Some((ticket, id.to_string()))
            }
            None => {
                self.reset();
                None
            }
        }
    }

    /// Applies a response if `ticket` is still current in `scope`. Returns
    /// whether the state changed.
    pub fn settle(
        &mut self,
        scope: &RequestScope,
        ticket: Ticket,
        result: Result<Option<T>, ApiError>,
    ) -> bool {
        if !scope.is_current(ticket) {
            return false;
        }
        match result {
            Ok(data) => self.succeed(data),
            Err(error) => self.fail(error),
        }
        true
    }
}

/// Identifies one request issued from a [`RequestScope`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ticket(u64);

/// Lifetime of the requests started by one mounted view.
#[derive(Debug, Default)]
pub struct RequestScope {
    generation: AtomicU64,
    closed: AtomicBool,
}

impl RequestScope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new request, superseding every ticket handed out before.
    pub fn begin(&self) -> Ticket {
        Ticket(self.generation.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// True while `ticket` is the newest one and the scope is still open.
    pub fn is_current(&self, ticket: Ticket) -> bool {
        !self.is_closed() && self.generation.load(Ordering::SeqCst) == ticket.0
    }

    /// Discards every in-flight result. Called on teardown.
    pub fn close(&self) {
        self.closed.store(true, Ordering::SeqCst);
    }

    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_state_is_idle_without_data() {
        let state: FetchState<Vec<u8>> = FetchState::new();
        assert!(matches!(state.status(), FetchStatus::Idle));
        assert!(state.data().is_none());
        assert!(!state.is_loading());
        assert!(state.error().is_none());
    }

    #[test]
    fn success_stores_data() {
        let mut state = FetchState::new();
        state.start();
        assert!(state.is_loading());

        state.succeed(Some(vec![1, 2, 3]));
        assert!(matches!(state.status(), FetchStatus::Success));
        assert_eq!(state.data(), Some(&vec![1, 2, 3]));
    }

    #[test]
    fn failure_keeps_prior_data() {
        let mut state = FetchState::new();
        state.start();
        state.succeed(Some("first".to_string()));

        state.start();
        state.fail(ApiError::http(500, Some(serde_json::json!("boom"))));

        assert_eq!(state.data().map(String::as_str), Some("first"));
        assert_eq!(state.error().map(|err| err.message.as_str()), Some("boom"));
        assert!(!state.is_loading());
    }

    #[test]
    fn start_clears_previous_error() {
        let mut state: FetchState<u8> = FetchState::new();
        state.fail(ApiError::network("Failed to fetch"));
        state.start();
        assert!(state.error().is_none());
        assert!(state.is_loading());
    }

    #[test]
    fn reset_returns_to_idle() {
        let mut state = FetchState::new();
        state.succeed(Some(1));
        state.reset();
        assert!(matches!(state.status(), FetchStatus::Idle));
        assert!(state.data().is_none());
        assert!(!state.is_loading());
    }

    #[test]
    fn newer_ticket_supersedes_older() {
        let scope = RequestScope::new();
        let first = scope.begin();
        let second = scope.begin();

        assert!(!scope.is_current(first));
        assert!(scope.is_current(second));
    }

    #[test]
    fn absent_id_sends_nothing_and_stays_idle() {
        let scope = RequestScope::new();
        let mut state: FetchState<String> = FetchState::new();

        for id in [None, Some(""), Some("   ")] {
            assert_eq!(state.begin_for(&scope, id), None);
            assert!(!state.is_loading());
            assert!(state.data().is_none());
            assert!(matches!(state.status(), FetchStatus::Idle));
        }
    }

    #[test]
    fn keyed_load_trims_id_and_applies_result() {
        let scope = RequestScope::new();
        let mut state = FetchState::new();

        let (ticket, id) = state.begin_for(&scope, Some(" 42 ")).unwrap();
        assert_eq!(id, "42");
        assert!(state.is_loading());

        assert!(state.settle(&scope, ticket, Ok(Some("ana".to_string()))));
        assert_eq!(state.data().map(String::as_str), Some("ana"));
        assert!(!state.is_loading());
    }

    #[test]
    fn clearing_the_id_discards_the_pending_response() {
        let scope = RequestScope::new();
        let mut state = FetchState::new();

        let (ticket, _) = state.begin_for(&scope, Some("7")).unwrap();
        assert_eq!(state.begin_for(&scope, None), None);

        assert!(!state.settle(&scope, ticket, Ok(Some("late".to_string()))));
        assert!(state.data().is_none());
        assert!(matches!(state.status(), FetchStatus::Idle));
    }

    #[test]
    fn superseded_response_is_discarded() {
        let scope = RequestScope::new();
        let mut state = FetchState::new();

        let first = state.begin(&scope);
        let second = state.begin(&scope);

        assert!(state.settle(&scope, second, Ok(Some(vec!["fresh"]))));
        assert!(!state.settle(&scope, first, Err(ApiError::network("Failed to fetch"))));

        assert_eq!(state.data(), Some(&vec!["fresh"]));
        assert!(state.error().is_none());
    }

    #[test]
    fn response_after_close_is_discarded() {
        let scope = RequestScope::new();
        let mut state: FetchState<u8> = FetchState::new();

        let ticket = state.begin(&scope);
        scope.close();

        assert!(!state.settle(&scope, ticket, Ok(Some(1))));
        assert!(state.is_loading());
        assert!(state.data().is_none());
    }

    #[test]
    fn closed_scope_rejects_every_ticket() {
        let scope = RequestScope::new();
        let ticket = scope.begin();
        scope.close();

        assert!(scope.is_closed());
        assert!(!scope.is_current(ticket));
        assert!(!scope.is_current(scope.begin()));
    }
}
