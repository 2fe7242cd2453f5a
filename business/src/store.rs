//! Client-side cache of one paginated resource collection.
//!
//! `ResourceStore` is a cheap handle: clones share the same state, so a task
//! running a fetch and the render loop reading rows see the same data. The
//! shared state sits behind a lock that is never held across an `.await`.
//!
//! Fetches are applied last-initiated-wins: every `fetch_all` call takes a
//! token from a [`RequestSeq`] before returning its future, and the result is
//! dropped unless that token is still the latest one when it arrives.
//! Starting a fetch also cancels the one it supersedes.
//!
//! Mutations reconcile locally from the server's response: a created record
//! is upserted at the head, an updated one replaced in place, a deleted one
//! dropped with the total count decremented. The next fetch replaces the page
//! wholesale, so local patches never duplicate rows.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use payables_states::{Record, RequestSeq};
use ustr::Ustr;

use crate::{ApiError, Pagination, QueryParams, Resource, ResourceApi};

/// Render-ready copy of a store's state.
#[derive(Debug, Clone)]
pub struct StoreSnapshot<R> {
    pub data: Vec<R>,
    pub pagination: Pagination,
    pub loading: bool,
    pub error: Option<String>,
    pub params: QueryParams,
}

#[derive(Debug)]
struct StoreState<R> {
    data: Vec<R>,
    pagination: Pagination,
    loading: bool,
    error: Option<String>,
    params: QueryParams,
    last_mutation_error: Option<String>,
    seq: RequestSeq,
}

impl<R> Default for StoreState<R> {
    fn default() -> Self {
        Self {
            data: Vec::new(),
            pagination: Pagination::default(),
            loading: false,
            error: None,
            params: QueryParams::new(),
            last_mutation_error: None,
            seq: RequestSeq::new(),
        }
    }
}

pub struct ResourceStore<R> {
    api: ResourceApi<R>,
    shared: Arc<Mutex<StoreState<R>>>,
}

impl<R> Clone for ResourceStore<R> {
    fn clone(&self) -> Self {
        Self {
            api: self.api.clone(),
            shared: Arc::clone(&self.shared),
        }
    }
}

impl<R: Resource> std::fmt::Debug for ResourceStore<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.state();
        f.debug_struct("ResourceStore")
            .field("endpoint", &R::ENDPOINT)
            .field("rows", &state.data.len())
            .field("loading", &state.loading)
            .field("error", &state.error)
            .finish()
    }
}

impl<R: Resource> ResourceStore<R> {
    pub fn new(api: ResourceApi<R>) -> Self {
        Self {
            api,
            shared: Arc::new(Mutex::new(StoreState::default())),
        }
    }

    pub fn api(&self) -> &ResourceApi<R> {
        &self.api
    }

    // A panic while holding the lock cannot leave the state half-written in a
    // way that matters for display, so poisoning is ignored.
    fn state(&self) -> MutexGuard<'_, StoreState<R>> {
        self.shared.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn data(&self) -> Vec<R> {
        self.state().data.clone()
    }

    pub fn pagination(&self) -> Pagination {
        self.state().pagination
    }

    pub fn is_loading(&self) -> bool {
        self.state().loading
    }

    /// Error of the most recent fetch, if it failed.
    pub fn error(&self) -> Option<String> {
        self.state().error.clone()
    }

    /// Error of the most recent failed create/update/delete.
    pub fn last_mutation_error(&self) -> Option<String> {
        self.state().last_mutation_error.clone()
    }

    /// Params of the most recently issued fetch.
    pub fn params(&self) -> QueryParams {
        self.state().params.clone()
    }

    pub fn visible_ids(&self) -> Vec<Ustr> {
        self.state().data.iter().map(|r| *r.id()).collect()
    }

    pub fn find(&self, id: &Ustr) -> Option<R> {
        self.state().data.iter().find(|r| r.id() == id).cloned()
    }

    pub fn snapshot(&self) -> StoreSnapshot<R> {
        let state = self.state();
        StoreSnapshot {
            data: state.data.clone(),
            pagination: state.pagination,
            loading: state.loading,
            error: state.error.clone(),
            params: state.params.clone(),
        }
    }

    /// Fetches a page and replaces `data`/`pagination`, unless a newer fetch
    /// was issued in the meantime. On failure the previous rows stay visible
    /// and `error` is set.
    ///
    /// The request token is taken here, when the call is made, so call order
    /// decides which result wins even if the returned futures are polled in a
    /// different order. The future resolves to whether its result was applied.
    pub fn fetch_all(&self, params: QueryParams) -> impl Future<Output = bool> + Send + use<R> {
        let handle = {
            let mut state = self.state();
            let handle = state.seq.issue();
            state.loading = true;
            state.params = params.clone();
            handle
        };
        let store = self.clone();

        async move {
            let token = handle.token();
            let cancel = handle.cancellation_token();
            log::debug!("fetching {} #{} with {params:?}", R::ENDPOINT, token.generation());

            let result = tokio::select! {
                biased;
                () = cancel.cancelled() => Err(ApiError::Superseded),
                result = store.api.list(&params) => result,
            };

            let mut state = store.state();
            state.seq.finish(token);
            if !state.seq.is_latest(token) {
                log::debug!("discarding stale {} fetch #{}", R::ENDPOINT, token.generation());
                return false;
            }

            state.loading = false;
            match result {
                Ok(page) => {
                    log::debug!(
                        "applied {} fetch #{}: {} rows",
                        R::ENDPOINT,
                        token.generation(),
                        page.data.len()
                    );
                    state.data = page.data;
                    state.pagination = page.pagination;
                    state.error = None;
                }
                Err(err) => {
                    log::warn!("fetching {} failed: {err}", R::ENDPOINT);
                    state.error = Some(err.to_string());
                }
            }
            true
        }
    }

    /// Re-issues the most recent fetch.
    pub fn refresh(&self) -> impl Future<Output = bool> + Send + use<R> {
        self.fetch_all(self.params())
    }

    /// Creates a record. On success it appears at the top of the current page.
    pub async fn create(&self, draft: &R::Draft) -> Option<R> {
        match self.api.create(draft).await {
            Ok(record) => {
                let mut state = self.state();
                state.last_mutation_error = None;
                if let Some(existing) = state.data.iter_mut().find(|r| r.id() == record.id()) {
                    *existing = record.clone();
                } else {
                    state.data.insert(0, record.clone());
                    state.pagination.total_count += 1;
                }
                log::info!("created {} {}", R::LABEL, record.id());
                Some(record)
            }
            Err(err) => {
                self.record_mutation_error("create", &err);
                None
            }
        }
    }

    /// Patches a record and shows the server's version of it.
    pub async fn update(&self, id: &Ustr, draft: &R::Draft) -> Option<R> {
        match self.api.update(id, draft).await {
            Ok(record) => {
                let mut state = self.state();
                state.last_mutation_error = None;
                if let Some(existing) = state.data.iter_mut().find(|r| r.id() == id) {
                    *existing = record.clone();
                }
                log::info!("updated {} {id}", R::LABEL);
                Some(record)
            }
            Err(err) => {
                self.record_mutation_error("update", &err);
                None
            }
        }
    }

    /// Deletes a record; on success it leaves `data` and the total shrinks.
    pub async fn remove(&self, id: &Ustr) -> bool {
        match self.api.delete(id).await {
            Ok(()) => {
                let mut state = self.state();
                state.last_mutation_error = None;
                state.data.retain(|r| r.id() != id);
                state.pagination.total_count = state.pagination.total_count.saturating_sub(1);
                log::info!("deleted {} {id}", R::LABEL);
                true
            }
            Err(err) => {
                self.record_mutation_error("delete", &err);
                false
            }
        }
    }

    fn record_mutation_error(&self, action: &str, err: &ApiError) {
        log::warn!("{action} {} failed: {err}", R::LABEL);
        self.state().last_mutation_error = Some(err.to_string());
    }
}
