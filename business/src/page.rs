//! One admin table: a store plus the controllers that drive its rows.
//!
//! Network work is split in two halves so it fits an immediate-mode render
//! loop:
//!
//! - `begin_*` captures what to send and returns a `Send` [`PendingAction`]
//!   that owns everything it needs (a store handle, the draft, the ticket).
//! - [`TablePage::apply`] feeds the resulting [`PageOutcome`] back into the
//!   controllers and raises a [`Notice`].
//!
//! The UI hands actions to [`TablePage::dispatch`], which runs them on the
//! tokio runtime and queues outcomes on a channel drained by
//! [`TablePage::sync`] once per frame. Tests and other async callers use the
//! `handle_*`/`load` methods, which do both halves inline.

use std::future::Future;
use std::pin::Pin;

use payables_states::{BulkSelectionController, EditTicket, InlineEditController};
use ustr::Ustr;

use crate::{PAGE_PARAM, QueryParams, Resource, ResourceStore};

/// Transient banner shown above a table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Info(String),
    Error(String),
}

impl Notice {
    pub fn message(&self) -> &str {
        match self {
            Self::Info(message) | Self::Error(message) => message,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }
}

/// Result of a finished [`PendingAction`].
#[derive(Debug, Clone)]
pub enum PageOutcome<R> {
    /// `applied` is false when a newer fetch superseded this one.
    Fetched {
        applied: bool,
    },
    Created {
        ticket: EditTicket,
        record: Option<R>,
    },
    Updated {
        ticket: EditTicket,
        record: Option<R>,
    },
    Deleted {
        ticket: EditTicket,
        id: Ustr,
        removed: bool,
    },
    BulkDeleted {
        removed: Vec<Ustr>,
        failed: Vec<Ustr>,
    },
}

/// Network half of a page action, ready to be awaited or spawned.
pub type PendingAction<R> = Pin<Box<dyn Future<Output = PageOutcome<R>> + Send + 'static>>;

pub struct TablePage<R: Resource> {
    store: ResourceStore<R>,
    edit: InlineEditController<R>,
    selection: BulkSelectionController<Ustr>,
    params: QueryParams,
    notice: Option<Notice>,
    outcome_tx: flume::Sender<PageOutcome<R>>,
    outcome_rx: flume::Receiver<PageOutcome<R>>,
}

impl<R: Resource> std::fmt::Debug for TablePage<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TablePage")
            .field("endpoint", &R::ENDPOINT)
            .field("mode", self.edit.mode())
            .field("selected", &self.selection.count())
            .field("params", &self.params)
            .field("notice", &self.notice)
            .finish()
    }
}

impl<R: Resource> TablePage<R> {
    pub fn new(store: ResourceStore<R>) -> Self {
        let (outcome_tx, outcome_rx) = flume::unbounded();
        Self {
            store,
            edit: InlineEditController::new(),
            selection: BulkSelectionController::new(),
            params: QueryParams::new(),
            notice: None,
            outcome_tx,
            outcome_rx,
        }
    }

    pub fn store(&self) -> &ResourceStore<R> {
        &self.store
    }

    pub fn edit(&self) -> &InlineEditController<R> {
        &self.edit
    }

    pub fn edit_mut(&mut self) -> &mut InlineEditController<R> {
        &mut self.edit
    }

    pub fn selection(&self) -> &BulkSelectionController<Ustr> {
        &self.selection
    }

    pub fn selection_mut(&mut self) -> &mut BulkSelectionController<Ustr> {
        &mut self.selection
    }

    pub fn params(&self) -> &QueryParams {
        &self.params
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    pub fn visible_ids(&self) -> Vec<Ustr> {
        self.store.visible_ids()
    }

    /// Current page number as tracked in the params.
    pub fn page(&self) -> u32 {
        self.params
            .get(PAGE_PARAM)
            .and_then(|page| page.parse().ok())
            .unwrap_or(1)
    }

    // Fetching

    /// Replaces the params wholesale and fetches.
    pub fn begin_load(&mut self, params: QueryParams) -> PendingAction<R> {
        self.params = params;
        self.fetch_job()
    }

    pub fn begin_refresh(&mut self) -> PendingAction<R> {
        self.fetch_job()
    }

    pub fn begin_go_to_page(&mut self, page: u32) -> PendingAction<R> {
        let page = page.max(1).to_string();
        self.params.insert(PAGE_PARAM.to_owned(), page);
        self.fetch_job()
    }

    /// Sets (or, with a blank value, clears) a filter and goes back to page 1.
    pub fn begin_set_filter(&mut self, key: &str, value: &str) -> PendingAction<R> {
        let value = value.trim();
        if value.is_empty() {
            self.params.remove(key);
        } else {
            self.params.insert(key.to_owned(), value.to_owned());
        }
        self.params.insert(PAGE_PARAM.to_owned(), "1".to_owned());
        self.fetch_job()
    }

    // The fetch is issued here, so the token follows call order.
    fn fetch_job(&self) -> PendingAction<R> {
        let fetch = self.store.fetch_all(self.params.clone());
        Box::pin(async move {
            PageOutcome::Fetched {
                applied: fetch.await,
            }
        })
    }

    pub async fn load(&mut self, params: QueryParams) {
        let job = self.begin_load(params);
        let outcome = job.await;
        self.apply(outcome);
    }

    pub async fn refresh(&mut self) {
        let job = self.begin_refresh();
        let outcome = job.await;
        self.apply(outcome);
    }

    pub async fn go_to_page(&mut self, page: u32) {
        let job = self.begin_go_to_page(page);
        let outcome = job.await;
        self.apply(outcome);
    }

    pub async fn set_filter(&mut self, key: &str, value: &str) {
        let job = self.begin_set_filter(key, value);
        let outcome = job.await;
        self.apply(outcome);
    }

    // Saving

    /// Validates the create draft and returns the POST to run.
    ///
    /// `None` when not creating, or when validation failed (an error notice
    /// is raised and the row stays open).
    pub fn begin_save_create(&mut self) -> Option<PendingAction<R>> {
        let draft = self.edit.create_draft()?;
        if let Err(problem) = R::validate(draft) {
            self.notice = Some(Notice::Error(problem));
            return None;
        }
        let submission = self.edit.submit_create()?;
        let store = self.store.clone();
        Some(Box::pin(async move {
            let record = store.create(&submission.draft).await;
            PageOutcome::Created {
                ticket: submission.ticket,
                record,
            }
        }))
    }

    /// Validates the edit draft and returns the PATCH to run.
    pub fn begin_save_edit(&mut self) -> Option<PendingAction<R>> {
        let draft = self.edit.edit_draft()?;
        if let Err(problem) = R::validate(draft) {
            self.notice = Some(Notice::Error(problem));
            return None;
        }
        let submission = self.edit.submit_edit()?;
        let store = self.store.clone();
        Some(Box::pin(async move {
            let record = store.update(&submission.id, &submission.draft).await;
            PageOutcome::Updated {
                ticket: submission.ticket,
                record,
            }
        }))
    }

    /// Returns the DELETE for the row awaiting confirmation.
    pub fn begin_confirm_delete(&mut self) -> Option<PendingAction<R>> {
        let submission = self.edit.submit_delete()?;
        let store = self.store.clone();
        Some(Box::pin(async move {
            let removed = store.remove(&submission.id).await;
            PageOutcome::Deleted {
                ticket: submission.ticket,
                id: submission.id,
                removed,
            }
        }))
    }

    /// Deletes every selected row, one request at a time.
    pub fn begin_bulk_delete(&mut self) -> Option<PendingAction<R>> {
        let ids: Vec<Ustr> = self.selection.selected_ids().copied().collect();
        if ids.is_empty() {
            return None;
        }
        let store = self.store.clone();
        Some(Box::pin(async move {
            let mut removed = Vec::new();
            let mut failed = Vec::new();
            for id in ids {
                if store.remove(&id).await {
                    removed.push(id);
                } else {
                    failed.push(id);
                }
            }
            PageOutcome::BulkDeleted { removed, failed }
        }))
    }

    pub async fn handle_save_create(&mut self) -> bool {
        self.run(Self::begin_save_create).await
    }

    pub async fn handle_save_edit(&mut self) -> bool {
        self.run(Self::begin_save_edit).await
    }

    pub async fn handle_confirm_delete(&mut self) -> bool {
        self.run(Self::begin_confirm_delete).await
    }

    pub async fn handle_bulk_delete(&mut self) -> bool {
        self.run(Self::begin_bulk_delete).await
    }

    async fn run(&mut self, begin: fn(&mut Self) -> Option<PendingAction<R>>) -> bool {
        match begin(self) {
            Some(job) => {
                let outcome = job.await;
                self.apply(outcome)
            }
            None => false,
        }
    }

    // Outcomes

    /// Folds a finished action into the controllers. Returns whether the
    /// action succeeded.
    ///
    /// A superseded fetch changes nothing, not even the notice. A save whose
    /// ticket went stale (the user cancelled or moved to another row
    /// meanwhile) has still patched the store, but leaves the current row
    /// mode alone.
    pub fn apply(&mut self, outcome: PageOutcome<R>) -> bool {
        match outcome {
            PageOutcome::Fetched { applied: false } => false,
            PageOutcome::Fetched { applied: true } => {
                self.selection.retain_visible(&self.store.visible_ids());
                match self.store.error() {
                    Some(err) => {
                        self.notice = Some(Notice::Error(format!(
                            "Could not load {}s: {err}",
                            R::LABEL
                        )));
                        false
                    }
                    None => true,
                }
            }
            PageOutcome::Created { ticket, record } => {
                self.finish_save(ticket, record.is_some(), "create", "Created")
            }
            PageOutcome::Updated { ticket, record } => {
                self.finish_save(ticket, record.is_some(), "save", "Saved")
            }
            PageOutcome::Deleted {
                ticket,
                id,
                removed,
            } => {
                if removed {
                    self.selection.deselect(&id);
                }
                self.finish_save(ticket, removed, "delete", "Deleted")
            }
            PageOutcome::BulkDeleted { removed, failed } => {
                for id in &removed {
                    self.selection.deselect(id);
                }
                if failed.is_empty() {
                    self.notice = Some(Notice::Info(format!(
                        "Deleted {} {}(s)",
                        removed.len(),
                        R::LABEL
                    )));
                    true
                } else {
                    self.notice = Some(Notice::Error(format!(
                        "Could not delete {} of {} {}(s): {}",
                        failed.len(),
                        failed.len() + removed.len(),
                        R::LABEL,
                        self.store.last_mutation_error().unwrap_or_default()
                    )));
                    false
                }
            }
        }
    }

    fn finish_save(&mut self, ticket: EditTicket, ok: bool, verb: &str, done: &str) -> bool {
        if ok {
            self.edit.complete(ticket);
            self.notice = Some(Notice::Info(format!("{done} {}", R::LABEL)));
        } else {
            self.edit.fail(ticket);
            self.notice = Some(Notice::Error(format!(
                "Could not {verb} {}: {}",
                R::LABEL,
                self.store.last_mutation_error().unwrap_or_default()
            )));
        }
        ok
    }

    /// Spawns `job` on `runtime`; its outcome is picked up by [`Self::sync`].
    ///
    /// `wake` runs after the outcome is queued, e.g. to request a repaint.
    pub fn dispatch(
        &self,
        job: PendingAction<R>,
        runtime: &tokio::runtime::Handle,
        wake: impl Fn() + Send + 'static,
    ) {
        let tx = self.outcome_tx.clone();
        runtime.spawn(async move {
            let outcome = job.await;
            if tx.send(outcome).is_err() {
                log::debug!("{} page dropped before its action finished", R::ENDPOINT);
            }
            wake();
        });
    }

    /// Applies every queued outcome. Returns how many were applied.
    pub fn sync(&mut self) -> usize {
        let outcomes: Vec<_> = self.outcome_rx.try_iter().collect();
        let count = outcomes.len();
        for outcome in outcomes {
            self.apply(outcome);
        }
        count
    }

    /// Waits for the next dispatched outcome and applies it.
    pub async fn apply_next(&mut self) -> bool {
        match self.outcome_rx.recv_async().await {
            Ok(outcome) => self.apply(outcome),
            // The page holds a sender, so the channel never disconnects.
            Err(flume::RecvError::Disconnected) => false,
        }
    }
}
