//! Per-table inline editing state machine.
//!
//! One controller exists per table, not per row. It tracks which single row
//! (if any) is being created, edited or delete-confirmed, and owns the draft
//! for that row.
//!
//! Saves are performed by the page, not by this controller. A page takes a
//! [`EditTicket`] when it starts a save and hands it back through
//! [`InlineEditController::complete`] once the network call succeeded. Every
//! transition bumps the session epoch, so a completion that arrives after the
//! user cancelled (or moved on to another row) is ignored instead of closing
//! the wrong row or bringing back a discarded draft.

use crate::{Draft, Record, RowMode};

/// Identifies the editing session a save was started from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EditTicket {
    epoch: u64,
}

impl EditTicket {
    /// Edit session the ticket was issued for.
    pub fn epoch(&self) -> u64 {
        self.epoch
    }
}

/// Pending inline edit of an existing row.
#[derive(Debug, Clone)]
pub struct EditSubmission<R: Record> {
    pub ticket: EditTicket,
    pub id: R::Id,
    pub draft: R::Draft,
}

/// Pending creation of a new row.
#[derive(Debug, Clone)]
pub struct CreateSubmission<R: Record> {
    pub ticket: EditTicket,
    pub draft: R::Draft,
}

/// Pending confirmed deletion.
#[derive(Debug, Clone)]
pub struct DeleteSubmission<R: Record> {
    pub ticket: EditTicket,
    pub id: R::Id,
}

#[derive(Debug)]
pub struct InlineEditController<R: Record> {
    mode: RowMode<R::Id>,
    draft: Option<R::Draft>,
    epoch: u64,
    saving: Option<EditTicket>,
}

impl<R: Record> Default for InlineEditController<R> {
    fn default() -> Self {
        Self {
            mode: RowMode::Read,
            draft: None,
            epoch: 0,
            saving: None,
        }
    }
}

impl<R: Record> InlineEditController<R> {
    /// A controller in `Read` mode with no drafts.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current interaction mode of the table.
    pub fn mode(&self) -> &RowMode<R::Id> {
        &self.mode
    }

    /// No row is interactive.
    pub fn is_read(&self) -> bool {
        self.mode.is_read()
    }

    /// The create row is open.
    pub fn is_creating(&self) -> bool {
        self.mode.is_creating()
    }

    /// `id` is the row being edited.
    pub fn is_editing(&self, id: &R::Id) -> bool {
        self.mode.is_editing(id)
    }

    /// `id` is awaiting delete confirmation.
    pub fn is_deleting(&self, id: &R::Id) -> bool {
        self.mode.is_deleting(id)
    }

    /// Whether a save for the current session is in flight.
    pub fn is_saving(&self) -> bool {
        self.saving.is_some_and(|t| t.epoch == self.epoch)
    }

    /// Draft of the row being edited, if the table is editing.
    pub fn edit_draft(&self) -> Option<&R::Draft> {
        match self.mode {
            RowMode::Editing(_) => self.draft.as_ref(),
            _ => None,
        }
    }

    /// Draft of the row being created, if the table is creating.
    pub fn create_draft(&self) -> Option<&R::Draft> {
        match self.mode {
            RowMode::Creating => self.draft.as_ref(),
            _ => None,
        }
    }

    /// `Read -> Creating`, seeded with `defaults`.
    ///
    /// Rejected while any other row is interactive.
    pub fn start_create(&mut self, defaults: R::Draft) -> bool {
        if !self.mode.is_read() {
            log::debug!("start_create rejected: table is {}", self.mode.label());
            return false;
        }
        self.enter(RowMode::Creating, Some(defaults));
        true
    }

    /// `Read -> Editing(id)`, seeded with a shallow copy of `record`.
    ///
    /// Rejected while any other row is interactive.
    pub fn start_edit(&mut self, record: &R) -> bool {
        if !self.mode.is_read() {
            log::debug!(
                "start_edit({}) rejected: table is {}",
                record.id(),
                self.mode.label()
            );
            return false;
        }
        self.enter(RowMode::Editing(record.id().clone()), Some(record.to_draft()));
        true
    }

    /// `Read -> Deleting(id)`. This is a confirmation gate; nothing is sent.
    pub fn request_delete(&mut self, id: R::Id) -> bool {
        if !self.mode.is_read() {
            log::debug!("request_delete({id}) rejected: table is {}", self.mode.label());
            return false;
        }
        self.enter(RowMode::Deleting(id), None);
        true
    }

    /// Merges one field into the edit draft. Ignored unless editing.
    pub fn update_edit_field(&mut self, field: <R::Draft as Draft>::Field) -> bool {
        if !matches!(self.mode, RowMode::Editing(_)) {
            return false;
        }
        self.apply_field(field)
    }

    /// Merges one field into the create draft. Ignored unless creating.
    pub fn update_create_field(&mut self, field: <R::Draft as Draft>::Field) -> bool {
        if !self.mode.is_creating() {
            return false;
        }
        self.apply_field(field)
    }

    /// Discards the draft and returns to `Read`, whatever the current mode.
    pub fn cancel_edit(&mut self) {
        self.reset();
    }

    /// Discards the draft and returns to `Read`, whatever the current mode.
    pub fn cancel_create(&mut self) {
        self.reset();
    }

    /// `Deleting(id) -> Read`.
    pub fn cancel_delete(&mut self) -> bool {
        if !matches!(self.mode, RowMode::Deleting(_)) {
            return false;
        }
        self.reset();
        true
    }

    /// Captures the edit draft for saving and marks the session as saving.
    pub fn submit_edit(&mut self) -> Option<EditSubmission<R>> {
        let RowMode::Editing(id) = &self.mode else {
            return None;
        };
        let submission = EditSubmission {
            ticket: self.ticket(),
            id: id.clone(),
            draft: self.draft.clone().unwrap_or_default(),
        };
        self.saving = Some(submission.ticket);
        Some(submission)
    }

    /// Captures the create draft for saving and marks the session as saving.
    pub fn submit_create(&mut self) -> Option<CreateSubmission<R>> {
        if !self.mode.is_creating() {
            return None;
        }
        let submission = CreateSubmission {
            ticket: self.ticket(),
            draft: self.draft.clone().unwrap_or_default(),
        };
        self.saving = Some(submission.ticket);
        Some(submission)
    }

    /// Captures the row awaiting delete confirmation.
    pub fn submit_delete(&mut self) -> Option<DeleteSubmission<R>> {
        let RowMode::Deleting(id) = &self.mode else {
            return None;
        };
        let submission = DeleteSubmission {
            ticket: self.ticket(),
            id: id.clone(),
        };
        self.saving = Some(submission.ticket);
        Some(submission)
    }

    /// Returns to `Read` after a successful save, if `ticket` still belongs to
    /// the current session. Stale tickets are ignored.
    pub fn complete(&mut self, ticket: EditTicket) -> bool {
        if ticket.epoch != self.epoch {
            log::debug!(
                "ignoring completion for stale session {} (current {})",
                ticket.epoch,
                self.epoch
            );
            return false;
        }
        self.reset();
        true
    }

    /// Keeps the row open after a failed save so the user can retry.
    pub fn fail(&mut self, ticket: EditTicket) {
        if self.saving == Some(ticket) {
            self.saving = None;
        }
    }

    fn ticket(&self) -> EditTicket {
        EditTicket { epoch: self.epoch }
    }

    fn apply_field(&mut self, field: <R::Draft as Draft>::Field) -> bool {
        self.draft.get_or_insert_with(Default::default).apply(field);
        true
    }

    fn enter(&mut self, mode: RowMode<R::Id>, draft: Option<R::Draft>) {
        log::debug!("row mode {} -> {}", self.mode.label(), mode.label());
        self.mode = mode;
        self.draft = draft;
        self.saving = None;
        self.epoch += 1;
    }

    fn reset(&mut self) {
        self.enter(RowMode::Read, None);
    }
}
