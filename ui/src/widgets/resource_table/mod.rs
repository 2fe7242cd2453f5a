//! Generic admin table over any [`TableView`] resource.
//!
//! Rendering never mutates controllers directly. Every widget pushes a
//! [`TableAction`] and the actions are applied once the frame's table has
//! been laid out, which keeps the borrow of the page's state read-only while
//! drawing.
//!
//! - `columns`: column descriptors and the `egui_extras` layout
//! - `header`: select-all box, titles and resize handles
//! - `row`: read / edit / delete-confirm / create rows
//! - `toolbar`: filters, bulk actions, notices and paging
//! - `capture`: the egui pointer capture used while resizing

mod capture;
pub mod cells;
mod columns;
mod header;
mod row;
mod toolbar;

use egui::{Context, Layout, ScrollArea, Ui};
use egui_extras::TableBuilder;
use payables_business::{PendingAction, QueryParams, Resource, ResourceStore, TablePage};
use payables_states::{ColumnResizeController, Draft, Record, RowMode};
use ustr::Ustr;

pub use capture::{EguiPointerCapture, apply_cursor, is_capturing};
pub use columns::TableColumn;
use columns::{HEADER_HEIGHT, ROW_HEIGHT, resize_controller, table_columns};
pub use header::ResizeEvent;
use header::render_table_header;
use row::{RowKind, render_create_row, render_record_row};
use toolbar::{ToolbarInput, render_notice, render_pagination, render_toolbar};

/// How a resource is laid out and edited in a table.
pub trait TableView: Resource {
    /// Label of the "new record" toolbar button.
    const NEW_LABEL: &'static str;

    fn columns() -> &'static [TableColumn];

    fn cell(ui: &mut Ui, record: &Self, key: &str);

    /// Editor for one column of a draft; returns the field to merge when
    /// the user changed it.
    fn edit_cell(
        ui: &mut Ui,
        draft: &Self::Draft,
        key: &str,
    ) -> Option<<Self::Draft as Draft>::Field>;

    /// Seed of a new record's draft.
    fn new_draft() -> Self::Draft {
        Self::Draft::default()
    }

    /// Values offered by the status filter, if the resource has one.
    fn statuses() -> &'static [&'static str] {
        &[]
    }
}

/// Something the user did this frame.
#[derive(Debug, Clone, PartialEq)]
pub enum TableAction<F> {
    StartCreate,
    CreateField(F),
    SaveCreate,
    CancelCreate,
    StartEdit(Ustr),
    EditField(F),
    SaveEdit,
    CancelEdit,
    RequestDelete(Ustr),
    ConfirmDelete,
    CancelDelete,
    ToggleRow(Ustr),
    ToggleAll,
    BulkDelete,
    Refresh,
    GoToPage(u32),
    Filter(&'static str, String),
    DismissNotice,
}

/// A resource table with its page state and per-view UI state.
pub struct ResourceScreen<R: TableView> {
    pub page: TablePage<R>,
    pub resize: ColumnResizeController,
    search: String,
    status: String,
    loaded: bool,
}

impl<R: TableView> ResourceScreen<R> {
    pub fn new(store: ResourceStore<R>) -> Self {
        Self {
            page: TablePage::new(store),
            resize: resize_controller(R::columns()),
            search: String::new(),
            status: String::new(),
            loaded: false,
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn show(&mut self, ui: &mut Ui, runtime: &tokio::runtime::Handle) {
        if self.page.sync() > 0 {
            ui.ctx().request_repaint();
        }
        if !self.loaded {
            self.loaded = true;
            let job = self.page.begin_load(QueryParams::new());
            self.dispatch(ui.ctx(), runtime, job);
        }

        let snapshot = self.page.store().snapshot();
        let visible = self.page.visible_ids();
        let mut actions = Vec::new();

        let toolbar = ToolbarInput {
            new_label: R::NEW_LABEL,
            statuses: R::statuses(),
            selected: self.page.selection().count(),
            loading: snapshot.loading,
            idle: self.page.edit().is_read(),
        };
        render_toolbar(ui, &toolbar, &mut self.search, &mut self.status, &mut actions);
        render_notice(ui, self.page.notice(), &mut actions);
        if let Some(error) = &snapshot.error {
            ui.colored_label(egui::Color32::RED, format!("Error: {error}"));
        }
        ui.add_space(4.0);

        let columns = R::columns();
        let edit = self.page.edit();
        let selection = self.page.selection();
        let mut resize_events = Vec::new();

        ScrollArea::horizontal().show(ui, |ui| {
            let mut table = TableBuilder::new(ui)
                .id_salt(R::ENDPOINT)
                .striped(true)
                .cell_layout(Layout::left_to_right(egui::Align::Center));
            for column in table_columns(columns, &self.resize) {
                table = table.column(column);
            }

            table
                .header(HEADER_HEIGHT, |mut header| {
                    let result =
                        render_table_header(&mut header, columns, selection.tri_state(&visible));
                    if result.toggle_all {
                        actions.push(TableAction::ToggleAll);
                    }
                    resize_events = result.resize;
                })
                .body(|mut body| {
                    if let Some(draft) = edit.create_draft() {
                        body.row(ROW_HEIGHT, |mut row| {
                            render_create_row::<R>(
                                &mut row,
                                columns,
                                draft,
                                edit.is_saving(),
                                &mut actions,
                            );
                        });
                    }
                    for record in &snapshot.data {
                        let id = record.id();
                        let kind = match edit.mode() {
                            RowMode::Editing(editing) if editing == id => RowKind::Editing {
                                saving: edit.is_saving(),
                            },
                            RowMode::Deleting(deleting) if deleting == id => RowKind::Deleting {
                                saving: edit.is_saving(),
                            },
                            mode => RowKind::Read {
                                idle: mode.is_read(),
                            },
                        };
                        let draft = match kind {
                            RowKind::Editing { .. } => edit.edit_draft(),
                            _ => None,
                        };
                        body.row(ROW_HEIGHT, |mut row| {
                            render_record_row(
                                &mut row,
                                columns,
                                record,
                                draft,
                                kind,
                                selection.is_selected(id),
                                &mut actions,
                            );
                        });
                    }
                });
        });

        if snapshot.data.is_empty() && !snapshot.loading {
            ui.weak(format!("No {}s found", R::LABEL));
        }
        ui.add_space(4.0);
        render_pagination(ui, &snapshot.pagination, &mut actions);

        for event in resize_events {
            self.handle_resize(ui.ctx(), event);
        }
        // The pointer can be released outside the window, where the handle
        // never sees a drag stop.
        if self.resize.is_dragging() && !ui.input(|i| i.pointer.primary_down()) {
            self.resize.on_pointer_up();
        }
        apply_cursor(ui.ctx());

        for action in actions {
            self.perform(ui.ctx(), runtime, action);
        }
    }

    /// Feeds one resize-handle event to the column controller.
    pub fn handle_resize(&mut self, ctx: &Context, event: ResizeEvent) {
        match event {
            ResizeEvent::Start {
                key,
                min_width,
                pointer_x,
                rendered_width,
            } => {
                // End any stale session before taking a new capture, so the
                // style it restores is the one from before any drag.
                self.resize.on_pointer_up();
                let capture = EguiPointerCapture::acquire(ctx);
                self.resize
                    .on_drag_start(key, min_width, pointer_x, rendered_width, capture);
            }
            ResizeEvent::Move(pointer_x) => {
                if self.resize.on_pointer_move(pointer_x).is_some() {
                    ctx.request_repaint();
                }
            }
            ResizeEvent::End => self.resize.on_pointer_up(),
            ResizeEvent::Reset(key) => self.resize.reset_width(&key),
        }
    }

    /// Applies one user action; network work is dispatched on `runtime`.
    pub fn perform(
        &mut self,
        ctx: &Context,
        runtime: &tokio::runtime::Handle,
        action: TableAction<<R::Draft as Draft>::Field>,
    ) {
        let job = match action {
            TableAction::StartCreate => {
                self.page.edit_mut().start_create(R::new_draft());
                None
            }
            TableAction::CreateField(field) => {
                self.page.edit_mut().update_create_field(field);
                None
            }
            TableAction::CancelCreate => {
                self.page.edit_mut().cancel_create();
                None
            }
            TableAction::StartEdit(id) => {
                if let Some(record) = self.page.store().find(&id) {
                    self.page.edit_mut().start_edit(&record);
                }
                None
            }
            TableAction::EditField(field) => {
                self.page.edit_mut().update_edit_field(field);
                None
            }
            TableAction::CancelEdit => {
                self.page.edit_mut().cancel_edit();
                None
            }
            TableAction::RequestDelete(id) => {
                self.page.edit_mut().request_delete(id);
                None
            }
            TableAction::CancelDelete => {
                self.page.edit_mut().cancel_delete();
                None
            }
            TableAction::SaveCreate => self.page.begin_save_create(),
            TableAction::SaveEdit => self.page.begin_save_edit(),
            TableAction::ConfirmDelete => self.page.begin_confirm_delete(),
            TableAction::BulkDelete => self.page.begin_bulk_delete(),
            TableAction::ToggleRow(id) => {
                self.page.selection_mut().toggle(id);
                None
            }
            TableAction::ToggleAll => {
                let visible = self.page.visible_ids();
                self.page.selection_mut().toggle_all(&visible);
                None
            }
            TableAction::Refresh => Some(self.page.begin_refresh()),
            TableAction::GoToPage(page) => Some(self.page.begin_go_to_page(page)),
            TableAction::Filter(key, value) => Some(self.page.begin_set_filter(key, &value)),
            TableAction::DismissNotice => {
                self.page.dismiss_notice();
                None
            }
        };
        if let Some(job) = job {
            self.dispatch(ctx, runtime, job);
        }
    }

    fn dispatch(&self, ctx: &Context, runtime: &tokio::runtime::Handle, job: PendingAction<R>) {
        let ctx = ctx.clone();
        self.page
            .dispatch(job, runtime, move || ctx.request_repaint());
    }
}
