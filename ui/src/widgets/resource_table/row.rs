//! Body rows: read, edit, delete-confirm and create variants.

use egui::{Button, Ui};
use egui_extras::TableRow;
use payables_states::{Draft, Record};
use ustr::Ustr;

use super::columns::TableColumn;
use super::{TableAction, TableView};

type Field<R> = <<R as Record>::Draft as Draft>::Field;

/// How a data row is rendered this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKind {
    /// Plain row; row actions are offered only when `idle`.
    Read { idle: bool },
    Editing { saving: bool },
    Deleting { saving: bool },
}

pub fn render_record_row<R: TableView>(
    row: &mut TableRow<'_, '_>,
    columns: &[TableColumn],
    record: &R,
    draft: Option<&R::Draft>,
    kind: RowKind,
    selected: bool,
    actions: &mut Vec<TableAction<Field<R>>>,
) {
    let id: Ustr = *record.id();

    row.col(|ui| {
        let mut checked = selected;
        if ui.checkbox(&mut checked, "").changed() {
            actions.push(TableAction::ToggleRow(id));
        }
    });

    for column in columns {
        row.col(|ui| match (kind, draft) {
            (RowKind::Editing { .. }, Some(draft)) => {
                if let Some(field) = R::edit_cell(ui, draft, column.key) {
                    actions.push(TableAction::EditField(field));
                }
            }
            _ => R::cell(ui, record, column.key),
        });
    }

    row.col(|ui| {
        ui.horizontal(|ui| match kind {
            RowKind::Read { idle } => {
                if ui.add_enabled(idle, Button::new("Edit")).clicked() {
                    actions.push(TableAction::StartEdit(id));
                }
                if ui.add_enabled(idle, Button::new("Delete")).clicked() {
                    actions.push(TableAction::RequestDelete(id));
                }
            }
            RowKind::Editing { saving } => {
                save_cancel(ui, saving, actions, TableAction::SaveEdit, TableAction::CancelEdit);
            }
            RowKind::Deleting { saving } => {
                if saving {
                    ui.spinner();
                }
                if ui
                    .add_enabled(!saving, Button::new("Confirm delete"))
                    .clicked()
                {
                    actions.push(TableAction::ConfirmDelete);
                }
                if ui.button("Cancel").clicked() {
                    actions.push(TableAction::CancelDelete);
                }
            }
        });
    });
}

/// The pending new record, rendered above the data rows.
pub fn render_create_row<R: TableView>(
    row: &mut TableRow<'_, '_>,
    columns: &[TableColumn],
    draft: &R::Draft,
    saving: bool,
    actions: &mut Vec<TableAction<Field<R>>>,
) {
    row.col(|ui| {
        ui.weak("+");
    });

    for column in columns {
        row.col(|ui| {
            if let Some(field) = R::edit_cell(ui, draft, column.key) {
                actions.push(TableAction::CreateField(field));
            }
        });
    }

    row.col(|ui| {
        ui.horizontal(|ui| {
            save_cancel(ui, saving, actions, TableAction::SaveCreate, TableAction::CancelCreate);
        });
    });
}

fn save_cancel<F>(
    ui: &mut Ui,
    saving: bool,
    actions: &mut Vec<TableAction<F>>,
    save: TableAction<F>,
    cancel: TableAction<F>,
) {
    if saving {
        ui.spinner();
    }
    let save_clicked = ui.add_enabled(!saving, Button::new("Save")).clicked();
    let cancel_clicked = ui.button("Cancel").clicked();
    if save_clicked {
        actions.push(save);
    } else if cancel_clicked {
        actions.push(cancel);
    }
}
