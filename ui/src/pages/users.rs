//! Organisation members (settings).

use egui::Ui;
use payables_business::resources::{User, UserDraft, UserField, UserRole};

use crate::utils::colors::{COLOR_GRAY, COLOR_GREEN};
use crate::widgets::resource_table::cells::{
    choice_edit_cell, status_cell, text_cell, text_edit_cell, toggle_edit_cell,
};
use crate::widgets::resource_table::{TableColumn, TableView};

const COLUMNS: &[TableColumn] = &[
    TableColumn::new("name", "Name", 200.0).min_width(100.0),
    TableColumn::new("email", "Email", 240.0),
    TableColumn::new("role", "Role", 120.0),
    TableColumn::new("active", "Active", 90.0),
];

impl TableView for User {
    const NEW_LABEL: &'static str = "Invite user";

    fn columns() -> &'static [TableColumn] {
        COLUMNS
    }

    fn cell(ui: &mut Ui, record: &Self, key: &str) {
        match key {
            "name" => text_cell(ui, &record.name),
            "email" => text_cell(ui, &record.email),
            "role" => text_cell(ui, record.role.as_str()),
            "active" if record.active => status_cell(ui, "Active", COLOR_GREEN),
            "active" => status_cell(ui, "Disabled", COLOR_GRAY),
            _ => {}
        }
    }

    fn edit_cell(ui: &mut Ui, draft: &UserDraft, key: &str) -> Option<UserField> {
        match key {
            "name" => text_edit_cell(ui, draft.name.as_deref(), "Name").map(UserField::Name),
            "email" => text_edit_cell(ui, draft.email.as_deref(), "Email").map(UserField::Email),
            "role" => choice_edit_cell(ui, key, draft.role, &UserRole::ALL, UserRole::as_str)
                .map(UserField::Role),
            "active" => toggle_edit_cell(ui, draft.active, "").map(UserField::Active),
            _ => None,
        }
    }

    fn new_draft() -> UserDraft {
        UserDraft {
            role: Some(UserRole::default()),
            active: Some(true),
            ..Default::default()
        }
    }
}
