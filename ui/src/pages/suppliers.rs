use egui::Ui;
use payables_business::resources::{Supplier, SupplierDraft, SupplierField, SupplierStatus};

use crate::utils::colors::status_color;
use crate::widgets::resource_table::cells::{
    choice_edit_cell, days_edit_cell, status_cell, text_cell, text_edit_cell,
};
use crate::widgets::resource_table::{TableColumn, TableView};

const COLUMNS: &[TableColumn] = &[
    TableColumn::new("name", "Name", 200.0).min_width(100.0),
    TableColumn::new("email", "Email", 220.0),
    TableColumn::new("category", "Category", 140.0),
    TableColumn::new("payment_terms_days", "Terms", 90.0),
    TableColumn::new("status", "Status", 110.0),
];

impl TableView for Supplier {
    const NEW_LABEL: &'static str = "New supplier";

    fn columns() -> &'static [TableColumn] {
        COLUMNS
    }

    fn cell(ui: &mut Ui, record: &Self, key: &str) {
        match key {
            "name" => text_cell(ui, &record.name),
            "email" => text_cell(ui, &record.email),
            "category" => text_cell(ui, &record.category),
            "payment_terms_days" => text_cell(ui, &format!("Net {}", record.payment_terms_days)),
            "status" => {
                let label = record.status.as_str();
                status_cell(ui, label, status_color(label));
            }
            _ => {}
        }
    }

    fn edit_cell(ui: &mut Ui, draft: &SupplierDraft, key: &str) -> Option<SupplierField> {
        match key {
            "name" => text_edit_cell(ui, draft.name.as_deref(), "Name").map(SupplierField::Name),
            "email" => {
                text_edit_cell(ui, draft.email.as_deref(), "billing@…").map(SupplierField::Email)
            }
            "category" => {
                text_edit_cell(ui, draft.category.as_deref(), "Category").map(SupplierField::Category)
            }
            "payment_terms_days" => {
                days_edit_cell(ui, draft.payment_terms_days).map(SupplierField::PaymentTermsDays)
            }
            "status" => choice_edit_cell(
                ui,
                key,
                draft.status,
                &SupplierStatus::ALL,
                SupplierStatus::as_str,
            )
            .map(SupplierField::Status),
            _ => None,
        }
    }

    fn new_draft() -> SupplierDraft {
        SupplierDraft {
            status: Some(SupplierStatus::Pending),
            payment_terms_days: Some(30),
            ..Default::default()
        }
    }

    fn statuses() -> &'static [&'static str] {
        &["Pending", "Active", "Inactive"]
    }
}
