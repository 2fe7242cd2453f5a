//! Employee expense claims.

use egui::Ui;
use payables_business::resources::{Expense, ExpenseDraft, ExpenseField, ExpenseStatus};

use crate::utils::colors::status_color;
use crate::widgets::resource_table::cells::{
    amount_cell, amount_edit_cell, choice_edit_cell, date_cell, date_edit_cell, status_cell,
    text_cell, text_edit_cell,
};
use crate::widgets::resource_table::{TableColumn, TableView};

const COLUMNS: &[TableColumn] = &[
    TableColumn::new("description", "Description", 240.0).min_width(120.0),
    TableColumn::new("category", "Category", 140.0),
    TableColumn::new("amount", "Amount", 110.0),
    TableColumn::auto("incurred_on", "Incurred"),
    TableColumn::new("status", "Status", 120.0),
];

impl TableView for Expense {
    const NEW_LABEL: &'static str = "New expense";

    fn columns() -> &'static [TableColumn] {
        COLUMNS
    }

    fn cell(ui: &mut Ui, record: &Self, key: &str) {
        match key {
            "description" => text_cell(ui, &record.description),
            "category" => text_cell(ui, &record.category),
            "amount" => amount_cell(ui, record.amount),
            "incurred_on" => date_cell(ui, record.incurred_on),
            "status" => {
                let label = record.status.as_str();
                status_cell(ui, label, status_color(label));
            }
            _ => {}
        }
    }

    fn edit_cell(ui: &mut Ui, draft: &ExpenseDraft, key: &str) -> Option<ExpenseField> {
        match key {
            "description" => text_edit_cell(ui, draft.description.as_deref(), "Description")
                .map(ExpenseField::Description),
            "category" => {
                text_edit_cell(ui, draft.category.as_deref(), "Category").map(ExpenseField::Category)
            }
            "amount" => amount_edit_cell(ui, draft.amount).map(ExpenseField::Amount),
            "incurred_on" => {
                date_edit_cell(ui, key, draft.incurred_on).map(ExpenseField::IncurredOn)
            }
            "status" => choice_edit_cell(
                ui,
                key,
                draft.status,
                &ExpenseStatus::ALL,
                ExpenseStatus::as_str,
            )
            .map(ExpenseField::Status),
            _ => None,
        }
    }

    fn new_draft() -> ExpenseDraft {
        ExpenseDraft {
            status: Some(ExpenseStatus::Pending),
            incurred_on: Some(chrono::Local::now().date_naive()),
            ..Default::default()
        }
    }

    fn statuses() -> &'static [&'static str] {
        &["Pending", "Approved", "Rejected", "Reimbursed"]
    }
}
