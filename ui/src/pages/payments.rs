//! Payment batches.

use egui::Ui;
use payables_business::resources::{
    PaymentBatch, PaymentBatchDraft, PaymentBatchField, PaymentStatus,
};

use crate::utils::colors::status_color;
use crate::widgets::resource_table::cells::{
    amount_cell, amount_edit_cell, choice_edit_cell, date_cell, date_edit_cell, status_cell,
    text_cell, text_edit_cell,
};
use crate::widgets::resource_table::{TableColumn, TableView};

const COLUMNS: &[TableColumn] = &[
    TableColumn::new("name", "Batch", 200.0).min_width(100.0),
    TableColumn::new("payment_date", "Payment date", 130.0),
    TableColumn::new("amount", "Amount", 120.0),
    TableColumn::new("currency", "Currency", 80.0).min_width(50.0),
    TableColumn::new("payment_count", "Payments", 90.0),
    TableColumn::new("status", "Status", 110.0),
];

impl TableView for PaymentBatch {
    const NEW_LABEL: &'static str = "New payment batch";

    fn columns() -> &'static [TableColumn] {
        COLUMNS
    }

    fn cell(ui: &mut Ui, record: &Self, key: &str) {
        match key {
            "name" => text_cell(ui, &record.name),
            "payment_date" => date_cell(ui, Some(record.payment_date)),
            "amount" => amount_cell(ui, record.amount),
            "currency" => text_cell(ui, &record.currency),
            "payment_count" => text_cell(ui, &record.payment_count.to_string()),
            "status" => {
                let label = record.status.as_str();
                status_cell(ui, label, status_color(label));
            }
            _ => {}
        }
    }

    fn edit_cell(ui: &mut Ui, draft: &PaymentBatchDraft, key: &str) -> Option<PaymentBatchField> {
        match key {
            "name" => {
                text_edit_cell(ui, draft.name.as_deref(), "Batch name").map(PaymentBatchField::Name)
            }
            "payment_date" => {
                date_edit_cell(ui, key, draft.payment_date).map(PaymentBatchField::PaymentDate)
            }
            "amount" => amount_edit_cell(ui, draft.amount).map(PaymentBatchField::Amount),
            "currency" => text_edit_cell(ui, draft.currency.as_deref(), "USD")
                .map(|code| PaymentBatchField::Currency(code.to_uppercase())),
            // Derived by the server from the payments in the batch.
            "payment_count" => None,
            "status" => choice_edit_cell(
                ui,
                key,
                draft.status,
                &PaymentStatus::ALL,
                PaymentStatus::as_str,
            )
            .map(PaymentBatchField::Status),
            _ => None,
        }
    }

    fn new_draft() -> PaymentBatchDraft {
        PaymentBatchDraft {
            currency: Some("USD".to_owned()),
            status: Some(PaymentStatus::Draft),
            payment_date: Some(chrono::Local::now().date_naive()),
            ..Default::default()
        }
    }

    fn statuses() -> &'static [&'static str] {
        &["Draft", "Pending", "Approved", "Paid", "Failed"]
    }
}
