use egui::Ui;
use payables_business::resources::{
    PurchaseOrder, PurchaseOrderDraft, PurchaseOrderField, PurchaseOrderStatus,
};

use crate::utils::colors::status_color;
use crate::widgets::resource_table::cells::{
    amount_cell, amount_edit_cell, choice_edit_cell, date_cell, date_edit_cell, status_cell,
    text_cell, text_edit_cell,
};
use crate::widgets::resource_table::{TableColumn, TableView};

const COLUMNS: &[TableColumn] = &[
    TableColumn::new("number", "PO #", 100.0),
    TableColumn::new("supplier_name", "Supplier", 220.0).min_width(100.0),
    TableColumn::new("total", "Total", 120.0),
    TableColumn::auto("expected_on", "Expected"),
    TableColumn::new("status", "Status", 110.0),
];

impl TableView for PurchaseOrder {
    const NEW_LABEL: &'static str = "New purchase order";

    fn columns() -> &'static [TableColumn] {
        COLUMNS
    }

    fn cell(ui: &mut Ui, record: &Self, key: &str) {
        match key {
            "number" => text_cell(ui, &record.number),
            "supplier_name" => text_cell(ui, &record.supplier_name),
            "total" => amount_cell(ui, record.total),
            "expected_on" => date_cell(ui, record.expected_on),
            "status" => {
                let label = record.status.as_str();
                status_cell(ui, label, status_color(label));
            }
            _ => {}
        }
    }

    fn edit_cell(ui: &mut Ui, draft: &PurchaseOrderDraft, key: &str) -> Option<PurchaseOrderField> {
        match key {
            // Assigned by the server.
            "number" => {
                ui.weak("auto");
                None
            }
            "supplier_name" => text_edit_cell(ui, draft.supplier_name.as_deref(), "Supplier")
                .map(PurchaseOrderField::SupplierName),
            "total" => amount_edit_cell(ui, draft.total).map(PurchaseOrderField::Total),
            "expected_on" => {
                date_edit_cell(ui, key, draft.expected_on).map(PurchaseOrderField::ExpectedOn)
            }
            "status" => choice_edit_cell(
                ui,
                key,
                draft.status,
                &PurchaseOrderStatus::ALL,
                PurchaseOrderStatus::as_str,
            )
            .map(PurchaseOrderField::Status),
            _ => None,
        }
    }

    fn new_draft() -> PurchaseOrderDraft {
        PurchaseOrderDraft {
            status: Some(PurchaseOrderStatus::Draft),
            ..Default::default()
        }
    }

    fn statuses() -> &'static [&'static str] {
        &["Draft", "Pending", "Approved", "Received", "Closed"]
    }
}
