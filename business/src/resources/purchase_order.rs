use chrono::NaiveDate;
use payables_states::{Draft, Record};
use serde::{Deserialize, Serialize};
use ustr::Ustr;

use crate::Resource;
use crate::resource::{require_positive, require_text};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PurchaseOrderStatus {
    #[default]
    Draft,
    Pending,
    Approved,
    Received,
    Closed,
}

impl PurchaseOrderStatus {
    pub const ALL: [Self; 5] = [
        Self::Draft,
        Self::Pending,
        Self::Approved,
        Self::Received,
        Self::Closed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "Draft",
            Self::Pending => "Pending",
            Self::Approved => "Approved",
            Self::Received => "Received",
            Self::Closed => "Closed",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseOrder {
    pub id: Ustr,
    /// Human-facing PO number, assigned by the server.
    pub number: String,
    pub supplier_name: String,
    pub total: f64,
    pub status: PurchaseOrderStatus,
    #[serde(default)]
    pub expected_on: Option<NaiveDate>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseOrderDraft {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supplier_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<PurchaseOrderStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected_on: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PurchaseOrderField {
    SupplierName(String),
    Total(f64),
    Status(PurchaseOrderStatus),
    ExpectedOn(NaiveDate),
}

impl Draft for PurchaseOrderDraft {
    type Field = PurchaseOrderField;

    fn apply(&mut self, field: PurchaseOrderField) {
        match field {
            PurchaseOrderField::SupplierName(v) => self.supplier_name = Some(v),
            PurchaseOrderField::Total(v) => self.total = Some(v),
            PurchaseOrderField::Status(v) => self.status = Some(v),
            PurchaseOrderField::ExpectedOn(v) => self.expected_on = Some(v),
        }
    }
}

impl Record for PurchaseOrder {
    type Id = Ustr;
    type Draft = PurchaseOrderDraft;

    fn id(&self) -> &Ustr {
        &self.id
    }

    fn to_draft(&self) -> PurchaseOrderDraft {
        PurchaseOrderDraft {
            supplier_name: Some(self.supplier_name.clone()),
            total: Some(self.total),
            status: Some(self.status),
            expected_on: self.expected_on,
        }
    }
}

impl Resource for PurchaseOrder {
    const ENDPOINT: &'static str = "purchase-orders";
    const LABEL: &'static str = "purchase order";

    fn validate(draft: &PurchaseOrderDraft) -> Result<(), String> {
        require_text(draft.supplier_name.as_deref(), "Supplier")?;
        require_positive(draft.total, "Total")
    }
}
