use chrono::NaiveDate;
use payables_states::{Draft, Record};
use serde::{Deserialize, Serialize};
use ustr::Ustr;

use crate::Resource;
use crate::resource::{require_positive, require_text};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PaymentStatus {
    #[default]
    Draft,
    Pending,
    Approved,
    Paid,
    Failed,
}

impl PaymentStatus {
    pub const ALL: [Self; 5] = [
        Self::Draft,
        Self::Pending,
        Self::Approved,
        Self::Paid,
        Self::Failed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "Draft",
            Self::Pending => "Pending",
            Self::Approved => "Approved",
            Self::Paid => "Paid",
            Self::Failed => "Failed",
        }
    }
}

/// A batch of supplier payments released together.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentBatch {
    pub id: Ustr,
    pub name: String,
    pub payment_date: NaiveDate,
    pub amount: f64,
    pub currency: String,
    pub status: PaymentStatus,
    /// Number of payments in the batch, derived by the server.
    #[serde(default)]
    pub payment_count: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentBatchDraft {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<PaymentStatus>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PaymentBatchField {
    Name(String),
    PaymentDate(NaiveDate),
    Amount(f64),
    Currency(String),
    Status(PaymentStatus),
}

impl Draft for PaymentBatchDraft {
    type Field = PaymentBatchField;

    fn apply(&mut self, field: PaymentBatchField) {
        match field {
            PaymentBatchField::Name(v) => self.name = Some(v),
            PaymentBatchField::PaymentDate(v) => self.payment_date = Some(v),
            PaymentBatchField::Amount(v) => self.amount = Some(v),
            PaymentBatchField::Currency(v) => self.currency = Some(v),
            PaymentBatchField::Status(v) => self.status = Some(v),
        }
    }
}

impl Record for PaymentBatch {
    type Id = Ustr;
    type Draft = PaymentBatchDraft;

    fn id(&self) -> &Ustr {
        &self.id
    }

    fn to_draft(&self) -> PaymentBatchDraft {
        PaymentBatchDraft {
            name: Some(self.name.clone()),
            payment_date: Some(self.payment_date),
            amount: Some(self.amount),
            currency: Some(self.currency.clone()),
            status: Some(self.status),
        }
    }
}

impl Resource for PaymentBatch {
    const ENDPOINT: &'static str = "payments";
    const LABEL: &'static str = "payment batch";

    fn validate(draft: &PaymentBatchDraft) -> Result<(), String> {
        require_text(draft.name.as_deref(), "Name")?;
        require_positive(draft.amount, "Amount")?;
        if draft.payment_date.is_none() {
            return Err("Payment date is required".to_owned());
        }
        Ok(())
    }
}
