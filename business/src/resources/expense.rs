use chrono::NaiveDate;
use payables_states::{Draft, Record};
use serde::{Deserialize, Serialize};
use ustr::Ustr;

use crate::Resource;
use crate::resource::{require_positive, require_text};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ExpenseStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
    Reimbursed,
}

impl ExpenseStatus {
    pub const ALL: [Self; 4] = [
        Self::Pending,
        Self::Approved,
        Self::Rejected,
        Self::Reimbursed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Approved => "Approved",
            Self::Rejected => "Rejected",
            Self::Reimbursed => "Reimbursed",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    pub id: Ustr,
    pub description: String,
    pub category: String,
    pub amount: f64,
    #[serde(default)]
    pub incurred_on: Option<NaiveDate>,
    pub status: ExpenseStatus,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseDraft {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub incurred_on: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ExpenseStatus>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ExpenseField {
    Description(String),
    Category(String),
    Amount(f64),
    IncurredOn(NaiveDate),
    Status(ExpenseStatus),
}

impl Draft for ExpenseDraft {
    type Field = ExpenseField;

    fn apply(&mut self, field: ExpenseField) {
        match field {
            ExpenseField::Description(v) => self.description = Some(v),
            ExpenseField::Category(v) => self.category = Some(v),
            ExpenseField::Amount(v) => self.amount = Some(v),
            ExpenseField::IncurredOn(v) => self.incurred_on = Some(v),
            ExpenseField::Status(v) => self.status = Some(v),
        }
    }
}

impl Record for Expense {
    type Id = Ustr;
    type Draft = ExpenseDraft;

    fn id(&self) -> &Ustr {
        &self.id
    }

    fn to_draft(&self) -> ExpenseDraft {
        ExpenseDraft {
            description: Some(self.description.clone()),
            category: Some(self.category.clone()),
            amount: Some(self.amount),
            incurred_on: self.incurred_on,
            status: Some(self.status),
        }
    }
}

impl Resource for Expense {
    const ENDPOINT: &'static str = "expenses";
    const LABEL: &'static str = "expense";

    fn validate(draft: &ExpenseDraft) -> Result<(), String> {
        require_text(draft.description.as_deref(), "Description")?;
        require_positive(draft.amount, "Amount")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_draft_copies_every_editable_field() {
        let expense = Expense {
            id: Ustr::from("e1"),
            description: "Taxi".to_owned(),
            category: "Travel".to_owned(),
            amount: 42.5,
            incurred_on: NaiveDate::from_ymd_opt(2026, 3, 14),
            status: ExpenseStatus::Approved,
        };

        let draft = expense.to_draft();
        assert_eq!(draft.description.as_deref(), Some("Taxi"));
        assert_eq!(draft.amount, Some(42.5));
        assert_eq!(draft.incurred_on, NaiveDate::from_ymd_opt(2026, 3, 14));
        assert_eq!(draft.status, Some(ExpenseStatus::Approved));
    }

    #[test]
    fn validate_rejects_non_positive_amount() {
        let draft = ExpenseDraft {
            description: Some("Lunch".to_owned()),
            amount: Some(0.0),
            ..Default::default()
        };
        assert_eq!(
            Expense::validate(&draft),
            Err("Amount must be greater than zero".to_owned())
        );
    }

    #[test]
    fn record_decodes_from_camel_case() {
        let json = r#"{
            "id": "e9",
            "description": "Hotel",
            "category": "Travel",
            "amount": 180,
            "incurredOn": "2026-02-01",
            "status": "Reimbursed"
        }"#;
        let expense: Expense = serde_json::from_str(json).expect("valid expense");
        assert_eq!(expense.id, Ustr::from("e9"));
        assert_eq!(expense.amount, 180.0);
        assert_eq!(expense.status, ExpenseStatus::Reimbursed);
    }
}
