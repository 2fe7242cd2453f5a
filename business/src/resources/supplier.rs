use payables_states::{Draft, Record};
use serde::{Deserialize, Serialize};
use ustr::Ustr;

use crate::Resource;
use crate::resource::require_text;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SupplierStatus {
    #[default]
    Pending,
    Active,
    Inactive,
}

impl SupplierStatus {
    pub const ALL: [Self; 3] = [Self::Pending, Self::Active, Self::Inactive];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Active => "Active",
            Self::Inactive => "Inactive",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Supplier {
    pub id: Ustr,
    pub name: String,
    pub email: String,
    pub category: String,
    pub status: SupplierStatus,
    /// Net payment terms in days (e.g. 30 for "net 30").
    pub payment_terms_days: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SupplierDraft {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<SupplierStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_terms_days: Option<u32>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SupplierField {
    Name(String),
    Email(String),
    Category(String),
    Status(SupplierStatus),
    PaymentTermsDays(u32),
}

impl Draft for SupplierDraft {
    type Field = SupplierField;

    fn apply(&mut self, field: SupplierField) {
        match field {
            SupplierField::Name(v) => self.name = Some(v),
            SupplierField::Email(v) => self.email = Some(v),
            SupplierField::Category(v) => self.category = Some(v),
            SupplierField::Status(v) => self.status = Some(v),
            SupplierField::PaymentTermsDays(v) => self.payment_terms_days = Some(v),
        }
    }
}

impl Record for Supplier {
    type Id = Ustr;
    type Draft = SupplierDraft;

    fn id(&self) -> &Ustr {
        &self.id
    }

    fn to_draft(&self) -> SupplierDraft {
        SupplierDraft {
            name: Some(self.name.clone()),
            email: Some(self.email.clone()),
            category: Some(self.category.clone()),
            status: Some(self.status),
            payment_terms_days: Some(self.payment_terms_days),
        }
    }
}

impl Resource for Supplier {
    const ENDPOINT: &'static str = "suppliers";
    const LABEL: &'static str = "supplier";

    fn validate(draft: &SupplierDraft) -> Result<(), String> {
        require_text(draft.name.as_deref(), "Name")?;
        match draft.email.as_deref() {
            Some(email) if !email.contains('@') => Err("Email is not valid".to_owned()),
            _ => Ok(()),
        }
    }
}
