use payables_states::{Draft, Record};
use serde::{Deserialize, Serialize};
use ustr::Ustr;

use crate::Resource;
use crate::resource::require_text;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum UserRole {
    Admin,
    Approver,
    #[default]
    Clerk,
    Viewer,
}

impl UserRole {
    pub const ALL: [Self; 4] = [Self::Admin, Self::Approver, Self::Clerk, Self::Viewer];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "Admin",
            Self::Approver => "Approver",
            Self::Clerk => "Clerk",
            Self::Viewer => "Viewer",
        }
    }
}

/// A member of the organisation, managed from the settings page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Ustr,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub active: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDraft {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<UserRole>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserField {
    Name(String),
    Email(String),
    Role(UserRole),
    Active(bool),
}

impl Draft for UserDraft {
    type Field = UserField;

    fn apply(&mut self, field: UserField) {
        match field {
            UserField::Name(v) => self.name = Some(v),
            UserField::Email(v) => self.email = Some(v),
            UserField::Role(v) => self.role = Some(v),
            UserField::Active(v) => self.active = Some(v),
        }
    }
}

impl Record for User {
    type Id = Ustr;
    type Draft = UserDraft;

    fn id(&self) -> &Ustr {
        &self.id
    }

    fn to_draft(&self) -> UserDraft {
        UserDraft {
            name: Some(self.name.clone()),
            email: Some(self.email.clone()),
            role: Some(self.role),
            active: Some(self.active),
        }
    }
}

impl Resource for User {
    const ENDPOINT: &'static str = "users";
    const LABEL: &'static str = "user";

    fn validate(draft: &UserDraft) -> Result<(), String> {
        require_text(draft.name.as_deref(), "Name")?;
        require_text(draft.email.as_deref(), "Email")
    }
}
