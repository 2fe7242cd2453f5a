/// The single interactive state of a table.
///
/// Only one row can be non-`Read` at a time; holding the mode as one value per
/// table makes that structural instead of a convention.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RowMode<Id> {
    /// Browsing; every row renders static cells.
    #[default]
    Read,

    /// A new, not yet persisted row is being filled in.
    Creating,

    /// An existing row is being edited inline.
    Editing(Id),

    /// An existing row is waiting for delete confirmation.
    Deleting(Id),
}

impl<Id: PartialEq> RowMode<Id> {
    /// Browsing, with no interactive row.
    pub fn is_read(&self) -> bool {
        matches!(self, Self::Read)
    }

    /// The create row is open.
    pub fn is_creating(&self) -> bool {
        matches!(self, Self::Creating)
    }

    /// `id` is the row being edited.
    pub fn is_editing(&self, id: &Id) -> bool {
        matches!(self, Self::Editing(current) if current == id)
    }

    /// `id` is awaiting delete confirmation.
    pub fn is_deleting(&self, id: &Id) -> bool {
        matches!(self, Self::Deleting(current) if current == id)
    }

    /// The row this mode is bound to, if any.
    pub fn row_id(&self) -> Option<&Id> {
        match self {
            Self::Editing(id) | Self::Deleting(id) => Some(id),
            Self::Read | Self::Creating => None,
        }
    }

    /// Short label used in logs.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Read => "read",
            Self::Creating => "creating",
            Self::Editing(_) => "editing",
            Self::Deleting(_) => "deleting",
        }
    }
}
