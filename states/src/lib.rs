//! IO-free controllers shared by every resource table.
//!
//! Nothing in this crate touches the network or a UI toolkit: the business
//! layer drives these controllers from async results, and the UI layer reads
//! them while rendering.

mod column_resize;
mod inline_edit;
mod record;
mod row_mode;
mod selection;
mod task;

pub use column_resize::{ColumnResizeController, ColumnSpec, DragSession, PointerCapture};
pub use inline_edit::{
    CreateSubmission, DeleteSubmission, EditSubmission, EditTicket, InlineEditController,
};
pub use record::{Draft, Record};
pub use row_mode::RowMode;
pub use selection::{BulkSelectionController, TriState};
pub use task::{RequestSeq, RequestToken, TaskHandle};
