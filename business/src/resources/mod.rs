//! The tabular resources of the dashboard.

mod expense;
mod payment;
mod purchase_order;
mod supplier;
mod user;

pub use expense::{Expense, ExpenseDraft, ExpenseField, ExpenseStatus};
pub use payment::{PaymentBatch, PaymentBatchDraft, PaymentBatchField, PaymentStatus};
pub use purchase_order::{
    PurchaseOrder, PurchaseOrderDraft, PurchaseOrderField, PurchaseOrderStatus,
};
pub use supplier::{Supplier, SupplierDraft, SupplierField, SupplierStatus};
pub use user::{User, UserDraft, UserField, UserRole};
