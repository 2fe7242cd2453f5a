//! Pages of the dashboard, one per resource table.
//!
//! Each submodule describes how its resource is laid out as a table by
//! implementing `TableView`; the shared table widget does the rest.

mod expenses;
mod payments;
mod purchase_orders;
mod suppliers;
mod users;

use egui::Ui;

use crate::state::State;

/// Which page the side navigation has selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Suppliers,
    Payments,
    PurchaseOrders,
    Expenses,
    Users,
}

impl Route {
    pub const ALL: [Self; 5] = [
        Self::Suppliers,
        Self::Payments,
        Self::PurchaseOrders,
        Self::Expenses,
        Self::Users,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Self::Suppliers => "Suppliers",
            Self::Payments => "Payments",
            Self::PurchaseOrders => "Purchase orders",
            Self::Expenses => "Expenses",
            Self::Users => "Users",
        }
    }
}

/// Renders the page for the current route.
pub fn current_page(state: &mut State, ui: &mut Ui) {
    let route = state.route;
    ui.heading(route.title());
    ui.add_space(8.0);

    let runtime = state.runtime.clone();
    match route {
        Route::Suppliers => state.suppliers.show(ui, &runtime),
        Route::Payments => state.payments.show(ui, &runtime),
        Route::PurchaseOrders => state.purchase_orders.show(ui, &runtime),
        Route::Expenses => state.expenses.show(ui, &runtime),
        Route::Users => state.users.show(ui, &runtime),
    }
}
