use std::sync::Arc;

use payables_business::resources::{Expense, PaymentBatch, PurchaseOrder, Supplier, User};
use payables_business::{BusinessConfig, ResourceApi, ResourceStore};

use crate::pages::Route;
use crate::widgets::resource_table::{ResourceScreen, TableView};

/// The main application state.
pub struct State {
    pub config: Arc<BusinessConfig>,
    /// Runtime the network work of every page is spawned on.
    pub runtime: tokio::runtime::Handle,
    pub route: Route,
    pub suppliers: ResourceScreen<Supplier>,
    pub payments: ResourceScreen<PaymentBatch>,
    pub purchase_orders: ResourceScreen<PurchaseOrder>,
    pub expenses: ResourceScreen<Expense>,
    pub users: ResourceScreen<User>,
}

impl State {
    pub fn new(config: BusinessConfig, runtime: tokio::runtime::Handle) -> Self {
        let config = Arc::new(config);
        Self {
            suppliers: screen(&config),
            payments: screen(&config),
            purchase_orders: screen(&config),
            expenses: screen(&config),
            users: screen(&config),
            route: Route::default(),
            runtime,
            config,
        }
    }

    /// State pointed at `base_url`, spawning onto the current tokio runtime.
    ///
    /// Must be called from within a runtime, e.g. a `#[tokio::test]`.
    pub fn test(base_url: String) -> Self {
        Self::new(
            BusinessConfig::new(base_url),
            tokio::runtime::Handle::current(),
        )
    }
}

fn screen<R: TableView>(config: &Arc<BusinessConfig>) -> ResourceScreen<R> {
    ResourceScreen::new(ResourceStore::new(ResourceApi::new(Arc::clone(config))))
}
