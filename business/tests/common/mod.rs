use std::sync::Arc;

use payables_business::resources::Expense;
use payables_business::{BusinessConfig, Resource, ResourceApi, ResourceStore, TablePage};
use serde_json::{Value, json};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const EXPENSES_PATH: &str = "/api/expenses";

/// A mock server plus the config pointing at it.
pub struct TestCtx {
    pub mock_server: MockServer,
    pub config: Arc<BusinessConfig>,
}

impl TestCtx {
    pub async fn new() -> Self {
        let _ = env_logger::builder().is_test(true).try_init();
        let mock_server = MockServer::start().await;
        let config = Arc::new(BusinessConfig::new(mock_server.uri()));
        Self {
            mock_server,
            config,
        }
    }

    pub fn store<R: Resource>(&self) -> ResourceStore<R> {
        ResourceStore::new(ResourceApi::new(Arc::clone(&self.config)))
    }

    pub fn page<R: Resource>(&self) -> TablePage<R> {
        TablePage::new(self.store())
    }

    pub fn expenses(&self) -> TablePage<Expense> {
        self.page()
    }

    /// Mounts `GET /api/expenses` answering with `rows`.
    pub async fn mock_expense_list(&self, rows: Vec<Value>, total: u64) {
        Mock::given(method("GET"))
            .and(path(EXPENSES_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_json(list_body(rows, 1, total)))
            .mount(&self.mock_server)
            .await;
    }
}

pub fn expense_json(id: &str, amount: f64, status: &str) -> Value {
    json!({
        "id": id,
        "description": format!("Expense {id}"),
        "category": "Travel",
        "amount": amount,
        "incurredOn": "2026-03-01",
        "status": status,
    })
}

pub fn list_body(rows: Vec<Value>, page: u32, total: u64) -> Value {
    json!({
        "data": rows,
        "pagination": {
            "page": page,
            "totalCount": total,
            "hasNext": false,
            "hasPrevious": page > 1,
        }
    })
}
