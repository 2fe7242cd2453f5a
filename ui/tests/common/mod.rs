use std::time::Duration;

use egui_kittest::Harness;
use payables_ui::PayablesApp;
use payables_ui::state::State;
use serde_json::{Value, json};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const DEFAULT_NETWORK_WAIT_MS: u64 = 100;

/// Gives spawned requests time to reach the mock server and come back.
pub async fn yield_wait_for_network(ms: u64) {
    tokio::time::sleep(Duration::from_millis(ms)).await;
}

pub struct TestCtx<'a> {
    mock_server: MockServer,
    harness: Harness<'a, PayablesApp>,
}

impl<'a> TestCtx<'a> {
    /// App wired to a mock server whose collections each hold one row.
    pub async fn new_app() -> Self {
        let _ = env_logger::builder().is_test(true).try_init();
        let mock_server = MockServer::start().await;
        for (endpoint, row) in sample_rows() {
            Mock::given(method("GET"))
                .and(path(format!("/api/{endpoint}")))
                .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                    "data": [row],
                    "pagination": {
                        "page": 1,
                        "totalCount": 1,
                        "hasNext": false,
                        "hasPrevious": false,
                    }
                })))
                .mount(&mock_server)
                .await;
        }

        let app = PayablesApp::new(State::test(mock_server.uri()));
        let harness = Harness::new_eframe(|_| app);
        Self {
            mock_server,
            harness,
        }
    }

    pub fn harness_mut(&mut self) -> &mut Harness<'a, PayablesApp> {
        &mut self.harness
    }

    pub fn mock_server(&self) -> &MockServer {
        &self.mock_server
    }

    /// Steps frames while waiting for the network, so dispatched outcomes
    /// are picked up by the render loop.
    pub async fn settle(&mut self) {
        for _ in 0..3 {
            self.harness.step();
            yield_wait_for_network(DEFAULT_NETWORK_WAIT_MS).await;
        }
        self.harness.step();
    }
}

fn sample_rows() -> Vec<(&'static str, Value)> {
    vec![
        (
            "suppliers",
            json!({
                "id": "s1",
                "name": "Acme Paper",
                "email": "ap@acme.example",
                "category": "Office",
                "status": "Active",
                "paymentTermsDays": 30,
            }),
        ),
        (
            "payments",
            json!({
                "id": "p1",
                "name": "March run",
                "paymentDate": "2026-03-31",
                "amount": 1250.0,
                "currency": "USD",
                "status": "Approved",
                "paymentCount": 4,
            }),
        ),
        (
            "purchase-orders",
            json!({
                "id": "po1",
                "number": "PO-1001",
                "supplierName": "Acme Paper",
                "total": 420.0,
                "status": "Pending",
            }),
        ),
        (
            "expenses",
            json!({
                "id": "e1",
                "description": "Client dinner",
                "category": "Meals",
                "amount": 86.4,
                "status": "Pending",
            }),
        ),
        (
            "users",
            json!({
                "id": "u1",
                "name": "Dana Clerk",
                "email": "dana@example.com",
                "role": "Clerk",
                "active": true,
            }),
        ),
    ]
}
