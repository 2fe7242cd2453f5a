//! Create / edit / delete flows of a `TablePage` against a mock server.

mod common;

use common::{EXPENSES_PATH, TestCtx, expense_json};
use payables_business::resources::{Expense, ExpenseDraft, ExpenseField, ExpenseStatus};
use payables_business::{Notice, QueryParams};
use payables_states::RowMode;
use serde_json::json;
use ustr::Ustr;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, ResponseTemplate};

async fn loaded_page(ctx: &TestCtx) -> payables_business::TablePage<Expense> {
    ctx.mock_expense_list(
        vec![
            expense_json("e1", 10.0, "Pending"),
            expense_json("e2", 20.0, "Pending"),
        ],
        2,
    )
    .await;
    let mut page = ctx.expenses();
    page.load(QueryParams::new()).await;
    page
}

#[tokio::test]
async fn test_create_expense_puts_it_on_top() {
    let ctx = TestCtx::new().await;
    Mock::given(method("POST"))
        .and(path(EXPENSES_PATH))
        .and(body_partial_json(json!({
            "description": "Team lunch",
            "amount": 100.0,
            "status": "Pending",
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": "e-new",
            "description": "Team lunch",
            "category": "Meals",
            "amount": 100.0,
            "status": "Pending",
        })))
        .expect(1)
        .mount(&ctx.mock_server)
        .await;
    let mut page = loaded_page(&ctx).await;

    let defaults = ExpenseDraft {
        status: Some(ExpenseStatus::Pending),
        ..Default::default()
    };
    assert!(page.edit_mut().start_create(defaults));
    page.edit_mut()
        .update_create_field(ExpenseField::Description("Team lunch".to_owned()));
    page.edit_mut()
        .update_create_field(ExpenseField::Amount(100.0));

    assert!(page.handle_save_create().await);

    assert!(page.edit().is_read());
    assert_eq!(page.edit().create_draft(), None);
    let data = page.store().data();
    assert_eq!(data[0].id, Ustr::from("e-new"));
    assert_eq!(data.len(), 3);
    assert_eq!(page.store().pagination().total_count, 3);
    assert!(matches!(page.notice(), Some(Notice::Info(_))));
}

#[tokio::test]
async fn test_invalid_draft_is_not_sent() {
    let ctx = TestCtx::new().await;
    Mock::given(method("POST"))
        .and(path(EXPENSES_PATH))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&ctx.mock_server)
        .await;
    let mut page = loaded_page(&ctx).await;

    page.edit_mut().start_create(ExpenseDraft::default());
    page.edit_mut()
        .update_create_field(ExpenseField::Description("Taxi".to_owned()));

    assert!(!page.handle_save_create().await);
    assert!(page.edit().is_creating());
    assert_eq!(
        page.notice(),
        Some(&Notice::Error("Amount is required".to_owned()))
    );
}

#[tokio::test]
async fn test_update_shows_server_version() {
    let ctx = TestCtx::new().await;
    Mock::given(method("PATCH"))
        .and(path(format!("{EXPENSES_PATH}/e2")))
        .and(body_partial_json(json!({ "amount": 25.0 })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "e2",
            "description": "Expense e2",
            "category": "Travel",
            "amount": 25.0,
            "status": "Approved",
        })))
        .mount(&ctx.mock_server)
        .await;
    let mut page = loaded_page(&ctx).await;

    let record = page.store().find(&Ustr::from("e2")).expect("row e2");
    assert!(page.edit_mut().start_edit(&record));
    page.edit_mut()
        .update_edit_field(ExpenseField::Amount(25.0));

    assert!(page.handle_save_edit().await);

    assert!(page.edit().is_read());
    let updated = page.store().find(&Ustr::from("e2")).expect("row e2");
    assert_eq!(updated.amount, 25.0);
    // Server-derived fields come from the response, not the draft.
    assert_eq!(updated.status, ExpenseStatus::Approved);
}

#[tokio::test]
async fn test_not_found_on_save_keeps_row_editing() {
    let ctx = TestCtx::new().await;
    Mock::given(method("PATCH"))
        .and(path(format!("{EXPENSES_PATH}/e1")))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(json!({ "error": "expense not found" })),
        )
        .mount(&ctx.mock_server)
        .await;
    let mut page = loaded_page(&ctx).await;

    let record = page.store().find(&Ustr::from("e1")).expect("row e1");
    page.edit_mut().start_edit(&record);
    page.edit_mut()
        .update_edit_field(ExpenseField::Amount(11.0));

    assert!(!page.handle_save_edit().await);

    assert_eq!(page.edit().mode(), &RowMode::Editing(Ustr::from("e1")));
    assert!(!page.edit().is_saving());
    assert_eq!(
        page.edit().edit_draft().and_then(|d| d.amount),
        Some(11.0)
    );
    let notice = page.notice().expect("error notice");
    assert!(notice.is_error());
    assert!(notice.message().contains("expense not found"));
    assert!(page.store().last_mutation_error().is_some());
}

#[tokio::test]
async fn test_save_resolving_after_cancel_leaves_new_session_alone() {
    let ctx = TestCtx::new().await;
    Mock::given(method("PATCH"))
        .and(path(format!("{EXPENSES_PATH}/e1")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "e1",
            "description": "Expense e1",
            "category": "Travel",
            "amount": 99.0,
            "status": "Pending",
        })))
        .mount(&ctx.mock_server)
        .await;
    let mut page = loaded_page(&ctx).await;

    let e1 = page.store().find(&Ustr::from("e1")).expect("row e1");
    let e2 = page.store().find(&Ustr::from("e2")).expect("row e2");
    page.edit_mut().start_edit(&e1);
    page.edit_mut()
        .update_edit_field(ExpenseField::Amount(99.0));
    let save = page.begin_save_edit().expect("save started");

    page.edit_mut().cancel_edit();
    page.edit_mut().start_edit(&e2);

    let outcome = save.await;
    assert!(page.apply(outcome));

    // The store reflects the saved row, but the user's new session survives.
    assert_eq!(
        page.store().find(&Ustr::from("e1")).map(|r| r.amount),
        Some(99.0)
    );
    assert_eq!(page.edit().mode(), &RowMode::Editing(Ustr::from("e2")));
    assert_eq!(page.edit().edit_draft().and_then(|d| d.amount), Some(20.0));
}

#[tokio::test]
async fn test_cancelled_delete_sends_nothing() {
    let ctx = TestCtx::new().await;
    Mock::given(method("DELETE"))
        .respond_with(ResponseTemplate::new(204))
        .expect(0)
        .mount(&ctx.mock_server)
        .await;
    let mut page = loaded_page(&ctx).await;

    assert!(page.edit_mut().request_delete(Ustr::from("e1")));
    assert!(page.edit().is_deleting(&Ustr::from("e1")));
    assert!(page.edit_mut().cancel_delete());

    assert!(page.edit().is_read());
    assert_eq!(page.store().data().len(), 2);
}

#[tokio::test]
async fn test_confirmed_delete_removes_row() {
    let ctx = TestCtx::new().await;
    Mock::given(method("DELETE"))
        .and(path(format!("{EXPENSES_PATH}/e1")))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&ctx.mock_server)
        .await;
    let mut page = loaded_page(&ctx).await;
    page.selection_mut().toggle(Ustr::from("e1"));

    page.edit_mut().request_delete(Ustr::from("e1"));
    assert!(page.handle_confirm_delete().await);

    assert!(page.edit().is_read());
    assert_eq!(page.visible_ids(), vec![Ustr::from("e2")]);
    assert_eq!(page.store().pagination().total_count, 1);
    assert!(!page.selection().is_selected(&Ustr::from("e1")));
}

#[tokio::test]
async fn test_dispatched_save_is_applied_on_sync() {
    let ctx = TestCtx::new().await;
    Mock::given(method("POST"))
        .and(path(EXPENSES_PATH))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": "e3",
            "description": "Parking",
            "category": "Travel",
            "amount": 8.0,
            "status": "Pending",
        })))
        .mount(&ctx.mock_server)
        .await;
    let mut page = loaded_page(&ctx).await;

    page.edit_mut().start_create(ExpenseDraft {
        description: Some("Parking".to_owned()),
        amount: Some(8.0),
        ..Default::default()
    });
    let job = page.begin_save_create().expect("save started");
    assert!(page.edit().is_saving());

    page.dispatch(job, &tokio::runtime::Handle::current(), || {});
    assert!(page.apply_next().await);

    assert!(page.edit().is_read());
    assert_eq!(page.sync(), 0);
    assert_eq!(page.visible_ids()[0], Ustr::from("e3"));
}
