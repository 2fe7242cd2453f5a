//! Selection across fetches, filters and bulk deletes.

mod common;

use common::{EXPENSES_PATH, TestCtx, expense_json, list_body};
use payables_business::resources::Expense;
use payables_business::{PAGE_PARAM, QueryParams, TablePage};
use payables_states::TriState;
use serde_json::json;
use ustr::Ustr;
use wiremock::matchers::{method, path, query_param, query_param_is_missing};
use wiremock::{Mock, ResponseTemplate};

fn ids(raw: &[&str]) -> Vec<Ustr> {
    raw.iter().copied().map(Ustr::from).collect()
}

async fn mount_all_and_approved(ctx: &TestCtx) {
    Mock::given(method("GET"))
        .and(path(EXPENSES_PATH))
        .and(query_param_is_missing("status"))
        .respond_with(ResponseTemplate::new(200).set_body_json(list_body(
            vec![
                expense_json("a", 1.0, "Pending"),
                expense_json("b", 2.0, "Approved"),
                expense_json("c", 3.0, "Pending"),
            ],
            1,
            3,
        )))
        .mount(&ctx.mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path(EXPENSES_PATH))
        .and(query_param("status", "Approved"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(list_body(vec![expense_json("b", 2.0, "Approved")], 1, 1)),
        )
        .mount(&ctx.mock_server)
        .await;
}

async fn loaded_page(ctx: &TestCtx) -> TablePage<Expense> {
    mount_all_and_approved(ctx).await;
    let mut page = ctx.expenses();
    page.load(QueryParams::new()).await;
    page
}

#[tokio::test]
async fn test_select_all_then_filter_keeps_only_visible_ids() {
    let ctx = TestCtx::new().await;
    let mut page = loaded_page(&ctx).await;

    let visible = page.visible_ids();
    page.selection_mut().toggle_all(&visible);
    assert_eq!(page.selection().tri_state(&visible), TriState::All);

    page.set_filter("status", "Approved").await;

    let visible = page.visible_ids();
    assert_eq!(visible, ids(&["b"]));
    assert_eq!(page.selection().count(), 1);
    assert!(page.selection().all_selected(&visible));
    assert_eq!(page.params().get(PAGE_PARAM).map(String::as_str), Some("1"));
}

#[tokio::test]
async fn test_clearing_filter_restores_rows_without_selection() {
    let ctx = TestCtx::new().await;
    let mut page = loaded_page(&ctx).await;

    page.set_filter("status", "Approved").await;
    let visible = page.visible_ids();
    page.selection_mut().toggle_all(&visible);

    page.set_filter("status", "  ").await;

    let visible = page.visible_ids();
    assert_eq!(visible, ids(&["a", "b", "c"]));
    assert!(!page.params().contains_key("status"));
    assert_eq!(page.selection().tri_state(&visible), TriState::Some);
}

#[tokio::test]
async fn test_bulk_delete_reports_partial_failure() {
    let ctx = TestCtx::new().await;
    Mock::given(method("DELETE"))
        .and(path(format!("{EXPENSES_PATH}/a")))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&ctx.mock_server)
        .await;
    Mock::given(method("DELETE"))
        .and(path(format!("{EXPENSES_PATH}/c")))
        .respond_with(
            ResponseTemplate::new(409).set_body_json(json!({ "message": "already reimbursed" })),
        )
        .expect(1)
        .mount(&ctx.mock_server)
        .await;
    let mut page = loaded_page(&ctx).await;

    page.selection_mut().toggle(Ustr::from("a"));
    page.selection_mut().toggle(Ustr::from("c"));

    assert!(!page.handle_bulk_delete().await);

    assert_eq!(page.visible_ids(), ids(&["b", "c"]));
    assert_eq!(page.store().pagination().total_count, 2);
    let selected: Vec<Ustr> = page.selection().selected_ids().copied().collect();
    assert_eq!(selected, ids(&["c"]));
    let notice = page.notice().expect("bulk delete notice");
    assert!(notice.is_error());
    assert!(notice.message().contains("already reimbursed"));
}

#[tokio::test]
async fn test_bulk_delete_without_selection_does_nothing() {
    let ctx = TestCtx::new().await;
    Mock::given(method("DELETE"))
        .respond_with(ResponseTemplate::new(204))
        .expect(0)
        .mount(&ctx.mock_server)
        .await;
    let mut page = loaded_page(&ctx).await;

    assert!(!page.handle_bulk_delete().await);
    assert_eq!(page.notice(), None);
}

#[tokio::test]
async fn test_bulk_delete_of_whole_page_clears_selection() {
    let ctx = TestCtx::new().await;
    ctx.mock_expense_list(
        vec![
            expense_json("x", 1.0, "Pending"),
            expense_json("y", 2.0, "Pending"),
        ],
        2,
    )
    .await;
    Mock::given(method("DELETE"))
        .respond_with(ResponseTemplate::new(204))
        .expect(2)
        .mount(&ctx.mock_server)
        .await;
    let mut page = ctx.expenses();
    page.load(QueryParams::new()).await;

    let visible = page.visible_ids();
    page.selection_mut().toggle_all(&visible);
    assert!(page.handle_bulk_delete().await);

    assert!(page.visible_ids().is_empty());
    assert_eq!(page.store().pagination().total_count, 0);
    assert_eq!(page.selection().count(), 0);
    assert_eq!(
        page.notice(),
        Some(&payables_business::Notice::Info("Deleted 2 expense(s)".to_owned()))
    );
}
