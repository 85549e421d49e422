//! Pages must degrade gracefully when the store refuses writes.

mod support;

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::test;
use todo_app::domain::ports::TaskRepository;

use support::{ReadOnlyStore, app_over, body_text, seeded_store};

fn read_only() -> Arc<ReadOnlyStore> {
    Arc::new(ReadOnlyStore::new(seeded_store()))
}

#[actix_web::test]
async fn failed_toggle_on_detail_keeps_the_page_with_a_banner() {
    let app = test::init_service(app_over(read_only())).await;
    let res = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/todos/1/toggle")
            .set_form([("return_to", "detail")])
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::CONFLICT);
    let body = body_text(res).await;
    assert!(body.contains("Failed to update todo"), "{body}");
    assert!(body.contains("Learn TanStack Router"));
    assert!(body.contains("Mark as Completed"), "task left unchanged");
}

#[actix_web::test]
async fn failed_delete_from_list_renders_an_alert() {
    let app = test::init_service(app_over(read_only())).await;
    let res = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/todos/2/delete")
            .set_form([("return_to", "list")])
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::CONFLICT);
    assert!(body_text(res).await.contains("Failed to delete todo"));
}

#[actix_web::test]
async fn failed_create_keeps_the_typed_values() {
    let app = test::init_service(app_over(read_only())).await;
    let res = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/todos")
            .set_form([("title", "Draft"), ("description", "notes")])
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::CONFLICT);
    let body = body_text(res).await;
    assert!(body.contains("Failed to create todo. Please try again."));
    assert!(body.contains("value=\"Draft\""));
    assert!(body.contains(">notes</textarea>"));
}

#[actix_web::test]
async fn failed_update_rerenders_the_edit_form() {
    let app = test::init_service(app_over(read_only())).await;
    let res = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/todos/3/edit")
            .set_form([("title", "Ship it"), ("description", "")])
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::CONFLICT);
    let body = body_text(res).await;
    assert!(body.contains("Failed to update todo. Please try again."));
    assert!(body.contains("value=\"Ship it\""));
}

#[actix_web::test]
async fn mutations_on_unknown_ids_fail_without_side_effects() {
    let store = seeded_store();
    let app = test::init_service(app_over(store.clone())).await;
    let res = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/todos/junk/toggle")
            .set_form([("return_to", "list")])
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::CONFLICT);
    assert!(body_text(res).await.contains("Failed to update todo"));

    let res = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/todos/77/delete")
            .set_form([("return_to", "list")])
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::CONFLICT);
    assert_eq!(store.list().await.expect("list").len(), 3);
}
