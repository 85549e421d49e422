//! Slow detail loads stream a skeleton before the content.

mod support;

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::test;
use mockable::DefaultClock;
use todo_app::outbound::memory::{InMemoryTaskStore, LatencyProfile};

use support::{app_over, body_text, get};

fn store(scale_percent: u32) -> Arc<InMemoryTaskStore> {
    Arc::new(InMemoryTaskStore::seeded(
        Arc::new(DefaultClock),
        LatencyProfile::scaled(scale_percent),
    ))
}

#[actix_web::test]
async fn slow_detail_streams_skeleton_then_content() {
    tokio::time::pause();
    // 200ms baseline lookup at 400% overshoots the 500ms pending threshold.
    let app = test::init_service(app_over(store(400))).await;
    let res = get(&app, "/todos/1").await;
    assert_eq!(res.status(), StatusCode::OK);

    let body = body_text(res).await;
    let skeleton = body.find("pending-skeleton").expect("skeleton streamed");
    let content = body.find("Learn TanStack Router").expect("content streamed");
    assert!(skeleton < content);
    assert!(body.contains("#pending-skeleton{display:none}"));
    assert!(body.trim_end().ends_with("</html>"));
}

#[actix_web::test]
async fn fast_detail_renders_without_skeleton() {
    tokio::time::pause();
    let app = test::init_service(app_over(store(100))).await;
    let res = get(&app, "/todos/1").await;
    assert_eq!(res.status(), StatusCode::OK);
    let body = body_text(res).await;
    assert!(!body.contains("pending-skeleton"));
    assert!(body.contains("Learn TanStack Router"));
}

#[actix_web::test]
async fn slow_missing_todo_reports_error_after_skeleton() {
    tokio::time::pause();
    let app = test::init_service(app_over(store(400))).await;
    let res = get(&app, "/todos/99999").await;
    assert_eq!(res.status(), StatusCode::OK, "status is committed with the shell");
    let body = body_text(res).await;
    assert!(body.contains("pending-skeleton"));
    assert!(body.contains("Failed to load todo: Todo with ID 99999 not found"));
}
