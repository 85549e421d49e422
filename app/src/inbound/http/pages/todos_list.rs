//! `/todos`: filterable task list.

use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, get, web};

use super::{html, visited};
use crate::inbound::http::error::PageResult;
use crate::inbound::http::session::HistorySession;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::views::layout::PageMeta;
use crate::inbound::http::views::todos;
use crate::routing::{AppRoute, RawListSearch, TodoListSearch};

/// List page. Failures fall through to the top-level fallback.
#[get("/todos")]
pub async fn todos_list(
    req: HttpRequest,
    state: web::Data<HttpState>,
    history: HistorySession,
    query: web::Query<RawListSearch>,
) -> PageResult<HttpResponse> {
    history.record(visited(&req))?;
    let search = TodoListSearch::validate(query.into_inner());
    let tasks = state.loaders.todo_list(&search).await?;
    let meta = PageMeta::from(&AppRoute::TodoList(search.clone()));
    Ok(html(
        StatusCode::OK,
        &meta,
        &todos::list(&tasks, &search),
    ))
}
