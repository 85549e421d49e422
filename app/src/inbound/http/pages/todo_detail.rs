//! `/todos/{id}`: one task, with a skeleton when the loader is slow.
//!
//! When the loader misses the pending threshold the response is streamed:
//! the shell and skeleton go out first, the content follows once the loader
//! is done and the skeleton has been up for its minimum time.

use std::convert::Infallible;
use std::future::Future;

use actix_web::http::StatusCode;
use actix_web::http::header::ContentType;
use actix_web::web::Bytes;
use actix_web::{HttpRequest, HttpResponse, ResponseError, get, web};
use futures_util::{StreamExt, future, stream};

use super::{html, visited};
use crate::domain::{Error, ErrorCode, Task, TaskId, TraceId};
use crate::inbound::http::error::PageResult;
use crate::inbound::http::session::HistorySession;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::views::fallbacks::{self, GENERIC_FAILURE, HIDE_SKELETON};
use crate::inbound::http::views::layout::{self, PageMeta, Section};
use crate::inbound::http::views::todos;
use crate::routing::{AppRoute, PendingLoad, Raced};

/// Route-level error view; internal details stay in the logs.
pub(crate) fn loader_error_body(error: &Error) -> String {
    let message = match error.code() {
        ErrorCode::InternalError => GENERIC_FAILURE,
        _ => error.message(),
    };
    todos::section(&fallbacks::loading_error(message))
}

/// Render a settled detail load, optionally with a failed-mutation banner.
pub(crate) fn detail_response(
    meta: &PageMeta,
    loaded: Result<Task, Error>,
    banner: Option<&Error>,
) -> HttpResponse {
    match loaded {
        Ok(task) => {
            let status = banner.map_or(StatusCode::OK, ResponseError::status_code);
            html(status, meta, &todos::detail(&task, banner.map(Error::message)))
        }
        Err(error) => html(error.status_code(), meta, &loader_error_body(&error)),
    }
}

fn streamed<F>(meta: &PageMeta, pending: PendingLoad<F>) -> HttpResponse
where
    F: Future<Output = Result<Task, Error>> + 'static,
{
    let trace_id = TraceId::current();
    let head = Bytes::from(format!(
        "{}{}",
        layout::open(meta),
        fallbacks::detail_skeleton()
    ));
    let tail = async move {
        let loaded = match trace_id {
            Some(id) => TraceId::scope(id, pending.finish()).await,
            None => pending.finish().await,
        };
        let body = match loaded {
            Ok(task) => todos::detail(&task, None),
            Err(error) => loader_error_body(&error),
        };
        Ok::<_, Infallible>(Bytes::from(format!(
            "{HIDE_SKELETON}{body}{}",
            layout::close()
        )))
    };
    let body = stream::once(future::ready(Ok::<_, Infallible>(head))).chain(stream::once(tail));
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .streaming(body)
}

#[get("/todos/{id}")]
pub async fn todo_detail(
    req: HttpRequest,
    state: web::Data<HttpState>,
    history: HistorySession,
    path: web::Path<String>,
) -> PageResult<HttpResponse> {
    history.record(visited(&req))?;
    let raw = path.into_inner();
    let Ok(id) = raw.parse::<TaskId>() else {
        let error =
            Error::not_found(format!("Todo with ID {raw} not found")).context("Failed to load todo");
        let meta = PageMeta::new("Todo · Todo App", Some(Section::Todos));
        return Ok(detail_response(&meta, Err(error), None));
    };

    let route = AppRoute::TodoDetail(id);
    let meta = PageMeta::from(&route);
    let loaders = state.loaders.clone();
    let load = async move { loaders.todo_detail(id).await };

    let Some(policy) = route.pending_policy() else {
        return Ok(detail_response(&meta, load.await, None));
    };
    Ok(match policy.race(load).await {
        Raced::Ready(loaded) => detail_response(&meta, loaded, None),
        Raced::Pending(pending) => streamed(&meta, pending),
    })
}
