//! Quick actions and history navigation.

use actix_web::{HttpResponse, get, post, web};

use super::todo_detail::detail_response;
use super::{mutation_target, redirect};
use crate::domain::{Error, TaskId};
use crate::inbound::http::error::PageResult;
use crate::inbound::http::forms::{QuickActionForm, ReturnTo};
use crate::inbound::http::session::HistorySession;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::views::layout::PageMeta;
use crate::routing::{AppRoute, NavigationTarget, navigation};

/// Re-render the detail page with the failure in a banner. From the list
/// there is no page to return to, so the error renders standalone.
async fn report_failure(
    state: &HttpState,
    id: TaskId,
    return_to: ReturnTo,
    error: Error,
) -> PageResult<HttpResponse> {
    match return_to {
        ReturnTo::Detail => {
            navigation::refresh(&state.loaders);
            let loaded = state.loaders.todo_detail(id).await;
            let meta = PageMeta::from(&AppRoute::TodoDetail(id));
            Ok(detail_response(&meta, loaded, Some(&error)))
        }
        ReturnTo::List => Err(error),
    }
}

fn current_page(history: &HistorySession) -> NavigationTarget {
    history.current_or(navigation::default_back_fallback())
}

#[post("/todos/{id}/toggle")]
pub async fn toggle_todo(
    state: web::Data<HttpState>,
    history: HistorySession,
    path: web::Path<String>,
    form: web::Form<QuickActionForm>,
) -> PageResult<HttpResponse> {
    let id = mutation_target(&path, "update")?;
    let return_to = form.return_to;
    match state.tasks().toggle(id).await {
        Ok(_) => {
            navigation::refresh(&state.loaders);
            let target = match return_to {
                ReturnTo::Detail => navigation::to_todo(id),
                ReturnTo::List => current_page(&history),
            };
            Ok(redirect(&target))
        }
        Err(error) => report_failure(&state, id, return_to, error).await,
    }
}

#[post("/todos/{id}/delete")]
pub async fn delete_todo(
    state: web::Data<HttpState>,
    history: HistorySession,
    path: web::Path<String>,
    form: web::Form<QuickActionForm>,
) -> PageResult<HttpResponse> {
    let id = mutation_target(&path, "delete")?;
    let return_to = form.return_to;
    match state.tasks().delete(id).await {
        Ok(()) => {
            navigation::refresh(&state.loaders);
            let target = match return_to {
                ReturnTo::Detail => navigation::to_todos_list(),
                ReturnTo::List => current_page(&history),
            };
            Ok(redirect(&target))
        }
        Err(error) => report_failure(&state, id, return_to, error).await,
    }
}

/// Drop cached loader data and reload the page the visitor was on.
#[post("/refresh")]
pub async fn refresh(
    state: web::Data<HttpState>,
    history: HistorySession,
) -> PageResult<HttpResponse> {
    navigation::refresh(&state.loaders);
    Ok(redirect(&current_page(&history)))
}

#[get("/back")]
pub async fn back(history: HistorySession) -> PageResult<HttpResponse> {
    let target = history.go_back(navigation::default_back_fallback())?;
    Ok(redirect(&target))
}
