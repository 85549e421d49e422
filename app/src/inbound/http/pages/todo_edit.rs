//! `/todos/{id}/edit` and the update submission.

use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, ResponseError, get, post, web};

use super::{html, mutation_target, redirect, visited};
use crate::domain::TaskId;
use crate::inbound::http::error::PageResult;
use crate::inbound::http::forms::TaskForm;
use crate::inbound::http::session::HistorySession;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::views::layout::{PageMeta, Section};
use crate::inbound::http::views::todos::{self, FormValues, TaskFormView};
use crate::inbound::http::views::fallbacks;
use crate::routing::{AppRoute, navigation};

fn form_page(
    status: StatusCode,
    id: TaskId,
    values: &FormValues,
    error: Option<&str>,
) -> HttpResponse {
    let body = TaskFormView {
        heading: "Edit Todo",
        action: AppRoute::EditTodo(id).href(),
        submit_label: "Update Todo",
        cancel_href: navigation::to_todo(id).href(),
        values,
        error,
    }
    .render();
    html(status, &PageMeta::from(&AppRoute::EditTodo(id)), &body)
}

fn missing_todo() -> HttpResponse {
    html(
        StatusCode::NOT_FOUND,
        &PageMeta::new("Edit Todo · Todo App", Some(Section::Todos)),
        &todos::section(&fallbacks::todo_not_found()),
    )
}

#[get("/todos/{id}/edit")]
pub async fn edit_todo(
    req: HttpRequest,
    state: web::Data<HttpState>,
    history: HistorySession,
    path: web::Path<String>,
) -> PageResult<HttpResponse> {
    history.record(visited(&req))?;
    let Ok(id) = path.parse::<TaskId>() else {
        return Ok(missing_todo());
    };
    Ok(match state.loaders.edit_todo(id).await? {
        Some(task) => form_page(StatusCode::OK, id, &FormValues::from(&task), None),
        None => missing_todo(),
    })
}

/// Update title and description, then land on the detail page.
#[post("/todos/{id}/edit")]
pub async fn update_todo(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    form: web::Form<TaskForm>,
) -> PageResult<HttpResponse> {
    let id = mutation_target(&path, "update")?;
    let form = form.into_inner();
    let patch = match form.to_patch() {
        Ok(patch) => patch,
        Err(error) => {
            return Ok(form_page(
                error.status_code(),
                id,
                &form.values(),
                Some(error.message()),
            ));
        }
    };
    match state.tasks().update(id, patch).await {
        Ok(_) => {
            navigation::refresh(&state.loaders);
            Ok(redirect(&navigation::to_todo(id)))
        }
        Err(error) => Ok(form_page(
            error.status_code(),
            id,
            &form.values(),
            Some("Failed to update todo. Please try again."),
        )),
    }
}
