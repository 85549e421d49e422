//! `/todos/new` and the create submission.

use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, ResponseError, get, post, web};

use super::{html, redirect, visited};
use crate::inbound::http::error::PageResult;
use crate::inbound::http::forms::TaskForm;
use crate::inbound::http::session::HistorySession;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::views::layout::PageMeta;
use crate::inbound::http::views::todos::{FormValues, TaskFormView};
use crate::routing::{AppRoute, navigation};

fn form_page(status: StatusCode, values: &FormValues, error: Option<&str>) -> HttpResponse {
    let body = TaskFormView {
        heading: "Create New Todo",
        action: "/todos".to_owned(),
        submit_label: "Create Todo",
        cancel_href: navigation::to_todos_list().href(),
        values,
        error,
    }
    .render();
    html(status, &PageMeta::from(&AppRoute::NewTodo), &body)
}

#[get("/todos/new")]
pub async fn new_todo(req: HttpRequest, history: HistorySession) -> PageResult<HttpResponse> {
    history.record(visited(&req))?;
    Ok(form_page(StatusCode::OK, &FormValues::default(), None))
}

/// Create, then land on the list. Rejected input re-renders the form and
/// never reaches the store.
#[post("/todos")]
pub async fn create_todo(
    state: web::Data<HttpState>,
    form: web::Form<TaskForm>,
) -> PageResult<HttpResponse> {
    let form = form.into_inner();
    let new_task = match form.to_new_task() {
        Ok(new_task) => new_task,
        Err(error) => {
            return Ok(form_page(
                error.status_code(),
                &form.values(),
                Some(error.message()),
            ));
        }
    };
    match state.tasks().create(new_task).await {
        Ok(_) => {
            navigation::refresh(&state.loaders);
            Ok(redirect(&navigation::to_todos_list()))
        }
        Err(error) => Ok(form_page(
            error.status_code(),
            &form.values(),
            Some("Failed to create todo. Please try again."),
        )),
    }
}
