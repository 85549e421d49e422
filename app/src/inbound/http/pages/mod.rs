//! Route controllers, one module per page.
//!
//! GET handlers record the visit in the session history, run the route's
//! loader and render. POST handlers mutate through the task service, drop
//! cached loader data and answer with a 303 to the page the navigation
//! intent names.

pub mod actions;
pub mod static_pages;
pub mod todo_detail;
pub mod todo_edit;
pub mod todo_new;
pub mod todos_list;

use actix_web::http::StatusCode;
use actix_web::http::header::{self, ContentType};
use actix_web::{HttpRequest, HttpResponse};

use super::views::layout::{self, PageMeta};
use crate::domain::{Error, TaskId};
use crate::routing::NavigationTarget;

pub use static_pages::not_found;

/// Full HTML document response.
pub(crate) fn html(status: StatusCode, meta: &PageMeta, body: &str) -> HttpResponse {
    HttpResponse::build(status)
        .content_type(ContentType::html())
        .body(layout::page(meta, body))
}

/// Post/Redirect/Get answer.
pub(crate) fn redirect(target: &NavigationTarget) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, target.href()))
        .finish()
}

/// Path and query of the page being rendered, as history records it.
pub(crate) fn visited(req: &HttpRequest) -> String {
    req.uri()
        .path_and_query()
        .map_or_else(|| req.path().to_owned(), |pq| pq.as_str().to_owned())
}

/// Parse a task id from a mutation path; junk ids fail like a missing task.
pub(crate) fn mutation_target(raw: &str, action: &str) -> Result<TaskId, Error> {
    raw.parse()
        .map_err(|_| Error::mutation_failed(format!("Failed to {action} todo")))
}
