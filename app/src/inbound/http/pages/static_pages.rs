//! Home, about, error-test and not-found pages.

use actix_web::http::{Method, StatusCode};
use actix_web::{HttpRequest, HttpResponse, get, web};
use serde::Deserialize;

use super::{html, visited};
use crate::domain::Error;
use crate::inbound::http::error::PageResult;
use crate::inbound::http::session::HistorySession;
use crate::inbound::http::views::layout::PageMeta;
use crate::inbound::http::views::{fallbacks, static_pages};
use crate::routing::AppRoute;

#[get("/")]
pub async fn home(req: HttpRequest, history: HistorySession) -> PageResult<HttpResponse> {
    history.record(visited(&req))?;
    Ok(html(
        StatusCode::OK,
        &PageMeta::from(&AppRoute::Home),
        static_pages::home(),
    ))
}

#[get("/about")]
pub async fn about(req: HttpRequest, history: HistorySession) -> PageResult<HttpResponse> {
    history.record(visited(&req))?;
    Ok(html(
        StatusCode::OK,
        &PageMeta::from(&AppRoute::About),
        static_pages::about(),
    ))
}

#[derive(Debug, Default, Deserialize)]
pub struct ErrorTestQuery {
    pub trigger: Option<String>,
}

/// `?trigger=render` fails the render so the top-level fallback shows.
#[get("/error-test")]
pub async fn error_test(
    req: HttpRequest,
    history: HistorySession,
    query: web::Query<ErrorTestQuery>,
) -> PageResult<HttpResponse> {
    history.record(visited(&req))?;
    if query.trigger.as_deref() == Some("render") {
        return Err(Error::internal(
            "This is a test error to demonstrate error boundaries!",
        ));
    }
    Ok(html(
        StatusCode::OK,
        &PageMeta::from(&AppRoute::ErrorTest),
        static_pages::error_test(),
    ))
}

/// Serves `/404` and every path no route claims.
pub async fn not_found(req: HttpRequest, history: HistorySession) -> PageResult<HttpResponse> {
    if req.method() == Method::GET {
        history.record(visited(&req))?;
    }
    Ok(html(
        StatusCode::NOT_FOUND,
        &PageMeta::from(&AppRoute::NotFound),
        &fallbacks::not_found(),
    ))
}

#[get("/404")]
pub async fn not_found_page(req: HttpRequest, history: HistorySession) -> PageResult<HttpResponse> {
    not_found(req, history).await
}
