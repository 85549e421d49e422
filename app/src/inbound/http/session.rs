//! Navigation history kept in the visitor's cookie session.
//!
//! Wraps the Actix session so handlers only see history operations. A
//! history that fails to decode is treated as empty rather than failing
//! the page.

use actix_session::Session;
use actix_web::{FromRequest, HttpRequest, dev::Payload};
use futures_util::future::LocalBoxFuture;
use tracing::warn;

use crate::domain::Error;
use crate::routing::{AppRoute, NavigationHistory, NavigationTarget, navigation};

pub(crate) const HISTORY_KEY: &str = "history";

/// Session-backed [`NavigationHistory`].
#[derive(Clone)]
pub struct HistorySession(Session);

impl HistorySession {
    pub fn new(session: Session) -> Self {
        Self(session)
    }

    /// Current history; empty when absent or unreadable.
    pub fn history(&self) -> NavigationHistory {
        match self.0.get::<NavigationHistory>(HISTORY_KEY) {
            Ok(history) => history.unwrap_or_default(),
            Err(error) => {
                warn!(%error, "discarding unreadable navigation history");
                NavigationHistory::default()
            }
        }
    }

    fn store(&self, history: &NavigationHistory) -> Result<(), Error> {
        self.0
            .insert(HISTORY_KEY, history)
            .map_err(|error| Error::internal(format!("failed to persist session: {error}")))
    }

    /// Append a page visit.
    pub fn record(&self, href: impl Into<String>) -> Result<(), Error> {
        let mut history = self.history();
        history.record(href);
        self.store(&history)
    }

    /// Most recently visited page, or `fallback`.
    pub fn current_or(&self, fallback: AppRoute) -> NavigationTarget {
        match self.history().current() {
            Some(href) => NavigationTarget::Previous(href.to_owned()),
            None => fallback.into(),
        }
    }

    /// Step back one page.
    pub fn go_back(&self, fallback: AppRoute) -> Result<NavigationTarget, Error> {
        let mut history = self.history();
        let target = navigation::go_back(&mut history, fallback);
        self.store(&history)?;
        Ok(target)
    }
}

impl FromRequest for HistorySession {
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let fut = Session::from_request(req, payload);
        Box::pin(async move { fut.await.map(HistorySession::new) })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inbound::http::test_utils::test_session_middleware;
    use actix_web::http::StatusCode;
    use actix_web::{App, HttpResponse, test, web};

    #[actix_web::test]
    async fn history_survives_between_requests() {
        let app = test::init_service(
            App::new()
                .wrap(test_session_middleware())
                .route(
                    "/visit/{page}",
                    web::get().to(|session: HistorySession, page: web::Path<String>| async move {
                        session.record(format!("/{}", page.into_inner()))?;
                        Ok::<_, Error>(HttpResponse::Ok().finish())
                    }),
                )
                .route(
                    "/back",
                    web::get().to(|session: HistorySession| async move {
                        let target = session.go_back(AppRoute::Home)?;
                        Ok::<_, Error>(HttpResponse::Ok().body(target.href()))
                    }),
                ),
        )
        .await;

        let first = test::call_service(
            &app,
            test::TestRequest::get().uri("/visit/about").to_request(),
        )
        .await;
        let cookie = first
            .response()
            .cookies()
            .find(|cookie| cookie.name() == "session")
            .expect("session cookie set")
            .into_owned();

        let second = test::call_service(
            &app,
            test::TestRequest::get()
                .uri("/visit/todos")
                .cookie(cookie)
                .to_request(),
        )
        .await;
        let cookie = second
            .response()
            .cookies()
            .find(|cookie| cookie.name() == "session")
            .expect("session cookie updated")
            .into_owned();

        let back = test::call_service(
            &app,
            test::TestRequest::get().uri("/back").cookie(cookie).to_request(),
        )
        .await;
        assert_eq!(back.status(), StatusCode::OK);
        let body = test::read_body(back).await;
        assert_eq!(body.as_ref(), b"/about");
    }

    #[actix_web::test]
    async fn empty_history_uses_fallback() {
        let app = test::init_service(App::new().wrap(test_session_middleware()).route(
            "/back",
            web::get().to(|session: HistorySession| async move {
                let target = session.go_back(AppRoute::About)?;
                Ok::<_, Error>(HttpResponse::Ok().body(target.href()))
            }),
        ))
        .await;

        let res = test::call_service(&app, test::TestRequest::get().uri("/back").to_request()).await;
        let body = test::read_body(res).await;
        assert_eq!(body.as_ref(), b"/about");
    }
}
