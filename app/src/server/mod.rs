//! Server construction and middleware wiring.

mod config;

pub use config::{AppSettings, ConfigError, ServerConfig, session_key};

use std::sync::Arc;

use actix_session::{SessionMiddleware, config::CookieContentSecurity, storage::CookieSessionStore};
use actix_web::cookie::{Key, SameSite};
use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use mockable::DefaultClock;
use tracing::info;

use todo_app::Trace;
use todo_app::inbound::http::pages::not_found;
use todo_app::inbound::http::state::HttpState;
use todo_app::inbound::http::configure;
use todo_app::outbound::memory::{InMemoryTaskStore, LatencyProfile};

#[derive(Clone)]
struct AppDependencies {
    http_state: web::Data<HttpState>,
    key: Key,
    cookie_secure: bool,
}

fn build_app(
    deps: AppDependencies,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let AppDependencies {
        http_state,
        key,
        cookie_secure,
    } = deps;

    let session = SessionMiddleware::builder(CookieSessionStore::default(), key)
        .cookie_name("session".into())
        .cookie_path("/".into())
        .cookie_secure(cookie_secure)
        .cookie_http_only(true)
        .cookie_content_security(CookieContentSecurity::Private)
        .cookie_same_site(SameSite::Lax)
        .build();

    App::new()
        .app_data(http_state)
        .wrap(session)
        .wrap(Trace)
        .configure(configure)
        .default_service(web::to(not_found))
}

fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    let clock = Arc::new(DefaultClock);
    let store = InMemoryTaskStore::seeded(
        clock.clone(),
        LatencyProfile::scaled(config.latency_scale_percent),
    );
    web::Data::new(HttpState::new(Arc::new(store), clock))
}

/// Construct the HTTP server over a freshly seeded in-memory store.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(config: ServerConfig) -> std::io::Result<Server> {
    let http_state = build_http_state(&config);
    let ServerConfig {
        key,
        cookie_secure,
        bind_addr,
        latency_scale_percent,
    } = config;

    let server = HttpServer::new(move || {
        build_app(AppDependencies {
            http_state: http_state.clone(),
            key: key.clone(),
            cookie_secure,
        })
    })
    .bind(bind_addr.clone())?
    .run();

    info!(
        host = %bind_addr.0,
        port = bind_addr.1,
        latency_scale_percent,
        "todo server listening"
    );
    Ok(server)
}

#[cfg(test)]
mod tests {
    //! Full app wiring: middleware order, route table and fallback.

    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::test;
    use rstest::rstest;

    fn deps() -> AppDependencies {
        let store = InMemoryTaskStore::seeded(Arc::new(DefaultClock), LatencyProfile::disabled());
        AppDependencies {
            http_state: web::Data::new(HttpState::new(Arc::new(store), Arc::new(DefaultClock))),
            key: Key::generate(),
            cookie_secure: false,
        }
    }

    #[rstest]
    #[case("/", StatusCode::OK)]
    #[case("/todos", StatusCode::OK)]
    #[case("/todos/new", StatusCode::OK)]
    #[case("/todos/1", StatusCode::OK)]
    #[case("/todos/1/edit", StatusCode::OK)]
    #[case("/about", StatusCode::OK)]
    #[case("/404", StatusCode::NOT_FOUND)]
    #[case("/nowhere", StatusCode::NOT_FOUND)]
    #[actix_rt::test]
    async fn routes_resolve(#[case] uri: &str, #[case] expected: StatusCode) {
        let app = test::init_service(build_app(deps())).await;
        let res = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;
        assert_eq!(res.status(), expected, "{uri}");
        assert!(res.headers().contains_key("trace-id"));
    }

    #[actix_rt::test]
    async fn session_cookie_is_http_only() {
        let app = test::init_service(build_app(deps())).await;
        let res = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
        let cookie = res
            .response()
            .cookies()
            .find(|cookie| cookie.name() == "session")
            .expect("session cookie set");
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.same_site(), Some(SameSite::Lax));
    }
}
