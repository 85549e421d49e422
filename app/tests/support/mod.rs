//! Shared harness for page-level integration tests.
//!
//! Builds the same app the server runs, minus the cookie hardening that
//! plain-HTTP test requests cannot satisfy.

use std::sync::Arc;

use actix_http::Request;
use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::body::MessageBody;
use actix_web::cookie::{Cookie, Key};
use actix_web::dev::{Service, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, test, web};
use async_trait::async_trait;
use mockable::DefaultClock;
use todo_app::Trace;
use todo_app::domain::ports::{TaskRepository, TaskRepositoryError};
use todo_app::domain::{NewTask, Task, TaskId, TaskPatch};
use todo_app::inbound::http::configure;
use todo_app::inbound::http::pages::not_found;
use todo_app::inbound::http::state::HttpState;
use todo_app::outbound::memory::{InMemoryTaskStore, LatencyProfile};

pub const SESSION_COOKIE: &str = "session";

/// Seeded store with latency switched off.
pub fn seeded_store() -> Arc<InMemoryTaskStore> {
    Arc::new(InMemoryTaskStore::seeded(
        Arc::new(DefaultClock),
        LatencyProfile::disabled(),
    ))
}

/// The full page app over `repository`.
pub fn app_over(
    repository: Arc<dyn TaskRepository>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let session = SessionMiddleware::builder(CookieSessionStore::default(), Key::generate())
        .cookie_name(SESSION_COOKIE.to_owned())
        .cookie_secure(false)
        .build();
    App::new()
        .app_data(web::Data::new(HttpState::new(
            repository,
            Arc::new(DefaultClock),
        )))
        .wrap(session)
        .wrap(Trace)
        .configure(configure)
        .default_service(web::to(not_found))
}

/// Plain GET without a session.
pub async fn get(
    app: &impl Service<Request, Response = ServiceResponse, Error = actix_web::Error>,
    uri: &str,
) -> ServiceResponse {
    test::call_service(app, test::TestRequest::get().uri(uri).to_request()).await
}

/// Session cookie set by `res`, if the handler touched the session.
pub fn session_cookie<B>(res: &ServiceResponse<B>) -> Option<Cookie<'static>> {
    res.response()
        .cookies()
        .find(|cookie| cookie.name() == SESSION_COOKIE)
        .map(Cookie::into_owned)
}

/// `Location` header of a redirect.
pub fn location<B>(res: &ServiceResponse<B>) -> String {
    res.headers()
        .get("location")
        .and_then(|value| value.to_str().ok())
        .expect("redirect carries a location")
        .to_owned()
}

/// Response body as UTF-8.
pub async fn body_text<B: MessageBody>(res: ServiceResponse<B>) -> String {
    let bytes = test::read_body(res).await;
    String::from_utf8(bytes.to_vec()).expect("utf-8 body")
}

/// Store whose reads work and whose writes always fail.
pub struct ReadOnlyStore {
    inner: Arc<InMemoryTaskStore>,
}

impl ReadOnlyStore {
    pub fn new(inner: Arc<InMemoryTaskStore>) -> Self {
        Self { inner }
    }

    fn refuse() -> TaskRepositoryError {
        TaskRepositoryError::unavailable("writes disabled")
    }
}

#[async_trait]
impl TaskRepository for ReadOnlyStore {
    async fn list(&self) -> Result<Vec<Task>, TaskRepositoryError> {
        self.inner.list().await
    }

    async fn get(&self, id: TaskId) -> Result<Option<Task>, TaskRepositoryError> {
        self.inner.get(id).await
    }

    async fn create(&self, _task: NewTask) -> Result<Task, TaskRepositoryError> {
        Err(Self::refuse())
    }

    async fn update(
        &self,
        _id: TaskId,
        _patch: TaskPatch,
    ) -> Result<Option<Task>, TaskRepositoryError> {
        Err(Self::refuse())
    }

    async fn delete(&self, _id: TaskId) -> Result<bool, TaskRepositoryError> {
        Err(Self::refuse())
    }
}
