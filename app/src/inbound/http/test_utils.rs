//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::cookie::Key;

use super::state::HttpState;
use crate::domain::ports::TaskRepository;
use crate::test_support::mutable_clock;

/// Session middleware with a throwaway key, cookie name `session` and the
/// `Secure` flag off for plain-HTTP tests.
pub fn test_session_middleware() -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), Key::generate())
        .cookie_name("session".to_owned())
        .cookie_secure(false)
        .build()
}

/// State over `repository` with a frozen clock.
pub fn state_over(repository: Arc<dyn TaskRepository>) -> HttpState {
    HttpState::new(repository, mutable_clock())
}
