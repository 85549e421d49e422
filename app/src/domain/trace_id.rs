//! Correlation identifier carried through one page request.
//!
//! The HTTP middleware opens a scope per request; anything running inside it
//! (loaders, store calls, error construction) can read the identifier without
//! it being threaded through every signature. Task-locals do not follow
//! `tokio::spawn`, so wrap spawned work in [`TraceId::scope`].

use std::fmt;
use std::future::Future;
use std::str::FromStr;

use tokio::task_local;
use uuid::Uuid;

/// Response header carrying the request's trace identifier.
pub const TRACE_ID_HEADER: &str = "trace-id";

task_local! {
    static CURRENT: TraceId;
}

/// Request-scoped trace identifier.
///
/// # Examples
/// ```
/// use todo_app::TraceId;
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let id = TraceId::random();
/// let seen = TraceId::scope(id, async { TraceId::current() }).await;
/// assert_eq!(seen, Some(id));
/// # });
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TraceId(Uuid);

impl TraceId {
    /// Mint a fresh random identifier.
    #[must_use]
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// The identifier of the enclosing scope, if any.
    #[must_use]
    pub fn current() -> Option<Self> {
        CURRENT.try_with(|id| *id).ok()
    }

    /// Run `fut` with `trace_id` as the current identifier.
    pub async fn scope<F>(trace_id: Self, fut: F) -> F::Output
    where
        F: Future,
    {
        CURRENT.scope(trace_id, fut).await
    }
}

impl fmt::Display for TraceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for TraceId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn scope_exposes_identifier() {
        let id = TraceId::random();
        let seen = TraceId::scope(id, async { TraceId::current() }).await;
        assert_eq!(seen, Some(id));
    }

    #[tokio::test]
    async fn nested_scope_shadows_outer() {
        let outer = TraceId::random();
        let inner = TraceId::random();
        let seen = TraceId::scope(outer, async move {
            TraceId::scope(inner, async { TraceId::current() }).await
        })
        .await;
        assert_eq!(seen, Some(inner));
    }

    #[test]
    fn absent_outside_scope() {
        assert!(TraceId::current().is_none());
    }

    #[test]
    fn parses_and_displays_uuid() {
        let raw = "00000000-0000-0000-0000-000000000000";
        let id: TraceId = raw.parse().expect("valid uuid");
        assert_eq!(id.to_string(), raw);
        assert!("not-a-uuid".parse::<TraceId>().is_err());
    }
}
