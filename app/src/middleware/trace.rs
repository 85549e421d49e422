//! Request tracing middleware.
//!
//! Every request runs inside a fresh [`TraceId`] scope. The identifier is
//! echoed in the `trace-id` response header and a completion line is logged
//! with the method, path, status and elapsed time.

use std::task::{Context, Poll};
use std::time::Instant;

use actix_web::Error;
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::header::{HeaderName, HeaderValue};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use tracing::{error, info};

use crate::domain::{TRACE_ID_HEADER, TraceId};

/// Middleware factory; wrap the app with it once.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use todo_app::Trace;
///
/// let _app = App::new().wrap(Trace);
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct Trace;

impl<S, B> Transform<S, ServiceRequest> for Trace
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = TraceMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(TraceMiddleware { service }))
    }
}

/// Service produced by [`Trace`].
pub struct TraceMiddleware<S> {
    service: S,
}

fn stamp<B>(response: &mut ServiceResponse<B>, trace_id: TraceId) {
    match HeaderValue::from_str(&trace_id.to_string()) {
        Ok(value) => {
            response
                .headers_mut()
                .insert(HeaderName::from_static(TRACE_ID_HEADER), value);
        }
        Err(error) => error!(%error, %trace_id, "trace id is not a valid header value"),
    }
}

impl<S, B> Service<ServiceRequest> for TraceMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(cx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let trace_id = TraceId::random();
        let method = req.method().clone();
        let path = req.path().to_owned();
        let started = Instant::now();
        let fut = self.service.call(req);
        Box::pin(TraceId::scope(trace_id, async move {
            let mut response = fut.await?;
            stamp(&mut response, trace_id);
            info!(
                %trace_id,
                %method,
                path,
                status = response.status().as_u16(),
                elapsed_ms = started.elapsed().as_millis(),
                "request completed"
            );
            Ok(response)
        }))
    }
}
