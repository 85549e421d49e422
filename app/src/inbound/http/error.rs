//! HTTP mapping for domain errors.
//!
//! Purpose: keep [`Error`] transport agnostic while letting handlers return
//! it directly. Unhandled errors render the top-level fallback page; the
//! message of an internal error never reaches the visitor.

use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use tracing::error;

use super::views::fallbacks::{self, GENERIC_FAILURE};
use super::views::layout::{self, PageMeta, Section};
use crate::domain::{Error, ErrorCode, TRACE_ID_HEADER};

/// Result alias for page handlers.
pub type PageResult<T> = Result<T, Error>;

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::ValidationRejected => StatusCode::UNPROCESSABLE_ENTITY,
        ErrorCode::MutationFailed => StatusCode::CONFLICT,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn body_for(error: &Error) -> String {
    match error.code() {
        ErrorCode::NotFound => layout::page(
            &PageMeta::new("Page Not Found · Todo App", None),
            &fallbacks::not_found(),
        ),
        ErrorCode::ValidationRejected | ErrorCode::MutationFailed => layout::page(
            &PageMeta::new("Todo App", Some(Section::Todos)),
            &fallbacks::alert(error.message(), "/todos"),
        ),
        _ => layout::page(
            &PageMeta::new("Something went wrong · Todo App", None),
            &fallbacks::error_fallback(GENERIC_FAILURE, error.trace_id()),
        ),
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        if self.status_code().is_server_error() {
            error!(
                code = self.code().as_str(),
                message = self.message(),
                trace_id = self.trace_id(),
                "unhandled page error"
            );
        }
        let mut builder = HttpResponse::build(self.status_code());
        if let Some(id) = self.trace_id() {
            builder.insert_header((TRACE_ID_HEADER, id.to_owned()));
        }
        builder.content_type(ContentType::html()).body(body_for(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;
    use rstest::rstest;

    const TRACE_ID: &str = "00000000-0000-0000-0000-000000000000";

    async fn render(error: Error) -> (StatusCode, Option<String>, String) {
        let response = ResponseError::error_response(&error);
        let status = response.status();
        let header = response
            .headers()
            .get(TRACE_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned);
        let bytes = to_bytes(response.into_body())
            .await
            .expect("reading response body succeeds");
        let body = String::from_utf8(bytes.to_vec()).expect("utf8 body");
        (status, header, body)
    }

    #[rstest]
    #[case(Error::not_found("missing"), StatusCode::NOT_FOUND)]
    #[case(Error::validation_rejected("bad"), StatusCode::UNPROCESSABLE_ENTITY)]
    #[case(Error::mutation_failed("nope"), StatusCode::CONFLICT)]
    #[case(Error::internal("boom"), StatusCode::INTERNAL_SERVER_ERROR)]
    fn status_code_matches_error_code(#[case] error: Error, #[case] status: StatusCode) {
        assert_eq!(ResponseError::status_code(&error), status);
    }

    #[actix_web::test]
    async fn internal_errors_are_redacted() {
        let (status, header, body) =
            render(Error::internal("database password is hunter2").with_trace_id(TRACE_ID)).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(header.as_deref(), Some(TRACE_ID));
        assert!(body.contains("Oops! Something went wrong"));
        assert!(body.contains(GENERIC_FAILURE));
        assert!(!body.contains("hunter2"));
    }

    #[actix_web::test]
    async fn mutation_failures_render_a_banner() {
        let (status, header, body) = render(Error::mutation_failed("Failed to delete todo")).await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(header, None);
        assert!(body.contains("class=\"alert\""));
        assert!(body.contains("Failed to delete todo"));
    }

    #[actix_web::test]
    async fn not_found_renders_the_not_found_page() {
        let (_, _, body) = render(Error::not_found("gone")).await;
        assert!(body.contains("Page Not Found"));
        assert!(body.contains("Browse Todos"));
    }
}
