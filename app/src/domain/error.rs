//! Domain-level error types.
//!
//! These errors are transport agnostic. The HTTP adapter maps them onto
//! status codes and the page-level fallbacks that render them.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::TraceId;

/// Stable machine-readable error code describing the failure category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// The requested task does not exist.
    NotFound,
    /// Form input failed validation before reaching the store.
    ValidationRejected,
    /// A create, update or delete did not go through. Retrying is safe.
    MutationFailed,
    /// Anything else raised while loading or rendering a page.
    InternalError,
}

impl ErrorCode {
    /// Lowercase identifier used in logs and rendered error panels.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NotFound => "not_found",
            Self::ValidationRejected => "validation_rejected",
            Self::MutationFailed => "mutation_failed",
            Self::InternalError => "internal_error",
        }
    }
}

/// Error payload shared by loaders, mutations and renderers.
///
/// # Examples
/// ```
/// use todo_app::domain::{Error, ErrorCode};
///
/// let err = Error::not_found("Todo with ID 9 not found");
/// assert_eq!(err.code(), ErrorCode::NotFound);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Error {
    code: ErrorCode,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    trace_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<Value>,
}

impl Error {
    /// Create a new error.
    ///
    /// Captures the current trace identifier if one is in scope so the
    /// rendered fallback can be correlated with the logs.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            trace_id: TraceId::current().map(|id| id.to_string()),
            details: None,
        }
    }

    /// Stable machine-readable error code.
    #[must_use]
    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// Human-readable message.
    #[must_use]
    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    /// Correlation identifier captured at construction time.
    #[must_use]
    pub fn trace_id(&self) -> Option<&str> {
        self.trace_id.as_deref()
    }

    /// Supplementary error details.
    #[must_use]
    pub fn details(&self) -> Option<&Value> {
        self.details.as_ref()
    }

    /// Attach a trace identifier to the error.
    #[must_use]
    pub fn with_trace_id(mut self, id: impl Into<String>) -> Self {
        self.trace_id = Some(id.into());
        self
    }

    /// Attach structured details to the error.
    ///
    /// # Examples
    /// ```
    /// use todo_app::domain::Error;
    /// use serde_json::json;
    ///
    /// let err = Error::validation_rejected("Title is required")
    ///     .with_details(json!({ "field": "title" }));
    /// assert!(err.details().is_some());
    /// ```
    #[must_use]
    pub fn with_details(mut self, details: Value) -> Self {
        self.details = Some(details);
        self
    }

    /// Prefix the message with loader context, keeping code and trace id.
    ///
    /// # Examples
    /// ```
    /// use todo_app::domain::Error;
    ///
    /// let err = Error::not_found("Todo with ID 4 not found").context("Failed to load todo");
    /// assert_eq!(err.message(), "Failed to load todo: Todo with ID 4 not found");
    /// ```
    #[must_use]
    pub fn context(mut self, context: &str) -> Self {
        self.message = format!("{context}: {}", self.message);
        self
    }

    /// Convenience constructor for [`ErrorCode::NotFound`].
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::NotFound, message)
    }

    /// Convenience constructor for [`ErrorCode::ValidationRejected`].
    pub fn validation_rejected(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ValidationRejected, message)
    }

    /// Convenience constructor for [`ErrorCode::MutationFailed`].
    pub fn mutation_failed(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::MutationFailed, message)
    }

    /// Convenience constructor for [`ErrorCode::InternalError`].
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for Error {}
