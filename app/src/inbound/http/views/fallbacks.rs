//! Error, not-found and loading fallbacks.

use super::escape;

/// Message shown by the top-level fallback when the real one is withheld.
pub const GENERIC_FAILURE: &str = "An unexpected error occurred while loading this page.";

/// Top-level fallback for unhandled failures.
///
/// "Try Again" invalidates cached loader data and reloads the page the
/// visitor was on.
pub fn error_fallback(message: &str, trace_id: Option<&str>) -> String {
    let message = if message.is_empty() {
        GENERIC_FAILURE
    } else {
        message
    };
    let reference = trace_id
        .map(|id| format!("<p><small>Reference: <code>{}</code></small></p>", escape(id)))
        .unwrap_or_default();
    format!(
        "<section class=\"fallback\" role=\"alert\">\
         <h3>Oops! Something went wrong</h3><p>{message}</p>{reference}\
         <form method=\"post\" action=\"/refresh\" class=\"inline\">\
         <button type=\"submit\" class=\"button\">Try Again</button></form> \
         <a href=\"/todos\" class=\"button secondary\">Go to Todos</a> \
         <a href=\"/\">Go Home</a></section>",
        message = escape(message),
    )
}

/// Shown for unknown paths and `/404`.
pub fn not_found() -> String {
    "<section class=\"fallback\"><h3>Page Not Found</h3>\
     <p>The page you're looking for doesn't exist or has been moved.</p>\
     <a href=\"/\" class=\"button\">Go Home</a> \
     <a href=\"/todos\" class=\"button secondary\">Browse Todos</a></section>"
        .to_owned()
}

/// Route-level error view for failed loaders.
pub fn loading_error(message: &str) -> String {
    format!(
        "<section class=\"fallback\" role=\"alert\"><h3>Failed to load data</h3>\
         <p>{}</p>\
         <form method=\"post\" action=\"/refresh\" class=\"inline\">\
         <button type=\"submit\" class=\"button\">Try Again</button></form> \
         <a href=\"/todos\">Back to todos</a></section>",
        escape(message)
    )
}

/// Inline notice for an edit form whose task is gone.
pub fn todo_not_found() -> String {
    "<section class=\"fallback\"><h3>Todo not found</h3>\
     <a href=\"/todos\">Back to todos</a></section>"
        .to_owned()
}

/// Dismissible banner for failed mutations and rejected input.
pub fn alert(message: &str, dismiss_href: &str) -> String {
    format!(
        "<div class=\"alert\" role=\"alert\"><span>{}</span> \
         <a href=\"{}\" aria-label=\"Dismiss\">&times;</a></div>",
        escape(message),
        escape(dismiss_href)
    )
}

/// Placeholder shown while the detail loader is slow.
pub fn detail_skeleton() -> &'static str {
    "<div id=\"pending-skeleton\" class=\"skeleton\" aria-busy=\"true\">\
     <div style=\"width:5rem\"></div>\
     <div class=\"card\"><div style=\"width:75%;height:1.5rem\"></div>\
     <div style=\"width:100%\"></div><div style=\"width:66%\"></div>\
     <div style=\"width:8rem\"></div></div></div>"
}

/// Hides [`detail_skeleton`] once the real content has streamed in.
pub const HIDE_SKELETON: &str = "<style>#pending-skeleton{display:none}</style>";
