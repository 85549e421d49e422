//! Server-rendered HTML fragments.
//!
//! Views are plain functions from data to markup. Every piece of user text
//! passes through [`escape`] before it lands in a document.

pub mod fallbacks;
pub mod layout;
pub mod static_pages;
pub mod todos;

/// Escape text for use in element content and quoted attributes.
///
/// # Examples
/// ```
/// use todo_app::inbound::http::views::escape;
///
/// assert_eq!(escape(r#"<a href="x">Tom & Jerry's</a>"#),
///     "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#39;s&lt;/a&gt;");
/// ```
pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}
