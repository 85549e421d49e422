//! Per-visitor navigation history.
//!
//! A bounded stack of visited page paths, newest last. The HTTP adapter
//! keeps it in the visitor's session; "back" pops the current page and
//! lands on the one before. The stack is bounded by bytes as well as
//! entries so the session cookie stays under browser size limits.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

/// Entries kept before the oldest are dropped.
pub const HISTORY_CAPACITY: usize = 20;

/// Longest entry, JSON-encoded, kept with its query string. Longer hrefs
/// are recorded by path alone, or skipped when the path is still too long.
pub const MAX_ENTRY_BYTES: usize = 256;

/// Upper bound on the JSON-encoded history.
pub const HISTORY_BUDGET_BYTES: usize = 2048;

/// Size of `entry` as a JSON string, quotes included.
fn encoded_len(entry: &str) -> usize {
    let body: usize = entry
        .chars()
        .map(|c| match c {
            '"' | '\\' | '\n' | '\r' | '\t' | '\u{8}' | '\u{c}' => 2,
            c if u32::from(c) < 0x20 => 6,
            c => c.len_utf8(),
        })
        .sum();
    body + 2
}

fn bounded(href: String) -> Option<String> {
    if encoded_len(&href) <= MAX_ENTRY_BYTES {
        return Some(href);
    }
    let path = href.split_once('?').map_or(href.as_str(), |(path, _)| path);
    (encoded_len(path) <= MAX_ENTRY_BYTES).then(|| path.to_owned())
}

/// Visited page paths, oldest first.
///
/// # Examples
/// ```
/// use todo_app::routing::NavigationHistory;
///
/// let mut history = NavigationHistory::default();
/// history.record("/todos");
/// history.record("/todos/2");
/// assert_eq!(history.back().as_deref(), Some("/todos"));
/// assert_eq!(history.back(), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NavigationHistory {
    entries: VecDeque<String>,
}

impl NavigationHistory {
    /// Push a visited path. Reloading the current page adds nothing.
    ///
    /// Oldest entries are dropped until the history fits both
    /// [`HISTORY_CAPACITY`] and [`HISTORY_BUDGET_BYTES`].
    pub fn record(&mut self, href: impl Into<String>) {
        let Some(href) = bounded(href.into()) else {
            return;
        };
        if self.entries.back() == Some(&href) {
            return;
        }
        if self.entries.len() == HISTORY_CAPACITY {
            self.entries.pop_front();
        }
        self.entries.push_back(href);
        while self.entries.len() > 1 && self.encoded_size() > HISTORY_BUDGET_BYTES {
            self.entries.pop_front();
        }
    }

    /// Size of the history as a JSON array.
    pub fn encoded_size(&self) -> usize {
        let entries: usize = self.entries.iter().map(|entry| encoded_len(entry)).sum();
        2 + entries + self.entries.len().saturating_sub(1)
    }

    /// Drop the current page and return the one before it, if any.
    ///
    /// With no earlier entry the history is left untouched.
    pub fn back(&mut self) -> Option<String> {
        if self.entries.len() < 2 {
            return None;
        }
        self.entries.pop_back();
        self.entries.back().cloned()
    }

    /// Most recently recorded path.
    pub fn current(&self) -> Option<&str> {
        self.entries.back().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
