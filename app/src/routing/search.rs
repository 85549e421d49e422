//! Search parameters accepted by the todo list route.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::domain::{TaskFilter, TaskQuery};

/// Query string exactly as received; every field may be missing or bogus.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawListSearch {
    pub filter: Option<String>,
    pub search: Option<String>,
}

/// Validated list search with defaults applied.
///
/// Doubles as the cache key of the list loader, so two requests that
/// validate to the same parameters share one cached result.
///
/// # Examples
/// ```
/// use todo_app::domain::TaskFilter;
/// use todo_app::routing::{RawListSearch, TodoListSearch};
///
/// let raw = RawListSearch { filter: Some("pending".into()), search: None };
/// let search = TodoListSearch::validate(raw);
/// assert_eq!(search.filter, TaskFilter::Pending);
/// assert_eq!(search.search, "");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TodoListSearch {
    pub filter: TaskFilter,
    pub search: String,
}

impl TodoListSearch {
    pub fn new(filter: TaskFilter, search: impl Into<String>) -> Self {
        Self {
            filter,
            search: search.into(),
        }
    }

    /// Apply defaults; an unknown filter falls back to `all`.
    pub fn validate(raw: RawListSearch) -> Self {
        let filter = match raw.filter.as_deref() {
            None | Some("") => TaskFilter::All,
            Some(value) => value.parse().unwrap_or_else(|error| {
                warn!(%error, "ignoring invalid list filter");
                TaskFilter::All
            }),
        };
        Self {
            filter,
            search: raw.search.unwrap_or_default(),
        }
    }

    /// Whether any narrowing is in effect.
    pub fn is_filtered(&self) -> bool {
        self.filter != TaskFilter::All || !self.search.is_empty()
    }

    pub fn to_query(&self) -> TaskQuery {
        TaskQuery::new(self.filter, self.search.clone())
    }
}
