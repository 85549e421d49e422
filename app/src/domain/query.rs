//! List filtering over task snapshots.
//!
//! Pure functions: given the store's current contents, a status filter and a
//! free-text search term, derive the ordered subset a list page shows.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::Task;

/// Status predicate applied to the task list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskFilter {
    /// Keep every task.
    #[default]
    All,
    /// Keep only completed tasks.
    Completed,
    /// Keep only tasks still open.
    Pending,
}

impl TaskFilter {
    /// Every filter in display order.
    pub const ALL: [Self; 3] = [Self::All, Self::Completed, Self::Pending];

    /// Lowercase wire name used in query strings.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Completed => "completed",
            Self::Pending => "pending",
        }
    }

    /// Capitalised label for buttons.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Completed => "Completed",
            Self::Pending => "Pending",
        }
    }

    /// Whether `task` passes this status predicate.
    #[must_use]
    pub const fn admits(self, task: &Task) -> bool {
        match self {
            Self::All => true,
            Self::Completed => task.completed,
            Self::Pending => !task.completed,
        }
    }
}

impl fmt::Display for TaskFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raised when a filter name is not one of `all`, `completed`, `pending`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown task filter '{0}'; expected all, completed or pending")]
pub struct UnknownTaskFilter(pub String);

impl FromStr for TaskFilter {
    type Err = UnknownTaskFilter;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|filter| filter.as_str() == s)
            .ok_or_else(|| UnknownTaskFilter(s.to_owned()))
    }
}

/// Status filter combined with a search term.
///
/// # Examples
/// ```
/// use todo_app::domain::{TaskFilter, TaskQuery};
///
/// let query = TaskQuery::new(TaskFilter::Pending, "deploy");
/// assert!(!query.is_default());
/// assert!(TaskQuery::default().is_default());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct TaskQuery {
    /// Status predicate.
    pub filter: TaskFilter,
    /// Case-insensitive substring matched against title or description.
    pub search: String,
}

impl TaskQuery {
    /// Build a query from its parts.
    #[must_use]
    pub fn new(filter: TaskFilter, search: impl Into<String>) -> Self {
        Self {
            filter,
            search: search.into(),
        }
    }

    /// True when the query keeps every task.
    #[must_use]
    pub fn is_default(&self) -> bool {
        self.filter == TaskFilter::All && self.search.is_empty()
    }

    /// Whether `task` satisfies both the status and text predicates.
    #[must_use]
    pub fn matches(&self, task: &Task) -> bool {
        self.filter.admits(task) && text_matches(task, &self.search.to_lowercase())
    }
}

fn text_matches(task: &Task, needle_lower: &str) -> bool {
    needle_lower.is_empty()
        || task.title.as_ref().to_lowercase().contains(needle_lower)
        || task.description.to_lowercase().contains(needle_lower)
}

/// Filter `tasks` by `query`, preserving input order.
///
/// # Examples
/// ```
/// use todo_app::domain::{filter_tasks, TaskQuery};
///
/// assert!(filter_tasks(Vec::new(), &TaskQuery::default()).is_empty());
/// ```
#[must_use]
pub fn filter_tasks(tasks: Vec<Task>, query: &TaskQuery) -> Vec<Task> {
    let needle = query.search.to_lowercase();
    tasks
        .into_iter()
        .filter(|task| query.filter.admits(task) && text_matches(task, &needle))
        .collect()
}
