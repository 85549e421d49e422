//! Navigation intents.
//!
//! Pages never build paths by hand; they ask for an intent and redirect to
//! the resulting [`NavigationTarget`].

use tracing::debug;

use super::{AppRoute, NavigationHistory, RouteLoaders, TodoListSearch};
use crate::domain::{TaskFilter, TaskId};

/// Where an intent leads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationTarget {
    /// A known route.
    Route(AppRoute),
    /// A path taken from the visitor's history.
    Previous(String),
}

impl NavigationTarget {
    /// Concrete location for a redirect or link.
    pub fn href(&self) -> String {
        match self {
            Self::Route(route) => route.href(),
            Self::Previous(href) => href.clone(),
        }
    }
}

impl From<AppRoute> for NavigationTarget {
    fn from(route: AppRoute) -> Self {
        Self::Route(route)
    }
}

pub fn to_todos_list() -> NavigationTarget {
    AppRoute::TodoList(TodoListSearch::default()).into()
}

pub fn to_todo(id: TaskId) -> NavigationTarget {
    AppRoute::TodoDetail(id).into()
}

pub fn to_edit_todo(id: TaskId) -> NavigationTarget {
    AppRoute::EditTodo(id).into()
}

pub fn to_new_todo() -> NavigationTarget {
    AppRoute::NewTodo.into()
}

/// List view with the given filter and search term.
///
/// # Examples
/// ```
/// use todo_app::domain::TaskFilter;
/// use todo_app::routing::navigation;
///
/// let target = navigation::to_todos_with_filter(TaskFilter::Completed, None);
/// assert_eq!(target.href(), "/todos?filter=completed&search=");
/// ```
pub fn to_todos_with_filter(filter: TaskFilter, search: Option<&str>) -> NavigationTarget {
    AppRoute::TodoList(TodoListSearch::new(filter, search.unwrap_or_default())).into()
}

/// Previous page from `history`, or `fallback` when there is none.
pub fn go_back(history: &mut NavigationHistory, fallback: AppRoute) -> NavigationTarget {
    match history.back() {
        Some(previous) => NavigationTarget::Previous(previous),
        None => {
            debug!(fallback = %fallback.href(), "no previous page, using fallback");
            fallback.into()
        }
    }
}

/// Fallback used by "back" actions that name none.
pub fn default_back_fallback() -> AppRoute {
    AppRoute::TodoList(TodoListSearch::default())
}

/// Discard every cached loader result so the next render reloads.
pub fn refresh(loaders: &RouteLoaders) {
    loaders.invalidate();
}
