//! The application's route table as data.

use std::time::Duration;

use url::form_urlencoded;

use super::{PendingPolicy, TodoListSearch};
use crate::domain::TaskId;

/// One entry of a breadcrumb trail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Crumb {
    pub label: String,
    pub href: String,
}

/// Every page the application can show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppRoute {
    Home,
    About,
    TodoList(TodoListSearch),
    NewTodo,
    TodoDetail(TaskId),
    EditTodo(TaskId),
    NotFound,
    ErrorTest,
}

impl AppRoute {
    /// Path plus query string for links, redirects and history entries.
    ///
    /// # Examples
    /// ```
    /// use todo_app::domain::TaskFilter;
    /// use todo_app::routing::{AppRoute, TodoListSearch};
    ///
    /// let route = AppRoute::TodoList(TodoListSearch::new(TaskFilter::Pending, "ship it"));
    /// assert_eq!(route.href(), "/todos?filter=pending&search=ship+it");
    /// ```
    pub fn href(&self) -> String {
        match self {
            Self::Home => "/".to_owned(),
            Self::About => "/about".to_owned(),
            Self::TodoList(search) if !search.is_filtered() => "/todos".to_owned(),
            Self::TodoList(search) => {
                let query = form_urlencoded::Serializer::new(String::new())
                    .append_pair("filter", search.filter.as_str())
                    .append_pair("search", &search.search)
                    .finish();
                format!("/todos?{query}")
            }
            Self::NewTodo => "/todos/new".to_owned(),
            Self::TodoDetail(id) => format!("/todos/{id}"),
            Self::EditTodo(id) => format!("/todos/{id}/edit"),
            Self::NotFound => "/404".to_owned(),
            Self::ErrorTest => "/error-test".to_owned(),
        }
    }

    /// Document title.
    pub fn title(&self) -> String {
        match self {
            Self::Home => "Todo App".to_owned(),
            Self::About => "About · Todo App".to_owned(),
            Self::TodoList(_) => "Todos · Todo App".to_owned(),
            Self::NewTodo => "New Todo · Todo App".to_owned(),
            Self::TodoDetail(id) => format!("Todo #{id} · Todo App"),
            Self::EditTodo(id) => format!("Edit Todo #{id} · Todo App"),
            Self::NotFound => "Page Not Found · Todo App".to_owned(),
            Self::ErrorTest => "Error Testing · Todo App".to_owned(),
        }
    }

    /// Trail below "Home"; the last crumb is the current page.
    pub fn breadcrumbs(&self) -> Vec<Crumb> {
        let todos = || Crumb {
            label: "Todos".to_owned(),
            href: "/todos".to_owned(),
        };
        let current = |label: String| Crumb {
            label,
            href: self.href(),
        };
        match self {
            Self::Home | Self::NotFound | Self::ErrorTest => Vec::new(),
            Self::About => vec![current("About".to_owned())],
            Self::TodoList(_) => vec![current("Todos".to_owned())],
            Self::NewTodo => vec![todos(), current("New Todo".to_owned())],
            Self::TodoDetail(id) => vec![todos(), current(format!("Todo #{id}"))],
            Self::EditTodo(_) => vec![todos(), current("Edit Todo".to_owned())],
        }
    }

    /// How long loaded data stays fresh; zero means always reload.
    pub const fn stale_time(&self) -> Duration {
        match self {
            Self::TodoList(_) => Duration::from_secs(2 * 60),
            Self::TodoDetail(_) => Duration::from_secs(30),
            _ => Duration::ZERO,
        }
    }

    /// Skeleton timing, for routes that show one.
    pub const fn pending_policy(&self) -> Option<PendingPolicy> {
        match self {
            Self::TodoDetail(_) => Some(PendingPolicy::TODO_DETAIL),
            _ => None,
        }
    }
}
