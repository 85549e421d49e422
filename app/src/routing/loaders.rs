//! Data loaders for the routes that fetch tasks.

use std::sync::Arc;

use mockable::Clock;

use super::{AppRoute, LoaderCache, TodoListSearch};
use crate::domain::{Error, ErrorCode, Task, TaskId, TaskService};

/// Loaders for every data-backed route, sharing one invalidation point.
pub struct RouteLoaders {
    tasks: TaskService,
    todo_list: LoaderCache<TodoListSearch, Vec<Task>>,
    todo_detail: LoaderCache<TaskId, Task>,
}

impl RouteLoaders {
    pub fn new(tasks: TaskService, clock: Arc<dyn Clock>) -> Self {
        let list_stale = AppRoute::TodoList(TodoListSearch::default()).stale_time();
        let detail_stale = AppRoute::TodoDetail(TaskId::first()).stale_time();
        Self {
            tasks,
            todo_list: LoaderCache::new("todo_list", list_stale, clock.clone()),
            todo_detail: LoaderCache::new("todo_detail", detail_stale, clock),
        }
    }

    /// Use-cases for mutations, which bypass the caches.
    pub fn tasks(&self) -> &TaskService {
        &self.tasks
    }

    /// Tasks matching `search`; re-runs whenever the validated search changes.
    pub async fn todo_list(&self, search: &TodoListSearch) -> Result<Vec<Task>, Error> {
        self.todo_list
            .get_or_load(search.clone(), || async move {
                self.tasks.list(&search.to_query()).await
            })
            .await
    }

    /// The task behind the detail page.
    ///
    /// Absence surfaces as [`ErrorCode::NotFound`] with the load context
    /// prefixed, e.g. "Failed to load todo: Todo with ID 9 not found".
    pub async fn todo_detail(&self, id: TaskId) -> Result<Task, Error> {
        self.todo_detail
            .get_or_load(id, || async move {
                self.tasks.require(id).await.map_err(|error| {
                    if error.code() == ErrorCode::NotFound {
                        error.context("Failed to load todo")
                    } else {
                        error
                    }
                })
            })
            .await
    }

    /// The task behind the edit form; absence is a normal outcome.
    pub async fn edit_todo(&self, id: TaskId) -> Result<Option<Task>, Error> {
        self.tasks.find(id).await
    }

    /// Drop all cached loader data.
    pub fn invalidate(&self) {
        self.todo_list.invalidate();
        self.todo_detail.invalidate();
    }
}
