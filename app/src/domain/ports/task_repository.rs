//! Port for task storage.
//!
//! The [`TaskRepository`] trait is the only way the rest of the application
//! reads or writes tasks. Adapters own the authoritative collection and hand
//! out clones; callers never hold references into it.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::{NewTask, Task, TaskId, TaskPatch};

/// Errors raised by task repository adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TaskRepositoryError {
    /// The backing collection could not be reached.
    #[error("task store unavailable: {message}")]
    Unavailable {
        /// Adapter-specific description.
        message: String,
    },
}

impl TaskRepositoryError {
    /// Build an [`TaskRepositoryError::Unavailable`] error.
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }
}

/// CRUD contract over the task collection.
///
/// Lookups and mutations on unknown identifiers are not errors: `get` and
/// `update` return `None`, `delete` returns `false`, and the collection is
/// left untouched.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Snapshot of every task in insertion order.
    async fn list(&self) -> Result<Vec<Task>, TaskRepositoryError>;

    /// Fetch one task.
    async fn get(&self, id: TaskId) -> Result<Option<Task>, TaskRepositoryError>;

    /// Append a new task with the next identifier, the current time and
    /// `completed = false`.
    async fn create(&self, task: NewTask) -> Result<Task, TaskRepositoryError>;

    /// Merge `patch` into an existing task and return the result.
    async fn update(
        &self,
        id: TaskId,
        patch: TaskPatch,
    ) -> Result<Option<Task>, TaskRepositoryError>;

    /// Remove a task, reporting whether it existed.
    async fn delete(&self, id: TaskId) -> Result<bool, TaskRepositoryError>;
}

/// Fixture implementation holding no tasks.
///
/// Reads come back empty and every mutation reports "not found"; `create`
/// answers with a record numbered [`TaskId::first`] that is not retained.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureTaskRepository;

#[async_trait]
impl TaskRepository for FixtureTaskRepository {
    async fn list(&self) -> Result<Vec<Task>, TaskRepositoryError> {
        Ok(Vec::new())
    }

    async fn get(&self, _id: TaskId) -> Result<Option<Task>, TaskRepositoryError> {
        Ok(None)
    }

    async fn create(&self, task: NewTask) -> Result<Task, TaskRepositoryError> {
        Ok(Task {
            id: TaskId::first(),
            title: task.title,
            description: task.description,
            completed: false,
            created_at: DateTime::<Utc>::UNIX_EPOCH,
        })
    }

    async fn update(
        &self,
        _id: TaskId,
        _patch: TaskPatch,
    ) -> Result<Option<Task>, TaskRepositoryError> {
        Ok(None)
    }

    async fn delete(&self, _id: TaskId) -> Result<bool, TaskRepositoryError> {
        Ok(false)
    }
}
