//! Task use-cases shared by every page.
//!
//! Wraps the [`TaskRepository`] port, turning its "not found" sentinels and
//! adapter failures into domain [`Error`]s with the messages pages show.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::ports::{TaskRepository, TaskRepositoryError};
use crate::domain::{Error, NewTask, Task, TaskId, TaskPatch, TaskQuery, filter_tasks};

/// Task use-cases backed by a repository.
#[derive(Clone)]
pub struct TaskService {
    repository: Arc<dyn TaskRepository>,
}

impl TaskService {
    /// Build the service over a repository.
    pub fn new(repository: Arc<dyn TaskRepository>) -> Self {
        Self { repository }
    }

    fn map_read_error(error: TaskRepositoryError) -> Error {
        warn!(%error, "task read failed");
        Error::internal(error.to_string())
    }

    fn map_write_error(action: &str, error: TaskRepositoryError) -> Error {
        warn!(%error, action, "task mutation failed");
        Error::mutation_failed(format!("Failed to {action} todo"))
    }

    /// Tasks passing `query`, in store order.
    pub async fn list(&self, query: &TaskQuery) -> Result<Vec<Task>, Error> {
        let tasks = self.repository.list().await.map_err(Self::map_read_error)?;
        let total = tasks.len();
        let filtered = filter_tasks(tasks, query);
        debug!(
            filter = %query.filter,
            search = %query.search,
            total,
            shown = filtered.len(),
            "filtered task list"
        );
        Ok(filtered)
    }

    /// Look a task up, treating absence as a normal outcome.
    pub async fn find(&self, id: TaskId) -> Result<Option<Task>, Error> {
        self.repository.get(id).await.map_err(Self::map_read_error)
    }

    /// Look a task up, turning absence into [`crate::domain::ErrorCode::NotFound`].
    pub async fn require(&self, id: TaskId) -> Result<Task, Error> {
        self.find(id)
            .await?
            .ok_or_else(|| Error::not_found(format!("Todo with ID {id} not found")))
    }

    /// Create a task.
    pub async fn create(&self, task: NewTask) -> Result<Task, Error> {
        let created = self
            .repository
            .create(task)
            .await
            .map_err(|error| Self::map_write_error("create", error))?;
        info!(task_id = %created.id, "task created");
        Ok(created)
    }

    /// Apply a partial update.
    pub async fn update(&self, id: TaskId, patch: TaskPatch) -> Result<Task, Error> {
        let updated = self
            .repository
            .update(id, patch)
            .await
            .map_err(|error| Self::map_write_error("update", error))?
            .ok_or_else(|| {
                warn!(task_id = %id, "update targeted a missing task");
                Error::mutation_failed("Failed to update todo")
            })?;
        info!(task_id = %id, "task updated");
        Ok(updated)
    }

    /// Flip a task's completion flag.
    pub async fn toggle(&self, id: TaskId) -> Result<Task, Error> {
        let current = self
            .find(id)
            .await?
            .ok_or_else(|| Error::mutation_failed("Failed to update todo"))?;
        self.update(id, TaskPatch::default().completed(!current.completed))
            .await
    }

    /// Delete a task.
    pub async fn delete(&self, id: TaskId) -> Result<(), Error> {
        let removed = self
            .repository
            .delete(id)
            .await
            .map_err(|error| Self::map_write_error("delete", error))?;
        if removed {
            info!(task_id = %id, "task deleted");
            Ok(())
        } else {
            warn!(task_id = %id, "delete targeted a missing task");
            Err(Error::mutation_failed("Failed to delete todo"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::MockTaskRepository;
    use crate::domain::{ErrorCode, TaskFilter, TaskTitle};
    use chrono::Utc;
    use rstest::rstest;

    fn task(id: u64, completed: bool) -> Task {
        Task {
            id: TaskId::new(id).expect("valid id"),
            title: TaskTitle::new(format!("Task {id}")).expect("valid title"),
            description: String::new(),
            completed,
            created_at: Utc::now(),
        }
    }

    fn service(repo: MockTaskRepository) -> TaskService {
        TaskService::new(Arc::new(repo))
    }

    fn id(raw: u64) -> TaskId {
        TaskId::new(raw).expect("valid id")
    }

    #[tokio::test]
    async fn list_applies_query() {
        let mut repo = MockTaskRepository::new();
        repo.expect_list()
            .times(1)
            .returning(|| Ok(vec![task(1, false), task(2, true), task(3, false)]));

        let shown = service(repo)
            .list(&TaskQuery::new(TaskFilter::Pending, ""))
            .await
            .expect("list succeeds");
        let ids: Vec<u64> = shown.iter().map(|t| t.id.get()).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[tokio::test]
    async fn require_reports_not_found_with_id() {
        let mut repo = MockTaskRepository::new();
        repo.expect_get().returning(|_| Ok(None));

        let err = service(repo)
            .require(id(99999))
            .await
            .expect_err("missing task");
        assert_eq!(err.code(), ErrorCode::NotFound);
        assert_eq!(err.message(), "Todo with ID 99999 not found");
    }

    #[tokio::test]
    async fn read_failures_are_internal() {
        let mut repo = MockTaskRepository::new();
        repo.expect_list()
            .returning(|| Err(TaskRepositoryError::unavailable("poisoned")));

        let err = service(repo)
            .list(&TaskQuery::default())
            .await
            .expect_err("store unavailable");
        assert_eq!(err.code(), ErrorCode::InternalError);
    }

    #[rstest]
    #[case(true)]
    #[case(false)]
    #[tokio::test]
    async fn toggle_flips_completion(#[case] completed: bool) {
        let mut repo = MockTaskRepository::new();
        repo.expect_get()
            .returning(move |raw| Ok(Some(task(raw.get(), completed))));
        repo.expect_update()
            .withf(move |_, patch| patch.completed == Some(!completed) && patch.title.is_none())
            .returning(move |raw, _| Ok(Some(task(raw.get(), !completed))));

        let toggled = service(repo).toggle(id(2)).await.expect("toggle");
        assert_eq!(toggled.completed, !completed);
    }

    #[tokio::test]
    async fn update_of_missing_task_is_mutation_failure() {
        let mut repo = MockTaskRepository::new();
        repo.expect_update().returning(|_, _| Ok(None));

        let err = service(repo)
            .update(id(5), TaskPatch::default().completed(true))
            .await
            .expect_err("missing task");
        assert_eq!(err.code(), ErrorCode::MutationFailed);
        assert_eq!(err.message(), "Failed to update todo");
    }

    #[rstest]
    #[case(true, None)]
    #[case(false, Some("Failed to delete todo"))]
    #[tokio::test]
    async fn delete_maps_outcome(#[case] existed: bool, #[case] expected: Option<&str>) {
        let mut repo = MockTaskRepository::new();
        repo.expect_delete().times(1).returning(move |_| Ok(existed));

        let result = service(repo).delete(id(1)).await;
        assert_eq!(
            result.as_ref().err().map(Error::message),
            expected,
            "result: {result:?}"
        );
    }

    #[tokio::test]
    async fn create_failure_is_mutation_failure() {
        let mut repo = MockTaskRepository::new();
        repo.expect_create()
            .returning(|_| Err(TaskRepositoryError::unavailable("poisoned")));

        let title = TaskTitle::new("New").expect("valid title");
        let err = service(repo)
            .create(NewTask::new(title, ""))
            .await
            .expect_err("store unavailable");
        assert_eq!(err.code(), ErrorCode::MutationFailed);
        assert_eq!(err.message(), "Failed to create todo");
    }
}
