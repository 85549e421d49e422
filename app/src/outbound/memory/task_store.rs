//! Process-local task store.
//!
//! Holds the authoritative task collection behind a mutex. Each operation
//! first waits out its simulated latency, then does its work in a single
//! critical section, so overlapping requests interleave only at the delay
//! and never observe a half-applied mutation. Data resets on restart.

use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use mockable::Clock;
use tracing::debug;

use crate::domain::ports::{TaskRepository, TaskRepositoryError};
use crate::domain::{NewTask, Task, TaskId, TaskPatch, TaskTitle};

use super::latency::{LatencyProfile, StoreOperation};

#[derive(Debug)]
struct StoreState {
    tasks: Vec<Task>,
    /// `None` once every identifier has been handed out.
    next_id: Option<TaskId>,
}

impl StoreState {
    fn position(&self, id: TaskId) -> Option<usize> {
        self.tasks.iter().position(|task| task.id == id)
    }
}

/// In-memory [`TaskRepository`] with simulated latency.
pub struct InMemoryTaskStore {
    state: Mutex<StoreState>,
    clock: Arc<dyn Clock>,
    latency: LatencyProfile,
}

impl InMemoryTaskStore {
    /// Store pre-populated with `tasks`; the next identifier follows the
    /// largest one present.
    pub fn with_tasks(tasks: Vec<Task>, clock: Arc<dyn Clock>, latency: LatencyProfile) -> Self {
        let next_id = tasks
            .iter()
            .map(|task| task.id)
            .max()
            .map_or(Some(TaskId::first()), TaskId::next);
        Self {
            state: Mutex::new(StoreState { tasks, next_id }),
            clock,
            latency,
        }
    }

    /// Empty store; the first task created gets identifier 1.
    pub fn empty(clock: Arc<dyn Clock>, latency: LatencyProfile) -> Self {
        Self::with_tasks(Vec::new(), clock, latency)
    }

    /// Store holding the three demo tasks from [`seed_tasks`].
    pub fn seeded(clock: Arc<dyn Clock>, latency: LatencyProfile) -> Self {
        Self::with_tasks(seed_tasks(), clock, latency)
    }

    fn lock(&self) -> Result<MutexGuard<'_, StoreState>, TaskRepositoryError> {
        self.state
            .lock()
            .map_err(|_| TaskRepositoryError::unavailable("task store lock poisoned"))
    }
}

#[async_trait]
impl TaskRepository for InMemoryTaskStore {
    async fn list(&self) -> Result<Vec<Task>, TaskRepositoryError> {
        self.latency.pause(StoreOperation::List).await;
        Ok(self.lock()?.tasks.clone())
    }

    async fn get(&self, id: TaskId) -> Result<Option<Task>, TaskRepositoryError> {
        self.latency.pause(StoreOperation::Get).await;
        let state = self.lock()?;
        Ok(state.tasks.iter().find(|task| task.id == id).cloned())
    }

    async fn create(&self, task: NewTask) -> Result<Task, TaskRepositoryError> {
        self.latency.pause(StoreOperation::Create).await;
        let created_at = self.clock.utc();
        let mut state = self.lock()?;
        let id = state
            .next_id
            .ok_or_else(|| TaskRepositoryError::unavailable("task identifiers exhausted"))?;
        state.next_id = id.next();
        let NewTask { title, description } = task;
        let created = Task {
            id,
            title,
            description,
            completed: false,
            created_at,
        };
        state.tasks.push(created.clone());
        debug!(task_id = %id, total = state.tasks.len(), "stored new task");
        Ok(created)
    }

    async fn update(
        &self,
        id: TaskId,
        patch: TaskPatch,
    ) -> Result<Option<Task>, TaskRepositoryError> {
        self.latency.pause(StoreOperation::Update).await;
        let mut state = self.lock()?;
        let Some(task) = state.tasks.iter_mut().find(|task| task.id == id) else {
            return Ok(None);
        };
        task.apply(patch);
        Ok(Some(task.clone()))
    }

    async fn delete(&self, id: TaskId) -> Result<bool, TaskRepositoryError> {
        self.latency.pause(StoreOperation::Delete).await;
        let mut state = self.lock()?;
        match state.position(id) {
            Some(index) => {
                state.tasks.remove(index);
                debug!(task_id = %id, total = state.tasks.len(), "removed task");
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

fn seed(
    id: u64,
    title: &str,
    description: &str,
    completed: bool,
    created_at: Option<DateTime<Utc>>,
) -> Option<Task> {
    Some(Task {
        id: TaskId::new(id).ok()?,
        title: TaskTitle::new(title).ok()?,
        description: description.to_owned(),
        completed,
        created_at: created_at?,
    })
}

/// The demo tasks the application starts with.
///
/// # Examples
/// ```
/// use todo_app::outbound::memory::seed_tasks;
///
/// let seeds = seed_tasks();
/// assert_eq!(seeds.len(), 3);
/// assert!(seeds[1].completed);
/// ```
#[must_use]
pub fn seed_tasks() -> Vec<Task> {
    [
        seed(
            1,
            "Learn TanStack Router",
            "Complete the tutorial and understand all core concepts",
            false,
            Utc.with_ymd_and_hms(2024, 1, 1, 10, 0, 0).single(),
        ),
        seed(
            2,
            "Build a React app",
            "Create a new React application with modern routing",
            true,
            Utc.with_ymd_and_hms(2024, 1, 2, 14, 30, 0).single(),
        ),
        seed(
            3,
            "Deploy to production",
            "Deploy the finished app to Vercel or Netlify",
            false,
            Utc.with_ymd_and_hms(2024, 1, 3, 9, 15, 0).single(),
        ),
    ]
    .into_iter()
    .flatten()
    .collect()
}
