//! Domain ports for the hexagonal boundary.

mod task_repository;

#[cfg(test)]
pub use task_repository::MockTaskRepository;
pub use task_repository::{FixtureTaskRepository, TaskRepository, TaskRepositoryError};
