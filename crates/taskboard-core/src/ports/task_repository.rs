//! Task repository port definition.
//!
//! This port defines the interface for persisting and retrieving tasks.
//! Every method is a single storage operation; no method spans calls.

use async_trait::async_trait;

use super::RepositoryError;
use crate::domain::{NewTask, Task, TaskId, TaskUpdate};

/// Port for task persistence operations.
///
/// Implementations handle the actual storage mechanism (`SQLite`, etc.).
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// List all tasks, ordered by `numero` ascending.
    async fn list(&self) -> Result<Vec<Task>, RepositoryError>;

    /// Get a task by ID.
    async fn get(&self, id: TaskId) -> Result<Task, RepositoryError>;

    /// Insert a new task and return it as stored.
    ///
    /// When `task.numero` is `None` the next number (`max + 1`, or 1 for an
    /// empty store) is assigned as part of the same write.
    async fn insert(&self, task: NewTask) -> Result<Task, RepositoryError>;

    /// Replace the mutable fields of an existing task.
    async fn replace(&self, id: TaskId, update: TaskUpdate) -> Result<Task, RepositoryError>;

    /// Flip the `completed` flag of a task.
    async fn toggle(&self, id: TaskId) -> Result<Task, RepositoryError>;

    /// Delete a task, returning the removed record.
    async fn delete(&self, id: TaskId) -> Result<Task, RepositoryError>;

    /// Delete every completed task. Returns the number of rows removed.
    async fn delete_completed(&self) -> Result<u64, RepositoryError>;

    /// Total number of stored tasks.
    async fn count(&self) -> Result<i64, RepositoryError>;
}
