//! Task service - thin orchestrator for task operations.
//!
//! Validates adapter input and delegates all persistence to the
//! `TaskRepository` port.

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::{Task, TaskDraft, TaskId, TaskReplacement};
use crate::ports::{CoreError, TaskRepository};
use crate::utils::validation::{validate_draft, validate_replacement};

/// Service for managing tasks.
#[derive(Clone)]
pub struct TaskService {
    repo: Arc<dyn TaskRepository>,
}

impl TaskService {
    /// Create a new task service.
    pub fn new(repo: Arc<dyn TaskRepository>) -> Self {
        Self { repo }
    }

    /// Validate and store a new task.
    ///
    /// A missing (or zero) `numero` is assigned by the repository.
    pub async fn create(&self, draft: TaskDraft) -> Result<Task, CoreError> {
        let new_task = validate_draft(&draft)?;
        let task = self.repo.insert(new_task).await?;
        info!(id = %task.id, numero = task.numero, "Task created");
        Ok(task)
    }

    /// List all tasks ordered by `numero`.
    pub async fn list(&self) -> Result<Vec<Task>, CoreError> {
        let tasks = self.repo.list().await?;
        debug!(count = tasks.len(), "Listed tasks");
        Ok(tasks)
    }

    /// Get a single task.
    pub async fn get(&self, id: TaskId) -> Result<Task, CoreError> {
        Ok(self.repo.get(id).await?)
    }

    /// Replace every mutable field of a task.
    pub async fn replace(
        &self,
        id: TaskId,
        replacement: TaskReplacement,
    ) -> Result<Task, CoreError> {
        let update = validate_replacement(&replacement)?;
        let task = self.repo.replace(id, update).await?;
        info!(id = %task.id, numero = task.numero, "Task replaced");
        Ok(task)
    }

    /// Flip the completion flag of a task.
    pub async fn toggle(&self, id: TaskId) -> Result<Task, CoreError> {
        let task = self.repo.toggle(id).await?;
        debug!(id = %task.id, completed = task.completed, "Task toggled");
        Ok(task)
    }

    /// Delete a task, returning what was removed.
    pub async fn delete(&self, id: TaskId) -> Result<Task, CoreError> {
        let task = self.repo.delete(id).await?;
        info!(id = %task.id, numero = task.numero, "Task deleted");
        Ok(task)
    }

    /// Delete every completed task. Returns how many were removed.
    pub async fn clear_completed(&self) -> Result<u64, CoreError> {
        let removed = self.repo.delete_completed().await?;
        info!(removed, "Cleared completed tasks");
        Ok(removed)
    }

    /// Total number of stored tasks.
    pub async fn count(&self) -> Result<i64, CoreError> {
        Ok(self.repo.count().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{NewTask, TaskCategory};
    use crate::ports::{MockTaskRepository, RepositoryError};
    use chrono::Utc;

    fn stored(new_task: &NewTask, numero: i64) -> Task {
        let now = Utc::now();
        Task {
            id: TaskId::new(),
            numero,
            nombre: new_task.nombre.clone(),
            tipo: new_task.tipo,
            descripcion: new_task.descripcion.clone(),
            completed: false,
            created_at: now,
            updated_at: now,
        }
    }

    fn draft(nombre: &str, descripcion: &str) -> TaskDraft {
        TaskDraft {
            nombre: Some(nombre.to_string()),
            descripcion: Some(descripcion.to_string()),
            ..TaskDraft::default()
        }
    }

    #[tokio::test]
    async fn create_passes_trimmed_task_to_repository() {
        let mut repo = MockTaskRepository::new();
        repo.expect_insert()
            .withf(|t| t.nombre == "Write report" && t.numero.is_none())
            .times(1)
            .returning(|t| Ok(stored(&t, 1)));

        let service = TaskService::new(Arc::new(repo));
        let task = service
            .create(draft("  Write report  ", "quarterly"))
            .await
            .unwrap();

        assert_eq!(task.numero, 1);
        assert_eq!(task.tipo, TaskCategory::Personal);
    }

    #[tokio::test]
    async fn create_rejects_invalid_input_without_touching_storage() {
        let mut repo = MockTaskRepository::new();
        repo.expect_insert().never();

        let service = TaskService::new(Arc::new(repo));
        let err = service.create(draft("Name", "  ")).await.unwrap_err();

        assert!(matches!(err, CoreError::Validation(_)));
    }

    #[tokio::test]
    async fn duplicate_numero_surfaces_as_repository_error() {
        let mut repo = MockTaskRepository::new();
        repo.expect_insert()
            .returning(|_| Err(RepositoryError::AlreadyExists("numero 4".into())));

        let service = TaskService::new(Arc::new(repo));
        let mut input = draft("A", "B");
        input.numero = Some(4);
        let err = service.create(input).await.unwrap_err();

        assert!(matches!(
            err,
            CoreError::Repository(RepositoryError::AlreadyExists(_))
        ));
    }

    #[tokio::test]
    async fn replace_validates_before_storage() {
        let mut repo = MockTaskRepository::new();
        repo.expect_replace().never();

        let service = TaskService::new(Arc::new(repo));
        let replacement = TaskReplacement {
            nombre: Some("ok".into()),
            descripcion: Some("ok".into()),
            tipo: Some("Unknown".into()),
            ..TaskReplacement::default()
        };
        let err = service
            .replace(TaskId::new(), replacement)
            .await
            .unwrap_err();

        assert!(matches!(err, CoreError::Validation(_)));
    }

    #[tokio::test]
    async fn get_missing_task_is_not_found() {
        let mut repo = MockTaskRepository::new();
        repo.expect_get()
            .returning(|id| Err(RepositoryError::NotFound(format!("Task {id}"))));

        let service = TaskService::new(Arc::new(repo));
        let err = service.get(TaskId::new()).await.unwrap_err();

        assert!(matches!(
            err,
            CoreError::Repository(RepositoryError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn clear_completed_reports_count() {
        let mut repo = MockTaskRepository::new();
        repo.expect_delete_completed().times(1).returning(|| Ok(3));

        let service = TaskService::new(Arc::new(repo));
        assert_eq!(service.clear_completed().await.unwrap(), 3);
    }
}
