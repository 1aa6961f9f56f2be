//! `SQLite` implementation of the `TaskRepository` trait.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::{Row, SqlitePool};

use taskboard_core::{NewTask, RepositoryError, Task, TaskId, TaskRepository, TaskUpdate};

use super::row_mappers::{TASK_COLUMNS, format_timestamp, map_write_error, row_to_task};

/// `SQLite` implementation of the `TaskRepository` trait.
///
/// Every trait method is a single SQL statement, so each operation is
/// atomic on its own.
pub struct SqliteTaskRepository {
    pool: SqlitePool,
}

impl SqliteTaskRepository {
    /// Create a new `SQLite` task repository.
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

fn not_found(id: TaskId) -> RepositoryError {
    RepositoryError::NotFound(format!("Task with ID {id}"))
}

#[async_trait]
impl TaskRepository for SqliteTaskRepository {
    async fn list(&self) -> Result<Vec<Task>, RepositoryError> {
        let query = format!("SELECT {TASK_COLUMNS} FROM tasks ORDER BY numero ASC");

        let rows = sqlx::query(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| RepositoryError::Storage(e.to_string()))?;

        rows.iter().map(row_to_task).collect()
    }

    async fn get(&self, id: TaskId) -> Result<Task, RepositoryError> {
        let query = format!("SELECT {TASK_COLUMNS} FROM tasks WHERE id = ?");

        let row = sqlx::query(&query)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| RepositoryError::Storage(e.to_string()))?
            .ok_or_else(|| not_found(id))?;

        row_to_task(&row)
    }

    async fn insert(&self, task: NewTask) -> Result<Task, RepositoryError> {
        let now = format_timestamp(Utc::now());

        // The next-number subquery runs inside the INSERT, so the read and
        // the write share one statement.
        let query = format!(
            "INSERT INTO tasks (id, numero, nombre, tipo, descripcion, completed, created_at, updated_at)
             VALUES (?, COALESCE(?, (SELECT COALESCE(MAX(numero), 0) + 1 FROM tasks)), ?, ?, ?, 0, ?, ?)
             RETURNING {TASK_COLUMNS}"
        );

        let row = sqlx::query(&query)
            .bind(TaskId::new().to_string())
            .bind(task.numero)
            .bind(&task.nombre)
            .bind(task.tipo.as_str())
            .bind(&task.descripcion)
            .bind(&now)
            .bind(&now)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| map_write_error(e, task.numero))?;

        row_to_task(&row)
    }

    async fn replace(&self, id: TaskId, update: TaskUpdate) -> Result<Task, RepositoryError> {
        let query = format!(
            "UPDATE tasks
             SET numero = COALESCE(?, numero), nombre = ?, tipo = ?, descripcion = ?,
                 completed = ?, updated_at = ?
             WHERE id = ?
             RETURNING {TASK_COLUMNS}"
        );

        let row = sqlx::query(&query)
            .bind(update.numero)
            .bind(&update.nombre)
            .bind(update.tipo.as_str())
            .bind(&update.descripcion)
            .bind(update.completed)
            .bind(format_timestamp(Utc::now()))
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_write_error(e, update.numero))?
            .ok_or_else(|| not_found(id))?;

        row_to_task(&row)
    }

    async fn toggle(&self, id: TaskId) -> Result<Task, RepositoryError> {
        let query = format!(
            "UPDATE tasks SET completed = NOT completed, updated_at = ?
             WHERE id = ?
             RETURNING {TASK_COLUMNS}"
        );

        let row = sqlx::query(&query)
            .bind(format_timestamp(Utc::now()))
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| RepositoryError::Storage(e.to_string()))?
            .ok_or_else(|| not_found(id))?;

        row_to_task(&row)
    }

    async fn delete(&self, id: TaskId) -> Result<Task, RepositoryError> {
        let query = format!("DELETE FROM tasks WHERE id = ? RETURNING {TASK_COLUMNS}");

        let row = sqlx::query(&query)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| RepositoryError::Storage(e.to_string()))?
            .ok_or_else(|| not_found(id))?;

        row_to_task(&row)
    }

    async fn delete_completed(&self) -> Result<u64, RepositoryError> {
        let result = sqlx::query("DELETE FROM tasks WHERE completed = 1")
            .execute(&self.pool)
            .await
            .map_err(|e| RepositoryError::Storage(e.to_string()))?;

        Ok(result.rows_affected())
    }

    async fn count(&self) -> Result<i64, RepositoryError> {
        let row = sqlx::query("SELECT COUNT(*) AS count FROM tasks")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| RepositoryError::Storage(e.to_string()))?;

        row.try_get("count")
            .map_err(|e| RepositoryError::Storage(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::row_mappers::NUMERO_EXHAUSTED_MESSAGE;
    use crate::setup::setup_test_database;
    use taskboard_core::TaskCategory;

    async fn repo() -> SqliteTaskRepository {
        SqliteTaskRepository::new(setup_test_database().await.unwrap())
    }

    const LONG_AGO: &str = "2000-01-01T00:00:00.000Z";

    /// Backdate a task's stored `updated_at` so a later save must move it.
    async fn backdate(repo: &SqliteTaskRepository, id: TaskId) -> Task {
        sqlx::query("UPDATE tasks SET updated_at = ? WHERE id = ?")
            .bind(LONG_AGO)
            .bind(id.to_string())
            .execute(&repo.pool)
            .await
            .unwrap();
        repo.get(id).await.unwrap()
    }

    fn new_task(nombre: &str, numero: Option<i64>) -> NewTask {
        NewTask {
            numero,
            nombre: nombre.to_string(),
            tipo: TaskCategory::Trabajo,
            descripcion: format!("{nombre} description"),
        }
    }

    #[tokio::test]
    async fn first_insert_gets_number_one() {
        let repo = repo().await;
        let task = repo.insert(new_task("first", None)).await.unwrap();

        assert_eq!(task.numero, 1);
        assert!(!task.completed);
        assert_eq!(task.tipo, TaskCategory::Trabajo);
        assert_eq!(task.created_at, task.updated_at);
    }

    #[tokio::test]
    async fn auto_number_follows_the_maximum_not_the_count() {
        let repo = repo().await;
        repo.insert(new_task("explicit", Some(10))).await.unwrap();
        repo.insert(new_task("low", Some(2))).await.unwrap();

        let task = repo.insert(new_task("auto", None)).await.unwrap();
        assert_eq!(task.numero, 11);
    }

    #[tokio::test]
    async fn duplicate_numero_is_already_exists() {
        let repo = repo().await;
        repo.insert(new_task("a", Some(5))).await.unwrap();

        let err = repo.insert(new_task("b", Some(5))).await.unwrap_err();
        assert!(matches!(err, RepositoryError::AlreadyExists(_)));
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn auto_number_past_i64_max_is_rejected_and_store_stays_readable() {
        let repo = repo().await;
        repo.insert(new_task("last", Some(i64::MAX))).await.unwrap();

        let err = repo.insert(new_task("overflow", None)).await.unwrap_err();
        assert!(
            matches!(err, RepositoryError::Constraint(ref m) if m == NUMERO_EXHAUSTED_MESSAGE)
        );

        let tasks = repo.list().await.unwrap();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].numero, i64::MAX);

        // Explicit numbers below the maximum still work.
        let task = repo.insert(new_task("explicit", Some(3))).await.unwrap();
        assert_eq!(task.numero, 3);
    }

    #[tokio::test]
    async fn non_integer_numero_is_rejected_by_schema() {
        let repo = repo().await;

        let err = sqlx::query(
            "INSERT INTO tasks (id, numero, nombre, tipo, descripcion, created_at, updated_at)
             VALUES ('x', 1.5, 'n', 'Otro', 'd', '2000-01-01T00:00:00.000Z', '2000-01-01T00:00:00.000Z')",
        )
        .execute(&repo.pool)
        .await
        .unwrap_err();

        assert!(matches!(
            map_write_error(err, Some(1)),
            RepositoryError::Constraint(_)
        ));
        assert_eq!(repo.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn list_is_sorted_by_numero() {
        let repo = repo().await;
        repo.insert(new_task("c", Some(30))).await.unwrap();
        repo.insert(new_task("a", Some(1))).await.unwrap();
        repo.insert(new_task("b", Some(20))).await.unwrap();

        let numeros: Vec<i64> = repo.list().await.unwrap().iter().map(|t| t.numero).collect();
        assert_eq!(numeros, vec![1, 20, 30]);
    }

    #[tokio::test]
    async fn get_unknown_id_is_not_found() {
        let repo = repo().await;
        let err = repo.get(TaskId::new()).await.unwrap_err();
        assert!(matches!(err, RepositoryError::NotFound(_)));
    }

    #[tokio::test]
    async fn replace_keeps_numero_when_omitted() {
        let repo = repo().await;
        let task = repo.insert(new_task("orig", Some(7))).await.unwrap();

        let updated = repo
            .replace(
                task.id,
                TaskUpdate {
                    numero: None,
                    nombre: "renamed".into(),
                    tipo: TaskCategory::Hogar,
                    descripcion: "new description".into(),
                    completed: true,
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.id, task.id);
        assert_eq!(updated.numero, 7);
        assert_eq!(updated.nombre, "renamed");
        assert_eq!(updated.tipo, TaskCategory::Hogar);
        assert!(updated.completed);
        assert_eq!(updated.created_at, task.created_at);
        assert!(updated.updated_at >= task.updated_at);
    }

    #[tokio::test]
    async fn replace_into_taken_numero_is_already_exists() {
        let repo = repo().await;
        repo.insert(new_task("one", Some(1))).await.unwrap();
        let two = repo.insert(new_task("two", Some(2))).await.unwrap();

        let err = repo
            .replace(
                two.id,
                TaskUpdate {
                    numero: Some(1),
                    nombre: "two".into(),
                    tipo: TaskCategory::Otro,
                    descripcion: "two".into(),
                    completed: false,
                },
            )
            .await
            .unwrap_err();

        assert!(matches!(err, RepositoryError::AlreadyExists(_)));
    }

    #[tokio::test]
    async fn replace_unknown_id_is_not_found() {
        let repo = repo().await;
        let err = repo
            .replace(
                TaskId::new(),
                TaskUpdate {
                    numero: None,
                    nombre: "x".into(),
                    tipo: TaskCategory::Otro,
                    descripcion: "x".into(),
                    completed: false,
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, RepositoryError::NotFound(_)));
    }

    #[tokio::test]
    async fn toggle_flips_back_and_forth() {
        let repo = repo().await;
        let task = repo.insert(new_task("flip", None)).await.unwrap();

        let once = repo.toggle(task.id).await.unwrap();
        assert!(once.completed);

        let twice = repo.toggle(task.id).await.unwrap();
        assert!(!twice.completed);
    }

    #[tokio::test]
    async fn replace_refreshes_updated_at_only() {
        let repo = repo().await;
        let task = repo.insert(new_task("stale", None)).await.unwrap();
        let stale = backdate(&repo, task.id).await;
        assert_eq!(format_timestamp(stale.updated_at), LONG_AGO);

        let updated = repo
            .replace(
                task.id,
                TaskUpdate {
                    numero: None,
                    nombre: "fresh".into(),
                    tipo: TaskCategory::Salud,
                    descripcion: "fresh".into(),
                    completed: false,
                },
            )
            .await
            .unwrap();

        assert!(updated.updated_at > stale.updated_at);
        assert_eq!(updated.created_at, task.created_at);
    }

    #[tokio::test]
    async fn toggle_refreshes_updated_at_only() {
        let repo = repo().await;
        let task = repo.insert(new_task("stale", None)).await.unwrap();
        let stale = backdate(&repo, task.id).await;

        let toggled = repo.toggle(task.id).await.unwrap();

        assert!(toggled.updated_at > stale.updated_at);
        assert_eq!(toggled.created_at, task.created_at);
        assert_eq!(repo.get(task.id).await.unwrap().updated_at, toggled.updated_at);
    }

    #[tokio::test]
    async fn delete_returns_removed_task() {
        let repo = repo().await;
        let task = repo.insert(new_task("gone", None)).await.unwrap();

        let removed = repo.delete(task.id).await.unwrap();
        assert_eq!(removed.id, task.id);

        let err = repo.delete(task.id).await.unwrap_err();
        assert!(matches!(err, RepositoryError::NotFound(_)));
    }

    #[tokio::test]
    async fn delete_completed_only_removes_completed() {
        let repo = repo().await;
        let a = repo.insert(new_task("a", None)).await.unwrap();
        let b = repo.insert(new_task("b", None)).await.unwrap();
        repo.insert(new_task("c", None)).await.unwrap();
        repo.toggle(a.id).await.unwrap();
        repo.toggle(b.id).await.unwrap();

        assert_eq!(repo.delete_completed().await.unwrap(), 2);

        let remaining = repo.list().await.unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].nombre, "c");
    }

    #[tokio::test]
    async fn delete_completed_on_empty_store_is_zero() {
        let repo = repo().await;
        assert_eq!(repo.delete_completed().await.unwrap(), 0);
    }
}
