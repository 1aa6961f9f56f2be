//! Row mapping helpers for `SQLite` queries.

use chrono::{DateTime, SecondsFormat, Utc};
use sqlx::Row;
use taskboard_core::{RepositoryError, Task, TaskCategory, TaskId};

/// Shared column list for task queries (also used in RETURNING clauses).
pub const TASK_COLUMNS: &str =
    "id, numero, nombre, tipo, descripcion, completed, created_at, updated_at";

/// Format a timestamp the way it is stored.
pub fn format_timestamp(ts: DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Parse a stored timestamp.
pub fn parse_timestamp(column: &str, raw: &str) -> Result<DateTime<Utc>, RepositoryError> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| RepositoryError::Serialization(format!("{column} '{raw}': {e}")))
}

fn column<'r, T>(row: &'r sqlx::sqlite::SqliteRow, name: &str) -> Result<T, RepositoryError>
where
    T: sqlx::Decode<'r, sqlx::Sqlite> + sqlx::Type<sqlx::Sqlite>,
{
    row.try_get(name)
        .map_err(|e| RepositoryError::Storage(e.to_string()))
}

/// Parse a database row into a Task.
pub fn row_to_task(row: &sqlx::sqlite::SqliteRow) -> Result<Task, RepositoryError> {
    let id_str: String = column(row, "id")?;
    let id = TaskId::parse(&id_str)
        .ok_or_else(|| RepositoryError::Serialization(format!("invalid task id '{id_str}'")))?;

    let tipo_str: String = column(row, "tipo")?;
    let tipo = TaskCategory::parse(&tipo_str)
        .ok_or_else(|| RepositoryError::Serialization(format!("invalid category '{tipo_str}'")))?;

    let created_at: String = column(row, "created_at")?;
    let updated_at: String = column(row, "updated_at")?;

    Ok(Task {
        id,
        numero: column(row, "numero")?,
        nombre: column(row, "nombre")?,
        tipo,
        descripcion: column(row, "descripcion")?,
        completed: column(row, "completed")?,
        created_at: parse_timestamp("created_at", &created_at)?,
        updated_at: parse_timestamp("updated_at", &updated_at)?,
    })
}

/// Message for an automatic number past `i64::MAX`.
pub const NUMERO_EXHAUSTED_MESSAGE: &str =
    "No task number left to assign after the highest one; pass an explicit numero";

/// Translate a write failure into a repository error.
///
/// Unique-index violations can only come from `numero`, since ids are
/// generated fresh for every insert.
pub fn map_write_error(err: sqlx::Error, numero: Option<i64>) -> RepositoryError {
    if let Some(db_err) = err.as_database_error() {
        if db_err.is_unique_violation() {
            return RepositoryError::AlreadyExists(match numero {
                Some(n) => format!("Task number {n}"),
                None => "Task number".to_string(),
            });
        }
        if db_err.is_check_violation() {
            // `MAX(numero) + 1` overflows to REAL, which only the typeof check rejects
            if numero.is_none() && db_err.message().contains("typeof(numero)") {
                return RepositoryError::Constraint(NUMERO_EXHAUSTED_MESSAGE.to_string());
            }
            return RepositoryError::Constraint(db_err.message().to_string());
        }
    }
    RepositoryError::Storage(err.to_string())
}
