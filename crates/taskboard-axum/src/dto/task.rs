//! Task request and response bodies.
//!
//! Field names follow the JSON contract the web client was written
//! against: `_id`, camel-cased timestamps, and `description` accepted as
//! an alias of `descripcion`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use taskboard_core::{Task, TaskCategory, TaskDraft, TaskReplacement};

/// A task as returned by the API.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskDto {
    #[serde(rename = "_id")]
    pub id: String,
    pub numero: i64,
    pub nombre: String,
    pub tipo: TaskCategory,
    pub descripcion: String,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Task> for TaskDto {
    fn from(task: Task) -> Self {
        Self {
            id: task.id.to_string(),
            numero: task.numero,
            nombre: task.nombre,
            tipo: task.tipo,
            descripcion: task.descripcion,
            completed: task.completed,
            created_at: task.created_at,
            updated_at: task.updated_at,
        }
    }
}

/// Body of `POST /api/tasks` and `PUT /api/tasks/{id}`.
///
/// Everything is optional here; presence and format are checked by the
/// core validators so both verbs report the same messages.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TaskRequest {
    #[serde(default, deserialize_with = "deserialize_numero")]
    pub numero: Option<i64>,
    #[serde(default)]
    pub nombre: Option<String>,
    #[serde(default)]
    pub tipo: Option<String>,
    #[serde(default, alias = "description")]
    pub descripcion: Option<String>,
    #[serde(default)]
    pub completed: Option<bool>,
}

impl TaskRequest {
    /// Create input. `completed` is ignored: new tasks start open.
    pub fn into_draft(self) -> TaskDraft {
        TaskDraft {
            numero: self.numero,
            nombre: self.nombre,
            tipo: self.tipo,
            descripcion: self.descripcion,
        }
    }

    pub fn into_replacement(self) -> TaskReplacement {
        TaskReplacement {
            numero: self.numero,
            nombre: self.nombre,
            tipo: self.tipo,
            descripcion: self.descripcion,
            completed: self.completed,
        }
    }
}

/// Response of `DELETE /api/tasks/{id}`.
#[derive(Debug, Serialize)]
pub struct DeleteTaskResponse {
    pub message: String,
    pub task: TaskDto,
}

/// Response of `DELETE /api/tasks/completed/all`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClearCompletedResponse {
    pub message: String,
    pub deleted_count: u64,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumeroInput {
    Number(i64),
    Float(f64),
    Text(String),
    Other(serde::de::IgnoredAny),
}

/// Whole-valued floats (`4.0`, `1e2`) inside the `i64` range.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::float_cmp
)]
fn integral(f: f64) -> Option<i64> {
    // `i64::MAX as f64` rounds up to 2^63, hence the strict upper bound
    let in_range = f >= i64::MIN as f64 && f < i64::MAX as f64;
    (f.fract() == 0.0 && in_range).then(|| f as i64)
}

/// Accept `numero` as a JSON number, a numeric string, `""` or `null`.
fn deserialize_numero<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    match Option::<NumeroInput>::deserialize(deserializer)? {
        None => Ok(None),
        Some(NumeroInput::Number(n)) => Ok(Some(n)),
        Some(NumeroInput::Float(f)) => integral(f)
            .map(Some)
            .ok_or_else(|| D::Error::custom(format!("numero must be an integer, got {f}"))),
        Some(NumeroInput::Text(s)) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return Ok(None);
            }
            trimmed
                .parse::<i64>()
                .map(Some)
                .map_err(|_| D::Error::custom(format!("numero must be an integer, got '{s}'")))
        }
        Some(NumeroInput::Other(_)) => Err(D::Error::custom(
            "numero must be an integer, a numeric string or empty",
        )),
    }
}
