//! Task domain types.
//!
//! These types represent tasks in the domain model, independent of any
//! storage or transport concerns. HTTP-facing field names live in the
//! adapter DTOs, not here.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque identifier of a stored task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(Uuid);

impl TaskId {
    /// Generate a fresh random identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse an identifier, returning `None` for anything that is not a UUID.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        Uuid::parse_str(s.trim()).ok().map(Self)
    }
}

impl Default for TaskId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for TaskId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TaskId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s.trim()).map(Self)
    }
}

/// The fixed set of task categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TaskCategory {
    #[default]
    Personal,
    Trabajo,
    Estudio,
    Hogar,
    Salud,
    Otro,
}

impl TaskCategory {
    /// Every category, in display order.
    pub const ALL: [Self; 6] = [
        Self::Personal,
        Self::Trabajo,
        Self::Estudio,
        Self::Hogar,
        Self::Salud,
        Self::Otro,
    ];

    /// Parse a category from its stored name.
    ///
    /// Matching is exact; `"personal"` is not a category.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Personal" => Some(Self::Personal),
            "Trabajo" => Some(Self::Trabajo),
            "Estudio" => Some(Self::Estudio),
            "Hogar" => Some(Self::Hogar),
            "Salud" => Some(Self::Salud),
            "Otro" => Some(Self::Otro),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Personal => "Personal",
            Self::Trabajo => "Trabajo",
            Self::Estudio => "Estudio",
            Self::Hogar => "Hogar",
            Self::Salud => "Salud",
            Self::Otro => "Otro",
        }
    }
}

impl fmt::Display for TaskCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A persisted task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    /// Human-facing sequence number, unique across all tasks.
    pub numero: i64,
    pub nombre: String,
    pub tipo: TaskCategory,
    pub descripcion: String,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
    /// Refreshed on every save.
    pub updated_at: DateTime<Utc>,
}

/// Validated data for creating a task.
///
/// `numero: None` asks the repository to assign the next free number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    pub numero: Option<i64>,
    pub nombre: String,
    pub tipo: TaskCategory,
    pub descripcion: String,
}

/// Validated data for a full replacement of an existing task.
///
/// `numero: None` keeps the stored number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskUpdate {
    pub numero: Option<i64>,
    pub nombre: String,
    pub tipo: TaskCategory,
    pub descripcion: String,
    pub completed: bool,
}

/// Unvalidated create input, as received from an adapter.
#[derive(Debug, Clone, Default)]
pub struct TaskDraft {
    pub numero: Option<i64>,
    pub nombre: Option<String>,
    pub tipo: Option<String>,
    pub descripcion: Option<String>,
}

/// Unvalidated replace input, as received from an adapter.
#[derive(Debug, Clone, Default)]
pub struct TaskReplacement {
    pub numero: Option<i64>,
    pub nombre: Option<String>,
    pub tipo: Option<String>,
    pub descripcion: Option<String>,
    pub completed: Option<bool>,
}
