//! Command handlers that delegate to `TaskService`.
//!
//! Handlers follow the canonical pattern:
//! - Signature: `pub async fn execute(ctx: &CliContext, ...) -> Result<(), CliError>`
//! - Thin wrappers that parse CLI-specific input, call the service and
//!   format output for the terminal
//!
//! Handlers should NOT access repositories directly or manage database
//! connections.

pub mod add;
pub mod clear_completed;
pub mod list;
pub mod paths;
pub mod remove;
pub mod show;
pub mod toggle;
pub mod web;

use taskboard_core::{Task, TaskId};

use crate::bootstrap::CliContext;
use crate::error::CliError;

/// Find a task by UUID or by its number.
pub(crate) async fn resolve_task(ctx: &CliContext, identifier: &str) -> Result<Task, CliError> {
    if let Some(id) = TaskId::parse(identifier) {
        return Ok(ctx.tasks().get(id).await?);
    }

    let numero: i64 = identifier.trim().parse().map_err(|_| {
        CliError::Arguments(format!(
            "'{identifier}' is neither a task ID nor a task number"
        ))
    })?;

    ctx.tasks()
        .list()
        .await?
        .into_iter()
        .find(|task| task.numero == numero)
        .ok_or_else(|| CliError::NotFound(format!("No task with number {numero}")))
}
