//! Remove command handler.

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::presentation::display_task_details;

use super::resolve_task;

/// Execute the remove command.
pub async fn execute(ctx: &CliContext, identifier: &str) -> Result<(), CliError> {
    let task = resolve_task(ctx, identifier).await?;
    let removed = ctx.tasks().delete(task.id).await?;
    display_task_details(&removed, Some("Task removed:"));
    Ok(())
}
