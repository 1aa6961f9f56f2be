//! Toggle command handler.

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::presentation::status_marker;

use super::resolve_task;

/// Execute the toggle command.
pub async fn execute(ctx: &CliContext, identifier: &str) -> Result<(), CliError> {
    let task = resolve_task(ctx, identifier).await?;
    let task = ctx.tasks().toggle(task.id).await?;

    println!(
        "{} #{} {} is now {}",
        status_marker(task.completed),
        task.numero,
        task.nombre,
        if task.completed { "completed" } else { "pending" }
    );
    Ok(())
}
