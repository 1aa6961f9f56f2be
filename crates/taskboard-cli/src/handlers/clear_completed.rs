//! Clear-completed command handler.

use crate::bootstrap::CliContext;
use crate::error::CliError;

/// Execute the clear-completed command.
pub async fn execute(ctx: &CliContext) -> Result<(), CliError> {
    let deleted = ctx.tasks().clear_completed().await?;
    let remaining = ctx.tasks().count().await?;
    println!("{deleted} completed task(s) deleted, {remaining} remaining");
    Ok(())
}
