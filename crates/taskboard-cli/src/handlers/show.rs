//! Show command handler.

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::presentation::display_task_details;

use super::resolve_task;

/// Execute the show command.
pub async fn execute(ctx: &CliContext, identifier: &str) -> Result<(), CliError> {
    let task = resolve_task(ctx, identifier).await?;
    display_task_details(&task, None);
    Ok(())
}
