//! Add command handler.

use taskboard_core::TaskDraft;

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::presentation::display_task_details;

/// Execute the add command.
///
/// Input is validated by the service, so the CLI reports the same
/// messages as the HTTP API.
pub async fn execute(
    ctx: &CliContext,
    nombre: String,
    description: Option<String>,
    tipo: Option<String>,
    numero: Option<i64>,
) -> Result<(), CliError> {
    let draft = TaskDraft {
        numero,
        nombre: Some(nombre),
        tipo,
        descripcion: description,
    };

    let task = ctx.tasks().create(draft).await?;
    display_task_details(&task, Some("Task created:"));
    Ok(())
}
