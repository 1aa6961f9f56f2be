//! List command handler.
//!
//! Displays tasks in a formatted table, ordered by number.

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::presentation::display_task_table;

/// Which tasks to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListFilter {
    #[default]
    All,
    Completed,
    Pending,
}

impl ListFilter {
    pub const fn from_flags(completed: bool, pending: bool) -> Self {
        match (completed, pending) {
            (true, _) => Self::Completed,
            (false, true) => Self::Pending,
            (false, false) => Self::All,
        }
    }

    const fn matches(self, completed: bool) -> bool {
        match self {
            Self::All => true,
            Self::Completed => completed,
            Self::Pending => !completed,
        }
    }
}

/// Execute the list command.
pub async fn execute(ctx: &CliContext, filter: ListFilter) -> Result<(), CliError> {
    let tasks: Vec<_> = ctx
        .tasks()
        .list()
        .await?
        .into_iter()
        .filter(|task| filter.matches(task.completed))
        .collect();

    if tasks.is_empty() {
        println!("No tasks found.");
        if filter == ListFilter::All {
            println!("Use 'taskboard add <nombre> --description <text>' to add your first task.");
        }
        return Ok(());
    }

    let done = tasks.iter().filter(|task| task.completed).count();
    println!("{} task(s), {} completed:\n", tasks.len(), done);
    display_task_table(&tasks);

    Ok(())
}
