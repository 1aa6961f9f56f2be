//! CLI bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together
//! for the CLI adapter: the database pool (via taskboard-db) and the
//! `TaskService` (via taskboard-core).
//!
//! Command handlers receive the composed context and delegate to it.

use std::path::PathBuf;

use anyhow::Result;
use taskboard_core::TaskService;
use taskboard_core::paths::database_path;
use taskboard_db::{CoreFactory, setup_database};

/// Bootstrap configuration for the CLI.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Database file to open.
    pub database_path: PathBuf,
}

impl CliConfig {
    /// Create config with default paths.
    pub fn with_defaults() -> Result<Self> {
        Ok(Self {
            database_path: database_path()?,
        })
    }
}

/// Fully composed application context for CLI commands.
pub struct CliContext {
    tasks: TaskService,
}

impl CliContext {
    pub const fn new(tasks: TaskService) -> Self {
        Self { tasks }
    }

    /// Access the task service.
    pub const fn tasks(&self) -> &TaskService {
        &self.tasks
    }
}

/// Bootstrap the CLI application.
pub async fn bootstrap(config: CliConfig) -> Result<CliContext> {
    tracing::debug!(
        target: "taskboard.paths",
        database_path = %config.database_path.display(),
        "CLI bootstrap resolved paths"
    );

    let pool = setup_database(&config.database_path).await?;
    Ok(CliContext::new(CoreFactory::build_service(pool)))
}
