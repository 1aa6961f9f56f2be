//! Composition utilities for building core services with `SQLite` backends.
//!
//! This module is focused purely on construction and should not contain
//! any domain logic.

use sqlx::SqlitePool;
use std::sync::Arc;

use taskboard_core::{Repos, TaskService};

use crate::repositories::SqliteTaskRepository;

/// Factory for creating repository instances with `SQLite` backends.
pub struct CoreFactory;

impl CoreFactory {
    /// Build all `SQLite` repositories from a pool.
    ///
    /// Returns a `Repos` struct from `taskboard-core` containing
    /// trait-object-wrapped repositories.
    pub fn build_repos(pool: SqlitePool) -> Repos {
        Repos::new(Arc::new(SqliteTaskRepository::new(pool)))
    }

    /// Build a ready-to-use `TaskService` from a pool.
    ///
    /// ```ignore
    /// let pool = setup_database(&db_path).await?;
    /// let service = CoreFactory::build_service(pool);
    /// ```
    pub fn build_service(pool: SqlitePool) -> TaskService {
        TaskService::new(Self::build_repos(pool).tasks)
    }
}

/// Test database helper for integration tests.
///
/// Provides an in-memory `SQLite` database with the production schema.
#[cfg(any(test, feature = "test-utils"))]
pub struct TestDb {
    pool: SqlitePool,
}

#[cfg(any(test, feature = "test-utils"))]
impl TestDb {
    /// Create a new in-memory test database with full schema.
    pub async fn new() -> anyhow::Result<Self> {
        let pool = crate::setup::setup_test_database().await?;
        Ok(Self { pool })
    }

    /// Get the underlying pool.
    pub const fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Create a task service using this test database.
    pub fn task_service(&self) -> TaskService {
        CoreFactory::build_service(self.pool.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn services_built_from_one_pool_share_data() {
        let db = TestDb::new().await.unwrap();
        let first = db.task_service();
        let second = CoreFactory::build_service(db.pool().clone());

        first
            .create(taskboard_core::TaskDraft {
                nombre: Some("shared".into()),
                descripcion: Some("visible to both".into()),
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(second.count().await.unwrap(), 1);
    }
}
