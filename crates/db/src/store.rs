//! [`ProjectStore`] adapter over PostgreSQL.

use async_trait::async_trait;
use tracker_core::error::CoreError;
use tracker_core::project::{NewProject, Project};
use tracker_core::store::ProjectStore;
use tracker_core::types::DbId;

use crate::repositories::ProjectRepo;
use crate::DbPool;

/// Persists projects through [`ProjectRepo`].
///
/// Every `sqlx::Error` is logged here and surfaced as
/// [`CoreError::Infrastructure`]; nothing is retried.
#[derive(Debug, Clone)]
pub struct PgProjectStore {
    pool: DbPool,
}

impl PgProjectStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn storage_error(operation: &'static str) -> impl FnOnce(sqlx::Error) -> CoreError {
    move |err| {
        tracing::error!(error = %err, operation, "Project storage operation failed");
        CoreError::Infrastructure(format!("{operation}: {err}"))
    }
}

#[async_trait]
impl ProjectStore for PgProjectStore {
    async fn insert(&self, project: &NewProject) -> Result<DbId, CoreError> {
        let id = ProjectRepo::insert(&self.pool, project)
            .await
            .map_err(storage_error("insert"))?;
        tracing::debug!(project_id = id, "Inserted project row");
        Ok(id)
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<Project>, CoreError> {
        let row = ProjectRepo::find_by_id(&self.pool, id)
            .await
            .map_err(storage_error("find_by_id"))?;
        Ok(row.map(Project::from))
    }

    async fn find_all(&self) -> Result<Vec<Project>, CoreError> {
        let rows = ProjectRepo::list(&self.pool)
            .await
            .map_err(storage_error("find_all"))?;
        Ok(rows.into_iter().map(Project::from).collect())
    }

    async fn replace(&self, id: DbId, project: &NewProject) -> Result<bool, CoreError> {
        ProjectRepo::replace(&self.pool, id, project)
            .await
            .map_err(storage_error("replace"))
    }

    async fn remove(&self, id: DbId) -> Result<bool, CoreError> {
        ProjectRepo::delete(&self.pool, id)
            .await
            .map_err(storage_error("remove"))
    }

    async fn ping(&self) -> Result<(), CoreError> {
        crate::health_check(&self.pool)
            .await
            .map_err(storage_error("ping"))
    }
}
