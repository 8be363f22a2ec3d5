//! Repository for the `projects` table.

use sqlx::PgPool;
use tracker_core::project::NewProject;
use tracker_core::types::DbId;

use crate::models::project::ProjectRow;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, description, status, owner, start_date, end_date";

/// Provides CRUD operations for projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a new project, returning the id assigned by the database.
    pub async fn insert(pool: &PgPool, input: &NewProject) -> Result<DbId, sqlx::Error> {
        sqlx::query_scalar::<_, DbId>(
            "INSERT INTO projects (name, description, status, owner, start_date, end_date)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING id",
        )
        .bind(input.name())
        .bind(input.description())
        .bind(input.status())
        .bind(input.owner())
        .bind(input.start_date())
        .bind(input.end_date())
        .fetch_one(pool)
        .await
    }

    /// Find a project by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<ProjectRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE id = $1");
        sqlx::query_as::<_, ProjectRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all projects ordered by id.
    pub async fn list(pool: &PgPool) -> Result<Vec<ProjectRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects ORDER BY id");
        sqlx::query_as::<_, ProjectRow>(&query).fetch_all(pool).await
    }

    /// Overwrite every mutable column. Returns `true` if a row was updated.
    pub async fn replace(pool: &PgPool, id: DbId, input: &NewProject) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE projects SET
                name = $2,
                description = $3,
                status = $4,
                owner = $5,
                start_date = $6,
                end_date = $7
             WHERE id = $1",
        )
        .bind(id)
        .bind(input.name())
        .bind(input.description())
        .bind(input.status())
        .bind(input.owner())
        .bind(input.start_date())
        .bind(input.end_date())
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Permanently delete a project by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
