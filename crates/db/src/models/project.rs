//! Row mapping for the `projects` table.

use chrono::NaiveDate;
use sqlx::FromRow;
use tracker_core::project::Project;
use tracker_core::types::DbId;

/// A project row from the `projects` table.
#[derive(Debug, Clone, FromRow)]
pub struct ProjectRow {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub status: String,
    pub owner: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl From<ProjectRow> for Project {
    fn from(row: ProjectRow) -> Self {
        Project {
            id: row.id,
            name: row.name,
            description: row.description,
            status: row.status,
            owner: row.owner,
            start_date: row.start_date,
            end_date: row.end_date,
        }
    }
}
