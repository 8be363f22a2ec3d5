//! Handlers for the `/projects` resource.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::header::LOCATION;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use tracker_core::error::CoreError;
use tracker_core::project::{Project, ProjectInput, PROJECT_ENTITY};
use tracker_core::types::DbId;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: PROJECT_ENTITY,
        id,
    })
}

/// GET /api/projects
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Project>>> {
    tracing::info!("Fetching all projects");
    let projects = state.projects.list_projects().await?;
    Ok(Json(projects))
}

/// GET /api/projects/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Project>> {
    tracing::info!(project_id = id, "Fetching project");
    let project = state.projects.get_project(id).await?.ok_or_else(|| {
        tracing::warn!(project_id = id, "Project not found");
        not_found(id)
    })?;
    Ok(Json(project))
}

/// POST /api/projects
///
/// Responds `201 Created` with the stored record and a `Location` header.
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<ProjectInput>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(input) = payload?;
    tracing::info!(name = %input.name, "Creating project");

    let project = state.projects.create_project(&input).await?;
    tracing::info!(project_id = project.id, "Project created");

    let location = format!("/api/projects/{}", project.id);
    Ok((StatusCode::CREATED, [(LOCATION, location)], Json(project)))
}

/// PUT /api/projects/{id}
///
/// Full replacement. The body `id` must match the path.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    payload: Result<Json<ProjectInput>, JsonRejection>,
) -> AppResult<StatusCode> {
    let Json(input) = payload?;

    match state.projects.update_project(id, &input).await? {
        Some(_) => {
            tracing::info!(project_id = id, "Project updated");
            Ok(StatusCode::NO_CONTENT)
        }
        None => {
            tracing::warn!(project_id = id, "Project not found for update");
            Err(not_found(id))
        }
    }
}

/// DELETE /api/projects/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    if state.projects.delete_project(id).await? {
        tracing::info!(project_id = id, "Project deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        tracing::warn!(project_id = id, "Project not found for deletion");
        Err(not_found(id))
    }
}
