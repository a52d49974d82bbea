use axum::{extract::State, Json};

use folio_types::{CreateProjectRequest, Project, UpdateProjectRequest};

use crate::api::extract::{ApiJson, ApiPath};
use crate::api::{ApiError, ApiResult};
use crate::db::repositories::ProjectRepository;
use crate::state::AppState;

/// GET /api/projects - List projects in display order
pub async fn list_projects(State(state): State<AppState>) -> ApiResult<Json<Vec<Project>>> {
    let repo = ProjectRepository::new(state.db.pool.clone());
    let projects = repo
        .list()
        .map_err(|e| ApiError::internal("Failed to fetch projects", e))?;

    Ok(Json(projects))
}

/// POST /api/projects - Create a project at the end of the display sequence
pub async fn create_project(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<CreateProjectRequest>,
) -> ApiResult<Json<Project>> {
    let new_project = payload
        .validate()
        .map_err(|e| ApiError::invalid_payload("Invalid project data", e))?;

    let repo = ProjectRepository::new(state.db.pool.clone());
    let project = repo
        .create(&new_project)
        .map_err(|e| ApiError::internal("Failed to create project", e))?;

    Ok(Json(project))
}

/// PUT /api/projects/:id - Patch a project's editable fields
pub async fn update_project(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
    ApiJson(payload): ApiJson<UpdateProjectRequest>,
) -> ApiResult<Json<Project>> {
    let patch = payload
        .validate()
        .map_err(|e| ApiError::invalid_payload("Invalid project data", e))?;

    let repo = ProjectRepository::new(state.db.pool.clone());
    let project = repo
        .update(id, &patch)
        .map_err(|e| ApiError::internal("Failed to update project", e))?
        .ok_or_else(|| ApiError::NotFound("Project not found".to_string()))?;

    Ok(Json(project))
}

/// DELETE /api/projects/:id - Remove a project; ranks close up on the next read
pub async fn delete_project(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> ApiResult<Json<serde_json::Value>> {
    let repo = ProjectRepository::new(state.db.pool.clone());
    let deleted = repo
        .delete(id)
        .map_err(|e| ApiError::internal("Failed to delete project", e))?;

    if !deleted {
        return Err(ApiError::NotFound("Project not found".to_string()));
    }

    Ok(Json(serde_json::json!({
        "message": "Project deleted successfully"
    })))
}
