use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use skillnow_core::entities::Project;
use skillnow_store::updates::project::{NewProject, ProjectUpdate};

use crate::error::{ApiError, IdPath, JsonBody};
use crate::state::AppState;

pub async fn list_projects(
    State(state): State<AppState>,
) -> Result<Json<Vec<Project>>, ApiError> {
    Ok(Json(state.service.list_projects().await?))
}

pub async fn get_project(
    State(state): State<AppState>,
    IdPath(id): IdPath<u64>,
) -> Result<Json<Project>, ApiError> {
    Ok(Json(state.service.get_project(id).await?))
}

pub async fn create_project(
    State(state): State<AppState>,
    JsonBody(new): JsonBody<NewProject>,
) -> Result<(StatusCode, Json<Project>), ApiError> {
    let project = state.service.create_project(new).await?;
    Ok((StatusCode::CREATED, Json(project)))
}

pub async fn update_project(
    State(state): State<AppState>,
    IdPath(id): IdPath<u64>,
    JsonBody(update): JsonBody<ProjectUpdate>,
) -> Result<Json<Project>, ApiError> {
    Ok(Json(state.service.update_project(id, update).await?))
}

pub async fn delete_project(
    State(state): State<AppState>,
    IdPath(id): IdPath<u64>,
) -> Result<Json<Project>, ApiError> {
    Ok(Json(state.service.delete_project(id).await?))
}
