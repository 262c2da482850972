use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use skillnow_core::entities::Assignment;
use skillnow_core::responses::{AssignmentWithProject, AssignmentWithUser};
use skillnow_store::updates::assignment::NewAssignment;

use crate::error::{ApiError, IdPath, JsonBody};
use crate::state::AppState;

pub async fn create_assignment(
    State(state): State<AppState>,
    IdPath(project_id): IdPath<u64>,
    JsonBody(new): JsonBody<NewAssignment>,
) -> Result<(StatusCode, Json<Assignment>), ApiError> {
    let assignment = state.service.create_assignment(project_id, new).await?;
    Ok((StatusCode::CREATED, Json(assignment)))
}

pub async fn list_project_assignments(
    State(state): State<AppState>,
    IdPath(project_id): IdPath<u64>,
) -> Result<Json<Vec<AssignmentWithUser>>, ApiError> {
    Ok(Json(state.service.assignments_for_project(project_id).await?))
}

pub async fn delete_assignment(
    State(state): State<AppState>,
    IdPath((project_id, assignment_id)): IdPath<(u64, u64)>,
) -> Result<Json<Assignment>, ApiError> {
    Ok(Json(
        state
            .service
            .delete_assignment(project_id, assignment_id)
            .await?,
    ))
}

pub async fn list_user_assignments(
    State(state): State<AppState>,
    IdPath(user_id): IdPath<u64>,
) -> Result<Json<Vec<AssignmentWithProject>>, ApiError> {
    Ok(Json(state.service.assignments_for_user(user_id).await?))
}
