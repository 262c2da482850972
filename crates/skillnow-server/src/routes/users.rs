use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use skillnow_core::entities::User;
use skillnow_store::updates::user::{NewUser, UserUpdate};

use crate::error::{ApiError, IdPath, JsonBody};
use crate::state::AppState;

pub async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<User>>, ApiError> {
    Ok(Json(state.service.list_users().await?))
}

pub async fn get_user(
    State(state): State<AppState>,
    IdPath(id): IdPath<u64>,
) -> Result<Json<User>, ApiError> {
    Ok(Json(state.service.get_user(id).await?))
}

pub async fn update_user(
    State(state): State<AppState>,
    IdPath(id): IdPath<u64>,
    JsonBody(update): JsonBody<UserUpdate>,
) -> Result<Json<User>, ApiError> {
    Ok(Json(state.service.update_user(id, update).await?))
}

pub async fn register(
    State(state): State<AppState>,
    JsonBody(new): JsonBody<NewUser>,
) -> Result<(StatusCode, Json<User>), ApiError> {
    let user = state.service.create_user(new).await?;
    Ok((StatusCode::CREATED, Json(user)))
}
