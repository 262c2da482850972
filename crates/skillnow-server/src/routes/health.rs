use axum::Json;
use skillnow_core::responses::{HealthResponse, WelcomeResponse};

pub async fn index() -> Json<WelcomeResponse> {
    Json(WelcomeResponse::default())
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}
