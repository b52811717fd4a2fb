use crate::models::status::StatusSnapshot;
use crate::AppState;
use axum::{extract::State, Json};

pub async fn get_status(State(app_state): State<AppState>) -> Json<StatusSnapshot> {
    Json(app_state.status_service.snapshot().await)
}
