use crate::models::HealthResponse;
use crate::state::AppState;
use axum::{extract::State, Json};

/// Liveness probe reporting the loaded model version.
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        model_version: state.engine.model_version().to_string(),
    })
}
