use crate::error::AppError;
use crate::models::ScoreResponse;
use crate::state::AppState;
use axum::{extract::State, Json};
use types::profile::CustomerProfile;

/// Score one customer profile.
///
/// The engine rejects out-of-domain fields with 422; everything else in the
/// pipeline is deterministic local computation.
pub async fn score(
    State(state): State<AppState>,
    Json(profile): Json<CustomerProfile>,
) -> Result<Json<ScoreResponse>, AppError> {
    let assessment = state.engine.evaluate(&profile)?;
    let response = ScoreResponse::from_assessment(assessment);

    tracing::info!(
        request_id = %response.request_id,
        risk_tier = ?response.risk_tier,
        "scored profile"
    );

    Ok(Json(response))
}
