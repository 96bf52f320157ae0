use axum::{
    extract::{rejection::JsonRejection, State},
    response::{IntoResponse, Json},
};

use crate::domain::Verdict;

use super::{error::ApiError, AppState, PredictRequest};

/// GET /health
pub(super) async fn handle_health(State(state): State<AppState>) -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "phishing_backend": state.workflow.phishing_backend(),
        "started_at": state.started_at.to_rfc3339(),
    }))
}

/// POST /predict: classify one message.
pub(super) async fn handle_predict(
    State(state): State<AppState>,
    body: Result<Json<PredictRequest>, JsonRejection>,
) -> Result<Json<Verdict>, ApiError> {
    let Json(request) = body?;

    let message = request.message.trim();
    if message.is_empty() {
        return Err(ApiError::EmptyMessage);
    }

    let verdict = state.workflow.evaluate(message).await?;
    Ok(Json(verdict))
}
