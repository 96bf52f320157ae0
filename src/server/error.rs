use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use thiserror::Error;

use crate::workflow::WorkflowError;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Message cannot be empty or whitespace.")]
    EmptyMessage,
    #[error("Invalid request body: {0}. Expected: {{\"message\": \"...\"}}")]
    InvalidBody(String),
    /// Body could not be read as JSON at all (too large, wrong content type).
    #[error("{detail}")]
    Rejected { status: StatusCode, detail: String },
    #[error("Error while processing message: {0}")]
    Processing(#[from] WorkflowError),
}

impl From<JsonRejection> for ApiError {
    fn from(err: JsonRejection) -> Self {
        match err {
            JsonRejection::JsonDataError(_) | JsonRejection::JsonSyntaxError(_) => {
                ApiError::InvalidBody(err.body_text())
            }
            other => ApiError::Rejected {
                status: other.status(),
                detail: other.body_text(),
            },
        }
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::EmptyMessage => StatusCode::BAD_REQUEST,
            ApiError::InvalidBody(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Rejected { status, .. } => *status,
            ApiError::Processing(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(target: "http", error = %self, "request failed");
        } else {
            tracing::warn!(target: "http", status = status.as_u16(), error = %self, "request rejected");
        }
        let body = serde_json::json!({ "detail": self.to_string() });
        (status, Json(body)).into_response()
    }
}
