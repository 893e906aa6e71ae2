use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tracing::error;

use tally_shared::UserId;
use tally_store::StoreError;

use crate::assistant::AssistantError;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Invalid request: {0}")]
    BadRequest(String),

    #[error("User not found: {0}")]
    UserNotFound(UserId),

    #[error("Assistant provider error: {0}")]
    Assistant(#[from] AssistantError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<StoreError> for ServerError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::UserNotFound(id) => ServerError::UserNotFound(id),
            StoreError::DuplicateUsername(_)
            | StoreError::NegativePoints(_)
            | StoreError::NegativeEngagement(_) => ServerError::BadRequest(err.to_string()),
            StoreError::TotalMismatch { .. } => ServerError::Internal(err.to_string()),
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ServerError::BadRequest(_) => (StatusCode::BAD_REQUEST, self.to_string()),
            ServerError::UserNotFound(_) => {
                (StatusCode::NOT_FOUND, "User not found".to_string())
            }
            ServerError::Assistant(err) => {
                error!(error = %err, "Assistant exchange failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Assistant service unavailable".to_string(),
                )
            }
            ServerError::Internal(detail) => {
                error!(detail = %detail, "Internal server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        let body = serde_json::json!({
            "error": message,
        });

        (status, axum::Json(body)).into_response()
    }
}
