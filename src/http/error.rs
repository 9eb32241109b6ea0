//! HTTP error mapping for todo service failures.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use log::error;

use crate::todo::ports::TodoRepositoryError;
use crate::todo::services::TodoServiceError;

/// Wrapper giving service errors an HTTP representation.
///
/// Validation failures map to 422, missing items to 404, and everything
/// else (duplicate identifiers, persistence faults) to 500.
#[derive(Debug)]
pub struct ApiError(TodoServiceError);

impl From<TodoServiceError> for ApiError {
    fn from(err: TodoServiceError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            TodoServiceError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            TodoServiceError::Repository(TodoRepositoryError::NotFound(_)) => {
                StatusCode::NOT_FOUND
            }
            TodoServiceError::Repository(err) => {
                error!("storage failure: {err}");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        let message = self.0.to_string();
        (status, Json(serde_json::json!({ "error": message }))).into_response()
    }
}
