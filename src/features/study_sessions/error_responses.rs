use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use crate::data::models::ApiError;

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) | ApiError::Integrity(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::Database(_) | ApiError::Pool(_) | ApiError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = match &self {
            ApiError::Database(e) => {
                log::error!("Database error: {}", e);
                "A database error occurred".to_string()
            }
            ApiError::Pool(e) => {
                log::error!("Failed to get DB connection: {}", e);
                "A database error occurred".to_string()
            }
            ApiError::Internal(e) => {
                log::error!("Internal error: {}", e);
                "Internal server error".to_string()
            }
            other => {
                log::warn!("Request rejected ({}): {}", status.as_u16(), other);
                other.to_string()
            }
        };

        let body = json!({
            "error": message,
            "status": status.as_u16()
        });

        (status, axum::Json(body)).into_response()
    }
}

/// Turns a handler panic into the generic 500 body.
pub fn panic_response(_panic: Box<dyn std::any::Any + Send + 'static>) -> Response {
    ApiError::Internal("handler panicked".into()).into_response()
}
