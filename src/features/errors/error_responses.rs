use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use crate::data::models::AppError;

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::InvalidParameter(_) => StatusCode::BAD_REQUEST,
            AppError::DatabaseError(_)
            | AppError::PoolError(_)
            | AppError::RenderError(_)
            | AppError::TaskError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            AppError::NotFound => self.to_string(),
            AppError::InvalidParameter(msg) => msg,
            AppError::DatabaseError(e) => {
                log::error!("Database error: {}", e);
                format!("Database error: {}", e)
            }
            AppError::PoolError(e) => {
                log::error!("Connection pool error: {}", e);
                format!("Connection pool error: {}", e)
            }
            AppError::RenderError(e) => {
                log::error!("Image rendering error: {}", e);
                format!("Image rendering error: {}", e)
            }
            AppError::TaskError(msg) => {
                log::error!("Background task failed: {}", msg);
                format!("Background task failed: {}", msg)
            }
        };

        let body = json!({
            "error": message,
            "status": status.as_u16()
        });

        (status, axum::Json(body)).into_response()
    }
}
