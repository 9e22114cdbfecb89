use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde_json::json;

/// Message returned when a month-scoped endpoint is called without `month`.
pub const MONTH_REQUIRED: &str = "Month parameter is required";

/// Failure envelope rendered as `{"success": false, "error": "..."}`.
///
/// Only a missing month (400) and a failed combined-data aggregation (500)
/// change the status code; every other failure is reported with 200 and the
/// flag in the body.
#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn missing_month() -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: MONTH_REQUIRED.to_string(),
        }
    }

    pub fn gateway(msg: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: msg.into(),
        }
    }

    /// Failure carried in the body of a 200 response.
    pub fn reported(msg: impl Into<String>) -> Self {
        Self {
            status: StatusCode::OK,
            message: msg.into(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(json!({ "success": false, "error": self.message })),
        )
            .into_response()
    }
}

impl From<sales_stats::SalesError> for AppError {
    fn from(e: sales_stats::SalesError) -> Self {
        AppError::reported(e.to_string())
    }
}
