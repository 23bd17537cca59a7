//! Uniform JSON response envelope.

use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};

/// Wrapper around every response body.
///
/// `data` is `null` on failure; `error` is omitted unless there is detail to
/// report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: message.into(),
            error: None,
        }
    }

    pub fn failure(message: impl Into<String>, error: Option<String>) -> Self {
        Self {
            success: false,
            data: None,
            message: message.into(),
            error,
        }
    }
}

/// Status code plus envelope, as returned by every handler.
pub type Reply<T> = (StatusCode, Json<ApiResponse<T>>);

pub fn reply_ok<T>(data: T, message: &str) -> Reply<T> {
    (StatusCode::OK, Json(ApiResponse::ok(data, message)))
}

pub fn reply_created<T>(data: T, message: &str) -> Reply<T> {
    (StatusCode::CREATED, Json(ApiResponse::ok(data, message)))
}

pub fn reply_not_found<T>(message: &str) -> Reply<T> {
    (
        StatusCode::NOT_FOUND,
        Json(ApiResponse::failure(message, None)),
    )
}

pub fn reply_bad_request<T>(message: &str, detail: String) -> Reply<T> {
    (
        StatusCode::BAD_REQUEST,
        Json(ApiResponse::failure(message, Some(detail))),
    )
}

pub fn reply_server_error<T>(message: &str, detail: String) -> Reply<T> {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ApiResponse::failure(message, Some(detail))),
    )
}
