use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

pub const CONFIGURATION_MISSING: &str = "Telegram configuration missing";
pub const RELAY_FAILED: &str = "Error sending to Telegram";
pub const SUBMISSION_FAILED: &str = "Failed to send message";
pub const INTERNAL_SERVER_ERROR: &str = "Internal server error";

#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

pub fn internal_server_error(err: impl Into<anyhow::Error>) -> Response {
    let err = err.into();
    tracing::error!("internal server error: {err:#}");
    error(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_SERVER_ERROR)
}

pub fn error(code: StatusCode, error: &'static str) -> Response {
    (code, Json(ApiError { error, details: None })).into_response()
}

pub fn error_with_details(
    code: StatusCode,
    error: &'static str,
    details: serde_json::Value,
) -> Response {
    let body = ApiError {
        error,
        details: Some(details),
    };
    (code, Json(body)).into_response()
}
