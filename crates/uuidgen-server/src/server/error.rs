//! HTTP error responses.
//!
//! Every failure is rendered as `{"status": <code>, "message": <text>,
//! "origin": <service name>}` with the matching status code.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// An error ready to be sent to the client.
#[derive(Debug, Clone)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
    pub origin: String,
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    status: u16,
    message: &'a str,
    origin: &'a str,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>, origin: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            origin: origin.into(),
        }
    }

    /// Maps a core error to its HTTP status.
    pub fn from_core(err: uuidgen::Error, origin: &str) -> Self {
        let status = if err.is_client_error() {
            StatusCode::BAD_REQUEST
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        };
        Self::new(status, err.to_string(), origin)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            status: self.status.as_u16(),
            message: &self.message,
            origin: &self.origin,
        };
        (self.status, Json(body)).into_response()
    }
}
