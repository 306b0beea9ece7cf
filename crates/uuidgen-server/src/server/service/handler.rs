//! Route handlers.
//!
//! Handlers only translate between HTTP and [`uuidgen::UuidService`]. Query
//! values reach the core as raw strings so parsing and range checks happen in
//! one place.

use crate::server::{
    error::ApiError,
    service::AppState,
    telemetry::{
        increment_ids_generated, increment_rejected_requests, increment_requests,
        record_ids_per_request,
    },
};
use axum::{
    Json,
    extract::{
        Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::{StatusCode, Uri},
};
use serde::Serialize;
use uuidgen::{AdminSettings, AdminStats, GenerateParams};

pub const GREETING: &str = "Hi. I'm pz-uuidgen.";

#[derive(Debug, Serialize)]
pub struct UuidsResponse {
    pub data: Vec<String>,
}

/// `GET /`
pub async fn get_root() -> &'static str {
    GREETING
}

/// `POST /v1/uuids?count=INT&debug=BOOL&prefix=STR`
///
/// The request body is ignored.
#[tracing::instrument(skip_all)]
pub async fn post_uuids(
    State(state): State<AppState>,
    params: Result<Query<GenerateParams>, QueryRejection>,
) -> Result<Json<UuidsResponse>, ApiError> {
    increment_requests();

    let Query(params) = params.map_err(|e| {
        increment_rejected_requests();
        ApiError::new(StatusCode::BAD_REQUEST, e.body_text(), state.origin())
    })?;

    match state.service.generate(&params) {
        Ok(data) => {
            increment_ids_generated(data.len() as u64);
            record_ids_per_request(data.len() as f64);
            Ok(Json(UuidsResponse { data }))
        }
        Err(e) => {
            increment_rejected_requests();
            tracing::debug!("rejected generation request: {e}");
            Err(ApiError::from_core(e, state.origin()))
        }
    }
}

/// `GET /v1/admin/stats`
pub async fn get_stats(State(state): State<AppState>) -> Json<AdminStats> {
    Json(state.service.stats())
}

/// `GET /v1/admin/settings`
pub async fn get_settings(State(state): State<AppState>) -> Json<AdminSettings> {
    Json(state.service.settings())
}

/// `POST /v1/admin/settings` with a JSON body such as `{"debug": true}`.
///
/// Responds with an empty 200 on success.
pub async fn post_settings(
    State(state): State<AppState>,
    body: Result<Json<AdminSettings>, JsonRejection>,
) -> Result<StatusCode, ApiError> {
    let Json(settings) = body
        .map_err(|e| ApiError::new(StatusCode::BAD_REQUEST, e.body_text(), state.origin()))?;
    state.service.update_settings(settings);
    Ok(StatusCode::OK)
}

/// `POST /v1/admin/shutdown`
///
/// Starts a graceful shutdown; in-flight requests are allowed to finish.
pub async fn post_shutdown(State(state): State<AppState>) -> &'static str {
    tracing::warn!("shutdown requested through the admin endpoint");
    state.shutdown.cancel();
    "Shutting down"
}

/// Fallback for unknown routes.
pub async fn not_found(State(state): State<AppState>, uri: Uri) -> ApiError {
    ApiError::new(
        StatusCode::NOT_FOUND,
        format!("no route for {}", uri.path()),
        state.origin(),
    )
}
