use crate::server::service::{
    AppState,
    handler::{
        get_root, get_settings, get_stats, not_found, post_settings, post_shutdown, post_uuids,
    },
};
use axum::{
    Router,
    routing::{get, post},
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

/// Builds the full route table with logging and CORS middleware.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(get_root))
        .route("/v1/uuids", post(post_uuids))
        .route("/v1/admin/stats", get(get_stats))
        .route("/v1/admin/settings", get(get_settings).post(post_settings))
        .route("/v1/admin/shutdown", post(post_shutdown))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
