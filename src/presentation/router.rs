use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::middleware;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::infrastructure::observability::request_id_middleware;
use crate::presentation::handlers::{
    analyze_handler, asset_handler, health_handler, report_handler, session_handler,
    session_reset_handler,
};
use crate::presentation::state::AppState;

/// Extractor ceiling, kept above the application's own upload limit so the
/// size gate in AnalysisService rejects oversize files; bodies larger still
/// trip this limit and are mapped to the same size failure by the handler.
const BODY_LIMIT_BYTES: usize = 64 * 1024 * 1024;

pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    Router::new()
        .route("/health", get(health_handler))
        .route("/api/v1/analyze", post(analyze_handler))
        .route("/api/v1/session", get(session_handler))
        .route("/api/v1/session/reset", post(session_reset_handler))
        .route("/api/v1/report", get(report_handler))
        .route("/api/v1/assets/{name}", get(asset_handler))
        .layer(DefaultBodyLimit::max(BODY_LIMIT_BYTES))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}
