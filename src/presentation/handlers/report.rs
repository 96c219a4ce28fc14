use axum::Json;
use axum::extract::State;
use axum::http::{StatusCode, header};
use axum::response::IntoResponse;
use serde::Serialize;

use crate::application::services::{render_markdown, report_file_name};
use crate::domain::SessionPhase;
use crate::presentation::state::AppState;

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Markdown export of the completed analysis, named after the uploaded file.
#[tracing::instrument(skip(state))]
pub async fn report_handler(State(state): State<AppState>) -> impl IntoResponse {
    let session = state.session.read().await;

    let result = match (&session.phase, &session.result) {
        (SessionPhase::Completed, Some(result)) => result,
        _ => {
            return (
                StatusCode::CONFLICT,
                Json(ErrorResponse {
                    error: "No completed analysis to export".to_string(),
                }),
            )
                .into_response();
        }
    };

    let source_file = session.file_name.as_deref().unwrap_or("audio");
    let body = render_markdown(result, source_file);
    let download_name = report_file_name(source_file);

    tracing::info!(download_name = %download_name, "Serving Markdown report");

    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "text/markdown; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", download_name),
            ),
        ],
        body,
    )
        .into_response()
}
