use axum::Json;
use axum::extract::multipart::MultipartError;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;

use crate::application::ports::InferenceError;
use crate::application::services::AnalysisError;
use crate::domain::{AudioUpload, Session, SessionEvent};
use crate::presentation::handlers::session::SessionResponse;
use crate::presentation::state::AppState;

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Drives the whole pipeline for one upload: UPLOADING on receipt, ANALYZING
/// once the payload is encoded, then COMPLETED or FAILED. Every failure path
/// lands the session in FAILED with a human-readable message; no partial
/// results are ever exposed.
#[tracing::instrument(skip(state, multipart))]
pub async fn analyze_handler(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> impl IntoResponse {
    let field = loop {
        match multipart.next_field().await {
            Ok(Some(f)) if f.name() == Some("file") => break f,
            Ok(Some(_)) => continue,
            Ok(None) => {
                tracing::warn!("Analyze request without a file field");
                return (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorResponse {
                        error: "No file uploaded".to_string(),
                    }),
                )
                    .into_response();
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to read multipart");
                let (status, message) = multipart_failure(&state, &e);
                return (status, Json(ErrorResponse { error: message })).into_response();
            }
        }
    };

    let file_name = field.file_name().unwrap_or("unknown").to_string();
    let content_type = field.content_type().unwrap_or("").to_string();

    transition(&state, SessionEvent::UploadStarted {
        file_name: file_name.clone(),
    })
    .await;

    if !content_type.is_empty() && !content_type.starts_with("audio/") {
        tracing::warn!(content_type = %content_type, "Rejecting non-audio upload");
        let message = format!("Unsupported content type: {}", content_type);
        transition(&state, SessionEvent::Failed(message.clone())).await;
        return (
            StatusCode::UNSUPPORTED_MEDIA_TYPE,
            Json(ErrorResponse { error: message }),
        )
            .into_response();
    }

    let data = match field.bytes().await {
        Ok(d) => d,
        Err(e) => {
            tracing::error!(error = %e, "Failed to read file bytes");
            let (status, message) = multipart_failure(&state, &e);
            transition(&state, SessionEvent::Failed(message.clone())).await;
            return (status, Json(ErrorResponse { error: message })).into_response();
        }
    };

    tracing::debug!(file_name = %file_name, bytes = data.len(), "File data received");

    let upload = AudioUpload::new(file_name, &content_type, data.to_vec());

    let encoded = match state.analysis_service.prepare(upload) {
        Ok(e) => e,
        Err(e) => {
            let message = e.to_string();
            tracing::warn!(error = %message, "Upload rejected before inference");
            transition(&state, SessionEvent::Failed(message.clone())).await;
            return (error_status(&e), Json(ErrorResponse { error: message })).into_response();
        }
    };

    transition(&state, SessionEvent::EncodingFinished).await;

    match state.analysis_service.analyze(&encoded).await {
        Ok(result) => {
            let session = transition(&state, SessionEvent::AnalysisSucceeded(result)).await;
            (StatusCode::OK, Json(SessionResponse::from_session(&session))).into_response()
        }
        Err(e) => {
            let message = e.to_string();
            tracing::error!(error = %message, "Analysis failed");
            transition(&state, SessionEvent::Failed(message.clone())).await;
            (error_status(&e), Json(ErrorResponse { error: message })).into_response()
        }
    }
}

/// The transport enforces its own body ceiling above the application's
/// limit; when that ceiling is what tripped, report the failure as the size
/// limit rather than a generic read error.
fn multipart_failure(state: &AppState, error: &MultipartError) -> (StatusCode, String) {
    if error.status() == StatusCode::PAYLOAD_TOO_LARGE {
        (
            StatusCode::PAYLOAD_TOO_LARGE,
            format!(
                "file exceeds the {} byte upload limit",
                state.analysis_service.max_upload_bytes()
            ),
        )
    } else {
        (
            StatusCode::BAD_REQUEST,
            format!("Failed to read upload: {}", error),
        )
    }
}

async fn transition(state: &AppState, event: SessionEvent) -> Session {
    let mut session = state.session.write().await;
    let next = session.apply(event);
    *session = next;
    session.clone()
}

fn error_status(error: &AnalysisError) -> StatusCode {
    match error {
        AnalysisError::SizeLimitExceeded { .. } => StatusCode::PAYLOAD_TOO_LARGE,
        AnalysisError::Inference(InferenceError::EmptyResponse) => StatusCode::BAD_GATEWAY,
        AnalysisError::Inference(InferenceError::MalformedResponse(_)) => StatusCode::BAD_GATEWAY,
        AnalysisError::Inference(InferenceError::ApiRequestFailed(_)) => StatusCode::BAD_GATEWAY,
    }
}
