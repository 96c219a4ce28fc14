use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::{AnalysisResult, Session, SessionEvent};
use crate::presentation::state::AppState;

/// Wire view of the session. The result rides along only in COMPLETED and
/// the error only in FAILED, mirroring the domain invariants.
#[derive(Serialize)]
pub struct SessionResponse {
    pub phase: String,
    pub file_name: Option<String>,
    pub result: Option<AnalysisResult>,
    pub error: Option<String>,
    pub completed_at: Option<DateTime<Utc>>,
}

impl SessionResponse {
    pub fn from_session(session: &Session) -> Self {
        Self {
            phase: session.phase.as_str().to_string(),
            file_name: session.file_name.clone(),
            result: session.result.clone(),
            error: session.error.clone(),
            completed_at: session.completed_at,
        }
    }
}

#[tracing::instrument(skip(state))]
pub async fn session_handler(State(state): State<AppState>) -> impl IntoResponse {
    let session = state.session.read().await;
    (StatusCode::OK, Json(SessionResponse::from_session(&session)))
}

/// The only way out of a terminal state: back to a pristine IDLE session
/// with no residual file name, error, or prior result.
#[tracing::instrument(skip(state))]
pub async fn session_reset_handler(State(state): State<AppState>) -> impl IntoResponse {
    let mut session = state.session.write().await;
    let next = session.apply(SessionEvent::Reset);
    *session = next;

    tracing::info!("Session reset to idle");

    (StatusCode::OK, Json(SessionResponse::from_session(&session)))
}
