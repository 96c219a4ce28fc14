use std::fmt;

use chrono::{DateTime, Utc};

use super::AnalysisResult;

/// Where the single analysis flow currently stands. `Completed` and `Failed`
/// are terminal until an explicit reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionPhase {
    Idle,
    Uploading,
    Analyzing,
    Completed,
    Failed,
}

impl SessionPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionPhase::Idle => "IDLE",
            SessionPhase::Uploading => "UPLOADING",
            SessionPhase::Analyzing => "ANALYZING",
            SessionPhase::Completed => "COMPLETED",
            SessionPhase::Failed => "FAILED",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, SessionPhase::Completed | SessionPhase::Failed)
    }
}

impl fmt::Display for SessionPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Everything that can move the session forward.
#[derive(Debug, Clone)]
pub enum SessionEvent {
    UploadStarted { file_name: String },
    EncodingFinished,
    AnalysisSucceeded(AnalysisResult),
    Failed(String),
    Reset,
}

/// The one mutable state container of the whole application.
///
/// Invariants: `result` is present iff the phase is `Completed`; `error` is
/// present iff the phase is `Failed`. Both hold by construction — every
/// transition rebuilds the session rather than patching fields.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub phase: SessionPhase,
    pub file_name: Option<String>,
    pub result: Option<AnalysisResult>,
    pub error: Option<String>,
    pub completed_at: Option<DateTime<Utc>>,
}

impl Session {
    pub fn new() -> Self {
        Self {
            phase: SessionPhase::Idle,
            file_name: None,
            result: None,
            error: None,
            completed_at: None,
        }
    }

    /// Pure transition from (current session, event) to the next session.
    ///
    /// `UploadStarted` is accepted from any phase: a new file selection while
    /// a flow is in flight replaces the session wholesale (last write wins).
    /// `EncodingFinished` only advances an UPLOADING session. The terminal
    /// events keep the file name so the dashboard and report can refer to it.
    pub fn apply(&self, event: SessionEvent) -> Session {
        match event {
            SessionEvent::UploadStarted { file_name } => Session {
                phase: SessionPhase::Uploading,
                file_name: Some(file_name),
                result: None,
                error: None,
                completed_at: None,
            },
            SessionEvent::EncodingFinished => {
                if self.phase == SessionPhase::Uploading {
                    Session {
                        phase: SessionPhase::Analyzing,
                        ..self.clone()
                    }
                } else {
                    self.clone()
                }
            }
            SessionEvent::AnalysisSucceeded(result) => Session {
                phase: SessionPhase::Completed,
                file_name: self.file_name.clone(),
                result: Some(result),
                error: None,
                completed_at: Some(Utc::now()),
            },
            SessionEvent::Failed(message) => Session {
                phase: SessionPhase::Failed,
                file_name: self.file_name.clone(),
                result: None,
                error: Some(message),
                completed_at: None,
            },
            SessionEvent::Reset => Session::new(),
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
