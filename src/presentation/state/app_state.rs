use std::sync::Arc;

use tokio::sync::RwLock;

use crate::application::services::AnalysisService;
use crate::domain::Session;

/// Shared handler state: the analysis pipeline and the single session
/// container it reports into.
#[derive(Clone)]
pub struct AppState {
    pub analysis_service: Arc<AnalysisService>,
    pub session: Arc<RwLock<Session>>,
}

impl AppState {
    pub fn new(analysis_service: Arc<AnalysisService>) -> Self {
        Self {
            analysis_service,
            session: Arc::new(RwLock::new(Session::new())),
        }
    }
}
