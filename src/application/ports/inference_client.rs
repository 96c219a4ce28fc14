use async_trait::async_trait;

use crate::domain::{AnalysisResult, EncodedAudio};

/// One request/response exchange with a hosted multi-modal model that
/// returns schema-constrained structured text.
#[async_trait]
pub trait InferenceClient: Send + Sync {
    async fn analyze(&self, audio: &EncodedAudio) -> Result<AnalysisResult, InferenceError>;
}

#[derive(Debug, thiserror::Error)]
pub enum InferenceError {
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("model returned no text")]
    EmptyResponse,
    #[error("malformed response: {0}")]
    MalformedResponse(String),
}
