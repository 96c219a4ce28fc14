use std::sync::Arc;

use crate::application::ports::{InferenceClient, InferenceError};
use crate::domain::{AnalysisResult, AudioUpload, EncodedAudio};

/// Orchestrates the two suspension points of the pipeline: encode, then one
/// best-effort remote call. No retry, no timeout, no streaming.
pub struct AnalysisService {
    inference_client: Arc<dyn InferenceClient>,
    max_upload_bytes: u64,
}

impl AnalysisService {
    pub fn new(inference_client: Arc<dyn InferenceClient>, max_upload_bytes: u64) -> Self {
        Self {
            inference_client,
            max_upload_bytes,
        }
    }

    pub fn max_upload_bytes(&self) -> u64 {
        self.max_upload_bytes
    }

    /// Validate and base64-encode an upload. The size gate runs before any
    /// network activity; a file exactly at the ceiling still passes.
    pub fn prepare(&self, upload: AudioUpload) -> Result<EncodedAudio, AnalysisError> {
        let size_bytes = upload.size_bytes();
        if size_bytes > self.max_upload_bytes {
            return Err(AnalysisError::SizeLimitExceeded {
                size_bytes,
                limit_bytes: self.max_upload_bytes,
            });
        }

        tracing::debug!(
            file_name = %upload.file_name,
            mime_type = %upload.mime_type,
            bytes = size_bytes,
            "Upload accepted, encoding for transport"
        );

        Ok(upload.into_encoded())
    }

    pub async fn analyze(&self, audio: &EncodedAudio) -> Result<AnalysisResult, AnalysisError> {
        let result = self.inference_client.analyze(audio).await?;

        tracing::info!(
            file_name = %audio.file_name,
            transcript_chars = result.transcription.len(),
            action_items = result.action_items.len(),
            sentiment = %result.sentiment,
            "Analysis completed"
        );

        Ok(result)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    #[error("file is {size_bytes} bytes, exceeding the {limit_bytes} byte upload limit")]
    SizeLimitExceeded { size_bytes: u64, limit_bytes: u64 },
    #[error("inference: {0}")]
    Inference(#[from] InferenceError),
}
