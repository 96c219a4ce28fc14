use async_trait::async_trait;

use crate::application::ports::{InferenceClient, InferenceError};
use crate::domain::{ActionItem, AnalysisResult, EncodedAudio, Sentiment};

/// Canned analysis for scaffold mode, so the full upload/report flow can be
/// exercised without an API key.
pub struct MockInferenceClient;

#[async_trait]
impl InferenceClient for MockInferenceClient {
    async fn analyze(&self, audio: &EncodedAudio) -> Result<AnalysisResult, InferenceError> {
        Ok(AnalysisResult {
            transcription: format!(
                "Mock transcription of {} ({} base64 chars).",
                audio.file_name,
                audio.data_base64.len()
            ),
            executive_summary: "Scaffold-mode summary to verify end-to-end wiring.".to_string(),
            action_items: vec![ActionItem {
                task: "Replace scaffold mode with a real API key".to_string(),
                assignee: "Unassigned".to_string(),
            }],
            sentiment: Sentiment::Neutral,
            sentiment_reasoning: "Scaffold responses carry no tone.".to_string(),
        })
    }
}
