use async_trait::async_trait;
use serde_json::{Value, json};

use crate::application::ports::{InferenceClient, InferenceError};
use crate::domain::{AnalysisResult, EncodedAudio};

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_MODEL: &str = "gemini-2.5-flash";

const INSTRUCTION: &str = "Listen to this audio recording and produce a JSON analysis. \
Transcribe the full audio verbatim. Write a concise executive summary. \
Extract every action item mentioned, with the assignee set to \"Unassigned\" \
when no owner is stated. Classify the overall sentiment as exactly one of \
Positive, Neutral or Negative, and justify the classification.";

/// Inference against the Gemini `generateContent` endpoint, constrained to a
/// declared response schema so the model answers with parseable JSON.
pub struct GeminiClient {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl GeminiClient {
    pub fn new(api_key: String, base_url: Option<String>, model: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            base_url: base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            model: model.unwrap_or_else(|| DEFAULT_MODEL.to_string()),
        }
    }

    /// Response schema mirroring `AnalysisResult`. `assignee` is deliberately
    /// not required; the serde default fills it with "Unassigned".
    fn response_schema() -> Value {
        json!({
            "type": "OBJECT",
            "properties": {
                "transcription": { "type": "STRING" },
                "executiveSummary": { "type": "STRING" },
                "actionItems": {
                    "type": "ARRAY",
                    "items": {
                        "type": "OBJECT",
                        "properties": {
                            "task": { "type": "STRING" },
                            "assignee": { "type": "STRING" }
                        },
                        "required": ["task"]
                    }
                },
                "sentiment": {
                    "type": "STRING",
                    "enum": ["Positive", "Neutral", "Negative"]
                },
                "sentimentReasoning": { "type": "STRING" }
            },
            "required": [
                "transcription",
                "executiveSummary",
                "actionItems",
                "sentiment",
                "sentimentReasoning"
            ]
        })
    }
}

#[async_trait]
impl InferenceClient for GeminiClient {
    async fn analyze(&self, audio: &EncodedAudio) -> Result<AnalysisResult, InferenceError> {
        let url = format!("{}/models/{}:generateContent", self.base_url, self.model);

        let request_body = json!({
            "contents": [{
                "parts": [
                    {
                        "inline_data": {
                            "mime_type": audio.mime_type,
                            "data": audio.data_base64
                        }
                    },
                    { "text": INSTRUCTION }
                ]
            }],
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": Self::response_schema()
            }
        });

        tracing::debug!(model = %self.model, mime_type = %audio.mime_type, "Sending audio for analysis");

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| InferenceError::ApiRequestFailed(format!("request: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(InferenceError::ApiRequestFailed(format!(
                "status {}: {}",
                status, body
            )));
        }

        let envelope: Value = response
            .json()
            .await
            .map_err(|e| InferenceError::ApiRequestFailed(format!("body: {}", e)))?;

        let text = envelope["candidates"][0]["content"]["parts"][0]["text"]
            .as_str()
            .map(str::trim)
            .unwrap_or_default();

        if text.is_empty() {
            return Err(InferenceError::EmptyResponse);
        }

        let result: AnalysisResult = serde_json::from_str(text)
            .map_err(|e| InferenceError::MalformedResponse(e.to_string()))?;

        tracing::info!(
            model = %self.model,
            transcript_chars = result.transcription.len(),
            "Model returned structured analysis"
        );

        Ok(result)
    }
}
