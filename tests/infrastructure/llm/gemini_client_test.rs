use std::sync::Arc;

use axum::Router;
use axum::response::IntoResponse;
use axum::routing::post;
use tokio::net::TcpListener;
use tokio::sync::{Mutex, oneshot};

use debrief::application::ports::{InferenceClient, InferenceError};
use debrief::domain::{EncodedAudio, Sentiment};
use debrief::infrastructure::llm::GeminiClient;

async fn start_mock_gemini_server(
    response_status: u16,
    response_body: &'static str,
    captured_request: Arc<Mutex<Option<serde_json::Value>>>,
) -> (String, oneshot::Sender<()>) {
    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

    let app = Router::new().route(
        "/v1beta/models/{call}",
        post(move |axum::Json(body): axum::Json<serde_json::Value>| {
            let captured = Arc::clone(&captured_request);
            async move {
                *captured.lock().await = Some(body);
                let status = axum::http::StatusCode::from_u16(response_status).unwrap();
                (status, response_body).into_response()
            }
        }),
    );

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let base_url = format!("http://{}/v1beta", addr);

    tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async {
                shutdown_rx.await.ok();
            })
            .await
            .ok();
    });

    (base_url, shutdown_tx)
}

fn encoded_audio() -> EncodedAudio {
    EncodedAudio {
        file_name: "meeting.mp3".to_string(),
        mime_type: "audio/mpeg".to_string(),
        data_base64: "Zm9v".to_string(),
    }
}

fn wrap_as_candidate(analysis_json: &str) -> String {
    serde_json::json!({
        "candidates": [{
            "content": {
                "parts": [{ "text": analysis_json }]
            }
        }]
    })
    .to_string()
}

#[tokio::test]
async fn given_schema_conformant_text_when_analyzing_then_parses_analysis_result() {
    let analysis = r#"{"transcription":"hello","executiveSummary":"s","actionItems":[],"sentiment":"Neutral","sentimentReasoning":"r"}"#;
    let body: &'static str = Box::leak(wrap_as_candidate(analysis).into_boxed_str());
    let captured = Arc::new(Mutex::new(None));
    let (base_url, shutdown_tx) = start_mock_gemini_server(200, body, Arc::clone(&captured)).await;

    let client = GeminiClient::new("test-key".to_string(), Some(base_url), None);

    let result = client.analyze(&encoded_audio()).await.unwrap();

    assert_eq!(result.transcription, "hello");
    assert_eq!(result.sentiment, Sentiment::Neutral);
    assert!(result.action_items.is_empty());
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_any_upload_when_analyzing_then_request_carries_payload_and_schema() {
    let analysis = r#"{"transcription":"hello","executiveSummary":"s","actionItems":[],"sentiment":"Neutral","sentimentReasoning":"r"}"#;
    let body: &'static str = Box::leak(wrap_as_candidate(analysis).into_boxed_str());
    let captured = Arc::new(Mutex::new(None));
    let (base_url, shutdown_tx) = start_mock_gemini_server(200, body, Arc::clone(&captured)).await;

    let client = GeminiClient::new("test-key".to_string(), Some(base_url), None);
    client.analyze(&encoded_audio()).await.unwrap();

    let request = captured.lock().await.clone().unwrap();
    let inline = &request["contents"][0]["parts"][0]["inline_data"];
    assert_eq!(inline["mime_type"], "audio/mpeg");
    assert_eq!(inline["data"], "Zm9v");
    assert_eq!(
        request["generationConfig"]["responseMimeType"],
        "application/json"
    );
    let required = request["generationConfig"]["responseSchema"]["required"]
        .as_array()
        .unwrap();
    assert!(required.iter().any(|v| v == "transcription"));
    assert!(required.iter().any(|v| v == "sentiment"));
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_empty_model_text_when_analyzing_then_empty_response_error() {
    let body: &'static str = Box::leak(wrap_as_candidate("  ").into_boxed_str());
    let captured = Arc::new(Mutex::new(None));
    let (base_url, shutdown_tx) = start_mock_gemini_server(200, body, captured).await;

    let client = GeminiClient::new("test-key".to_string(), Some(base_url), None);

    let result = client.analyze(&encoded_audio()).await;

    assert!(matches!(result, Err(InferenceError::EmptyResponse)));
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_response_without_candidates_when_analyzing_then_empty_response_error() {
    let captured = Arc::new(Mutex::new(None));
    let (base_url, shutdown_tx) = start_mock_gemini_server(200, r#"{}"#, captured).await;

    let client = GeminiClient::new("test-key".to_string(), Some(base_url), None);

    let result = client.analyze(&encoded_audio()).await;

    assert!(matches!(result, Err(InferenceError::EmptyResponse)));
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_non_json_model_text_when_analyzing_then_malformed_response_error() {
    let body: &'static str = Box::leak(wrap_as_candidate("definitely not json").into_boxed_str());
    let captured = Arc::new(Mutex::new(None));
    let (base_url, shutdown_tx) = start_mock_gemini_server(200, body, captured).await;

    let client = GeminiClient::new("test-key".to_string(), Some(base_url), None);

    let result = client.analyze(&encoded_audio()).await;

    assert!(matches!(result, Err(InferenceError::MalformedResponse(_))));
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_api_error_status_when_analyzing_then_api_request_failed() {
    let captured = Arc::new(Mutex::new(None));
    let (base_url, shutdown_tx) =
        start_mock_gemini_server(500, r#"{"error":"internal"}"#, captured).await;

    let client = GeminiClient::new("test-key".to_string(), Some(base_url), None);

    let result = client.analyze(&encoded_audio()).await;

    assert!(matches!(result, Err(InferenceError::ApiRequestFailed(_))));
    shutdown_tx.send(()).ok();
}
