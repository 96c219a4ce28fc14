use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use debrief::application::ports::{InferenceClient, InferenceError};
use debrief::application::services::{AnalysisError, AnalysisService};
use debrief::domain::{AnalysisResult, AudioUpload, EncodedAudio, Sentiment};

struct CountingClient {
    calls: Arc<AtomicUsize>,
}

#[async_trait::async_trait]
impl InferenceClient for CountingClient {
    async fn analyze(&self, _audio: &EncodedAudio) -> Result<AnalysisResult, InferenceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(AnalysisResult {
            transcription: "t".to_string(),
            executive_summary: "s".to_string(),
            action_items: vec![],
            sentiment: Sentiment::Neutral,
            sentiment_reasoning: "r".to_string(),
        })
    }
}

fn service_with_limit(limit: u64) -> (AnalysisService, Arc<AtomicUsize>) {
    let calls = Arc::new(AtomicUsize::new(0));
    let client = CountingClient {
        calls: Arc::clone(&calls),
    };
    (AnalysisService::new(Arc::new(client), limit), calls)
}

#[test]
fn given_file_over_limit_when_preparing_then_size_limit_exceeded() {
    let (service, calls) = service_with_limit(8);
    let upload = AudioUpload::new("big.mp3".to_string(), "audio/mpeg", vec![0u8; 9]);

    let result = service.prepare(upload);

    assert!(matches!(
        result,
        Err(AnalysisError::SizeLimitExceeded {
            size_bytes: 9,
            limit_bytes: 8
        })
    ));
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[test]
fn given_file_exactly_at_limit_when_preparing_then_encoded() {
    let (service, _calls) = service_with_limit(8);
    let upload = AudioUpload::new("edge.mp3".to_string(), "audio/mpeg", vec![0u8; 8]);

    let result = service.prepare(upload);

    assert!(result.is_ok());
}

#[test]
fn given_valid_upload_when_preparing_then_payload_is_base64_of_bytes() {
    let (service, _calls) = service_with_limit(1024);
    let upload = AudioUpload::new("clip.wav".to_string(), "audio/wav", b"hello".to_vec());

    let encoded = service.prepare(upload).unwrap();

    assert_eq!(encoded.data_base64, "aGVsbG8=");
    assert_eq!(encoded.mime_type, "audio/wav");
}

#[tokio::test]
async fn given_encoded_audio_when_analyzing_then_client_called_once() {
    let (service, calls) = service_with_limit(1024);
    let upload = AudioUpload::new("clip.wav".to_string(), "audio/wav", b"hello".to_vec());
    let encoded = service.prepare(upload).unwrap();

    let result = service.analyze(&encoded).await;

    assert!(result.is_ok());
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn given_failing_client_when_analyzing_then_error_wrapped_as_inference() {
    struct FailingClient;

    #[async_trait::async_trait]
    impl InferenceClient for FailingClient {
        async fn analyze(&self, _audio: &EncodedAudio) -> Result<AnalysisResult, InferenceError> {
            Err(InferenceError::MalformedResponse("not json".to_string()))
        }
    }

    let service = AnalysisService::new(Arc::new(FailingClient), 1024);
    let upload = AudioUpload::new("clip.wav".to_string(), "audio/wav", b"hello".to_vec());
    let encoded = service.prepare(upload).unwrap();

    let result = service.analyze(&encoded).await;

    assert!(matches!(
        result,
        Err(AnalysisError::Inference(InferenceError::MalformedResponse(_)))
    ));
}
