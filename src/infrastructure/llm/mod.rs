mod gemini_client;
mod mock_inference_client;

pub use gemini_client::GeminiClient;
pub use mock_inference_client::MockInferenceClient;
