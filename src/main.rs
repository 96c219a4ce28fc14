use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;

use debrief::application::ports::InferenceClient;
use debrief::application::services::AnalysisService;
use debrief::infrastructure::llm::{GeminiClient, MockInferenceClient};
use debrief::infrastructure::observability::{TracingConfig, init_tracing};
use debrief::presentation::{AppState, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::from_env()?;

    init_tracing(TracingConfig::default(), settings.server.port);

    let inference_client: Arc<dyn InferenceClient> = if settings.scaffold.enabled {
        tracing::warn!("Scaffold mode enabled, serving canned analyses");
        Arc::new(MockInferenceClient)
    } else {
        Arc::new(GeminiClient::new(
            settings.gemini.api_key.clone(),
            settings.gemini.base_url.clone(),
            settings.gemini.model.clone(),
        ))
    };

    let analysis_service = Arc::new(AnalysisService::new(
        inference_client,
        settings.upload.max_bytes,
    ));

    let state = AppState::new(analysis_service);
    let router = create_router(state);

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port).parse()?;
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
