use crate::domain::MAX_AUDIO_BYTES;

/// Runtime configuration, read from the environment at startup.
#[derive(Debug, Clone)]
pub struct Settings {
    pub server: ServerSettings,
    pub gemini: GeminiSettings,
    pub upload: UploadSettings,
    pub scaffold: ScaffoldConfig,
}

#[derive(Debug, Clone)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone)]
pub struct GeminiSettings {
    pub api_key: String,
    /// Overridable for tests and proxies; `None` means the public endpoint.
    pub base_url: Option<String>,
    pub model: Option<String>,
}

#[derive(Debug, Clone)]
pub struct UploadSettings {
    pub max_bytes: u64,
}

/// Scaffold mode swaps the hosted model for a canned client so the flow can
/// be exercised without credentials.
#[derive(Debug, Clone)]
pub struct ScaffoldConfig {
    pub enabled: bool,
}

impl Settings {
    pub fn from_env() -> Result<Self, SettingsError> {
        let scaffold = ScaffoldConfig {
            enabled: std::env::var("SCAFFOLD_MODE")
                .map(|v| v.to_lowercase() == "true" || v == "1")
                .unwrap_or(false),
        };

        let api_key = std::env::var("GEMINI_API_KEY").unwrap_or_default();
        if api_key.is_empty() && !scaffold.enabled {
            return Err(SettingsError::MissingApiKey);
        }

        Ok(Self {
            server: ServerSettings {
                host: std::env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: std::env::var("SERVER_PORT")
                    .ok()
                    .and_then(|p| p.parse().ok())
                    .unwrap_or(3000),
            },
            gemini: GeminiSettings {
                api_key,
                base_url: std::env::var("GEMINI_BASE_URL").ok(),
                model: std::env::var("GEMINI_MODEL").ok(),
            },
            upload: UploadSettings {
                max_bytes: std::env::var("MAX_UPLOAD_BYTES")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(MAX_AUDIO_BYTES),
            },
            scaffold,
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("GEMINI_API_KEY is not set (enable SCAFFOLD_MODE to run without one)")]
    MissingApiKey,
}
