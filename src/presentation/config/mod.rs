mod settings;

pub use settings::{
    GeminiSettings, ScaffoldConfig, ServerSettings, Settings, SettingsError, UploadSettings,
};
