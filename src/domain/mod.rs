mod analysis;
mod audio_upload;
mod session;

pub use analysis::{ActionItem, AnalysisResult, Sentiment};
pub use audio_upload::{AudioUpload, EncodedAudio, FALLBACK_MIME, MAX_AUDIO_BYTES};
pub use session::{Session, SessionEvent, SessionPhase};
