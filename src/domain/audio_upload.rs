use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;

/// Upload ceiling enforced before any network call.
pub const MAX_AUDIO_BYTES: u64 = 20 * 1024 * 1024;

/// MIME type assumed when the client reports none.
pub const FALLBACK_MIME: &str = "audio/mpeg";

/// One user-selected audio file, alive for a single ingestion cycle.
#[derive(Debug, Clone, PartialEq)]
pub struct AudioUpload {
    pub file_name: String,
    pub mime_type: String,
    pub data: Vec<u8>,
}

impl AudioUpload {
    pub fn new(file_name: String, mime_type: &str, data: Vec<u8>) -> Self {
        let mime_type = if mime_type.is_empty() {
            FALLBACK_MIME.to_string()
        } else {
            mime_type.to_string()
        };
        Self {
            file_name,
            mime_type,
            data,
        }
    }

    pub fn size_bytes(&self) -> u64 {
        self.data.len() as u64
    }

    /// Base64-encode for transport to the hosted model. Consumes the raw
    /// bytes; nothing downstream needs them again.
    pub fn into_encoded(self) -> EncodedAudio {
        EncodedAudio {
            file_name: self.file_name,
            mime_type: self.mime_type,
            data_base64: BASE64.encode(&self.data),
        }
    }
}

/// Transport form of an upload: base64 payload plus the metadata the
/// inference request needs.
#[derive(Debug, Clone, PartialEq)]
pub struct EncodedAudio {
    pub file_name: String,
    pub mime_type: String,
    pub data_base64: String,
}
