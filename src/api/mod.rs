pub mod handlers;
pub mod routes;

use serde::{Deserialize, Serialize};

/// Largest voice-clone upload accepted, in bytes (25 MiB). Checked before
/// anything is forwarded upstream.
pub const MAX_AUDIO_UPLOAD_BYTES: usize = 25 * 1024 * 1024;

#[derive(Debug, Deserialize)]
pub struct TtsRequest {
    pub text: Option<String>,
    #[serde(rename = "voiceId")]
    pub voice_id: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CloneVoiceResponse {
    pub voice_id: String,
    pub name: String,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}
