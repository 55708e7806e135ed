//! Outbound client for the ElevenLabs v1 API.
//!
//! Every method takes the API key as an argument and places it in the
//! `xi-api-key` header of exactly one forwarded request; the key is never
//! stored here and never logged. Non-2xx upstream responses are captured
//! whole so the handler can relay status and body verbatim.

use std::time::Duration;

use bytes::Bytes;
use reqwest::{header, multipart, Client, Response};
use serde::{Deserialize, Serialize};

use crate::error::AppError;

pub const DEFAULT_BASE_URL: &str = "https://api.elevenlabs.io/v1";

/// Voice used when the caller does not pick one (Sarah).
pub const DEFAULT_VOICE_ID: &str = "EXAVITQu4vr4xnSDxMaL";

const MODEL_ID: &str = "eleven_multilingual_v2";
const API_KEY_HEADER: &str = "xi-api-key";

/// Upper bound on each outbound call; a timeout surfaces as a transport
/// failure.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

pub struct ElevenLabsClient {
    http: Client,
    base_url: String,
}

#[derive(Debug, Serialize)]
struct SynthesisBody<'a> {
    text: &'a str,
    model_id: &'a str,
    voice_settings: VoiceSettings,
}

#[derive(Debug, Serialize)]
struct VoiceSettings {
    stability: f32,
    similarity_boost: f32,
}

/// An audio file uploaded by the caller, forwarded as-is.
pub struct AudioUpload {
    pub file_name: String,
    pub content_type: String,
    pub data: Bytes,
}

#[derive(Debug, Deserialize)]
pub struct CreatedVoice {
    pub voice_id: String,
}

impl ElevenLabsClient {
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Point the client at a different host. Production uses
    /// [`DEFAULT_BASE_URL`]; tests point this at a mock server.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("Failed to build HTTP client");

        Self {
            http,
            base_url: base_url.into(),
        }
    }

    /// POST `/text-to-speech/{voice_id}`: returns the raw MPEG audio bytes.
    pub async fn synthesize(
        &self,
        api_key: &str,
        text: &str,
        voice_id: &str,
    ) -> Result<Bytes, AppError> {
        let url = format!("{}/text-to-speech/{}", self.base_url, voice_id);
        let body = SynthesisBody {
            text,
            model_id: MODEL_ID,
            voice_settings: VoiceSettings {
                stability: 0.5,
                similarity_boost: 0.75,
            },
        };

        let response = self
            .http
            .post(&url)
            .header(API_KEY_HEADER, api_key)
            .header(header::ACCEPT, "audio/mpeg")
            .json(&body)
            .send()
            .await
            .map_err(|e| transport_error("TTS request failed", e))?;

        let response = relay_error_status(response).await?;

        response
            .bytes()
            .await
            .map_err(|e| transport_error("TTS request failed", e))
    }

    /// GET `/voices`: returns the upstream JSON catalog unparsed.
    pub async fn list_voices(&self, api_key: &str) -> Result<Bytes, AppError> {
        let url = format!("{}/voices", self.base_url);

        let response = self
            .http
            .get(&url)
            .header(API_KEY_HEADER, api_key)
            .send()
            .await
            .map_err(|e| transport_error("Failed to fetch voices", e))?;

        let response = relay_error_status(response).await?;

        response
            .bytes()
            .await
            .map_err(|e| transport_error("Failed to fetch voices", e))
    }

    /// POST `/voices/add` as a multipart form, preserving the uploaded
    /// file's name and content type.
    pub async fn clone_voice(
        &self,
        api_key: &str,
        name: &str,
        audio: AudioUpload,
    ) -> Result<CreatedVoice, AppError> {
        let url = format!("{}/voices/add", self.base_url);

        let file = multipart::Part::stream(audio.data)
            .file_name(audio.file_name)
            .mime_str(&audio.content_type)
            .map_err(|_| {
                AppError::BadRequest(format!(
                    "invalid audio content type: {}",
                    audio.content_type
                ))
            })?;

        let form = multipart::Form::new()
            .text("name", name.to_string())
            .part("files", file);

        let response = self
            .http
            .post(&url)
            .header(API_KEY_HEADER, api_key)
            .multipart(form)
            .send()
            .await
            .map_err(|e| transport_error("Voice cloning failed", e))?;

        let response = relay_error_status(response).await?;

        response
            .json()
            .await
            .map_err(|e| transport_error("Voice cloning failed", e))
    }
}

impl Default for ElevenLabsClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Convert a non-2xx upstream response into [`AppError::Upstream`], keeping
/// its status, content type, and body for verbatim relay.
async fn relay_error_status(response: Response) -> Result<Response, AppError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let content_type = response.headers().get(header::CONTENT_TYPE).cloned();
    let body = response.bytes().await.unwrap_or_default();

    Err(AppError::Upstream {
        status,
        content_type,
        body,
    })
}

fn transport_error(message: &'static str, err: reqwest::Error) -> AppError {
    tracing::error!(error = %err, "{}", message);
    AppError::Transport(message)
}
