use axum::{
    extract::{Multipart, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use bytes::Bytes;
use std::sync::Arc;

use super::{CloneVoiceResponse, HealthResponse, TtsRequest, MAX_AUDIO_UPLOAD_BYTES};
use crate::api::routes::AppState;
use crate::elevenlabs::{AudioUpload, DEFAULT_VOICE_ID};
use crate::error::AppError;

pub async fn tts(
    State(state): State<Arc<AppState>>,
    Json(request): Json<TtsRequest>,
) -> Result<Response, AppError> {
    // Validate input
    let text = request
        .text
        .as_deref()
        .filter(|t| !t.is_empty())
        .ok_or_else(|| AppError::BadRequest("text is required".into()))?;

    let api_key = state.config.api_key()?;
    let voice_id = request.voice_id.as_deref().unwrap_or(DEFAULT_VOICE_ID);

    let audio = state.elevenlabs.synthesize(api_key, text, voice_id).await?;

    // Return audio response
    Ok((StatusCode::OK, [(header::CONTENT_TYPE, "audio/mpeg")], audio).into_response())
}

pub async fn list_voices(State(state): State<Arc<AppState>>) -> Result<Response, AppError> {
    let api_key = state.config.api_key()?;

    let catalog = state.elevenlabs.list_voices(api_key).await?;

    // The catalog is relayed as received, not re-serialized
    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        catalog,
    )
        .into_response())
}

pub async fn clone_voice(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> Result<Json<CloneVoiceResponse>, AppError> {
    let mut name: Option<String> = None;
    let mut audio: Option<AudioUpload> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(format!("invalid multipart form: {}", e)))?
    {
        let field_name = field.name().map(str::to_string);
        match field_name.as_deref() {
            Some("name") => {
                let value = field
                    .text()
                    .await
                    .map_err(|e| AppError::BadRequest(format!("invalid name field: {}", e)))?;
                name = Some(value);
            }
            Some("audio") => {
                let file_name = field
                    .file_name()
                    .unwrap_or("audio")
                    .to_string();
                let content_type = field
                    .content_type()
                    .unwrap_or("application/octet-stream")
                    .to_string();
                let data: Bytes = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::BadRequest(format!("invalid audio field: {}", e)))?;

                audio = Some(AudioUpload {
                    file_name,
                    content_type,
                    data,
                });
            }
            _ => {}
        }
    }

    // Validate input
    let (name, audio) = match (name, audio) {
        (Some(name), Some(audio)) if !name.is_empty() => (name, audio),
        _ => {
            return Err(AppError::BadRequest(
                "name and audio file are required".into(),
            ))
        }
    };

    if audio.data.len() > MAX_AUDIO_UPLOAD_BYTES {
        return Err(AppError::BadRequest(
            "audio file exceeds the 25 MiB limit".into(),
        ));
    }

    let api_key = state.config.api_key()?;

    let created = state.elevenlabs.clone_voice(api_key, &name, audio).await?;

    Ok(Json(CloneVoiceResponse {
        voice_id: created.voice_id,
        name,
    }))
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
