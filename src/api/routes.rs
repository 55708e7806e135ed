use axum::{
    extract::DefaultBodyLimit,
    http::{header, Method},
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

use super::handlers;
use super::MAX_AUDIO_UPLOAD_BYTES;
use crate::config::Config;
use crate::elevenlabs::ElevenLabsClient;

pub struct AppState {
    pub config: Config,
    pub elevenlabs: ElevenLabsClient,
}

pub fn create_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    // Leave headroom above the upload ceiling for multipart framing so the
    // handler's own size check is the one that rejects oversized audio.
    let clone_body_limit = DefaultBodyLimit::max(MAX_AUDIO_UPLOAD_BYTES + 64 * 1024);

    let api_routes = Router::new()
        .route("/tts", post(handlers::tts))
        .route("/voices", get(handlers::list_voices))
        .route(
            "/clone-voice",
            post(handlers::clone_voice).layer(clone_body_limit),
        )
        .route("/health", get(handlers::health));

    Router::new()
        .nest("/api", api_routes)
        .nest_service("/", ServeDir::new(".").append_index_html_on_directories(true))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
