use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use elevenlabs_relay::api::routes::{create_router, AppState};
use elevenlabs_relay::config::{Config, API_KEY_VAR};
use elevenlabs_relay::elevenlabs::ElevenLabsClient;

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Configuration from environment
    let config = Config::from_env();

    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .expect("Invalid address");

    tracing::info!("ElevenLabs relay v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Starting server on http://{}", addr);
    if config.api_key.is_none() {
        tracing::warn!("{} is not set; API routes will fail until it is", API_KEY_VAR);
    }

    // Create app state
    let state = Arc::new(AppState {
        config,
        elevenlabs: ElevenLabsClient::new(),
    });

    // Create router
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .await
        .expect("Server error");
}
