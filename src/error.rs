use axum::{
    body::Body,
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use bytes::Bytes;
use serde::Serialize;

#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    BadRequest(String),

    #[error("ELEVENLABS_API_KEY not configured")]
    MissingCredential,

    /// Non-2xx response from ElevenLabs, relayed to the caller verbatim.
    #[error("upstream responded with {status}")]
    Upstream {
        status: StatusCode,
        content_type: Option<HeaderValue>,
        body: Bytes,
    },

    /// Network-level failure reaching ElevenLabs. The underlying cause is
    /// logged where it is caught; only the fixed message reaches the caller.
    #[error("{0}")]
    Transport(&'static str),
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::BadRequest(message) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse { error: message }),
            )
                .into_response(),

            AppError::MissingCredential => {
                let message = self.to_string();
                tracing::error!("{}", message);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorResponse { error: message }),
                )
                    .into_response()
            }

            AppError::Upstream {
                status,
                content_type,
                body,
            } => {
                tracing::warn!(status = %status, "Relaying upstream error response");

                let mut builder = Response::builder().status(status);
                if let Some(content_type) = content_type {
                    builder = builder.header(header::CONTENT_TYPE, content_type);
                }
                builder.body(Body::from(body)).unwrap()
            }

            AppError::Transport(message) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: message.to_string(),
                }),
            )
                .into_response(),
        }
    }
}
