use crate::error::AppError;

/// Environment variable holding the upstream API key.
pub const API_KEY_VAR: &str = "ELEVENLABS_API_KEY";

/// Process-wide configuration, read once at startup and shared read-only
/// across requests.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: Option<String>,
    pub host: String,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Self {
        // An empty value counts as unset
        let api_key = std::env::var(API_KEY_VAR)
            .ok()
            .filter(|k| !k.is_empty());

        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse()
            .expect("PORT must be a number");

        Self {
            api_key,
            host,
            port,
        }
    }

    /// The upstream credential, or the configuration error every route
    /// returns when it is unset.
    pub fn api_key(&self) -> Result<&str, AppError> {
        self.api_key.as_deref().ok_or(AppError::MissingCredential)
    }
}
