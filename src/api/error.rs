use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Transport(String),

    #[error("Unexpected response: {0}")]
    Decode(String),

    /// Non-2xx response. Displays the server's message verbatim.
    #[error("{message}")]
    Server { status: u16, message: String },
}

impl ApiError {
    /// Builds a [`ApiError::Server`] from a failed response body, falling back to
    /// the status code when the body carries no usable `error` field.
    pub fn from_status(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<super::models::ApiEnvelope>(body)
            .ok()
            .and_then(|envelope| envelope.error)
            .filter(|message| !message.trim().is_empty())
            .unwrap_or_else(|| format!("Request failed with status {status}"));
        ApiError::Server { status, message }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else {
            ApiError::Transport(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Decode(err.to_string())
    }
}
