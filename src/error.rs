//! Error Types

use thiserror::Error;

/// Failure of a backend call
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),

    #[error("request failed with status {status}{}", detail(.message))]
    Server { status: u16, message: Option<String> },

    #[error("unexpected response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Server-provided `error` text, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Server { message, .. } => message.as_deref(),
            _ => None,
        }
    }

    /// Text shown to the user: the server's message or `fallback`.
    pub fn message_or(&self, fallback: &str) -> String {
        self.server_message()
            .filter(|m| !m.is_empty())
            .unwrap_or(fallback)
            .to_string()
    }
}

fn detail(message: &Option<String>) -> String {
    message.as_deref().map(|m| format!(": {m}")).unwrap_or_default()
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}
