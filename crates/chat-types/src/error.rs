use thiserror::Error;

/// Shown in chat when the request never reached the endpoint.
const FALLBACK_NETWORK: &str =
    "Unable to reach the chat service. Please check your connection and try again.";

/// Shown in chat when nothing more specific could be extracted.
const FALLBACK_GENERIC: &str =
    "Something went wrong while generating a reply. Please try again.";

#[derive(Error, Debug, Clone)]
pub enum ChatError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("API error (HTTP {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Malformed response: {0}")]
    Malformed(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl ChatError {
    /// Human-readable text surfaced as an assistant message in the
    /// affected session. Always non-empty.
    pub fn user_message(&self) -> String {
        match self {
            ChatError::Api { message, .. } => message.clone(),
            ChatError::Network(detail) if !detail.is_empty() => {
                format!("{} ({})", FALLBACK_NETWORK, detail)
            }
            ChatError::Network(_) => FALLBACK_NETWORK.to_string(),
            _ => FALLBACK_GENERIC.to_string(),
        }
    }
}

impl From<serde_json::Error> for ChatError {
    fn from(e: serde_json::Error) -> Self {
        ChatError::Serialization(e.to_string())
    }
}
