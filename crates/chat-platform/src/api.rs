//! HTTP chat-completion client.
//!
//! Single POST to `{base}/api/chat` with the full conversation history.
//! Uses browser `fetch()` via gloo-net for WASM compatibility.

use async_trait::async_trait;
use gloo_net::http::Request;
use serde::Deserialize;
use serde_json::{json, Value};

use chat_core::ports::ChatApi;
use chat_types::{config::ChatConfig, message::ChatTurn, ChatError, Result};

/// Fixed path appended to the configured base URL.
const CHAT_PATH: &str = "/api/chat";

/// Fallback when an error response carries no usable message field.
const GENERIC_API_ERROR: &str = "The chat service returned an error.";

pub struct HttpChatClient {
    base_url: String,
}

impl HttpChatClient {
    pub fn new(config: &ChatConfig) -> Self {
        Self {
            base_url: config.api_base.trim_end_matches('/').to_string(),
        }
    }

    fn endpoint(&self) -> String {
        format!("{}{}", self.base_url, CHAT_PATH)
    }
}

#[async_trait(?Send)]
impl ChatApi for HttpChatClient {
    async fn send(&self, history: &[ChatTurn]) -> Result<String> {
        let body = json!({ "messages": history });

        let response = Request::post(&self.endpoint())
            .header("Content-Type", "application/json")
            .json(&body)
            .map_err(|e| ChatError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ChatError::Network(e.to_string()))?;

        if !response.ok() {
            let status = response.status();
            let message = match response.json::<Value>().await {
                Ok(body) => extract_error_message(&body),
                Err(_) => GENERIC_API_ERROR.to_string(),
            };
            return Err(ChatError::Api { status, message });
        }

        let data: ReplyBody = response
            .json()
            .await
            .map_err(|e| ChatError::Malformed(e.to_string()))?;

        Ok(data.reply)
    }
}

/// Resolve the user-facing message from an error body:
/// `error` field, then `message` field, then a fixed generic string.
pub fn extract_error_message(body: &Value) -> String {
    body["error"]
        .as_str()
        .or_else(|| body["message"].as_str())
        .unwrap_or(GENERIC_API_ERROR)
        .to_string()
}

// ─── API response types ──────────────────────────────────────

#[derive(Deserialize)]
struct ReplyBody {
    reply: String,
}
