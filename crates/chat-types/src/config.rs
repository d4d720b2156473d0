use serde::{Deserialize, Serialize};

/// Client configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatConfig {
    /// Base URL of the chat-completion endpoint.
    /// Empty means same-origin relative requests.
    pub api_base: String,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
        }
    }
}
