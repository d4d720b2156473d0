//! Port traits — the boundary between the store and the browser.
//!
//! These traits are defined here in `chat-core` (pure Rust).
//! Implementations live in `chat-platform` (browser adapters).
//! The core never imports platform code; it only depends on these traits.

use async_trait::async_trait;
use chat_types::{message::ChatTurn, Result};

// ─── Storage Port ────────────────────────────────────────────

/// Key-value access to the durable slot. Synchronous: the browser's
/// localStorage API blocks, and writes are not retried on failure.
pub trait StorageBackend {
    /// Get a value by key
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Set a value, overwriting prior content entirely
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Remove a key
    fn remove(&self, key: &str) -> Result<()>;

    /// Name of this backend (for logging/debug)
    fn backend_name(&self) -> &str;
}

// ─── Chat API Port ───────────────────────────────────────────

/// Remote chat-completion endpoint.
/// `?Send` because WASM futures are single-threaded.
#[async_trait(?Send)]
pub trait ChatApi {
    /// Send the full conversation history and return the reply text.
    async fn send(&self, history: &[ChatTurn]) -> Result<String>;
}
