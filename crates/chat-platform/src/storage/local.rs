//! localStorage backend — the durable slot.
//! Persistent across page reloads; synchronous by nature.

use chat_core::ports::StorageBackend;
use chat_types::{ChatError, Result};

pub struct LocalStorage {
    storage: web_sys::Storage,
}

impl LocalStorage {
    /// Grab the window's localStorage handle. Fails when running outside
    /// a window context or when the browser has storage disabled.
    pub fn open() -> Result<Self> {
        let window = web_sys::window()
            .ok_or_else(|| ChatError::Storage("No window object".to_string()))?;
        let storage = window
            .local_storage()
            .map_err(|e| ChatError::Storage(format!("{:?}", e)))?
            .ok_or_else(|| ChatError::Storage("localStorage not available".to_string()))?;
        Ok(Self { storage })
    }
}

impl StorageBackend for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.storage
            .get_item(key)
            .map_err(|e| ChatError::Storage(format!("{:?}", e)))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        // Fails when the quota is exhausted or storage is read-only
        self.storage
            .set_item(key, value)
            .map_err(|e| ChatError::Storage(format!("{:?}", e)))
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.storage
            .remove_item(key)
            .map_err(|e| ChatError::Storage(format!("{:?}", e)))
    }

    fn backend_name(&self) -> &str {
        "localstorage"
    }
}
