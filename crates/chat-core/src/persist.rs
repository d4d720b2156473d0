//! Persistence adapter — snapshots the whole session collection into a
//! single durable key-value slot as JSON.
//!
//! Snapshot-on-every-mutation trades write amplification for simplicity,
//! fine at the expected volumes (tens of sessions, hundreds of messages).
//! Persistence is best-effort: a failed write is logged and the in-memory
//! state stays authoritative.

use std::rc::Rc;

use chat_types::session::StoreSnapshot;

use crate::ports::StorageBackend;

/// The durable slot holding the serialized store snapshot.
pub const STORAGE_KEY: &str = "chat-sessions";

pub struct SessionStorage {
    backend: Rc<dyn StorageBackend>,
}

impl SessionStorage {
    pub fn new(backend: Rc<dyn StorageBackend>) -> Self {
        Self { backend }
    }

    /// Read the slot. Absent or unparsable content yields `None` so
    /// callers fall back to empty state. Timestamps arrive as RFC 3339
    /// strings and come out as structured instants via serde.
    pub fn load(&self) -> Option<StoreSnapshot> {
        let raw = match self.backend.get(STORAGE_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                log::warn!("Failed to read {}: {}", STORAGE_KEY, e);
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(snapshot) => Some(snapshot),
            Err(e) => {
                log::warn!("Discarding unparsable snapshot in {}: {}", STORAGE_KEY, e);
                None
            }
        }
    }

    /// Serialize the full snapshot and overwrite the slot. Failures are
    /// logged, never raised.
    pub fn save(&self, snapshot: &StoreSnapshot) {
        let json = match serde_json::to_string(snapshot) {
            Ok(json) => json,
            Err(e) => {
                log::error!("Failed to serialize snapshot: {}", e);
                return;
            }
        };
        if let Err(e) = self.backend.set(STORAGE_KEY, &json) {
            log::error!("Failed to save to storage: {}", e);
        }
    }

    /// Remove the slot entirely.
    pub fn clear(&self) {
        if let Err(e) = self.backend.remove(STORAGE_KEY) {
            log::error!("Failed to clear storage: {}", e);
        }
    }
}
