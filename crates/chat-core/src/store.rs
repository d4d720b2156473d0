//! The session store — in-memory source of truth for all sessions and
//! the active selection.
//!
//! Every mutation updates in-memory state first, then writes the full new
//! snapshot through the persistence adapter. Sending a message is a
//! two-phase operation: a synchronous local commit (`begin_send`)
//! followed by the awaited remote call whose outcome is merged back
//! through the same append primitive (`finish_send`).

use std::cell::RefCell;
use std::rc::Rc;

use chrono::Utc;

use chat_types::message::{ChatTurn, Message, Role};
use chat_types::session::{Session, StoreSnapshot, DEFAULT_SESSION_TITLE};
use chat_types::Result;

use crate::persist::SessionStorage;
use crate::ports::ChatApi;

pub struct ChatStore {
    sessions: Vec<Session>,
    current_session_id: Option<String>,
    is_loading: bool,
    storage: SessionStorage,
}

impl ChatStore {
    /// Restore from the durable slot, falling back to empty state when the
    /// slot is absent or unparsable.
    pub fn new(storage: SessionStorage) -> Self {
        let snapshot = storage.load();
        let (sessions, current_session_id) = match snapshot {
            Some(s) => (s.sessions, s.current_session_id),
            None => (Vec::new(), None),
        };
        Self {
            sessions,
            current_session_id,
            is_loading: false,
            storage,
        }
    }

    // ─── Read surface ────────────────────────────────────────

    pub fn sessions(&self) -> &[Session] {
        &self.sessions
    }

    pub fn current_session_id(&self) -> Option<&str> {
        self.current_session_id.as_deref()
    }

    pub fn current_session(&self) -> Option<&Session> {
        let id = self.current_session_id.as_deref()?;
        self.sessions.iter().find(|s| s.id == id)
    }

    /// True only while a send round-trip is outstanding. Process-wide:
    /// concurrent sends on different sessions contend, last settle wins.
    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    // ─── Mutations ───────────────────────────────────────────

    /// Create a session and select it, returning the new id. If an empty
    /// session already exists, select that one instead and return `None`
    /// so the caller can show a notice.
    pub fn create_session(&mut self) -> Option<String> {
        if let Some(empty) = self.sessions.iter().find(|s| s.messages.is_empty()) {
            self.current_session_id = Some(empty.id.clone());
            self.persist();
            return None;
        }

        let session = Session::new();
        let id = session.id.clone();
        self.sessions.push(session);
        self.current_session_id = Some(id.clone());
        self.persist();
        Some(id)
    }

    /// Set the selection unconditionally. No existence check at this
    /// layer; a dangling id simply yields no matching session downstream.
    pub fn select_session(&mut self, id: &str) {
        self.current_session_id = Some(id.to_string());
        self.persist();
    }

    /// Append a message to the named session. Unknown ids are silently
    /// ignored.
    pub fn add_message(&mut self, session_id: &str, content: &str, role: Role) {
        let Some(session) = self.sessions.iter_mut().find(|s| s.id == session_id) else {
            return;
        };
        session.messages.push(Message::new(role, content));
        session.updated_at = Utc::now();
        self.persist();
    }

    /// Remove the session. If it was selected, fall back to the first
    /// remaining session, or to no selection.
    pub fn delete_session(&mut self, id: &str) {
        self.sessions.retain(|s| s.id != id);
        if self.current_session_id.as_deref() == Some(id) {
            self.current_session_id = self.sessions.first().map(|s| s.id.clone());
        }
        self.persist();
    }

    /// Empty the session's messages; title and id stay intact.
    pub fn clear_session(&mut self, id: &str) {
        let Some(session) = self.sessions.iter_mut().find(|s| s.id == id) else {
            return;
        };
        session.messages.clear();
        session.updated_at = Utc::now();
        self.persist();
    }

    /// Rename the session to the trimmed input, or the default placeholder
    /// when the trim is empty.
    pub fn update_session_title(&mut self, id: &str, title: &str) {
        let Some(session) = self.sessions.iter_mut().find(|s| s.id == id) else {
            return;
        };
        let trimmed = title.trim();
        session.title = if trimmed.is_empty() {
            DEFAULT_SESSION_TITLE.to_string()
        } else {
            trimmed.to_string()
        };
        session.updated_at = Utc::now();
        self.persist();
    }

    // ─── Send orchestration ──────────────────────────────────

    /// Phase one: commit the user's message locally (it is never lost,
    /// even if the network call fails), raise the loading flag, and
    /// capture the session's full history for the outbound request.
    pub fn begin_send(&mut self, session_id: &str, content: &str) -> Vec<ChatTurn> {
        self.add_message(session_id, content, Role::User);
        self.is_loading = true;
        self.sessions
            .iter()
            .find(|s| s.id == session_id)
            .map(|s| s.messages.iter().map(ChatTurn::from).collect())
            .unwrap_or_default()
    }

    /// Phase two: merge the outcome back. A reply is appended as an
    /// assistant message; a failure becomes a visible assistant message
    /// instead of a silent drop. The loading flag clears on both paths.
    pub fn finish_send(&mut self, session_id: &str, outcome: Result<String>) {
        let reply = match outcome {
            Ok(text) => text,
            Err(e) => e.user_message(),
        };
        self.add_message(session_id, &reply, Role::Assistant);
        self.is_loading = false;
    }

    /// Take a persistable snapshot of the current state.
    pub fn snapshot(&self) -> StoreSnapshot {
        StoreSnapshot {
            sessions: self.sessions.clone(),
            current_session_id: self.current_session_id.clone(),
        }
    }

    fn persist(&self) {
        self.storage.save(&self.snapshot());
    }
}

/// Send a message through the full round-trip: optimistic local commit,
/// awaited API call, reply (or error text) appended to the session.
///
/// The store is only borrowed in short synchronous windows, never across
/// the await, so other operations may interleave while the request is in
/// flight. Concurrent sends are allowed but not deconflicted.
pub async fn send_message(
    store: &Rc<RefCell<ChatStore>>,
    api: &dyn ChatApi,
    session_id: &str,
    content: &str,
) {
    let history = store.borrow_mut().begin_send(session_id, content);
    let outcome = api.send(&history).await;
    store.borrow_mut().finish_send(session_id, outcome);
}
