//! WASM-target tests for chat-core (Node.js runtime).
//!
//! Exercises the store and the send round-trip under
//! wasm32-unknown-unknown via `wasm-pack test --node`, where futures run
//! on the browser-style single-threaded executor.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use async_trait::async_trait;
use wasm_bindgen_test::*;

use chat_core::persist::SessionStorage;
use chat_core::ports::{ChatApi, StorageBackend};
use chat_core::store::{send_message, ChatStore};
use chat_types::message::{ChatTurn, Role};
use chat_types::Result;

struct MapStorage {
    data: RefCell<HashMap<String, String>>,
}

impl MapStorage {
    fn new() -> Rc<Self> {
        Rc::new(Self {
            data: RefCell::new(HashMap::new()),
        })
    }
}

impl StorageBackend for MapStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.data.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.data
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.data.borrow_mut().remove(key);
        Ok(())
    }

    fn backend_name(&self) -> &str {
        "map"
    }
}

struct EchoApi;

#[async_trait(?Send)]
impl ChatApi for EchoApi {
    async fn send(&self, history: &[ChatTurn]) -> Result<String> {
        Ok(format!("echo: {}", history.last().unwrap().content))
    }
}

fn fresh_store() -> ChatStore {
    ChatStore::new(SessionStorage::new(MapStorage::new()))
}

#[wasm_bindgen_test]
fn store_create_and_reuse() {
    let mut store = fresh_store();
    let id = store.create_session().unwrap();
    assert!(store.create_session().is_none());
    assert_eq!(store.current_session_id(), Some(id.as_str()));
}

#[wasm_bindgen_test]
fn store_persists_across_instances() {
    let backend = MapStorage::new();
    {
        let mut store = ChatStore::new(SessionStorage::new(backend.clone()));
        let id = store.create_session().unwrap();
        store.add_message(&id, "hi", Role::User);
    }
    let restored = ChatStore::new(SessionStorage::new(backend));
    assert_eq!(restored.sessions().len(), 1);
    assert_eq!(restored.sessions()[0].messages.len(), 1);
}

#[wasm_bindgen_test]
async fn send_round_trip_under_wasm() {
    let store = Rc::new(RefCell::new(fresh_store()));
    let id = store.borrow_mut().create_session().unwrap();

    send_message(&store, &EchoApi, &id, "ping").await;

    let store = store.borrow();
    let session = store.current_session().unwrap();
    assert_eq!(session.messages.len(), 2);
    assert_eq!(session.messages[1].role, Role::Assistant);
    assert_eq!(session.messages[1].content, "echo: ping");
    assert!(!store.is_loading());
}
