//! Starter content written on first launch, so the sidebar is not a
//! blank wall the first time the app opens.

use chrono::{DateTime, Duration, Utc};

use chat_core::persist::SessionStorage;
use chat_types::message::{Message, Role};
use chat_types::session::{Session, StoreSnapshot};

/// Write the starter snapshot into the durable slot.
/// Callers must check that the slot is absent first.
pub fn init_starter_data(storage: &SessionStorage) {
    storage.save(&starter_snapshot());
}

fn starter_snapshot() -> StoreSnapshot {
    let now = Utc::now();

    let mut welcome = session_at("Welcome", now - Duration::hours(2));
    welcome.messages = vec![
        message_at(
            Role::User,
            "Hello! Can you help me understand how this works?",
            now - Duration::hours(1),
        ),
        message_at(
            Role::Assistant,
            "Of course! This is an AI chat interface. Pick a conversation in \
             the sidebar or start a new one, type a message below, and I'll reply.",
            now - Duration::minutes(59),
        ),
        message_at(
            Role::User,
            "What kind of things can you help with?",
            now - Duration::minutes(58),
        ),
        message_at(
            Role::Assistant,
            "A variety of tasks:\n- Answering questions\n- Explaining concepts\n\
             - Writing and debugging code\n- Creative writing\nand much more!",
            now - Duration::minutes(57),
        ),
    ];
    welcome.updated_at = now - Duration::minutes(57);

    let quick_question = session_at("Quick Question", now - Duration::minutes(30));

    let current = welcome.id.clone();
    StoreSnapshot {
        sessions: vec![welcome, quick_question],
        current_session_id: Some(current),
    }
}

fn session_at(title: &str, created: DateTime<Utc>) -> Session {
    let mut session = Session::new();
    session.title = title.to_string();
    session.created_at = created;
    session.updated_at = created;
    session
}

fn message_at(role: Role, content: &str, timestamp: DateTime<Utc>) -> Message {
    let mut message = Message::new(role, content);
    message.timestamp = timestamp;
    message
}
