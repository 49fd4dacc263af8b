#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use std::collections::HashSet;

/// State for the chat log: rendered entries plus the duplicate-suppression
/// set backing at-most-once rendering per message id.
#[derive(Clone, Debug, Default)]
pub struct ChatState {
    /// Chat messages and system notices, in arrival order.
    pub entries: Vec<ChatEntry>,
    /// Message ids already rendered. Grows for the whole page session and
    /// is never cleared, not even by a history replay.
    pub seen: HashSet<String>,
}

/// One row of the log.
#[derive(Clone, Debug, PartialEq)]
pub enum ChatEntry {
    Message(ChatMessage),
    System(SystemNotice),
}

/// A chat message as rendered.
///
/// `html` is pre-rendered, sanitized markup from the server and is
/// inserted into the log as-is. Messages without an id (older payloads)
/// are rendered but never deduplicated.
#[derive(Clone, Debug, PartialEq)]
pub struct ChatMessage {
    pub id: Option<String>,
    pub username: String,
    pub html: String,
    /// Epoch milliseconds.
    pub ts: f64,
}

/// A non-chat notice from the server ("x entered the chat").
#[derive(Clone, Debug, PartialEq)]
pub struct SystemNotice {
    pub msg: String,
    /// Epoch milliseconds.
    pub ts: f64,
}
