//! Wire types for the chat event protocol.
//!
//! Every websocket text message is a single JSON envelope of the form
//! `{"event": <name>, "data": <payload>}`. Inbound payloads are decoded
//! tolerantly from `data` by the event client rather than with strict
//! typed deserialization, so one malformed field drops one event instead
//! of the connection.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// One protocol message in either direction.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    pub event: String,
    #[serde(default)]
    pub data: serde_json::Value,
}

impl Envelope {
    pub fn new(event: &str, data: serde_json::Value) -> Self {
        Self { event: event.to_owned(), data }
    }

    /// Presence announcement sent once per (re)connection.
    pub fn join() -> Self {
        Self::new("join", serde_json::json!({}))
    }

    /// Outgoing chat text. The server echoes the rendered message back;
    /// there is no optimistic local render.
    pub fn chat_message(text: &str) -> Self {
        Self::new("chat_message", serde_json::json!({ "text": text }))
    }

    /// Local typing activity, one per input edit.
    pub fn typing() -> Self {
        Self::new("typing", serde_json::json!({}))
    }
}
