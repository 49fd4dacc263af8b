//! WebSocket event client for the chat transport.
//!
//! Manages the connection lifecycle (connect, join announcement, reconnect
//! with exponential backoff), decodes inbound envelopes, and applies them
//! to the shared state signals. Network and timer code is gated behind the
//! `csr` feature; the parse/apply layer is plain Rust so it can be
//! exercised natively under `cargo test`.

#[cfg(test)]
#[path = "event_client_test.rs"]
mod event_client_test;

use serde_json::Value;

use crate::state::chat::{ChatEntry, ChatMessage, ChatState, SystemNotice};
use crate::state::session::SessionState;

#[cfg(feature = "csr")]
use crate::net::types::Envelope;
#[cfg(feature = "csr")]
use crate::state::session::ConnectionStatus;
#[cfg(feature = "csr")]
use crate::state::typing::{TYPING_CLEAR_MS, TypingState};
#[cfg(feature = "csr")]
use leptos::prelude::{RwSignal, Update};

/// Decode a chat message payload, tolerating older field spellings.
///
/// The rendered body comes from `html`, falling back to the raw `text`
/// field. A payload with neither is not a message.
pub fn parse_chat_message(data: &Value) -> Option<ChatMessage> {
    let html = data
        .get("html")
        .and_then(Value::as_str)
        .or_else(|| data.get("text").and_then(Value::as_str))?
        .to_owned();

    let id = data.get("id").and_then(Value::as_str).map(ToOwned::to_owned);

    let username = data
        .get("username")
        .and_then(Value::as_str)
        .unwrap_or("anonymous")
        .to_owned();

    let ts = data
        .get("ts")
        .and_then(Value::as_f64)
        .or_else(|| data.get("timestamp").and_then(Value::as_f64))
        .unwrap_or(0.0);

    Some(ChatMessage { id, username, html, ts })
}

/// Decode a system notice payload.
pub fn parse_system_notice(data: &Value) -> Option<SystemNotice> {
    let msg = data.get("msg").and_then(Value::as_str)?.to_owned();
    let ts = data.get("ts").and_then(Value::as_f64).unwrap_or(0.0);
    Some(SystemNotice { msg, ts })
}

/// Decode a history batch, dropping entries that do not parse.
pub fn parse_history(data: &Value) -> Vec<ChatMessage> {
    data.as_array()
        .map(|items| items.iter().filter_map(parse_chat_message).collect())
        .unwrap_or_default()
}

/// Indicator line for an inbound typing event.
pub fn typing_notice(data: &Value) -> String {
    let who = data
        .get("username")
        .and_then(Value::as_str)
        .unwrap_or("someone");
    format!("{who} is typing…")
}

/// Append a chat message, suppressing duplicates by id.
///
/// An id is inserted into the seen set at most once; a message whose id
/// was already seen is skipped silently. Messages without an id are
/// always appended.
pub fn apply_chat_message(chat: &mut ChatState, msg: ChatMessage) {
    if let Some(id) = &msg.id {
        if !chat.seen.insert(id.clone()) {
            return;
        }
    }
    chat.entries.push(ChatEntry::Message(msg));
}

/// Replace the visible log with a history batch, in the given order.
///
/// This is the only operation that clears the log. The seen set carries
/// over, so a message that already arrived live is not appended a second
/// time by the replay.
pub fn apply_history(chat: &mut ChatState, items: Vec<ChatMessage>) {
    chat.entries.clear();
    for msg in items {
        apply_chat_message(chat, msg);
    }
}

/// Append a system notice. Notices carry no id and are never deduplicated.
pub fn apply_system(chat: &mut ChatState, notice: SystemNotice) {
    chat.entries.push(ChatEntry::System(notice));
}

/// Store the server-assigned nickname. A later assignment overwrites.
pub fn apply_set_username(session: &mut SessionState, data: &Value) {
    if let Some(name) = data.get("username").and_then(Value::as_str) {
        session.username = Some(name.to_owned());
    }
}

/// Serialize and queue an envelope on the outgoing channel.
///
/// Returns `false` if the channel is closed (no active connection).
#[cfg(feature = "csr")]
pub fn send_envelope(
    tx: &futures::channel::mpsc::UnboundedSender<String>,
    envelope: &Envelope,
) -> bool {
    if let Ok(json) = serde_json::to_string(envelope) {
        tx.unbounded_send(json).is_ok()
    } else {
        false
    }
}

/// Spawn the websocket client lifecycle as a local async task.
///
/// Returns the sender half of the outgoing channel; it survives
/// reconnects.
#[cfg(feature = "csr")]
pub fn spawn_event_client(
    chat: RwSignal<ChatState>,
    session: RwSignal<SessionState>,
    typing: RwSignal<TypingState>,
) -> futures::channel::mpsc::UnboundedSender<String> {
    use futures::channel::mpsc;

    let (tx, rx) = mpsc::unbounded::<String>();
    let tx_clone = tx.clone();

    leptos::task::spawn_local(event_client_loop(chat, session, typing, tx_clone, rx));

    tx
}

/// Main connection loop with reconnect and exponential backoff.
#[cfg(feature = "csr")]
async fn event_client_loop(
    chat: RwSignal<ChatState>,
    session: RwSignal<SessionState>,
    typing: RwSignal<TypingState>,
    tx: futures::channel::mpsc::UnboundedSender<String>,
    rx: futures::channel::mpsc::UnboundedReceiver<String>,
) {
    use std::cell::RefCell;
    use std::rc::Rc;

    let rx = Rc::new(RefCell::new(rx));
    let mut backoff_ms: u32 = 1000;
    let max_backoff_ms: u32 = 10_000;

    loop {
        session.update(|s| s.connection = ConnectionStatus::Connecting);

        // Same-origin websocket, scheme derived from the page location.
        let location = web_sys::window()
            .and_then(|w| w.location().href().ok())
            .unwrap_or_default();
        let ws_proto = if location.starts_with("https") { "wss" } else { "ws" };
        let host = web_sys::window()
            .and_then(|w| w.location().host().ok())
            .unwrap_or_else(|| "localhost:8000".to_owned());
        let ws_url = format!("{ws_proto}://{host}/ws");

        match connect_and_run(&ws_url, chat, session, typing, &tx, &rx).await {
            Ok(()) => {
                leptos::logging::log!("WS disconnected cleanly");
            }
            Err(e) => {
                leptos::logging::warn!("WS error: {e}");
            }
        }

        session.update(|s| s.connection = ConnectionStatus::Disconnected);

        // Exponential backoff before reconnect.
        gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(backoff_ms))).await;
        backoff_ms = (backoff_ms * 2).min(max_backoff_ms);
    }
}

/// Connect, announce presence, and pump messages until disconnect.
#[cfg(feature = "csr")]
async fn connect_and_run(
    url: &str,
    chat: RwSignal<ChatState>,
    session: RwSignal<SessionState>,
    typing: RwSignal<TypingState>,
    tx: &futures::channel::mpsc::UnboundedSender<String>,
    rx: &std::rc::Rc<std::cell::RefCell<futures::channel::mpsc::UnboundedReceiver<String>>>,
) -> Result<(), String> {
    use futures::StreamExt;
    use gloo_net::websocket::Message;
    use gloo_net::websocket::futures::WebSocket;

    let ws = WebSocket::open(url).map_err(|e| e.to_string())?;
    let (mut ws_write, mut ws_read) = ws.split();

    session.update(|s| s.connection = ConnectionStatus::Connected);

    // Best-effort presence announcement, no retry; the server answers
    // with set_username, the history batch, and a system notice.
    let _ = send_envelope(tx, &Envelope::join());

    // Forward outgoing envelopes from our channel to the socket.
    let mut rx_borrow = rx.borrow_mut();
    let send_task = async {
        use futures::SinkExt;
        while let Some(msg) = rx_borrow.next().await {
            if ws_write.send(Message::Text(msg)).await.is_err() {
                break;
            }
        }
    };

    // Receive loop: decode and dispatch inbound envelopes.
    let recv_task = async {
        while let Some(msg) = ws_read.next().await {
            match msg {
                Ok(Message::Text(text)) => {
                    if let Ok(envelope) = serde_json::from_str::<Envelope>(&text) {
                        dispatch_envelope(&envelope, chat, session, typing);
                    } else {
                        leptos::logging::warn!("unparseable envelope: {text}");
                    }
                }
                Ok(Message::Bytes(_)) => {}
                Err(e) => {
                    leptos::logging::warn!("WS recv error: {e}");
                    break;
                }
            }
        }
    };

    // Run both tasks; when either finishes, the connection is done.
    futures::future::select(Box::pin(send_task), Box::pin(recv_task)).await;

    Ok(())
}

/// Dispatch an inbound envelope to the matching state handler.
#[cfg(feature = "csr")]
fn dispatch_envelope(
    envelope: &Envelope,
    chat: RwSignal<ChatState>,
    session: RwSignal<SessionState>,
    typing: RwSignal<TypingState>,
) {
    match envelope.event.as_str() {
        "set_username" => {
            session.update(|s| apply_set_username(s, &envelope.data));
        }

        "history" => {
            let items = parse_history(&envelope.data);
            chat.update(|c| apply_history(c, items));
        }

        "system" => {
            if let Some(notice) = parse_system_notice(&envelope.data) {
                chat.update(|c| apply_system(c, notice));
            }
        }

        "chat_message" => {
            if let Some(msg) = parse_chat_message(&envelope.data) {
                chat.update(|c| apply_chat_message(c, msg));
            }
        }

        "typing" => {
            let notice = typing_notice(&envelope.data);
            typing.update(|t| t.notice = notice);

            // Fire-and-forget clear with no cancellation: overlapping
            // typing events each schedule their own, so an earlier clear
            // can blank a later notice slightly early.
            leptos::task::spawn_local(async move {
                gloo_timers::future::sleep(std::time::Duration::from_millis(TYPING_CLEAR_MS))
                    .await;
                typing.update(|t| t.notice.clear());
            });
        }

        _ => {}
    }
}
