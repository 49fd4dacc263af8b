//! Root application component and shared context wiring.

use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};

use crate::net::types::Envelope;
use crate::pages::chat::ChatPage;
use crate::state::chat::ChatState;
use crate::state::session::SessionState;
use crate::state::typing::TypingState;

/// Handle for pushing envelopes onto the active websocket connection.
///
/// A default sender is provided before the connection exists; sends are
/// dropped until the event client installs the real channel.
#[derive(Clone, Default)]
pub struct EventSender {
    #[cfg(feature = "csr")]
    tx: Option<futures::channel::mpsc::UnboundedSender<String>>,
}

impl EventSender {
    #[cfg(feature = "csr")]
    pub fn new(tx: futures::channel::mpsc::UnboundedSender<String>) -> Self {
        Self { tx: Some(tx) }
    }

    /// Serialize and queue an envelope for the server. Best-effort: a
    /// closed or missing channel drops the envelope.
    pub fn send(&self, envelope: &Envelope) {
        #[cfg(feature = "csr")]
        {
            if let Some(tx) = &self.tx {
                let _ = crate::net::event_client::send_envelope(tx, envelope);
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = envelope;
        }
    }
}

/// Root application component.
///
/// Provides the shared state contexts, spawns the websocket event client,
/// and renders the single chat page.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let chat = RwSignal::new(ChatState::default());
    let session = RwSignal::new(SessionState::default());
    let typing = RwSignal::new(TypingState::default());

    provide_context(chat);
    provide_context(session);
    provide_context(typing);

    let sender = RwSignal::new(EventSender::default());
    provide_context(sender);

    #[cfg(feature = "csr")]
    {
        let tx = crate::net::event_client::spawn_event_client(chat, session, typing);
        sender.set(EventSender::new(tx));
    }

    view! {
        <Stylesheet id="leptos" href="/static/parlor.css"/>
        <Title text="Parlor"/>

        <ChatPage/>
    }
}
