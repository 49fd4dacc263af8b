//! Message input row: IME-aware Enter handling, typing signals, send button.

use leptos::prelude::*;

use crate::app::EventSender;
use crate::net::types::Envelope;
use crate::state::composer;
use crate::state::session::SessionState;

/// Input row at the bottom of the chat page.
///
/// Submits on the send button or on Enter, except while an input method
/// composition is in flight (Enter then commits the IME buffer). Every
/// edit emits an unthrottled typing signal.
#[component]
pub fn Composer() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let sender = expect_context::<RwSignal<EventSender>>();

    let input = RwSignal::new(String::new());
    let composing = RwSignal::new(false);
    let input_ref = NodeRef::<leptos::html::Input>::new();

    let do_send = move || {
        let Some(text) = composer::submission(&input.get()) else {
            return;
        };

        sender.get().send(&Envelope::chat_message(&text));
        input.set(String::new());

        #[cfg(feature = "csr")]
        {
            if let Some(el) = input_ref.get() {
                let _ = el.focus();
            }
        }
    };

    let on_click = move |_| do_send();

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if composer::enter_submits(&ev.key(), ev.is_composing() || composing.get()) {
            ev.prevent_default();
            do_send();
        }
    };

    let on_input = move |ev: leptos::ev::Event| {
        input.set(event_target_value(&ev));
        sender.get().send(&Envelope::typing());
    };

    let placeholder = move || {
        session
            .get()
            .username
            .map(|name| format!("Message as {name}..."))
            .unwrap_or_else(|| "Message...".to_owned())
    };

    view! {
        <div class="composer">
            <input
                class="composer__input"
                type="text"
                placeholder=placeholder
                node_ref=input_ref
                prop:value=move || input.get()
                on:input=on_input
                on:keydown=on_keydown
                on:compositionstart=move |_| composing.set(true)
                on:compositionend=move |_| composing.set(false)
            />
            <button class="btn btn--primary composer__send" on:click=on_click>
                "Send"
            </button>
        </div>
    }
}
