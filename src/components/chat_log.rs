//! Scrolling message log: chat messages and system notices in arrival order.

use leptos::prelude::*;

use crate::state::chat::{ChatEntry, ChatState};
use crate::util::time::locale_time;

/// The shared message log.
///
/// Deduplication already happened when entries were applied to
/// `ChatState`, so this component renders whatever the state holds.
#[component]
pub fn ChatLog() -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();
    let log_ref = NodeRef::<leptos::html::Ul>::new();

    // Keep the newest entry visible; no "scrolled up" exception.
    Effect::new(move || {
        let _ = chat.get().entries.len();

        #[cfg(feature = "csr")]
        {
            if let Some(el) = log_ref.get() {
                let scroll_height = el.scroll_height();
                el.set_scroll_top(scroll_height);
            }
        }
    });

    view! {
        <ul class="chat-log" node_ref=log_ref>
            {move || {
                let entries = chat.get().entries;
                if entries.is_empty() {
                    return view! {
                        <li class="chat-log__empty">"No messages yet"</li>
                    }
                        .into_any();
                }

                entries.iter().map(render_entry).collect::<Vec<_>>().into_any()
            }}
        </ul>
    }
}

fn render_entry(entry: &ChatEntry) -> AnyView {
    match entry {
        ChatEntry::System(notice) => {
            let line = format!("🛈 {} ({})", notice.msg, locale_time(notice.ts));
            view! { <li class="chat-log__system">{line}</li> }.into_any()
        }
        ChatEntry::Message(msg) => {
            let author = format!("{}: ", msg.username);
            // Server-rendered, sanitized markup; inserted as-is.
            let body = msg.html.clone();
            let stamp = locale_time(msg.ts);
            view! {
                <li class="chat-log__message">
                    <strong class="chat-log__author">{author}</strong>
                    <span class="chat-log__body" inner_html=body></span>
                    <span class="chat-log__stamp">{stamp}</span>
                </li>
            }
            .into_any()
        }
    }
}
