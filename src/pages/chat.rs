//! Chat page — the single-room layout.

use leptos::prelude::*;

use crate::components::chat_log::ChatLog;
use crate::components::composer::Composer;
use crate::components::identity_badge::IdentityBadge;
use crate::components::typing_indicator::TypingIndicator;

/// Chat page — header with identity badge, the message log, the typing
/// indicator line, and the composer row.
#[component]
pub fn ChatPage() -> impl IntoView {
    view! {
        <div class="chat-page">
            <header class="chat-page__header">
                <h1 class="chat-page__title">"Parlor"</h1>
                <IdentityBadge/>
            </header>

            <ChatLog/>
            <TypingIndicator/>
            <Composer/>
        </div>
    }
}
