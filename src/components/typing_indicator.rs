//! One-line activity indicator between the log and the composer.

use leptos::prelude::*;

use crate::state::typing::TypingState;

/// Shows "{user} is typing…" and goes blank roughly 900 ms after the
/// last typing event; the event client schedules the clears.
#[component]
pub fn TypingIndicator() -> impl IntoView {
    let typing = expect_context::<RwSignal<TypingState>>();

    view! {
        <div class="typing-indicator" aria-live="polite">
            {move || typing.get().notice}
        </div>
    }
}
