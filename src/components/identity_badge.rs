//! Header badge showing the assigned nickname and connection state.

use leptos::prelude::*;

use crate::state::session::{ConnectionStatus, SessionState};

/// Connection dot plus the server-assigned nickname.
///
/// The label stays empty until the first `set_username` arrives and
/// silently updates if the server reassigns after a reconnect.
#[component]
pub fn IdentityBadge() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    let dot_class = move || {
        let status = session.get().connection;
        match status {
            ConnectionStatus::Connected => "identity-badge__dot identity-badge__dot--connected",
            ConnectionStatus::Connecting => "identity-badge__dot identity-badge__dot--connecting",
            ConnectionStatus::Disconnected => {
                "identity-badge__dot identity-badge__dot--disconnected"
            }
        }
    };

    let label = move || {
        session
            .get()
            .username
            .map(|name| format!("You are {name}"))
            .unwrap_or_default()
    };

    view! {
        <span class="identity-badge">
            <span class=dot_class></span>
            <span class="identity-badge__name">{label}</span>
        </span>
    }
}
