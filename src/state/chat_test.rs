use super::*;

// =============================================================
// ChatState defaults
// =============================================================

#[test]
fn chat_state_default_empty_entries() {
    let state = ChatState::default();
    assert!(state.entries.is_empty());
}

#[test]
fn chat_state_default_empty_seen_set() {
    let state = ChatState::default();
    assert!(state.seen.is_empty());
}

// =============================================================
// ChatEntry
// =============================================================

#[test]
fn chat_entry_variants_are_distinct() {
    let msg = ChatEntry::Message(ChatMessage {
        id: Some("m-1".to_owned()),
        username: "anonymous 1".to_owned(),
        html: "<p>hi</p>".to_owned(),
        ts: 1_000.0,
    });
    let notice = ChatEntry::System(SystemNotice {
        msg: "anonymous 1 entered the chat".to_owned(),
        ts: 1_000.0,
    });
    assert_ne!(msg, notice);
}
