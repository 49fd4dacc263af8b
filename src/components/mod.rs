//! UI components for the chat page.

pub mod chat_log;
pub mod composer;
pub mod identity_badge;
pub mod typing_indicator;
