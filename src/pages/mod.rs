//! Page-level views.

pub mod chat;
