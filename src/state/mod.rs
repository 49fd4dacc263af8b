//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`chat`, `session`, `typing`, `composer`) so
//! individual components can depend on small focused models. The structs
//! are plain data; mutation logic lives in `net::event_client` so it can
//! be tested without a browser.

pub mod chat;
pub mod composer;
pub mod session;
pub mod typing;
